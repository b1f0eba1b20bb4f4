//! Name, handle, and bio block shared by both profile screens.

use leptos::prelude::*;

use crate::net::types::User;

#[component]
pub fn ProfileHeader(user: User, #[prop(optional)] is_self: bool) -> impl IntoView {
    let initial = user.name.chars().next().unwrap_or('?').to_uppercase().to_string();
    let handle = format!("@{}", user.handle);

    view! {
        <header class="profile-header" class:profile-header--self=is_self>
            <span class="profile-header__avatar">{initial}</span>
            <div class="profile-header__text">
                <h1 class="profile-header__name">{user.name}</h1>
                <span class="profile-header__handle">{handle}</span>
                <p class="profile-header__bio">{user.bio}</p>
            </div>
        </header>
    }
}
