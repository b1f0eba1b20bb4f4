//! Inline link that opens another user's profile.

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::nav::ViewNavigator;
use crate::state::selection::SelectionState;
use crate::util::nav_actions;

#[component]
pub fn UserLink(user: User) -> impl IntoView {
    let nav = expect_context::<RwSignal<ViewNavigator>>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let label = format!("@{}", user.handle);
    let title = user.name.clone();

    let on_open = move |_| {
        let user = user.clone();
        nav_actions::apply(nav, selection, move |n, s| nav_actions::open_user(n, s, user));
    };

    view! {
        <button class="user-link" title=title on:click=on_open>
            {label}
        </button>
    }
}
