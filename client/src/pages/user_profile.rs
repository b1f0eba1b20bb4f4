//! Another user's profile, their boards, and the pins they authored.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::board_card::BoardCard;
use crate::components::pin_grid::PinGrid;
use crate::components::profile_header::ProfileHeader;
use crate::net::types::Pin;
use crate::state::catalog::{CURRENT_USER_ID, Catalog};
use crate::state::selection::SelectionState;

#[component]
pub fn UserProfilePage() -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();
    let catalog = expect_context::<Arc<Catalog>>();

    let body = move || {
        let Some(user) = selection.with(|s| s.user.clone()) else {
            return view! { <p class="page__empty">"No user selected."</p> }.into_any();
        };
        let boards: Vec<_> = catalog.boards_of(&user.id).into_iter().cloned().collect();
        let pins: Vec<Pin> = catalog.pins.iter().filter(|p| p.author_id == user.id).cloned().collect();
        let is_self = user.id == CURRENT_USER_ID;
        view! {
            <ProfileHeader user=user is_self=is_self/>
            <h2 class="page__subtitle">"Boards"</h2>
            <div class="board-list">
                {boards.into_iter().map(|board| view! { <BoardCard board=board/> }).collect::<Vec<_>>()}
            </div>
            <h2 class="page__subtitle">"Pins"</h2>
            <PinGrid pins=pins empty_message="No pins yet."/>
        }
        .into_any()
    };

    view! { <section class="page user-profile-page">{body}</section> }
}
