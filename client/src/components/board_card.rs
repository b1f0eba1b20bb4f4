//! Reusable card component for board list items on profile screens.
//!
//! DESIGN
//! ======
//! Keeps board list presentation consistent between the signed-in profile
//! and other users' profiles. Clicking the card opens the board screen with
//! this board as its payload.

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::Board;
use crate::state::catalog::Catalog;
use crate::state::nav::ViewNavigator;
use crate::state::selection::SelectionState;
use crate::util::nav_actions;

/// A clickable card representing a board.
#[component]
pub fn BoardCard(board: Board) -> impl IntoView {
    let nav = expect_context::<RwSignal<ViewNavigator>>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let catalog = expect_context::<Arc<Catalog>>();

    let pin_count = catalog.pins_on(&board.id).len();
    let count_label = if pin_count == 1 { "1 pin".to_owned() } else { format!("{pin_count} pins") };
    let name = board.name.clone();
    let description = board.description.clone();
    let has_description = !description.is_empty();

    let on_open = move |_| {
        let board = board.clone();
        nav_actions::apply(nav, selection, move |n, s| nav_actions::open_board(n, s, board));
    };

    view! {
        <button class="board-card" on:click=on_open>
            <span class="board-card__name">{name}</span>
            <Show when=move || has_description>
                <span class="board-card__description">{description.clone()}</span>
            </Show>
            <span class="board-card__count">{count_label}</span>
        </button>
    }
}
