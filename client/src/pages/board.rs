//! A single board: its owner and the pins saved to it.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the board from the selection, which back/forward restore per
//! history entry. Shows an empty state when no board is set.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::pin_grid::PinGrid;
use crate::components::user_link::UserLink;
use crate::net::types::Pin;
use crate::state::catalog::Catalog;
use crate::state::selection::SelectionState;

#[component]
pub fn BoardPage() -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();
    let catalog = expect_context::<Arc<Catalog>>();

    let body = move || {
        let Some(board) = selection.with(|s| s.board.clone()) else {
            return view! { <p class="page__empty">"No board selected."</p> }.into_any();
        };
        let pins: Vec<Pin> = catalog.pins_on(&board.id).into_iter().cloned().collect();
        let owner = catalog.user(&board.owner_id).cloned();
        view! {
            <header class="board-header">
                <h1 class="page__title">{board.name}</h1>
                <p class="board-header__description">{board.description}</p>
                {owner.map(|user| view! { <span class="board-header__owner">"by " <UserLink user=user/></span> })}
            </header>
            <PinGrid pins=pins empty_message="This board has no pins yet."/>
        }
        .into_any()
    };

    view! { <section class="page board-page">{body}</section> }
}
