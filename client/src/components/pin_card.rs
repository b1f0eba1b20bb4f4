//! Single pin tile for the masonry grid.
//!
//! DESIGN
//! ======
//! A card resolves its board and author through the catalog so the grid can
//! be fed bare pins. Each affordance routes through `nav_actions`, which
//! sets the payload for the target screen before pushing it.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::user_link::UserLink;
use crate::net::types::Pin;
use crate::state::catalog::Catalog;
use crate::state::nav::ViewNavigator;
use crate::state::selection::SelectionState;
use crate::util::nav_actions;

#[component]
pub fn PinCard(pin: Pin) -> impl IntoView {
    let nav = expect_context::<RwSignal<ViewNavigator>>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let catalog = expect_context::<Arc<Catalog>>();

    let author = catalog.user(&pin.author_id).cloned();
    let board = catalog.board(&pin.board_id).cloned();
    let title = pin.title.clone();
    let alt = pin.title.clone();
    let image_url = pin.image_url.clone();

    let board_link = board.map(|board| {
        let name = board.name.clone();
        let on_open = move |_| {
            let board = board.clone();
            nav_actions::apply(nav, selection, move |n, s| nav_actions::open_board(n, s, board));
        };
        view! {
            <button class="pin-card__board" on:click=on_open>
                {name}
            </button>
        }
    });

    let on_similar = move |_| {
        let pin = pin.clone();
        nav_actions::apply(nav, selection, move |n, s| nav_actions::start_visual_search(n, s, pin));
    };

    view! {
        <figure class="pin-card">
            <img class="pin-card__image" src=image_url alt=alt loading="lazy"/>
            <figcaption class="pin-card__caption">
                <span class="pin-card__title">{title}</span>
                {author.map(|user| view! { <UserLink user=user/> })}
                {board_link}
                <button class="btn pin-card__similar" title="Find visually similar pins" on:click=on_similar>
                    "More like this"
                </button>
            </figcaption>
        </figure>
    }
}
