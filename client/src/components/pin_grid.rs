//! Masonry grid of pin cards with an empty-state message.

use leptos::prelude::*;

use crate::components::pin_card::PinCard;
use crate::net::types::Pin;

#[component]
pub fn PinGrid(pins: Vec<Pin>, #[prop(into)] empty_message: String) -> impl IntoView {
    if pins.is_empty() {
        return view! { <p class="pin-grid__empty">{empty_message}</p> }.into_any();
    }

    view! {
        <div class="pin-grid">
            {pins.into_iter().map(|pin| view! { <PinCard pin=pin/> }).collect::<Vec<_>>()}
        </div>
    }
    .into_any()
}
