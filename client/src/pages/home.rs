//! Home feed: every pin in the catalog.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::pin_grid::PinGrid;
use crate::state::catalog::Catalog;
use crate::state::nav::ViewState;

#[component]
pub fn HomePage() -> impl IntoView {
    let catalog = expect_context::<Arc<Catalog>>();

    view! {
        <section class="page home-page">
            <h1 class="page__title">{ViewState::Home.label()}</h1>
            <PinGrid pins=catalog.pins.clone() empty_message="No pins yet."/>
        </section>
    }
}
