//! "More like this": pins ranked by similarity to the selected pin.

#[cfg(test)]
#[path = "visual_search_test.rs"]
mod visual_search_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::pin_grid::PinGrid;
use crate::net::types::Pin;
use crate::state::catalog::Catalog;
use crate::state::selection::SelectionState;

#[component]
pub fn VisualSearchPage() -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();
    let catalog = expect_context::<Arc<Catalog>>();

    let body = move || {
        let Some(source) = selection.with(|s| s.pin.clone()) else {
            return view! { <p class="page__empty">"Pick a pin to find similar ones."</p> }.into_any();
        };
        let similar: Vec<Pin> = catalog.similar_to(&source).into_iter().cloned().collect();
        let heading = similar_heading(&source.title, similar.len());
        view! {
            <header class="visual-search__source">
                <img class="visual-search__image" src=source.image_url alt=source.title/>
                <h1 class="page__title">{heading}</h1>
            </header>
            <PinGrid pins=similar empty_message="Nothing similar yet."/>
        }
        .into_any()
    };

    view! { <section class="page visual-search-page">{body}</section> }
}

fn similar_heading(title: &str, count: usize) -> String {
    if count == 0 {
        format!("No pins like \u{201c}{title}\u{201d}")
    } else {
        format!("{count} like \u{201c}{title}\u{201d}")
    }
}
