//! Text search results for the query held in the selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The query is written by `nav_actions::submit_search` before the view is
//! pushed. Stepping back or forward onto a search entry restores the query
//! recorded for that entry.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::pin_grid::PinGrid;
use crate::net::types::Pin;
use crate::state::catalog::Catalog;
use crate::state::selection::SelectionState;

#[component]
pub fn SearchPage() -> impl IntoView {
    let selection = expect_context::<RwSignal<SelectionState>>();
    let catalog = expect_context::<Arc<Catalog>>();

    let results = move || {
        let query = selection.with(|s| s.query.clone());
        if query.trim().is_empty() {
            return view! { <p class="page__empty">"Type something to search."</p> }.into_any();
        }
        let pins: Vec<Pin> = catalog.search(&query).into_iter().cloned().collect();
        let summary = results_summary(&query, pins.len());
        let empty = format!("No pins match \u{201c}{query}\u{201d}.");
        view! {
            <p class="page__summary">{summary}</p>
            <PinGrid pins=pins empty_message=empty/>
        }
        .into_any()
    };

    view! {
        <section class="page search-page">
            <h1 class="page__title">"Search"</h1>
            {results}
        </section>
    }
}

/// One-line description of a result set.
fn results_summary(query: &str, count: usize) -> String {
    match count {
        0 => format!("Nothing found for \u{201c}{query}\u{201d}"),
        1 => format!("1 pin for \u{201c}{query}\u{201d}"),
        n => format!("{n} pins for \u{201c}{query}\u{201d}"),
    }
}
