//! Renders the screen for the navigator's current view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The outlet is driven by a memo over `ViewNavigator::current`, so moving
//! within history between two entries of the same view keeps the page
//! mounted and lets it react to the selection alone.

use leptos::prelude::*;

use crate::pages::board::BoardPage;
use crate::pages::home::HomePage;
use crate::pages::profile::ProfilePage;
use crate::pages::search::SearchPage;
use crate::pages::user_profile::UserProfilePage;
use crate::pages::visual_search::VisualSearchPage;
use crate::state::nav::{ViewNavigator, ViewState};

#[component]
pub fn ViewOutlet() -> impl IntoView {
    let nav = expect_context::<RwSignal<ViewNavigator>>();
    let current = Memo::new(move |_| nav.with(ViewNavigator::current));

    view! {
        <main class="view-outlet" data-view=move || current.get().key()>
            {move || match current.get() {
                ViewState::Home => view! { <HomePage/> }.into_any(),
                ViewState::Search => view! { <SearchPage/> }.into_any(),
                ViewState::Profile => view! { <ProfilePage/> }.into_any(),
                ViewState::Board => view! { <BoardPage/> }.into_any(),
                ViewState::UserProfile => view! { <UserProfilePage/> }.into_any(),
                ViewState::VisualSearch => view! { <VisualSearchPage/> }.into_any(),
            }}
        </main>
    }
}
