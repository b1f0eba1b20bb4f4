//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is a single route. Screen changes happen inside it through the
//! `ViewNavigator` history stack rather than through URL changes.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::view_outlet::ViewOutlet;
use crate::state::catalog::Catalog;
use crate::state::nav::ViewNavigator;
use crate::state::selection::SelectionState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the navigator, selection, UI state, and catalog contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let nav = RwSignal::new(ViewNavigator::new());
    let selection = RwSignal::new(SelectionState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(nav);
    provide_context(selection);
    provide_context(ui);
    provide_context(Catalog::shared());

    // Effects only run in the browser, so SSR always renders the light theme.
    Effect::new(move || {
        let dark = dark_mode::read_preference();
        dark_mode::apply(dark);
        ui.update(|u| u.dark_mode = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/pinboard.css"/>
        <Title text="Pinboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=Workspace/>
            </Routes>
        </Router>
    }
}

/// Navigation bar above the current screen.
#[component]
fn Workspace() -> impl IntoView {
    view! {
        <div class="workspace">
            <NavBar/>
            <ViewOutlet/>
        </div>
    }
}
