//! Top navigation bar: back/forward, home, search, profile, theme.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only place the back/forward affordances live. Buttons disable
//! themselves from `can_go_back`/`can_go_forward` instead of relying on the
//! navigator's boundary no-ops.

use leptos::prelude::*;

use crate::state::nav::ViewNavigator;
use crate::state::selection::SelectionState;
use crate::state::ui::UiState;
use crate::util::nav_actions;

/// Navigation bar shown above every screen.
#[component]
pub fn NavBar() -> impl IntoView {
    let nav = expect_context::<RwSignal<ViewNavigator>>();
    let selection = expect_context::<RwSignal<SelectionState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_back = move |_| {
        nav_actions::apply(nav, selection, |n, s| {
            nav_actions::go_back(n, s);
        });
    };
    let on_forward = move |_| {
        nav_actions::apply(nav, selection, |n, s| {
            nav_actions::go_forward(n, s);
        });
    };
    let on_home = move |_| nav_actions::apply(nav, selection, nav_actions::go_home);
    let on_profile = move |_| nav_actions::apply(nav, selection, nav_actions::open_profile);

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(query) = ui.try_update(UiState::take_search_draft).flatten() else {
            return;
        };
        nav_actions::apply(nav, selection, move |n, s| {
            nav_actions::submit_search(n, s, &query);
        });
    };

    let position = move || nav.with(|n| format!("{}/{}", n.index() + 1, n.len()));
    let current_label = move || nav.with(|n| n.current().label());

    view! {
        <nav class="nav-bar">
            <button
                class="btn nav-bar__back"
                title="Back"
                disabled=move || !nav.with(ViewNavigator::can_go_back)
                on:click=on_back
            >
                "←"
            </button>
            <button
                class="btn nav-bar__forward"
                title="Forward"
                disabled=move || !nav.with(ViewNavigator::can_go_forward)
                on:click=on_forward
            >
                "→"
            </button>
            <button class="btn nav-bar__home" on:click=on_home>
                "Home"
            </button>

            <form class="nav-bar__search" on:submit=on_search>
                <input
                    class="nav-bar__search-input"
                    type="search"
                    placeholder="Search pins"
                    prop:value=move || ui.with(|u| u.search_draft.clone())
                    on:input=move |ev| {
                        ui.update(|u| u.search_draft = event_target_value(&ev));
                    }
                />
            </form>

            <span class="nav-bar__current" title=position>
                {current_label}
            </span>
            <span class="nav-bar__spacer"></span>

            <button
                class="btn nav-bar__dark-toggle"
                on:click=move |_| {
                    let current = ui.with(|u| u.dark_mode);
                    let next = crate::util::dark_mode::toggle(current);
                    ui.update(|u| u.dark_mode = next);
                }
                title="Toggle dark mode"
            >
                {move || if ui.with(|u| u.dark_mode) { "☀" } else { "☾" }}
            </button>
            <button class="btn nav-bar__profile" on:click=on_profile>
                "Profile"
            </button>
        </nav>
    }
}
