//! Caller-side navigation: selection updates paired with navigator calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never call `ViewNavigator::navigate_to` directly. They go
//! through these helpers so the payload for the target screen is set in the
//! same update as the push, and payloads the target does not render are
//! dropped. Each push records the payload for its history entry, and
//! back/forward restore the payload saved for the entry they land on.

#[cfg(test)]
#[path = "nav_actions_test.rs"]
mod nav_actions_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::types::{Board, Pin, User};
use crate::state::nav::{ViewNavigator, ViewState};
use crate::state::selection::SelectionState;

/// Run `action` against the navigator and selection signals in one step.
pub fn apply(
    nav: RwSignal<ViewNavigator>,
    selection: RwSignal<SelectionState>,
    action: impl FnOnce(&mut ViewNavigator, &mut SelectionState),
) {
    nav.update(|n| selection.update(|s| action(n, s)));
}

fn push(nav: &mut ViewNavigator, selection: &mut SelectionState, view: ViewState) {
    let from = nav.current();
    nav.navigate_to(view);
    selection.retain_for(view);
    selection.record(nav.index());
    leptos::logging::log!("nav: {from} -> {view} ({}/{})", nav.index() + 1, nav.len());
}

pub fn go_home(nav: &mut ViewNavigator, selection: &mut SelectionState) {
    push(nav, selection, ViewState::Home);
}

pub fn open_profile(nav: &mut ViewNavigator, selection: &mut SelectionState) {
    push(nav, selection, ViewState::Profile);
}

pub fn open_board(nav: &mut ViewNavigator, selection: &mut SelectionState, board: Board) {
    selection.board = Some(board);
    push(nav, selection, ViewState::Board);
}

pub fn open_user(nav: &mut ViewNavigator, selection: &mut SelectionState, user: User) {
    selection.user = Some(user);
    push(nav, selection, ViewState::UserProfile);
}

pub fn start_visual_search(nav: &mut ViewNavigator, selection: &mut SelectionState, pin: Pin) {
    selection.pin = Some(pin);
    push(nav, selection, ViewState::VisualSearch);
}

/// Navigate to search results for `query`. Blank queries are ignored and
/// return `false`.
pub fn submit_search(nav: &mut ViewNavigator, selection: &mut SelectionState, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return false;
    }
    selection.query = query.to_owned();
    push(nav, selection, ViewState::Search);
    true
}

pub fn go_back(nav: &mut ViewNavigator, selection: &mut SelectionState) -> Option<ViewState> {
    let moved = nav.go_back();
    if let Some(view) = moved {
        selection.restore(nav.index());
        leptos::logging::log!("nav: back -> {view} ({}/{})", nav.index() + 1, nav.len());
    }
    moved
}

pub fn go_forward(nav: &mut ViewNavigator, selection: &mut SelectionState) -> Option<ViewState> {
    let moved = nav.go_forward();
    if let Some(view) = moved {
        selection.restore(nav.index());
        leptos::logging::log!("nav: forward -> {view} ({}/{})", nav.index() + 1, nav.len());
    }
    moved
}
