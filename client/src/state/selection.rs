//! Application-owned selection payloads for the navigable screens.
//!
//! DESIGN
//! ======
//! The navigator records only view tags. Whatever a screen needs beyond its
//! tag (the board being browsed, the user being viewed, the pin driving a
//! visual search, the search query) lives here and is set by the caller
//! around each navigation.
//!
//! Alongside the live payload the selection keeps one saved payload per
//! history entry, indexed like `ViewNavigator::history`. Pushes record the
//! payload at the new position; back/forward restore the payload saved for
//! the entry they land on.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use crate::net::types::{Board, Pin, User};
use crate::state::nav::ViewState;

/// Payload saved for one history entry.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct Payload {
    pin: Option<Pin>,
    board: Option<Board>,
    user: Option<User>,
    query: String,
}

/// Payloads consumed by the screen currently shown.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub pin: Option<Pin>,
    pub board: Option<Board>,
    pub user: Option<User>,
    pub query: String,
    /// Saved payload per history entry. Missing entries count as clear.
    entries: Vec<Payload>,
}

impl SelectionState {
    /// Drop every payload that `view` does not render.
    pub fn retain_for(&mut self, view: ViewState) {
        if !view.uses_pin() {
            self.pin = None;
        }
        if !view.uses_board() {
            self.board = None;
        }
        if !view.uses_user() {
            self.user = None;
        }
        if !view.uses_query() {
            self.query.clear();
        }
    }

    /// `true` when nothing is selected.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.pin.is_none() && self.board.is_none() && self.user.is_none() && self.query.is_empty()
    }

    /// Save the live payload for history entry `index`, discarding entries
    /// saved for any later position.
    pub fn record(&mut self, index: usize) {
        let payload = Payload {
            pin: self.pin.clone(),
            board: self.board.clone(),
            user: self.user.clone(),
            query: self.query.clone(),
        };
        self.entries.truncate(index);
        self.entries.resize_with(index, Payload::default);
        self.entries.push(payload);
    }

    /// Replace the live payload with the one saved for entry `index`.
    pub fn restore(&mut self, index: usize) {
        let Payload { pin, board, user, query } = self.entries.get(index).cloned().unwrap_or_default();
        self.pin = pin;
        self.board = board;
        self.user = user;
        self.query = query;
    }
}
