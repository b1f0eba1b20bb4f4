//! View navigation history: a manual back/forward stack over top-level screens.
//!
//! DESIGN
//! ======
//! The navigator only records *which* screen is shown. Payloads such as the
//! selected pin or board live in `selection` and are managed by callers, so
//! the history never has to know about pin/board identity.
//!
//! The stack and index are one struct and are always read and written
//! together. Navigating after going back truncates the abandoned forward
//! branch, matching browser session history.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level screens the application can display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    /// Masonry pin feed.
    #[default]
    Home,
    /// Text search results for the current query.
    Search,
    /// The signed-in user's own profile.
    Profile,
    /// A single board and its pins.
    Board,
    /// Another user's profile.
    UserProfile,
    /// Pins visually similar to the selected pin.
    VisualSearch,
}

impl ViewState {
    /// Every view, in declaration order.
    pub const ALL: [ViewState; 6] = [
        ViewState::Home,
        ViewState::Search,
        ViewState::Profile,
        ViewState::Board,
        ViewState::UserProfile,
        ViewState::VisualSearch,
    ];

    /// Stable lowercase key, identical to the serde form.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Search => "search",
            Self::Profile => "profile",
            Self::Board => "board",
            Self::UserProfile => "user_profile",
            Self::VisualSearch => "visual_search",
        }
    }

    /// Human-readable title for headings and tooltips.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Search => "Search",
            Self::Profile => "Your profile",
            Self::Board => "Board",
            Self::UserProfile => "Profile",
            Self::VisualSearch => "Visual search",
        }
    }

    /// Whether this screen renders the selected board.
    #[must_use]
    pub fn uses_board(self) -> bool {
        matches!(self, Self::Board)
    }

    /// Whether this screen renders the selected user.
    #[must_use]
    pub fn uses_user(self) -> bool {
        matches!(self, Self::UserProfile)
    }

    /// Whether this screen renders the selected pin.
    #[must_use]
    pub fn uses_pin(self) -> bool {
        matches!(self, Self::VisualSearch)
    }

    /// Whether this screen renders the search query.
    #[must_use]
    pub fn uses_query(self) -> bool {
        matches!(self, Self::Search)
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Linear back/forward history over [`ViewState`].
///
/// Invariants: `history` is never empty, `history[0]` is [`ViewState::Home`],
/// and `index` is always a valid position in `history`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewNavigator {
    history: Vec<ViewState>,
    index: usize,
}

impl Default for ViewNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewNavigator {
    /// Fresh session history: `[Home]` at position 0.
    #[must_use]
    pub fn new() -> Self {
        Self { history: vec![ViewState::Home], index: 0 }
    }

    /// The view currently displayed.
    #[must_use]
    pub fn current(&self) -> ViewState {
        self.history[self.index]
    }

    /// Position of the current view in the history.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of recorded entries, including any forward branch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always `false`; the history holds at least the initial view.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Recorded entries in chronological order.
    #[must_use]
    pub fn history(&self) -> &[ViewState] {
        &self.history
    }

    /// `true` when an earlier entry exists.
    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    /// `true` when a forward entry exists.
    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.history.len()
    }

    /// Push `view` after the current position, discarding any forward
    /// entries, and make it current.
    pub fn navigate_to(&mut self, view: ViewState) {
        self.history.truncate(self.index + 1);
        self.history.push(view);
        self.index = self.history.len() - 1;
    }

    /// Step back one entry. Returns the new current view, or `None` when
    /// already at the start (no-op).
    pub fn go_back(&mut self) -> Option<ViewState> {
        if !self.can_go_back() {
            return None;
        }
        self.index -= 1;
        Some(self.current())
    }

    /// Step forward one entry. Returns the new current view, or `None` when
    /// already at the newest entry (no-op).
    pub fn go_forward(&mut self) -> Option<ViewState> {
        if !self.can_go_forward() {
            return None;
        }
        self.index += 1;
        Some(self.current())
    }
}
