//! Local UI chrome state (theme, search box draft).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of navigation and selection
//! state so the search box can be edited without touching history.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the navigation bar and theme.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    /// Text currently typed in the search box, not yet submitted.
    pub search_draft: String,
}

impl UiState {
    /// Take the submitted draft, leaving the box empty. Returns `None` for a
    /// blank draft, which is left untouched.
    pub fn take_search_draft(&mut self) -> Option<String> {
        let query = self.search_draft.trim();
        if query.is_empty() {
            return None;
        }
        let query = query.to_owned();
        self.search_draft.clear();
        Some(query)
    }
}
