//! In-memory catalog of pins, boards, and users.
//!
//! DESIGN
//! ======
//! The catalog is loaded once from an embedded JSON fixture and never
//! mutated. Query helpers are deterministic: text search is a
//! case-insensitive substring match and visual similarity ranks by shared
//! tags, so the screens behave the same on every render.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::net::types::{Board, Pin, User};

/// Identifier of the signed-in user shown on the `Profile` screen.
pub const CURRENT_USER_ID: &str = "u-me";

const SEED_JSON: &str = include_str!("catalog_seed.json");

/// Errors produced while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The fixture is not valid catalog JSON.
    #[error("catalog parse failed: {0}")]
    Parse(String),
}

/// All pins, boards, and users available to the application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub pins: Vec<Pin>,
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl Catalog {
    /// Parse a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] when `raw` is not a valid catalog.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    /// The embedded seed catalog, or an empty one if the fixture is broken.
    #[must_use]
    pub fn seeded() -> Self {
        match Self::from_json(SEED_JSON) {
            Ok(catalog) => catalog,
            Err(e) => {
                leptos::logging::warn!("{e}; starting with an empty catalog");
                Self::default()
            }
        }
    }

    /// The seed catalog behind an `Arc`, as provided through context so
    /// components share one copy.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::seeded())
    }

    #[must_use]
    pub fn pin(&self, id: &str) -> Option<&Pin> {
        self.pins.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn board(&self, id: &str) -> Option<&Board> {
        self.boards.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// The signed-in user, if present in the catalog.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.user(CURRENT_USER_ID)
    }

    /// Pins saved to `board_id`, in catalog order.
    #[must_use]
    pub fn pins_on(&self, board_id: &str) -> Vec<&Pin> {
        self.pins.iter().filter(|p| p.board_id == board_id).collect()
    }

    /// Boards owned by `user_id`, in catalog order.
    #[must_use]
    pub fn boards_of(&self, user_id: &str) -> Vec<&Board> {
        self.boards.iter().filter(|b| b.owner_id == user_id).collect()
    }

    /// Pins whose title, description, or tags contain `query`
    /// (case-insensitive). A blank query matches nothing.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Pin> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.pins
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
            })
            .collect()
    }

    /// Other pins sharing at least one tag with `pin`, most shared tags
    /// first. Ties keep catalog order.
    #[must_use]
    pub fn similar_to(&self, pin: &Pin) -> Vec<&Pin> {
        let mut ranked: Vec<(usize, &Pin)> = self
            .pins
            .iter()
            .filter(|p| p.id != pin.id)
            .map(|p| (pin.shared_tags(p), p))
            .filter(|(shared, _)| *shared > 0)
            .collect();
        // Stable sort keeps catalog order within equal scores.
        ranked.sort_by(|a, b| b.0.cmp(&a.0));
        ranked.into_iter().map(|(_, p)| p).collect()
    }
}
