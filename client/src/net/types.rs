//! Data types for pins, boards, and users.
//!
//! DESIGN
//! ======
//! These are plain serde structs so the in-memory catalog can be loaded from a
//! JSON fixture and so a future REST source could deserialize straight into
//! them. Identity is string-based; cross references (`board_id`,
//! `author_id`, `owner_id`) are resolved through the catalog.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A single visual item in the feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pin {
    /// Unique pin identifier.
    pub id: String,
    /// Short caption shown under the image.
    pub title: String,
    /// Image source URL.
    pub image_url: String,
    /// Longer free-form description.
    #[serde(default)]
    pub description: String,
    /// Lowercase topic tags used by search and visual similarity.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Board the pin is saved to.
    pub board_id: String,
    /// User who saved the pin.
    pub author_id: String,
}

impl Pin {
    /// Number of tags this pin shares with `other`.
    #[must_use]
    pub fn shared_tags(&self, other: &Pin) -> usize {
        self.tags.iter().filter(|tag| other.tags.contains(tag)).count()
    }
}

/// A named collection of pins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Unique board identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// User who owns the board.
    pub owner_id: String,
}

/// A person with a public profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Handle without the leading `@`.
    pub handle: String,
    #[serde(default)]
    pub bio: String,
}
