//! Page modules, one per navigable view.
//!
//! ARCHITECTURE
//! ============
//! Each page reads its payload from `SelectionState` and the shared
//! `Catalog`, and delegates rendering details to `components`.

pub mod board;
pub mod home;
pub mod profile;
pub mod search;
pub mod user_profile;
pub mod visual_search;
