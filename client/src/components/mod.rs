//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render navigation chrome and catalog items while reading and
//! writing shared state from Leptos context providers.

pub mod board_card;
pub mod nav_bar;
pub mod pin_card;
pub mod pin_grid;
pub mod profile_header;
pub mod user_link;
pub mod view_outlet;
