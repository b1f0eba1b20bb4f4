//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns and state orchestration from
//! page and component markup to improve reuse and testability.

pub mod dark_mode;
pub mod nav_actions;
