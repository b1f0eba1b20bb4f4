//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`nav`, `selection`, `ui`, `catalog`) so
//! individual components can depend on small focused models. The root
//! component constructs each one and provides it through context.

pub mod catalog;
pub mod nav;
pub mod selection;
pub mod ui;
