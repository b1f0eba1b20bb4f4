//! Data schema shared by state, pages, and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines pins, boards, and users. There is no live backend for
//! these; the catalog in `state::catalog` is the only source.

pub mod types;
