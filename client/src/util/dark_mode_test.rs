#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn preference_defaults_to_light_outside_browser() {
    assert!(!read_preference());
}

#[test]
fn toggle_returns_the_opposite_theme() {
    assert!(toggle(false));
    assert!(!toggle(true));
    assert!(!toggle(toggle(false)));
}
