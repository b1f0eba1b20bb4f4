use super::*;
use crate::state::catalog::Catalog;

fn setup() -> (ViewNavigator, SelectionState, Catalog) {
    (ViewNavigator::new(), SelectionState::default(), Catalog::seeded())
}

// =============================================================
// Navigating actions
// =============================================================

#[test]
fn open_board_sets_board_and_pushes() {
    let (mut nav, mut sel, catalog) = setup();
    let board = catalog.board("b-glaze").unwrap().clone();

    open_board(&mut nav, &mut sel, board.clone());

    assert_eq!(nav.current(), ViewState::Board);
    assert_eq!(sel.board, Some(board));
}

#[test]
fn open_user_drops_previous_board() {
    let (mut nav, mut sel, catalog) = setup();
    open_board(&mut nav, &mut sel, catalog.board("b-routes").unwrap().clone());
    open_user(&mut nav, &mut sel, catalog.user("u-theo").unwrap().clone());

    assert_eq!(nav.current(), ViewState::UserProfile);
    assert!(sel.board.is_none());
    assert_eq!(sel.user.as_ref().map(|u| u.id.as_str()), Some("u-theo"));
}

#[test]
fn start_visual_search_sets_pin() {
    let (mut nav, mut sel, catalog) = setup();
    let pin = catalog.pin("p-06").unwrap().clone();

    start_visual_search(&mut nav, &mut sel, pin);

    assert_eq!(nav.current(), ViewState::VisualSearch);
    assert_eq!(sel.pin.as_ref().map(|p| p.id.as_str()), Some("p-06"));
}

#[test]
fn submit_search_trims_query() {
    let (mut nav, mut sel, _) = setup();
    assert!(submit_search(&mut nav, &mut sel, "  ceramics "));
    assert_eq!(nav.current(), ViewState::Search);
    assert_eq!(sel.query, "ceramics");
}

#[test]
fn submit_blank_search_is_ignored() {
    let (mut nav, mut sel, _) = setup();
    assert!(!submit_search(&mut nav, &mut sel, "   "));
    assert_eq!(nav, ViewNavigator::new());
    assert!(sel.is_clear());
}

#[test]
fn go_home_and_profile_clear_selection() {
    let (mut nav, mut sel, catalog) = setup();
    start_visual_search(&mut nav, &mut sel, catalog.pin("p-01").unwrap().clone());
    open_profile(&mut nav, &mut sel);
    assert_eq!(nav.current(), ViewState::Profile);
    assert!(sel.is_clear());

    submit_search(&mut nav, &mut sel, "loft");
    go_home(&mut nav, &mut sel);
    assert_eq!(nav.current(), ViewState::Home);
    assert!(sel.is_clear());
    assert_eq!(nav.len(), 5);
}

// =============================================================
// Back / forward
// =============================================================

#[test]
fn back_to_home_clears_and_forward_restores_board() {
    let (mut nav, mut sel, catalog) = setup();
    open_board(&mut nav, &mut sel, catalog.board("b-nooks").unwrap().clone());

    assert_eq!(go_back(&mut nav, &mut sel), Some(ViewState::Home));
    assert!(sel.is_clear());
    assert_eq!(go_forward(&mut nav, &mut sel), Some(ViewState::Board));
    assert_eq!(sel.board.as_ref().map(|b| b.id.as_str()), Some("b-nooks"));
}

#[test]
fn back_to_board_restores_its_board() {
    let (mut nav, mut sel, catalog) = setup();
    open_board(&mut nav, &mut sel, catalog.board("b-suppers").unwrap().clone());
    open_user(&mut nav, &mut sel, catalog.user("u-theo").unwrap().clone());

    assert_eq!(go_back(&mut nav, &mut sel), Some(ViewState::Board));
    assert_eq!(sel.board.as_ref().map(|b| b.id.as_str()), Some("b-suppers"));
    assert!(sel.user.is_none());

    assert_eq!(go_forward(&mut nav, &mut sel), Some(ViewState::UserProfile));
    assert_eq!(sel.user.as_ref().map(|u| u.id.as_str()), Some("u-theo"));
    assert!(sel.board.is_none());
}

#[test]
fn back_to_search_restores_its_query() {
    let (mut nav, mut sel, catalog) = setup();
    submit_search(&mut nav, &mut sel, "noodles");
    open_board(&mut nav, &mut sel, catalog.board("b-suppers").unwrap().clone());

    assert_eq!(go_back(&mut nav, &mut sel), Some(ViewState::Search));
    assert_eq!(sel.query, "noodles");
    assert!(sel.board.is_none());
}

#[test]
fn consecutive_searches_each_keep_their_query() {
    let (mut nav, mut sel, _) = setup();
    submit_search(&mut nav, &mut sel, "tea");
    submit_search(&mut nav, &mut sel, "glaze");

    go_back(&mut nav, &mut sel);
    assert_eq!(sel.query, "tea");
    go_forward(&mut nav, &mut sel);
    assert_eq!(sel.query, "glaze");
}

#[test]
fn back_to_visual_search_restores_its_pin() {
    let (mut nav, mut sel, catalog) = setup();
    start_visual_search(&mut nav, &mut sel, catalog.pin("p-02").unwrap().clone());
    open_profile(&mut nav, &mut sel);

    assert_eq!(go_back(&mut nav, &mut sel), Some(ViewState::VisualSearch));
    assert_eq!(sel.pin.as_ref().map(|p| p.id.as_str()), Some("p-02"));
}

#[test]
fn back_and_forward_at_bounds_return_none() {
    let (mut nav, mut sel, _) = setup();
    assert_eq!(go_back(&mut nav, &mut sel), None);
    assert_eq!(go_forward(&mut nav, &mut sel), None);
    assert_eq!(nav, ViewNavigator::new());
}

#[test]
fn navigating_after_back_truncates_and_replaces_payload() {
    let (mut nav, mut sel, catalog) = setup();
    submit_search(&mut nav, &mut sel, "noodles");
    open_profile(&mut nav, &mut sel);
    go_back(&mut nav, &mut sel);
    assert_eq!(sel.query, "noodles");

    open_board(&mut nav, &mut sel, catalog.board("b-suppers").unwrap().clone());

    assert_eq!(nav.history(), &[ViewState::Home, ViewState::Search, ViewState::Board]);
    assert!(!nav.can_go_forward());
    assert!(sel.query.is_empty());
    assert_eq!(sel.board.as_ref().map(|b| b.id.as_str()), Some("b-suppers"));

    assert_eq!(go_back(&mut nav, &mut sel), Some(ViewState::Search));
    assert_eq!(sel.query, "noodles");
}
