use super::*;

fn full_selection() -> SelectionState {
    SelectionState {
        pin: Some(Pin {
            id: "p-1".to_owned(),
            title: "Loft".to_owned(),
            image_url: "https://img.test/p-1.jpg".to_owned(),
            description: String::new(),
            tags: vec!["interior".to_owned()],
            board_id: "b-1".to_owned(),
            author_id: "u-1".to_owned(),
        }),
        board: Some(Board {
            id: "b-1".to_owned(),
            name: "Nooks".to_owned(),
            description: String::new(),
            owner_id: "u-1".to_owned(),
        }),
        user: Some(User {
            id: "u-1".to_owned(),
            name: "Ada".to_owned(),
            handle: "ada".to_owned(),
            bio: String::new(),
        }),
        query: "loft".to_owned(),
        ..SelectionState::default()
    }
}

#[test]
fn default_selection_is_clear() {
    assert!(SelectionState::default().is_clear());
    assert!(!full_selection().is_clear());
}

#[test]
fn retain_for_home_and_profile_clears_everything() {
    for view in [ViewState::Home, ViewState::Profile] {
        let mut sel = full_selection();
        sel.retain_for(view);
        assert!(sel.is_clear(), "{view} kept a payload");
    }
}

#[test]
fn retain_for_board_keeps_only_board() {
    let mut sel = full_selection();
    sel.retain_for(ViewState::Board);
    assert!(sel.board.is_some());
    assert!(sel.pin.is_none());
    assert!(sel.user.is_none());
    assert!(sel.query.is_empty());
}

#[test]
fn retain_for_user_profile_keeps_only_user() {
    let mut sel = full_selection();
    sel.retain_for(ViewState::UserProfile);
    assert_eq!(sel.user.as_ref().map(|u| u.handle.as_str()), Some("ada"));
    assert!(sel.pin.is_none());
    assert!(sel.board.is_none());
}

#[test]
fn retain_for_visual_search_keeps_only_pin() {
    let mut sel = full_selection();
    sel.retain_for(ViewState::VisualSearch);
    assert!(sel.pin.is_some());
    assert!(sel.board.is_none());
    assert!(sel.query.is_empty());
}

#[test]
fn retain_for_search_keeps_only_query() {
    let mut sel = full_selection();
    sel.retain_for(ViewState::Search);
    assert_eq!(sel.query, "loft");
    assert!(sel.pin.is_none());
    assert!(sel.board.is_none());
    assert!(sel.user.is_none());
}

// =============================================================
// Per-entry history
// =============================================================

#[test]
fn restore_returns_the_payload_recorded_for_an_entry() {
    let mut sel = full_selection();
    sel.retain_for(ViewState::Board);
    sel.record(1);

    sel.board = None;
    sel.query = "other".to_owned();
    sel.restore(1);

    assert_eq!(sel.board.as_ref().map(|b| b.id.as_str()), Some("b-1"));
    assert!(sel.query.is_empty());
}

#[test]
fn restore_of_unrecorded_entry_clears() {
    let mut sel = full_selection();
    sel.restore(0);
    assert!(sel.is_clear());
}

#[test]
fn record_discards_later_entries() {
    let mut sel = full_selection();
    sel.retain_for(ViewState::Search);
    sel.record(1);
    sel.query = "tea".to_owned();
    sel.record(2);

    sel.query = "replacement".to_owned();
    sel.record(1);

    sel.restore(2);
    assert!(sel.is_clear());
    sel.restore(1);
    assert_eq!(sel.query, "replacement");
}
