use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_pin(id: &str, tags: &[&str]) -> Pin {
    Pin {
        id: id.to_owned(),
        title: format!("Pin {id}"),
        image_url: format!("https://img.test/{id}.jpg"),
        description: String::new(),
        tags: tags.iter().map(|t| (*t).to_owned()).collect(),
        board_id: "b-1".to_owned(),
        author_id: "u-1".to_owned(),
    }
}

// =============================================================
// Pin
// =============================================================

#[test]
fn pin_optional_fields_default_when_missing() {
    let json = r#"{"id":"p-1","title":"Loft","image_url":"https://img.test/p-1.jpg","board_id":"b-1","author_id":"u-1"}"#;
    let pin: Pin = serde_json::from_str(json).unwrap();
    assert_eq!(pin.id, "p-1");
    assert!(pin.description.is_empty());
    assert!(pin.tags.is_empty());
}

#[test]
fn pin_missing_board_is_rejected() {
    let json = r#"{"id":"p-1","title":"Loft","image_url":"x","author_id":"u-1"}"#;
    assert!(serde_json::from_str::<Pin>(json).is_err());
}

#[test]
fn shared_tags_counts_overlap() {
    let a = make_pin("a", &["interior", "loft", "plants"]);
    let b = make_pin("b", &["plants", "loft"]);
    let c = make_pin("c", &["recipes"]);
    assert_eq!(a.shared_tags(&b), 2);
    assert_eq!(b.shared_tags(&a), 2);
    assert_eq!(a.shared_tags(&c), 0);
}

// =============================================================
// Board / User
// =============================================================

#[test]
fn board_description_defaults_empty() {
    let board: Board = serde_json::from_str(r#"{"id":"b-1","name":"Kitchens","owner_id":"u-1"}"#).unwrap();
    assert_eq!(board.name, "Kitchens");
    assert!(board.description.is_empty());
}

#[test]
fn user_bio_defaults_empty() {
    let user: User = serde_json::from_str(r#"{"id":"u-1","name":"Ada","handle":"ada"}"#).unwrap();
    assert_eq!(user.handle, "ada");
    assert!(user.bio.is_empty());
}
