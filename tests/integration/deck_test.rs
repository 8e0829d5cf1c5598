//! Integration tests for deck manifest loading.

use karussell::{Deck, DeckError};

use super::helpers::{temp_deck, touch_image};

#[test]
fn toml_deck_loads_in_order() {
    let (dir, path) = temp_deck(
        "deck.toml",
        r#"
[[slides]]
src = "one.jpg"
caption = "First"

[[slides]]
src = "two.jpg"
"#,
    );
    touch_image(&dir, "one.jpg");
    touch_image(&dir, "two.jpg");

    let deck = Deck::load(&path).expect("valid deck");
    assert_eq!(deck.len(), 2);
    assert_eq!(deck.slides[0].src, "one.jpg");
    assert_eq!(deck.slides[0].caption.as_deref(), Some("First"));
    assert!(!deck.slides[0].missing);
    assert_eq!(deck.slides[1].caption, None);
}

#[test]
fn json_deck_loads() {
    let (dir, path) = temp_deck(
        "deck.json",
        r#"{ "slides": [ { "src": "a.jpg", "caption": "A" }, { "src": "b.jpg" } ] }"#,
    );
    touch_image(&dir, "a.jpg");

    let deck = Deck::load(&path).expect("valid deck");
    assert_eq!(deck.len(), 2);
    assert!(!deck.slides[0].missing);
    // b.jpg was never created
    assert!(deck.slides[1].missing);
}

#[test]
fn entries_without_src_are_skipped() {
    let (_dir, path) = temp_deck(
        "deck.toml",
        r#"
[[slides]]
caption = "no image here"

[[slides]]
src = "real.jpg"
"#,
    );

    let deck = Deck::load(&path).expect("valid deck");
    assert_eq!(deck.len(), 1);
    assert_eq!(deck.skipped, 1);
    assert_eq!(deck.slides[0].src, "real.jpg");
}

#[test]
fn invalid_toml_is_a_typed_error() {
    let (_dir, path) = temp_deck("deck.toml", "[[slides]\nsrc = broken");
    let err = Deck::load(&path).unwrap_err();
    assert!(matches!(err, DeckError::Toml { .. }), "got: {err}");
}

#[test]
fn invalid_json_is_a_typed_error() {
    let (_dir, path) = temp_deck("deck.json", "{ not json");
    let err = Deck::load(&path).unwrap_err();
    assert!(matches!(err, DeckError::Json { .. }), "got: {err}");
}

#[test]
fn unreadable_path_is_a_read_error() {
    let err = Deck::load(std::path::Path::new("/nonexistent/deck.toml")).unwrap_err();
    assert!(matches!(err, DeckError::Read { .. }), "got: {err}");
}

#[test]
fn empty_manifest_yields_empty_deck() {
    let (_dir, path) = temp_deck("deck.toml", "");
    let deck = Deck::load(&path).expect("empty manifest is valid");
    assert!(deck.is_empty());
    assert_eq!(deck.skipped, 0);
}
