//! Bindings file loading tests
//!
//! The board must refuse to start on a file it cannot trust, and must never
//! rewrite one.

mod common;

use common::Board;
use padboard::bindings::{Binding, StoreError, ViolationKind};
use padboard::FatalError;

#[test]
fn test_missing_file_is_created_empty() {
    let board = Board::with_file(None, 200).unwrap();

    assert!(board.model.store.is_empty());
    assert!(board.path().exists());
}

#[test]
fn test_corrupt_file_stops_before_input() {
    let content = r#"{"bindings":"oops"}"#;
    let err = match Board::with_file(Some(content), 200) {
        Ok(_) => panic!("corrupt file must not produce a board"),
        Err(e) => e,
    };

    assert!(err.is_corrupt());
    let fatal = FatalError::from(err);
    assert!(fatal.is_expected(), "user-fixable, exits cleanly");
}

#[test]
fn test_invalid_json_is_corrupt() {
    let err = Board::with_file(Some("{\"bindings\": ["), 200).err().unwrap();
    assert!(matches!(err, StoreError::Malformed { .. }));
}

#[test]
fn test_every_bad_field_is_reported() {
    let content = r#"{"bindings":[
        {"key":"36"},
        {"key":"","filePath":"/sounds/snare.wav"},
        {"key":38,"filePath":"/sounds/clap.wav"}
    ]}"#;
    let err = Board::with_file(Some(content), 200).err().unwrap();

    let StoreError::Corrupt { violations, .. } = err else {
        panic!("Expected Corrupt error");
    };
    let paths: Vec<&str> = violations.iter().map(|v| v.path.as_str()).collect();
    assert_eq!(
        paths,
        vec!["bindings[0].filePath", "bindings[1].key", "bindings[2].key"]
    );
    assert_eq!(violations[0].kind, ViolationKind::Missing);
    assert_eq!(violations[1].kind, ViolationKind::Empty);
}

#[test]
fn test_extra_fields_are_ignored() {
    let content = r#"{"version":2,"bindings":[
        {"key":"36","filePath":"/sounds/snare.wav","color":"red"}
    ]}"#;
    let board = Board::with_file(Some(content), 200).unwrap();

    assert_eq!(
        board.model.store.bindings(),
        &[Binding::new("36", "/sounds/snare.wav")]
    );
}

#[test]
fn test_duplicate_keys_first_wins() {
    let content = r#"{"bindings":[
        {"key":"36","filePath":"/sounds/snare.wav"},
        {"key":"36","filePath":"/sounds/clap.wav"}
    ]}"#;
    let mut board = Board::with_file(Some(content), 200).unwrap();

    assert_eq!(board.model.store.len(), 1);
    board.key_down(36, 0);
    assert_eq!(board.plays, vec!["/sounds/snare.wav"]);
}
