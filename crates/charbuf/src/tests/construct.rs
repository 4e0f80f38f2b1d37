use alloc::string::ToString;

use crate::{CharBuf, Error};

#[test]
fn default_construction_starts_empty_at_capacity_ten() {
    let buf = CharBuf::new();
    assert_eq!(buf.capacity(), 10);
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
}

#[test]
fn explicit_capacity_is_honored() {
    let buf = CharBuf::with_capacity(25);
    assert_eq!(buf.capacity(), 25);
    assert_eq!(buf.len(), 0);
}

#[test]
fn from_text_sizes_by_the_default_growth_policy() {
    let buf = CharBuf::from_text("Test").unwrap();
    assert_eq!(buf.capacity(), 10);
    assert_eq!(buf.len(), 4);
}

#[test]
fn from_text_grows_for_long_initial_values() {
    // 90 units; fitting them under the 75% load factor takes 160.
    let initial = "TestingResizingTestingResizingTestingResizingTestingResizing\
                   TestingResizingTestingResizing";
    let buf = CharBuf::from_text(initial).unwrap();
    assert_eq!(buf.capacity(), 160);
    assert_eq!(buf.len(), 90);
}

#[test]
fn from_text_round_trips() {
    let buf = CharBuf::from_text("Hello").unwrap();
    assert_eq!(buf.to_text(), "Hello");
}

#[test]
fn from_text_rejects_empty_input() {
    assert_eq!(CharBuf::from_text(""), Err(Error::EmptyInitial));
}

#[test]
fn try_from_goes_through_the_same_constructor() {
    let buf = CharBuf::try_from("Hello").unwrap();
    assert_eq!(buf.to_text(), "Hello");
    assert_eq!(CharBuf::try_from(""), Err(Error::EmptyInitial));
}

#[test]
fn empty_buffer_materializes_to_the_empty_string() {
    let buf = CharBuf::new();
    assert_eq!(buf.to_text(), "");
}

#[test]
fn default_matches_new() {
    assert_eq!(CharBuf::default().capacity(), CharBuf::new().capacity());
}

#[test]
fn display_matches_to_text() {
    let buf = CharBuf::from_text("Hello").unwrap();
    assert_eq!(buf.to_string(), "Hello");
}

#[test]
fn empty_initial_error_is_descriptive() {
    let err = CharBuf::from_text("").unwrap_err();
    assert_eq!(err.to_string(), "initial text must be non-empty");
}
