use alloc::string::{String, ToString};

use crate::CharBuf;

#[test]
fn serializes_as_the_materialized_text() {
    let mut buf = CharBuf::new();
    buf.append("Hello").append('!');

    let json = serde_json::to_string(&buf).unwrap();
    assert_eq!(json, "\"Hello!\"");
}

#[test]
fn deserializes_through_the_non_empty_constructor() {
    let buf: CharBuf = serde_json::from_str("\"Test\"").unwrap();
    assert_eq!(buf.to_text(), "Test");
    assert_eq!(buf.capacity(), 10);
}

#[test]
fn deserializing_an_empty_string_is_an_error() {
    let err = serde_json::from_str::<CharBuf>("\"\"").unwrap_err();
    assert!(err.to_string().contains("initial text must be non-empty"));
}

#[test]
fn round_trips_through_json() {
    let buf = CharBuf::from_text("åβγ").unwrap();
    let json = serde_json::to_string(&buf).unwrap();
    let back: CharBuf = serde_json::from_str(&json).unwrap();
    assert_eq!(back, buf);
}

#[test]
fn stale_cells_never_serialize() {
    let mut buf = CharBuf::new();
    buf.append("abc");
    buf.delete(1, 3).unwrap();

    let json = serde_json::to_string(&buf).unwrap();
    assert_eq!(json, String::from("\"a\""));
}
