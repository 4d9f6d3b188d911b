//! Unit tests for the error types: Display formatting and trait object use.

use laterlist::types::errors::{RequestError, StorageError};

#[test]
fn test_storage_error_display() {
    let e = StorageError::Unavailable("disk gone".to_string());
    assert_eq!(e.to_string(), "Storage unavailable: disk gone");

    let e = StorageError::Malformed("bad json".to_string());
    assert_eq!(e.to_string(), "Stored value malformed: bad json");
}

#[test]
fn test_request_error_display() {
    let e = RequestError::Dropped("store task is gone".to_string());
    assert_eq!(e.to_string(), "Request dropped: store task is gone");
}

#[test]
fn test_errors_are_std_error() {
    let e: Box<dyn std::error::Error> = Box::new(StorageError::Unavailable("x".to_string()));
    assert!(e.to_string().contains("unavailable"));

    let e: Box<dyn std::error::Error> = Box::new(RequestError::Dropped("x".to_string()));
    assert!(e.to_string().contains("dropped"));
}
