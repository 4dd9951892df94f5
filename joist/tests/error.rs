//! Tests for boundary error types.

use std::any::Any;

use joist::error::{BoundaryError, BoundaryErrorKind, catch, extract_panic_message};

#[test]
fn test_extract_panic_message_str() {
    let panic: Box<dyn Any + Send> = Box::new("test panic message");
    assert_eq!(extract_panic_message(&panic), "test panic message");
}

#[test]
fn test_extract_panic_message_string() {
    let panic: Box<dyn Any + Send> = Box::new(String::from("test panic message"));
    assert_eq!(extract_panic_message(&panic), "test panic message");
}

#[test]
fn test_extract_panic_message_unknown() {
    let panic: Box<dyn Any + Send> = Box::new(42i32);
    assert_eq!(extract_panic_message(&panic), "Unknown panic");
}

#[test]
fn test_boundary_error_display() {
    let error = BoundaryError {
        kind: BoundaryErrorKind::Render,
        message: "oops".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("render pass"));
    assert!(display.contains("oops"));
}

#[test]
fn test_catch_passes_values_through() {
    let result = catch(BoundaryErrorKind::Handler, || 7);
    assert_eq!(result.unwrap(), 7);
}

#[test]
fn test_catch_captures_panic_message() {
    let result: Result<(), _> = catch(BoundaryErrorKind::Render, || {
        panic!("renderer blew up");
    });

    let err = result.unwrap_err();
    assert_eq!(err.kind, BoundaryErrorKind::Render);
    assert_eq!(err.message, "renderer blew up");
}
