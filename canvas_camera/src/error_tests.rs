//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug, Clone, std::error::Error).

use crate::error::{Error, Result};

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_invalid_state_display() {
    let err = Error::InvalidState("width must be positive, got 0".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid camera state"));
    assert!(display.contains("width must be positive"));
}

#[test]
fn test_invalid_viewport_display() {
    let err = Error::InvalidViewport("0x600".to_string());
    let display = format!("{}", err);
    assert_eq!(display, "Invalid viewport: 0x600");
}

#[test]
fn test_invalid_argument_display() {
    let err = Error::InvalidArgument("zoom factor -2".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid argument"));
    assert!(display.contains("zoom factor -2"));
}

#[test]
fn test_interpolation_failed_display() {
    let err = Error::InterpolationFailed("apex 120 lies between 100 and 200".to_string());
    let display = format!("{}", err);
    assert!(display.starts_with("Interpolation failed"));
    assert!(display.contains("apex 120"));
}

#[test]
fn test_backend_error_display() {
    let err = Error::BackendError("layer group was removed".to_string());
    assert_eq!(format!("{}", err), "Backend error: layer group was removed");
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::InvalidViewport("empty".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let debug1 = format!("{:?}", Error::InvalidState("s".to_string()));
    assert!(debug1.contains("InvalidState"));

    let debug2 = format!("{:?}", Error::InterpolationFailed("i".to_string()));
    assert!(debug2.contains("InterpolationFailed"));

    let debug3 = format!("{:?}", Error::BackendError("b".to_string()));
    assert!(debug3.contains("BackendError"));
}

#[test]
fn test_error_clone() {
    let err1 = Error::InvalidArgument("progress 1.5".to_string());
    let err2 = err1.clone();
    assert_eq!(format!("{}", err1), format!("{}", err2));
}

// ============================================================================
// RESULT TYPE TESTS
// ============================================================================

#[test]
fn test_error_propagation_with_question_mark() {
    fn inner() -> Result<f64> {
        Err(Error::InvalidViewport("0x0".to_string()))
    }

    fn outer() -> Result<f64> {
        let scale = inner()?;
        Ok(scale * 2.0)
    }

    match outer() {
        Err(Error::InvalidViewport(msg)) => assert_eq!(msg, "0x0"),
        other => panic!("unexpected result: {:?}", other),
    }
}
