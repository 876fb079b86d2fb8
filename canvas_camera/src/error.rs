//! Error types for the canvas camera
//!
//! This module defines the error types used by camera states, the camera
//! compositor and the renderer capabilities they consume.

use std::fmt;

/// Result type for canvas camera operations
pub type Result<T> = std::result::Result<T, Error>;

/// Canvas camera errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A camera state would get a non-positive or non-finite frame size
    InvalidState(String),

    /// The viewport has no usable pixel area
    InvalidViewport(String),

    /// A numeric argument is outside its domain (progress, zoom factor, ...)
    InvalidArgument(String),

    /// Interpolation between two states has no real solution
    InterpolationFailed(String),

    /// Renderer-side failure (element queries, transform sinks)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidState(msg) => write!(f, "Invalid camera state: {}", msg),
            Error::InvalidViewport(msg) => write!(f, "Invalid viewport: {}", msg),
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::InterpolationFailed(msg) => write!(f, "Interpolation failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
