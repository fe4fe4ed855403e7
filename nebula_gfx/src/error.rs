//! Error types for the Nebula GFX layer
//!
//! This module defines the error types used throughout the layer,
//! covering backend calls, marker name handling, and initialization.

use std::fmt;

/// Result type for Nebula GFX operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nebula GFX errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (Vulkan, etc.)
    BackendError(String),

    /// Marker name cannot be passed to the driver (e.g. interior NUL byte)
    InvalidName(String),

    /// Initialization failed (backend device, debug messenger)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidName(msg) => write!(f, "Invalid marker name: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
