//! Error types for the Lightcone engine
//!
//! Light caches themselves never fail: out-of-range parameters are clamped
//! silently. Errors only surface at the scene layer, where callers address
//! lights through keys that may be stale or point at the wrong light kind.

use std::fmt;

/// Result type for Lightcone engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Lightcone engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Light key is unknown or the light was removed
    InvalidLight(String),

    /// Operation is not supported by this light kind (e.g. frustum on a point light)
    LightKindMismatch(String),

    /// Parameter rejected at the scene layer (e.g. non-finite pose)
    InvalidParameter(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidLight(msg) => write!(f, "Invalid light: {}", msg),
            Error::LightKindMismatch(msg) => write!(f, "Light kind mismatch: {}", msg),
            Error::InvalidParameter(msg) => write!(f, "Invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
