//! Error types for the Pond2D engine
//!
//! This module defines the error types used throughout the engine.
//! The engine philosophy is log-and-continue: no core operation is fatal
//! to the process, and most failures are reported through the logging
//! channel rather than propagated.

use std::fmt;

/// Result type for Pond2D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pond2D engine errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The render surface is unavailable or has degenerate dimensions
    ContextUnavailable(String),

    /// A scene key was not found in the scene stack
    SceneNotFound(String),

    /// Invalid configuration value
    InvalidConfig(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ContextUnavailable(msg) => write!(f, "Render context unavailable: {}", msg),
            Error::SceneNotFound(key) => write!(f, "Scene not found: \"{}\"", key),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
