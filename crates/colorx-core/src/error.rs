//! Error types for colorx
//!
//! Conversions themselves never fail. These errors come from the boundary:
//! parsing user input and loading options.

use thiserror::Error;

/// Result type for colorx boundary operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating input or loading configuration
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Text that is not a number
    #[error("{channel}: '{input}' is not a number")]
    InvalidNumber { channel: &'static str, input: String },

    /// A number outside the channel's accepted range
    #[error("{channel}: {value} is outside {min}..={max}")]
    OutOfRange {
        channel: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Malformed hex color
    #[error("invalid hex color '{0}', expected #rrggbb")]
    InvalidHex(String),

    /// Malformed options file
    #[cfg(feature = "serde")]
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
