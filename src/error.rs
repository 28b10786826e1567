//! Error types for the configuration editor component.
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the component
#[derive(Debug, Snafu)]
pub enum Error {
    /// IO error from the device filesystem
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// Remote file transport error, carrying the human-readable reason
    /// reported by the transport
    #[snafu(display("{message}"))]
    Transport { message: String },
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
