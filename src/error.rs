//! Error types for digest-extract.
//!
//! Malformed documents never produce an error: every pipeline stage has an
//! empty or fallback outcome instead. The only failures surfaced here are
//! caller mistakes in configuration.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The supplied options cannot drive an extraction run.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
