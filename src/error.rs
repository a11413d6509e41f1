//! Error types for pagemark.
//!
//! Conversion and extraction are total over arbitrary trees; the only
//! failures surfaced to callers are bad configuration and serialization.

/// Error type for conversion and extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `Options::url` was provided but is not a parseable absolute URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Serializing a record into the report's data block failed.
    #[error("report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for conversion and extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
