//! Core error types for formgen.
//!
//! [`FormGenError`] covers the failures that can escape the form component:
//! malformed schema input, invalid validation patterns, configuration
//! problems, serialization and I/O. Per-field validation failures are not
//! errors in this sense; they live in the form state and are rendered inline.

use thiserror::Error;

/// The primary error type for formgen.
#[derive(Error, Debug)]
pub enum FormGenError {
    // ── Schema ───────────────────────────────────────────────────────

    /// The schema document could not be parsed.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// A field's `validation.pattern` is not a valid regular expression.
    #[error("Invalid pattern for field '{field}': {source}")]
    InvalidPattern {
        /// The id of the offending field.
        field: String,
        /// The underlying regex compilation error.
        #[source]
        source: fancy_regex::Error,
    },

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A convenience type alias for `Result<T, FormGenError>`.
pub type FormGenResult<T> = Result<T, FormGenError>;
