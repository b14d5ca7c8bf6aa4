//! Fault conditions for the formcheck crates.
//!
//! Validation failures are NOT errors — they travel as `ValidationError`
//! data inside a `ValidationResult`. `FormError` covers only genuine faults:
//! malformed schemas, unknown field paths, decode failures, and stale
//! settlement attempts.

use thiserror::Error;

/// The unified error type for the formcheck crates.
#[derive(Debug, Error)]
pub enum FormError {
    /// A schema could not be loaded or compiled (malformed TOML, invalid
    /// regex pattern, unreadable file).
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A field path was used that the schema does not declare.
    #[error("unknown field path '{path}'")]
    UnknownField { path: String },

    /// A draft passed every rule but could not be decoded into typed form
    /// data. A well-formed schema prevents this.
    #[error("validated draft could not be decoded: {reason}")]
    DataError { reason: String },

    /// `settle()` was called with an ID that does not match the in-flight
    /// submission.
    #[error("no submission in flight with id '{submission_id}'")]
    UnknownSubmission { submission_id: String },
}

/// Convenience alias used throughout the formcheck crates.
pub type FormResult<T> = Result<T, FormError>;
