//! Submission lifecycle types.
//!
//! `SubmitResult` is what the controller returns from a submit attempt.
//! `SubmitRecord` is appended to the controller's history when an in-flight
//! submission settles.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{form::FormData, validate::ValidationError};

/// Unique identifier for one accepted submission attempt.
///
/// Issued when a submit passes validation; the caller hands it back to
/// `settle()` once the external submit callback completes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub uuid::Uuid);

impl SubmissionId {
    /// Create a new, unique submission ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How an external submit callback settled.
///
/// Both variants re-enable the form — a failed submission is recoverable,
/// the user simply submits again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitOutcome {
    /// The callback completed successfully.
    Success,
    /// The callback reported a failure (e.g. a network error in a real
    /// deployment). The reason is informational only.
    Failure { reason: String },
}

/// The outcome of a single submit attempt.
///
/// Callers pattern-match on this to decide what to do next:
/// - `Accepted` → drive the external submit callback, then call `settle()`
/// - `Rejected` → render the errors; the form stays editable
/// - `InFlight` → a previous submission has not settled; do nothing
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitResult {
    /// Validation passed. The form is now submitting and further submit
    /// attempts are rejected until this submission settles.
    Accepted {
        /// Hand this back to `settle()` when the callback completes.
        submission_id: SubmissionId,
        /// The validated, typed form data to submit.
        data: FormData,
    },

    /// Validation failed. Submission was blocked and all errors surfaced.
    Rejected {
        /// One error per failing field, in schema order.
        errors: Vec<ValidationError>,
    },

    /// A previous submission is still pending settlement. The attempt was
    /// rejected, not queued.
    InFlight,
}

/// A settled submission, kept in the controller's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRecord {
    /// The submission this record settles.
    pub submission_id: SubmissionId,
    /// How the external callback settled.
    pub outcome: SubmitOutcome,
    /// Wall-clock time of settlement (UTC).
    pub settled_at: DateTime<Utc>,
}
