//! Core trait definitions for the form pipeline.
//!
//! Two seams keep the controller free of rule knowledge and I/O:
//!
//! - `Validator`     — the rule engine (pure, deterministic)
//! - `SubmitHandler` — the external submit collaborator (opaque)
//!
//! The controller wires them together: it never inspects rules itself and
//! never performs I/O beyond invoking the handler it was given.

use serde_json::Value;

use formcheck_contracts::{
    error::FormResult,
    field::FieldPath,
    form::FormData,
    submission::SubmitOutcome,
    validate::{ValidationError, ValidationResult},
};

/// A rule engine that validates form drafts.
///
/// Implementations MUST be pure and deterministic: the same draft always
/// produces the same result, with no side effects. This is what makes
/// per-field result caching in the controller sound.
pub trait Validator: Send + Sync {
    /// Validate the whole draft tree.
    ///
    /// Returns `Valid` with the typed form data when every field rule
    /// passes, or `Invalid` with one error per failing field (first failing
    /// rule wins within a field, in declared order).
    fn validate(&self, draft: &Value) -> FormResult<ValidationResult>;

    /// Validate a single field, leaving all others untouched.
    ///
    /// The controller calls this on field edits so unchanged fields reuse
    /// their cached results. Returns `FormError::UnknownField` when the
    /// schema does not declare `path`.
    fn validate_field(&self, draft: &Value, path: &FieldPath)
        -> FormResult<Option<ValidationError>>;

    /// All field paths the schema declares, in declaration order.
    ///
    /// Used by the controller to mark every field touched when a submit is
    /// rejected, so all errors become visible at once.
    fn field_paths(&self) -> Vec<FieldPath>;
}

/// The external collaborator invoked with validated form data.
///
/// The controller treats this opaquely — the reference implementation
/// displays the data and acknowledges success; a real deployment replaces
/// it with a network call. The returned outcome is the settlement of the
/// submission.
pub trait SubmitHandler: Send + Sync {
    /// Receive the validated form data and report how submission settled.
    fn on_valid_submit(&self, data: &FormData) -> SubmitOutcome;
}
