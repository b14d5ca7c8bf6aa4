//! Validation outcome types.
//!
//! Validation failures are data, never panics or exceptions: the rule engine
//! returns them and the controller renders them next to the originating
//! field.

use serde::{Deserialize, Serialize};

use crate::{field::FieldPath, form::FormData};

/// One reported failure: a field path plus a human-readable message.
///
/// A field carries at most one active error at a time — rules are evaluated
/// in declared order and the first failing rule wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The field this error belongs to (e.g. `personal.name`).
    pub path: FieldPath,
    /// Human-readable explanation, rendered inline next to the field.
    pub message: String,
}

/// The outcome of validating a full form draft.
///
/// `Valid` carries the typed, decoded form data — the only way to obtain a
/// `FormData` from user input is through a passing validation run.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// Every field rule passed; the draft decoded into typed form data.
    Valid(FormData),
    /// One or more fields failed. One error per failing field, in schema order.
    Invalid(Vec<ValidationError>),
}

impl ValidationResult {
    /// True when the draft passed every rule.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The reported errors; empty for a valid result.
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Invalid(errors) => errors,
        }
    }
}
