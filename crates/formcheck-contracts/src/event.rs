//! Form interaction events.
//!
//! Data flow is unidirectional: an event updates the draft, the draft is
//! re-validated, and the new error set is what the caller renders. Events
//! are processed one at a time — there is no concurrent mutation of the
//! draft.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::FieldPath;

/// A single user interaction delivered to the form controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormEvent {
    /// The value at `path` changed (keystroke, selection, checkbox toggle).
    ///
    /// `value` is the raw input value: a string for text inputs and radio
    /// selections, a bool for checkboxes.
    FieldChanged { path: FieldPath, value: Value },

    /// The input at `path` was touched (focused and blurred) without
    /// necessarily changing. Triggers validation of that field.
    FieldTouched { path: FieldPath },

    /// The user requested submission.
    Submit,
}
