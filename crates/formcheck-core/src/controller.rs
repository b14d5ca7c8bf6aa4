//! The form controller: the event-driven submission state machine.
//!
//! The controller enforces the form lifecycle:
//!
//!   Idle → (validate) → { Invalid → Idle on edit, Valid → Submitting → Idle }
//!
//! There is no terminal state — the form is reusable indefinitely. The
//! mutual-exclusion invariant is absolute: while a submission is in flight,
//! further submit attempts return `SubmitResult::InFlight` and are never
//! queued. Only `settle()` re-enables submission.
//!
//! The submit callback may be asynchronous in the hosting application, so
//! the controller models it as a suspension point: `submit()` hands back the
//! validated data plus a `SubmissionId`, and the caller settles once the
//! callback completes. `submit_with()` covers the synchronous case in one
//! call.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, warn};

use formcheck_contracts::{
    error::{FormError, FormResult},
    event::FormEvent,
    field::FieldPath,
    submission::{SubmissionId, SubmitOutcome, SubmitRecord, SubmitResult},
    validate::ValidationResult,
};

use crate::traits::{SubmitHandler, Validator};

/// The observable lifecycle phase of the form.
///
/// Validation itself is synchronous and leaves no intermediate phase behind;
/// only the submit suspension point is observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Editable. Submission is permitted when validation passes.
    Idle,
    /// An accepted submission is awaiting settlement. Further submit
    /// attempts are rejected.
    Submitting,
}

/// The form controller.
///
/// Owns the editable draft, the touched set, the cached per-field errors,
/// and the submission phase. Field edits re-validate only the edited field;
/// all other fields reuse their cached results, which is sound because the
/// validator is pure and fields are independent.
pub struct FormController {
    validator: Box<dyn Validator>,
    /// The current field values as a JSON tree addressed by field paths.
    draft: Value,
    /// Fields the user has interacted with. Errors are only surfaced for
    /// touched fields; a rejected submit touches everything.
    touched: BTreeSet<FieldPath>,
    /// The current error per field — at most one, first failing rule wins.
    errors: BTreeMap<FieldPath, String>,
    phase: FormPhase,
    /// The accepted submission awaiting settlement, if any.
    in_flight: Option<SubmissionId>,
    /// Settled submissions, oldest first.
    history: Vec<SubmitRecord>,
}

impl FormController {
    /// Create a controller over an empty draft.
    pub fn new(validator: Box<dyn Validator>) -> Self {
        Self {
            validator,
            draft: Value::Object(serde_json::Map::new()),
            touched: BTreeSet::new(),
            errors: BTreeMap::new(),
            phase: FormPhase::Idle,
            in_flight: None,
            history: Vec::new(),
        }
    }

    /// Dispatch one interaction event.
    ///
    /// Returns `Some(SubmitResult)` for `Submit` events, `None` for field
    /// events. Events are processed one at a time — the unidirectional flow
    /// is event → updated draft → re-validate → new error set.
    pub fn handle(&mut self, event: FormEvent) -> FormResult<Option<SubmitResult>> {
        match event {
            FormEvent::FieldChanged { path, value } => {
                self.field_changed(path, value)?;
                Ok(None)
            }
            FormEvent::FieldTouched { path } => {
                self.field_touched(path)?;
                Ok(None)
            }
            FormEvent::Submit => Ok(Some(self.submit()?)),
        }
    }

    /// Apply a field edit: update the draft at `path`, mark the field
    /// touched, and re-validate that field only.
    ///
    /// Edits during an in-flight submission are applied to the draft but do
    /// not affect the already-accepted submission data.
    pub fn field_changed(&mut self, path: FieldPath, value: Value) -> FormResult<()> {
        debug!(path = %path, "field changed");
        path.assign(&mut self.draft, value);
        self.touched.insert(path.clone());
        self.revalidate_field(&path)
    }

    /// Mark a field touched (focused and blurred) and validate it.
    pub fn field_touched(&mut self, path: FieldPath) -> FormResult<()> {
        debug!(path = %path, "field touched");
        self.touched.insert(path.clone());
        self.revalidate_field(&path)
    }

    /// Attempt submission.
    ///
    /// # Pipeline
    ///
    /// 1. Mutual-exclusion gate: if a submission is in flight, return
    ///    `InFlight` without validating — the attempt is rejected, not queued.
    /// 2. Run full validation:
    ///    - `Invalid` → mark every schema field touched, surface all errors,
    ///      return `Rejected`
    ///    - `Valid` → enter `Submitting`, issue a `SubmissionId`, return
    ///      `Accepted` with the typed data
    ///
    /// The caller drives the external submit callback with the accepted data
    /// and settles with `settle()` once it completes.
    pub fn submit(&mut self) -> FormResult<SubmitResult> {
        if self.phase == FormPhase::Submitting {
            warn!("submit attempted while a submission is in flight; rejecting");
            return Ok(SubmitResult::InFlight);
        }

        match self.validator.validate(&self.draft)? {
            ValidationResult::Invalid(errors) => {
                debug!(error_count = errors.len(), "submit blocked by validation");

                // Surface every error, including ones for untouched fields.
                for path in self.validator.field_paths() {
                    self.touched.insert(path);
                }
                self.errors = errors
                    .iter()
                    .map(|e| (e.path.clone(), e.message.clone()))
                    .collect();

                Ok(SubmitResult::Rejected { errors })
            }

            ValidationResult::Valid(data) => {
                let submission_id = SubmissionId::new();
                info!(submission_id = %submission_id, "submission accepted");

                self.errors.clear();
                self.phase = FormPhase::Submitting;
                self.in_flight = Some(submission_id.clone());

                Ok(SubmitResult::Accepted { submission_id, data })
            }
        }
    }

    /// Settle the in-flight submission and return the form to `Idle`.
    ///
    /// Both outcomes re-enable submission; the draft and touched state are
    /// preserved so the form remains exactly as the user left it. A stale or
    /// unknown `submission_id` returns `FormError::UnknownSubmission`.
    pub fn settle(
        &mut self,
        submission_id: SubmissionId,
        outcome: SubmitOutcome,
    ) -> FormResult<()> {
        if self.in_flight.as_ref() != Some(&submission_id) {
            warn!(submission_id = %submission_id, "settle with unknown submission id");
            return Err(FormError::UnknownSubmission {
                submission_id: submission_id.to_string(),
            });
        }

        info!(submission_id = %submission_id, ?outcome, "submission settled");
        self.in_flight = None;
        self.phase = FormPhase::Idle;
        self.history.push(SubmitRecord {
            submission_id,
            outcome,
            settled_at: Utc::now(),
        });

        Ok(())
    }

    /// Submit and, when accepted, drive a synchronous handler to settlement
    /// in one call.
    ///
    /// The returned `SubmitResult` is the same one `submit()` produced; on
    /// `Accepted` the submission has already settled when this returns.
    pub fn submit_with(&mut self, handler: &dyn SubmitHandler) -> FormResult<SubmitResult> {
        let result = self.submit()?;

        if let SubmitResult::Accepted { submission_id, data } = &result {
            let outcome = handler.on_valid_submit(data);
            self.settle(submission_id.clone(), outcome)?;
        }

        Ok(result)
    }

    /// The current (field path → message) pairs for display.
    ///
    /// Only touched fields appear here; untouched fields show no error until
    /// a submit attempt touches everything.
    pub fn errors(&self) -> &BTreeMap<FieldPath, String> {
        &self.errors
    }

    /// True when the user has interacted with the field at `path`.
    pub fn is_touched(&self, path: &FieldPath) -> bool {
        self.touched.contains(path)
    }

    /// Whether a submit attempt would currently be accepted.
    ///
    /// Derived from a full validation run plus the in-flight gate; does not
    /// mutate any controller state.
    pub fn can_submit(&self) -> FormResult<bool> {
        if self.phase == FormPhase::Submitting {
            return Ok(false);
        }
        Ok(self.validator.validate(&self.draft)?.is_valid())
    }

    /// The current lifecycle phase.
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// The current draft tree (raw field values).
    pub fn draft(&self) -> &Value {
        &self.draft
    }

    /// Settled submissions, oldest first.
    pub fn history(&self) -> &[SubmitRecord] {
        &self.history
    }

    /// Re-run the validator for one field and update the cached error map.
    fn revalidate_field(&mut self, path: &FieldPath) -> FormResult<()> {
        match self.validator.validate_field(&self.draft, path)? {
            Some(error) => {
                debug!(path = %path, message = %error.message, "field invalid");
                self.errors.insert(path.clone(), error.message);
            }
            None => {
                self.errors.remove(path);
            }
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
