//! Contact form demo scenarios.
//!
//! Each scenario wires real formcheck components (schema engine, form
//! controller, submit handler) and demonstrates one behavior:
//!
//! - `valid_submission` — a correctly filled form submits and settles
//! - `field_errors`     — invalid fields block submission, first rule wins
//! - `double_submit`    — the in-flight gate rejects concurrent submits

use serde_json::json;

use formcheck_contracts::{
    error::FormResult,
    field::FieldPath,
    form::FormData,
    submission::{SubmitOutcome, SubmitResult},
};
use formcheck_core::{traits::SubmitHandler, FormController};
use formcheck_schema::{FormSchema, SchemaEngine};

/// The contact schema in its declarative TOML form.
const CONTACT_SCHEMA_TOML: &str = include_str!("../schemas/contact.toml");

// ── Submit handler ────────────────────────────────────────────────────────────

/// The reference submit collaborator: displays the validated data and
/// acknowledges success. A real deployment replaces this with a network
/// call.
struct DisplayHandler;

impl SubmitHandler for DisplayHandler {
    fn on_valid_submit(&self, data: &FormData) -> SubmitOutcome {
        match serde_json::to_string_pretty(data) {
            Ok(rendered) => {
                println!("Validated data:");
                println!("{rendered}");
                println!("Form submitted successfully!");
                SubmitOutcome::Success
            }
            Err(e) => SubmitOutcome::Failure { reason: e.to_string() },
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn contact_controller() -> FormResult<FormController> {
    let engine = SchemaEngine::new(FormSchema::contact_form())?;
    Ok(FormController::new(Box::new(engine)))
}

fn fill(controller: &mut FormController, entries: &[(&str, serde_json::Value)]) -> FormResult<()> {
    for (path, value) in entries {
        controller.field_changed(FieldPath::new(*path), value.clone())?;
    }
    Ok(())
}

fn print_errors(controller: &FormController) {
    for (path, message) in controller.errors() {
        println!("  {path}: {message}");
    }
}

// ── Scenario 1: valid submission ─────────────────────────────────────────────

/// Fill every field correctly, submit, and settle through the display
/// handler.
pub fn valid_submission() -> FormResult<()> {
    println!("── Scenario: valid submission ──────────────────────────────");

    let mut controller = contact_controller()?;
    fill(
        &mut controller,
        &[
            ("personal.name", json!("Ada Lovelace")),
            ("personal.email", json!("ada@example.com")),
            ("personal.phone", json!("0123456789")),
            ("preferences.contactMethod", json!("email")),
            ("preferences.newsletter", json!(true)),
            ("message", json!("Hello from the analytical engine.")),
            ("password", json!("Abcdef1!")),
        ],
    )?;

    println!("can_submit: {}", controller.can_submit()?);

    match controller.submit_with(&DisplayHandler)? {
        SubmitResult::Accepted { submission_id, .. } => {
            println!("Submission {submission_id} settled.");
        }
        other => println!("Unexpected result: {other:?}"),
    }

    println!("Settled submissions: {}", controller.history().len());
    println!();
    Ok(())
}

// ── Scenario 2: field errors ─────────────────────────────────────────────────

/// Fill the form badly and show how rule ordering picks each field's
/// single error. Uses the TOML-declared schema to show the declarative
/// load path.
pub fn field_errors() -> FormResult<()> {
    println!("── Scenario: field errors ──────────────────────────────────");

    let engine = SchemaEngine::from_toml_str(CONTACT_SCHEMA_TOML)?;
    let mut controller = FormController::new(Box::new(engine));

    fill(
        &mut controller,
        &[
            // Too short: the length rule fires, not the required rule.
            ("personal.name", json!("Al")),
            ("personal.email", json!("not-an-email")),
            ("personal.phone", json!("call me")),
            // Not one of the allowed methods.
            ("preferences.contactMethod", json!("fax")),
            ("message", json!("short")),
            // Missing the uppercase category, which is declared first.
            ("password", json!("abcdef1!")),
        ],
    )?;

    println!("Errors after editing:");
    print_errors(&controller);

    match controller.submit()? {
        SubmitResult::Rejected { errors } => {
            println!("Submission blocked with {} errors.", errors.len());
        }
        other => println!("Unexpected result: {other:?}"),
    }

    // Fixing the fields clears the errors one edit at a time.
    controller.field_changed(FieldPath::new("personal.name"), json!("Ada Lovelace"))?;
    println!("Errors after fixing the name:");
    print_errors(&controller);

    println!();
    Ok(())
}

// ── Scenario 3: double submit ────────────────────────────────────────────────

/// Submit twice while the first submission is pending: the second attempt
/// is rejected, not queued, and settlement re-enables the form.
pub fn double_submit() -> FormResult<()> {
    println!("── Scenario: double submit ─────────────────────────────────");

    let mut controller = contact_controller()?;
    fill(
        &mut controller,
        &[
            ("personal.name", json!("Grace Hopper")),
            ("personal.email", json!("grace@example.com")),
            ("preferences.contactMethod", json!("none")),
            ("message", json!("A bug report, with an actual moth.")),
            ("password", json!("Cobol60!")),
        ],
    )?;

    let submission_id = match controller.submit()? {
        SubmitResult::Accepted { submission_id, .. } => {
            println!("First submit accepted: {submission_id}");
            submission_id
        }
        other => {
            println!("Unexpected result: {other:?}");
            return Ok(());
        }
    };

    // The external callback has not settled yet; a second attempt is a no-op.
    match controller.submit()? {
        SubmitResult::InFlight => println!("Second submit rejected: submission in flight."),
        other => println!("Unexpected result: {other:?}"),
    }

    controller.settle(submission_id, SubmitOutcome::Success)?;
    println!("First submission settled; form re-enabled.");

    match controller.submit()? {
        SubmitResult::Accepted { submission_id, .. } => {
            println!("Third submit accepted after settlement: {submission_id}");
            controller.settle(submission_id, SubmitOutcome::Success)?;
        }
        other => println!("Unexpected result: {other:?}"),
    }

    println!("Settled submissions: {}", controller.history().len());
    println!();
    Ok(())
}
