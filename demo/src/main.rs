//! formcheck — Contact Form Demo CLI
//!
//! Runs one or all of the contact form scenarios. Each scenario uses real
//! formcheck components (schema engine, form controller, submit handler)
//! wired together the way a hosting application would.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- valid-submission
//!   cargo run -p demo -- field-errors
//!   cargo run -p demo -- double-submit

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod scenarios;

// ── CLI definition ────────────────────────────────────────────────────────────

/// formcheck — declarative form validation demo.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "formcheck contact form demo",
    long_about = "Runs contact form scenarios showing declarative rule evaluation,\n\
                  first-failure-wins ordering, and submission gating."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: a correctly filled form submits and settles.
    ValidSubmission,
    /// Scenario 2: invalid fields block submission (first rule wins).
    FieldErrors,
    /// Scenario 3: the in-flight gate rejects a concurrent submit.
    DoubleSubmit,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all(),
        Command::ValidSubmission => scenarios::valid_submission(),
        Command::FieldErrors => scenarios::field_errors(),
        Command::DoubleSubmit => scenarios::double_submit(),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_all() -> formcheck_contracts::error::FormResult<()> {
    scenarios::valid_submission()?;
    scenarios::field_errors()?;
    scenarios::double_submit()?;
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("formcheck — Declarative Form Validation");
    println!("Contact Form Demo");
    println!("=======================================");
    println!();
    println!("Per submit attempt:");
    println!("  [1] In-flight gate: a pending submission rejects new attempts");
    println!("  [2] Rule engine validates every field (first failing rule wins)");
    println!("  [3] Valid data is handed to the submit callback");
    println!("  [4] Settlement returns the form to Idle");
    println!();
}
