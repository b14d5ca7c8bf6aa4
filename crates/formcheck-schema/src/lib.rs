//! # formcheck-schema
//!
//! The declarative rule engine for formcheck.
//!
//! ## Overview
//!
//! This crate provides [`SchemaEngine`], which implements the
//! [`Validator`](formcheck_core::traits::Validator) trait. A schema is an
//! ordered list of fields, each carrying an ordered list of rules; rules
//! are evaluated in declaration order and the first failing rule wins per
//! field. Schemas are built in code or declared in TOML.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use formcheck_schema::{FormSchema, SchemaEngine};
//!
//! let engine = SchemaEngine::new(FormSchema::contact_form())?;
//! // Pass `Box::new(engine)` to `formcheck_core::FormController::new(...)`.
//! ```
//!
//! ## Rule evaluation
//!
//! Fields are independent: validation reports at most one error per field
//! and all failing fields at once. Absent optional values never fail —
//! only `required` and `one-of` rules reject a missing value.

pub mod contact;
pub mod engine;
pub mod rule;

pub use engine::SchemaEngine;
pub use rule::{FieldRule, FieldSchema, FormSchema, RuleKind};

// ── Tests ────────────────────────────────────────────────────────────────────
