//! Field rule types and the declarative schema.
//!
//! A `FormSchema` holds an ordered list of fields, each with an ordered list
//! of `FieldRule`s. Rules are evaluated in declaration order — the first
//! failing rule wins and later rules for that field are not evaluated.
//! Schemas can be built in code or deserialized from TOML.

use serde::{Deserialize, Serialize};

use formcheck_contracts::field::FieldPath;

/// The kinds of field checks the engine supports.
///
/// Expressed in kebab-case when declared in TOML:
///
/// ```toml
/// rules = [
///     { rule = "required" },
///     { rule = "min-length", min = 3 },
///     { rule = "email" },
///     { rule = "pattern", pattern = '^\d*$' },
///     { rule = "one-of", allowed = ["email", "phone", "none"] },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "kebab-case")]
pub enum RuleKind {
    /// The value must be present and, for strings, non-empty.
    Required,

    /// The string must contain at least `min` characters. Skips absent
    /// values — pair with `Required` for mandatory fields.
    MinLength { min: usize },

    /// The string must look like an email address (pragmatic syntax check,
    /// not full RFC parsing). Skips absent values.
    Email,

    /// The string must match the regex `pattern`. Skips absent values, so
    /// optional fields never fail when omitted. Patterns are compiled when
    /// the engine is constructed; a malformed pattern is a configuration
    /// error.
    Pattern { pattern: String },

    /// The value must be one of the `allowed` string literals. Fails on
    /// absent values — an enumerated field is implicitly required.
    OneOf { allowed: Vec<String> },
}

/// One rule attached to a field: a check plus its failure message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRule {
    /// The check to apply.
    #[serde(flatten)]
    pub kind: RuleKind,

    /// The message reported when the check fails. Falls back to a per-kind
    /// default when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl FieldRule {
    /// A rule with the default message for its kind.
    pub fn new(kind: RuleKind) -> Self {
        Self { kind, message: None }
    }

    /// A rule with an explicit failure message.
    pub fn with_message(kind: RuleKind, message: impl Into<String>) -> Self {
        Self { kind, message: Some(message.into()) }
    }

    /// The message this rule reports on failure.
    pub fn effective_message(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => match &self.kind {
                RuleKind::Required => "This field is required.".to_string(),
                RuleKind::MinLength { min } => {
                    format!("Must be at least {} characters long.", min)
                }
                RuleKind::Email => "Please enter a valid email address.".to_string(),
                RuleKind::Pattern { .. } => {
                    "Value does not match the expected format.".to_string()
                }
                RuleKind::OneOf { allowed } => {
                    format!("Must be one of: {}.", allowed.join(", "))
                }
            },
        }
    }
}

/// The ordered rule list for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// The field this schema governs (e.g. `personal.name`).
    pub path: FieldPath,

    /// Rules in evaluation order. May be empty — an unconstrained field is
    /// still declared so the controller knows it exists.
    #[serde(default)]
    pub rules: Vec<FieldRule>,
}

/// The top-level declarative schema: an ordered list of field rule sets.
///
/// Field order determines the order errors are reported in; rule order
/// within a field determines which failure wins.
///
/// Example in TOML:
/// ```toml
/// [[fields]]
/// path = "personal.name"
/// rules = [
///     { rule = "required", message = "This field is required." },
///     { rule = "min-length", min = 3 },
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSchema {
    /// Ordered list of fields. One entry per field path.
    pub fields: Vec<FieldSchema>,
}
