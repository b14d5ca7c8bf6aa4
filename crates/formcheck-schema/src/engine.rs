//! The schema-driven rule engine.
//!
//! `SchemaEngine` compiles a `FormSchema` and implements the `Validator`
//! trait from formcheck-core.
//!
//! Evaluation algorithm, per field in declaration order:
//!
//! 1. Resolve the field's dotted path against the draft tree. A missing
//!    segment or JSON `null` is an absent value.
//! 2. Apply the field's rules in declaration order. The first failing rule
//!    produces the field's single error; later rules are not evaluated.
//! 3. Fields are independent — every failing field reports its error.
//!
//! All `Pattern` rules are compiled once at construction; a malformed
//! pattern surfaces as `FormError::ConfigError` instead of failing at
//! evaluation time.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

use formcheck_contracts::{
    error::{FormError, FormResult},
    field::FieldPath,
    form::FormData,
    validate::{ValidationError, ValidationResult},
};
use formcheck_core::traits::Validator;

use crate::rule::{FormSchema, RuleKind};

/// Pragmatic email syntax check: local part, `@`, domain with a TLD.
///
/// Deliberately not an RFC 5322 parser — this mirrors the client-side check
/// the schema messages were written for.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("static email pattern is valid")
});

/// A rule with its pattern pre-compiled and its message resolved.
struct CompiledRule {
    check: Check,
    message: String,
}

/// Compiled form of `RuleKind` — identical semantics, regexes ready to run.
enum Check {
    Required,
    MinLength { min: usize },
    Email,
    Pattern { regex: Regex },
    OneOf { allowed: Vec<String> },
}

impl Check {
    /// Return true when `value` satisfies this check.
    ///
    /// Absent values (`None`): only `Required` and `OneOf` fail — optional
    /// fields never fail validation when omitted. Non-string values pass
    /// string-shaped checks silently; those rules are only meaningful for
    /// strings.
    fn passes(&self, value: Option<&Value>) -> bool {
        match self {
            // ── Required ──────────────────────────────────────────────────
            // Present and, for strings, non-empty.
            Check::Required => match value {
                None => false,
                Some(Value::String(s)) => !s.is_empty(),
                Some(_) => true,
            },

            // ── MinLength ─────────────────────────────────────────────────
            // Character count, not byte length.
            Check::MinLength { min } => match value {
                Some(Value::String(s)) => s.chars().count() >= *min,
                _ => true,
            },

            // ── Email ─────────────────────────────────────────────────────
            Check::Email => match value {
                Some(Value::String(s)) => EMAIL_REGEX.is_match(s),
                _ => true,
            },

            // ── Pattern ───────────────────────────────────────────────────
            Check::Pattern { regex } => match value {
                Some(Value::String(s)) => regex.is_match(s),
                _ => true,
            },

            // ── OneOf ─────────────────────────────────────────────────────
            // An enumerated field is implicitly required: absent or
            // non-string values fail alongside unknown literals.
            Check::OneOf { allowed } => match value {
                Some(Value::String(s)) => allowed.iter().any(|a| a == s),
                _ => false,
            },
        }
    }
}

/// One field's compiled rule list.
struct CompiledField {
    path: FieldPath,
    rules: Vec<CompiledRule>,
}

/// A `Validator` implementation that evaluates a compiled `FormSchema`.
///
/// Construct via `new` for schemas built in code, or `from_toml_str` /
/// `from_file` for declarative schemas, then pass to the form controller.
///
/// ```rust,ignore
/// use formcheck_schema::{FormSchema, SchemaEngine};
///
/// let engine = SchemaEngine::new(FormSchema::contact_form())?;
/// ```
pub struct SchemaEngine {
    schema: FormSchema,
    compiled: Vec<CompiledField>,
}

impl SchemaEngine {
    /// Compile `schema` into an engine.
    ///
    /// Returns `FormError::ConfigError` when any `Pattern` rule carries a
    /// regex that does not compile.
    pub fn new(schema: FormSchema) -> FormResult<Self> {
        let mut compiled = Vec::with_capacity(schema.fields.len());

        for field in &schema.fields {
            let mut rules = Vec::with_capacity(field.rules.len());
            for rule in &field.rules {
                let check = match &rule.kind {
                    RuleKind::Required => Check::Required,
                    RuleKind::MinLength { min } => Check::MinLength { min: *min },
                    RuleKind::Email => Check::Email,
                    RuleKind::Pattern { pattern } => {
                        let regex = Regex::new(pattern).map_err(|e| FormError::ConfigError {
                            reason: format!(
                                "invalid pattern '{}' for field '{}': {}",
                                pattern, field.path, e
                            ),
                        })?;
                        Check::Pattern { regex }
                    }
                    RuleKind::OneOf { allowed } => Check::OneOf { allowed: allowed.clone() },
                };
                rules.push(CompiledRule {
                    check,
                    message: rule.effective_message(),
                });
            }
            compiled.push(CompiledField {
                path: field.path.clone(),
                rules,
            });
        }

        Ok(Self { schema, compiled })
    }

    /// Parse `s` as TOML and compile the resulting schema.
    ///
    /// Returns `FormError::ConfigError` if the TOML is malformed or does not
    /// match the `FormSchema` shape.
    pub fn from_toml_str(s: &str) -> FormResult<Self> {
        let schema: FormSchema = toml::from_str(s).map_err(|e| FormError::ConfigError {
            reason: format!("failed to parse schema TOML: {}", e),
        })?;
        Self::new(schema)
    }

    /// Read the file at `path` and parse it as a TOML schema.
    pub fn from_file(path: &Path) -> FormResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| FormError::ConfigError {
            reason: format!("failed to read schema file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The declarative schema this engine was compiled from.
    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    /// The first failing rule's message for one field, or `None` when every
    /// rule passes.
    fn first_failure(field: &CompiledField, draft: &Value) -> Option<String> {
        let value = field.path.resolve(draft);
        for rule in &field.rules {
            if !rule.check.passes(value) {
                debug!(path = %field.path, message = %rule.message, "rule failed");
                return Some(rule.message.clone());
            }
        }
        None
    }
}

impl Validator for SchemaEngine {
    /// Validate the whole draft against the compiled schema.
    ///
    /// On a clean pass the draft is decoded into typed `FormData`; a decode
    /// failure at that point means the schema under-constrains the form and
    /// is reported as `FormError::DataError`.
    fn validate(&self, draft: &Value) -> FormResult<ValidationResult> {
        let mut errors: Vec<ValidationError> = Vec::new();

        for field in &self.compiled {
            if let Some(message) = Self::first_failure(field, draft) {
                errors.push(ValidationError {
                    path: field.path.clone(),
                    message,
                });
            }
        }

        if !errors.is_empty() {
            debug!(error_count = errors.len(), "draft invalid");
            return Ok(ValidationResult::Invalid(errors));
        }

        let data: FormData = serde_json::from_value(draft.clone()).map_err(|e| {
            warn!(error = %e, "draft passed all rules but failed typed decode");
            FormError::DataError { reason: e.to_string() }
        })?;

        Ok(ValidationResult::Valid(data))
    }

    /// Validate a single declared field against the draft.
    fn validate_field(
        &self,
        draft: &Value,
        path: &FieldPath,
    ) -> FormResult<Option<ValidationError>> {
        let field = self
            .compiled
            .iter()
            .find(|f| &f.path == path)
            .ok_or_else(|| FormError::UnknownField { path: path.to_string() })?;

        Ok(Self::first_failure(field, draft).map(|message| ValidationError {
            path: field.path.clone(),
            message,
        }))
    }

    fn field_paths(&self) -> Vec<FieldPath> {
        self.compiled.iter().map(|f| f.path.clone()).collect()
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use formcheck_contracts::field::FieldPath;
    use formcheck_core::traits::Validator;

    use crate::rule::{FieldRule, FieldSchema, FormSchema, RuleKind};

    use super::SchemaEngine;

    // ── Builder helpers ──────────────────────────────────────────────────────

    fn single_field(path: &str, rules: Vec<FieldRule>) -> SchemaEngine {
        SchemaEngine::new(FormSchema {
            fields: vec![FieldSchema {
                path: FieldPath::new(path),
                rules,
            }],
        })
        .unwrap()
    }

    fn field_error(engine: &SchemaEngine, draft: &serde_json::Value, path: &str) -> Option<String> {
        engine
            .validate_field(draft, &FieldPath::new(path))
            .unwrap()
            .map(|e| e.message)
    }

    // ── Required ─────────────────────────────────────────────────────────────

    #[test]
    fn required_fails_on_absent_and_empty() {
        let engine = single_field("message", vec![FieldRule::new(RuleKind::Required)]);

        assert!(field_error(&engine, &json!({}), "message").is_some());
        assert!(field_error(&engine, &json!({ "message": null }), "message").is_some());
        assert!(field_error(&engine, &json!({ "message": "" }), "message").is_some());
        assert!(field_error(&engine, &json!({ "message": "hi" }), "message").is_none());
    }

    #[test]
    fn required_passes_on_non_string_values() {
        let engine = single_field(
            "preferences.newsletter",
            vec![FieldRule::new(RuleKind::Required)],
        );

        let draft = json!({ "preferences": { "newsletter": false } });
        assert!(field_error(&engine, &draft, "preferences.newsletter").is_none());
    }

    // ── MinLength ────────────────────────────────────────────────────────────

    #[test]
    fn min_length_counts_characters_not_bytes() {
        let engine = single_field(
            "personal.name",
            vec![FieldRule::new(RuleKind::MinLength { min: 3 })],
        );

        // Three characters, more than three bytes.
        let draft = json!({ "personal": { "name": "héé" } });
        assert!(field_error(&engine, &draft, "personal.name").is_none());

        let short = json!({ "personal": { "name": "hé" } });
        assert!(field_error(&engine, &short, "personal.name").is_some());
    }

    #[test]
    fn min_length_skips_absent_values() {
        let engine = single_field(
            "personal.name",
            vec![FieldRule::new(RuleKind::MinLength { min: 3 })],
        );

        assert!(field_error(&engine, &json!({}), "personal.name").is_none());
    }

    // ── Pattern ──────────────────────────────────────────────────────────────

    #[test]
    fn pattern_skips_absent_and_non_string_values() {
        let engine = single_field(
            "personal.phone",
            vec![FieldRule::new(RuleKind::Pattern { pattern: r"^\d*$".to_string() })],
        );

        assert!(field_error(&engine, &json!({}), "personal.phone").is_none());
        let non_string = json!({ "personal": { "phone": 42 } });
        assert!(field_error(&engine, &non_string, "personal.phone").is_none());
    }

    #[test]
    fn pattern_matches_empty_string_with_star_quantifier() {
        let engine = single_field(
            "personal.phone",
            vec![FieldRule::new(RuleKind::Pattern { pattern: r"^\d*$".to_string() })],
        );

        let empty = json!({ "personal": { "phone": "" } });
        assert!(field_error(&engine, &empty, "personal.phone").is_none());

        let letters = json!({ "personal": { "phone": "abc" } });
        assert!(field_error(&engine, &letters, "personal.phone").is_some());
    }

    // ── OneOf ────────────────────────────────────────────────────────────────

    #[test]
    fn one_of_fails_on_absent_and_non_string_values() {
        let engine = single_field(
            "preferences.contactMethod",
            vec![FieldRule::new(RuleKind::OneOf {
                allowed: vec!["email".to_string(), "phone".to_string(), "none".to_string()],
            })],
        );

        assert!(field_error(&engine, &json!({}), "preferences.contactMethod").is_some());
        let non_string = json!({ "preferences": { "contactMethod": 3 } });
        assert!(field_error(&engine, &non_string, "preferences.contactMethod").is_some());
    }

    // ── Default messages ─────────────────────────────────────────────────────

    #[test]
    fn omitted_message_falls_back_to_per_kind_default() {
        let engine = single_field(
            "personal.name",
            vec![FieldRule::new(RuleKind::MinLength { min: 3 })],
        );

        let draft = json!({ "personal": { "name": "ab" } });
        assert_eq!(
            field_error(&engine, &draft, "personal.name"),
            Some("Must be at least 3 characters long.".to_string())
        );
    }

    // ── Configuration errors ─────────────────────────────────────────────────

    #[test]
    fn malformed_pattern_is_a_config_error() {
        let result = SchemaEngine::new(FormSchema {
            fields: vec![FieldSchema {
                path: FieldPath::new("personal.phone"),
                rules: vec![FieldRule::new(RuleKind::Pattern {
                    pattern: "[unclosed".to_string(),
                })],
            }],
        });

        match result {
            Err(formcheck_contracts::error::FormError::ConfigError { reason }) => {
                assert!(
                    reason.contains("personal.phone"),
                    "config error should name the field: {reason}"
                );
            }
            _ => panic!("expected ConfigError for malformed pattern"),
        }
    }
}
