//! # formcheck-contracts
//!
//! Shared types and contracts for the formcheck validation engine.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate — only data definitions and error types.

pub mod error;
pub mod event;
pub mod field;
pub mod form;
pub mod submission;
pub mod validate;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::error::FormError;
    use crate::field::FieldPath;
    use crate::form::ContactMethod;
    use crate::submission::{SubmissionId, SubmitOutcome};
    use crate::validate::{ValidationError, ValidationResult};

    // ── FieldPath ────────────────────────────────────────────────────────────

    #[test]
    fn field_path_resolves_nested_value() {
        let tree = json!({ "personal": { "email": "ada@example.com" } });
        let path = FieldPath::new("personal.email");

        assert_eq!(
            path.resolve(&tree),
            Some(&json!("ada@example.com"))
        );
    }

    #[test]
    fn field_path_resolve_missing_segment_is_none() {
        let tree = json!({ "personal": { "name": "Ada" } });

        assert_eq!(FieldPath::new("personal.phone").resolve(&tree), None);
        assert_eq!(FieldPath::new("preferences.newsletter").resolve(&tree), None);
    }

    #[test]
    fn field_path_resolve_null_is_none() {
        let tree = json!({ "personal": { "phone": null } });

        assert_eq!(FieldPath::new("personal.phone").resolve(&tree), None);
    }

    #[test]
    fn field_path_resolve_empty_string_is_present() {
        // Empty is a present value; whether it is acceptable is a rule concern.
        let tree = json!({ "personal": { "name": "" } });

        assert_eq!(
            FieldPath::new("personal.name").resolve(&tree),
            Some(&json!(""))
        );
    }

    #[test]
    fn field_path_assign_creates_intermediate_objects() {
        let mut tree = json!({});
        FieldPath::new("preferences.contactMethod").assign(&mut tree, json!("email"));

        assert_eq!(tree, json!({ "preferences": { "contactMethod": "email" } }));
    }

    #[test]
    fn field_path_assign_overwrites_existing_value() {
        let mut tree = json!({ "personal": { "name": "Ada" } });
        FieldPath::new("personal.name").assign(&mut tree, json!("Grace"));

        assert_eq!(tree, json!({ "personal": { "name": "Grace" } }));
    }

    #[test]
    fn field_path_assign_replaces_scalar_parent() {
        // A scalar sitting where a group belongs is replaced by an object so
        // the assignment still lands.
        let mut tree = json!({ "personal": "oops" });
        FieldPath::new("personal.name").assign(&mut tree, json!("Ada"));

        assert_eq!(tree, json!({ "personal": { "name": "Ada" } }));
    }

    #[test]
    fn field_path_segments_split_on_dots() {
        let path = FieldPath::new("preferences.contactMethod");
        let segments: Vec<&str> = path.segments().collect();

        assert_eq!(segments, vec!["preferences", "contactMethod"]);
    }

    // ── ContactMethod serde ──────────────────────────────────────────────────

    #[test]
    fn contact_method_serializes_to_lowercase_literals() {
        assert_eq!(serde_json::to_value(ContactMethod::Email).unwrap(), json!("email"));
        assert_eq!(serde_json::to_value(ContactMethod::Phone).unwrap(), json!("phone"));
        assert_eq!(serde_json::to_value(ContactMethod::None).unwrap(), json!("none"));
    }

    #[test]
    fn contact_method_rejects_unknown_literal() {
        let result: Result<ContactMethod, _> = serde_json::from_value(json!("fax"));
        assert!(result.is_err(), "'fax' must not decode into a contact method");
    }

    // ── SubmissionId ─────────────────────────────────────────────────────────

    #[test]
    fn submission_id_new_produces_unique_values() {
        let ids: Vec<SubmissionId> = (0..100).map(|_| SubmissionId::new()).collect();

        let unique: std::collections::HashSet<String> =
            ids.iter().map(|id| id.to_string()).collect();
        assert_eq!(unique.len(), 100);
    }

    // ── SubmitOutcome serde round-trip ───────────────────────────────────────

    #[test]
    fn submit_outcome_round_trips() {
        for original in [
            SubmitOutcome::Success,
            SubmitOutcome::Failure { reason: "connection reset".to_string() },
        ] {
            let encoded = serde_json::to_string(&original).unwrap();
            let decoded: SubmitOutcome = serde_json::from_str(&encoded).unwrap();
            assert_eq!(original, decoded);
        }
    }

    // ── ValidationResult helpers ─────────────────────────────────────────────

    #[test]
    fn invalid_result_exposes_its_errors() {
        let errors = vec![ValidationError {
            path: FieldPath::new("personal.name"),
            message: "This field is required.".to_string(),
        }];
        let result = ValidationResult::Invalid(errors.clone());

        assert!(!result.is_valid());
        assert_eq!(result.errors(), errors.as_slice());
    }

    // ── FormError display messages ───────────────────────────────────────────

    #[test]
    fn error_config_display() {
        let err = FormError::ConfigError {
            reason: "failed to parse schema TOML".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("failed to parse schema TOML"));
    }

    #[test]
    fn error_unknown_field_display() {
        let err = FormError::UnknownField {
            path: "personal.fax".to_string(),
        };
        assert!(err.to_string().contains("personal.fax"));
    }

    #[test]
    fn error_data_display() {
        let err = FormError::DataError {
            reason: "missing field `password`".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("could not be decoded"));
        assert!(msg.contains("password"));
    }

    #[test]
    fn error_unknown_submission_display() {
        let id = SubmissionId::new();
        let err = FormError::UnknownSubmission {
            submission_id: id.to_string(),
        };
        assert!(err.to_string().contains(&id.to_string()));
    }
}
