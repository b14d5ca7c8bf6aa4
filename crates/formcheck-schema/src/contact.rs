//! The built-in contact form schema.
//!
//! The exact rule table and messages of the reference contact form. The
//! special-character set for passwords is `@$!%*?&#` and must be preserved
//! exactly.

use formcheck_contracts::field::FieldPath;

use crate::rule::{FieldRule, FieldSchema, FormSchema, RuleKind};

impl FormSchema {
    /// The contact form schema: nested `personal` and `preferences` groups
    /// plus `message` and `password`, with first-failure-wins rule ordering
    /// per field.
    pub fn contact_form() -> FormSchema {
        FormSchema {
            fields: vec![
                FieldSchema {
                    path: FieldPath::new("personal.name"),
                    rules: vec![
                        FieldRule::with_message(RuleKind::Required, "This field is required."),
                        FieldRule::with_message(
                            RuleKind::MinLength { min: 3 },
                            "Name must be at least 3 characters long.",
                        ),
                    ],
                },
                FieldSchema {
                    path: FieldPath::new("personal.email"),
                    rules: vec![
                        FieldRule::with_message(RuleKind::Required, "This field is required."),
                        FieldRule::with_message(
                            RuleKind::Email,
                            "Please enter a valid email address.",
                        ),
                    ],
                },
                // Optional: absent or empty phone numbers are valid.
                FieldSchema {
                    path: FieldPath::new("personal.phone"),
                    rules: vec![FieldRule::with_message(
                        RuleKind::Pattern { pattern: r"^\d*$".to_string() },
                        "Phone number must contain only digits.",
                    )],
                },
                FieldSchema {
                    path: FieldPath::new("preferences.contactMethod"),
                    rules: vec![FieldRule::with_message(
                        RuleKind::OneOf {
                            allowed: vec![
                                "email".to_string(),
                                "phone".to_string(),
                                "none".to_string(),
                            ],
                        },
                        "Please select a contact method.",
                    )],
                },
                // Unconstrained boolean opt-in; declared so the field path
                // is known to the controller.
                FieldSchema {
                    path: FieldPath::new("preferences.newsletter"),
                    rules: vec![],
                },
                FieldSchema {
                    path: FieldPath::new("message"),
                    rules: vec![
                        FieldRule::with_message(RuleKind::Required, "This field is required."),
                        FieldRule::with_message(
                            RuleKind::MinLength { min: 10 },
                            "Message must be at least 10 characters long.",
                        ),
                    ],
                },
                FieldSchema {
                    path: FieldPath::new("password"),
                    rules: vec![
                        FieldRule::with_message(RuleKind::Required, "This field is required."),
                        FieldRule::with_message(
                            RuleKind::MinLength { min: 6 },
                            "Password must be at least 6 characters long.",
                        ),
                        FieldRule::with_message(
                            RuleKind::Pattern { pattern: "[A-Z]".to_string() },
                            "Password must include at least one uppercase letter.",
                        ),
                        FieldRule::with_message(
                            RuleKind::Pattern { pattern: "[a-z]".to_string() },
                            "Password must include at least one lowercase letter.",
                        ),
                        FieldRule::with_message(
                            RuleKind::Pattern { pattern: r"\d".to_string() },
                            "Password must include at least one number.",
                        ),
                        FieldRule::with_message(
                            RuleKind::Pattern { pattern: "[@$!%*?&#]".to_string() },
                            "Password must include at least one special character (@, $, !, %, *, ?, & or #).",
                        ),
                    ],
                },
            ],
        }
    }
}
