//! The typed form data tree.
//!
//! `FormData` is what a fully validated form decodes to. Field names follow
//! the external field identifiers — `Preferences::contact_method` serializes
//! as `contactMethod` so that field paths and serialized keys stay aligned.

use serde::{Deserialize, Serialize};

/// How the user prefers to be contacted.
///
/// Serialized as the lowercase literals `"email"`, `"phone"`, `"none"` —
/// exactly the values a contact-method selector submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Phone,
    None,
}

/// The `personal` group: identity and reachability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub email: String,
    /// Optional; an omitted phone number is always valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// The `preferences` group: contact method and newsletter opt-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(rename = "contactMethod")]
    pub contact_method: ContactMethod,
    /// Optional; an omitted opt-in is always valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub newsletter: Option<bool>,
}

/// The complete contact form: a tree of field groups, not a flat map.
///
/// Validation errors are reported against the same tree shape via dotted
/// field paths (`personal.name`, `preferences.contactMethod`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub personal: Personal,
    pub preferences: Preferences,
    pub message: String,
    pub password: String,
}
