//! Field-level validation results for HTML forms.
//!
//! Form validators return `Result<T, FieldErrors>`: either the cleaned value
//! or every message collected for every offending field. Handlers hand the
//! errors straight to the template that re-renders the form.

use std::collections::BTreeMap;

use serde::Serialize;

/// Key under which errors that belong to the form as a whole are stored.
pub const NON_FIELD: &str = "__all__";

/// Message used when a required field is missing or blank.
pub const REQUIRED_MESSAGE: &str = "This field is required.";

/// Error messages grouped by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Record a message against the whole form.
    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.add(NON_FIELD, message);
    }

    /// Record [`REQUIRED_MESSAGE`] when `value` is blank. Returns whether the
    /// value was present.
    pub fn require(&mut self, field: &str, value: &str) -> bool {
        if value.trim().is_empty() {
            self.add(field, REQUIRED_MESSAGE);
            false
        } else {
            true
        }
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }

    /// Fold the messages of a `validator` run into this set.
    ///
    /// Fields that already carry a message are skipped so a blank field only
    /// reports [`REQUIRED_MESSAGE`] once.
    pub fn merge_validator(&mut self, errors: &validator::ValidationErrors) {
        for (field, errs) in errors.field_errors() {
            if self.has(&field) {
                continue;
            }
            for err in errs {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                self.add(&field, message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Contact {
        #[validate(email(message = "Enter a valid email address."))]
        email: String,
    }

    #[test]
    fn require_flags_blank_values() {
        let mut errors = FieldErrors::new();
        assert!(!errors.require("username", "   "));
        assert!(errors.require("password", "secret"));

        assert_eq!(errors.get("username"), [REQUIRED_MESSAGE.to_string()]);
        assert!(errors.get("password").is_empty());
        assert!(errors.into_result(()).is_err());
    }

    #[test]
    fn empty_set_yields_value() {
        let errors = FieldErrors::new();
        assert_eq!(errors.into_result(7), Ok(7));
    }

    #[test]
    fn merges_validator_messages() {
        let contact = Contact {
            email: "invalidemail".to_string(),
        };
        let report = contact.validate().unwrap_err();

        let mut errors = FieldErrors::new();
        errors.merge_validator(&report);
        assert_eq!(errors.get("email"), ["Enter a valid email address.".to_string()]);
    }

    #[test]
    fn merge_skips_fields_already_reported() {
        let contact = Contact {
            email: String::new(),
        };
        let report = contact.validate().unwrap_err();

        let mut errors = FieldErrors::new();
        errors.require("email", &contact.email);
        errors.merge_validator(&report);
        assert_eq!(errors.get("email").len(), 1);
    }

    #[test]
    fn non_field_errors_use_reserved_key() {
        let mut errors = FieldErrors::new();
        errors.add_non_field("Bad credentials");
        assert_eq!(errors.get(NON_FIELD), ["Bad credentials".to_string()]);
    }
}
