//! Submitted HTML forms and their validation.
//!
//! Each form deserializes leniently (missing fields become empty strings) and
//! exposes a `clean` function returning either the validated input or the
//! [`FieldErrors`] to show when the form is re-rendered.

use serde::{Deserialize, Serialize};
use tailorshop_core::validation::FieldErrors;
use validator::Validate;

use crate::auth::password::validate_password_strength;

pub const INVALID_LOGIN_MESSAGE: &str =
    "Please enter a correct username and password. Note that both fields may be case-sensitive.";
pub const USERNAME_TAKEN_MESSAGE: &str = "A user with that username already exists.";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "The two password fields didn't match.";
const USERNAME_CHARS_MESSAGE: &str =
    "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.";

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

/// Body of `POST /login`.
#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login input that passed the field checks.
#[derive(Debug)]
pub struct Credentials<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

impl LoginForm {
    /// Check that both fields were filled in. The username is trimmed, as at
    /// registration; the password is taken as typed.
    pub fn clean(&self) -> Result<Credentials<'_>, FieldErrors> {
        let mut errors = FieldErrors::new();
        let username = self.username.trim();
        errors.require("username", username);
        errors.require("password", &self.password);
        errors.into_result(Credentials {
            username,
            password: &self.password,
        })
    }

    /// Values echoed back into the form on re-render. Never the password.
    pub fn echo(&self) -> FormEcho {
        FormEcho {
            username: self.username.clone(),
            email: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Body of `POST /register`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct RegisterForm {
    #[serde(default)]
    #[validate(length(
        max = 150,
        message = "Ensure this value has at most 150 characters."
    ))]
    pub username: String,
    #[serde(default)]
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[serde(default)]
    pub password1: String,
    #[serde(default)]
    pub password2: String,
}

/// A registration that passed every field check. The username may still be
/// taken; that is checked against the database.
#[derive(Debug)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterForm {
    /// Validate every field, collecting all problems at once.
    pub fn clean(&self, password_min_length: usize) -> Result<NewAccount, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = self.username.trim();
        if errors.require("username", username) && !is_valid_username(username) {
            errors.add("username", USERNAME_CHARS_MESSAGE);
        }
        errors.require("email", &self.email);
        let have_password1 = errors.require("password1", &self.password1);
        let have_password2 = errors.require("password2", &self.password2);

        if let Err(report) = self.validate() {
            errors.merge_validator(&report);
        }

        if have_password1 && have_password2 {
            if self.password1 != self.password2 {
                errors.add("password2", PASSWORD_MISMATCH_MESSAGE);
            } else if let Err(problems) =
                validate_password_strength(&self.password2, username, password_min_length)
            {
                for problem in problems {
                    errors.add("password2", problem);
                }
            }
        }

        errors.into_result(NewAccount {
            username: username.to_string(),
            email: self.email.trim().to_string(),
            password: self.password1.clone(),
        })
    }

    /// Values echoed back into the form on re-render. Never the passwords.
    pub fn echo(&self) -> FormEcho {
        FormEcho {
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }
}

/// Letters, digits, and `@ . + - _` only.
fn is_valid_username(username: &str) -> bool {
    username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

// ---------------------------------------------------------------------------
// Measurements
// ---------------------------------------------------------------------------

/// Body of `POST /submit_measurements/{dress_id}`.
///
/// The value is stored verbatim; a missing field is stored as an empty string.
#[derive(Debug, Default, Deserialize)]
pub struct MeasurementForm {
    #[serde(default)]
    pub measurements: Option<String>,
}

impl MeasurementForm {
    pub fn into_raw(self) -> String {
        self.measurements.unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Re-rendering
// ---------------------------------------------------------------------------

/// Non-secret field values put back into a re-rendered form.
#[derive(Debug, Default, Clone, Serialize)]
pub struct FormEcho {
    pub username: String,
    pub email: String,
}
