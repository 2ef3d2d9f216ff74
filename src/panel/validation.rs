//! # Field Validation
//!
//! Client-side checks run before any request leaves the machine. Checks are
//! ordered and the first failure wins. Values are never trimmed or
//! normalized.

use crate::panel::models::{FieldSet, FormMode};
use serde::Serialize;
use thiserror::Error;

/// Characters a new username may not contain
pub const FORBIDDEN_USERNAME_CHARS: &str = " !@#$%^&*()/?:\"<>|,.;";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("a required field is empty")]
    MissingField,
    #[error("password and confirmation differ")]
    PasswordMismatch,
    #[error("username contains a forbidden character")]
    InvalidUsernameChars,
    #[error("username starts with a digit")]
    UsernameStartsWithDigit,
}

impl ValidationError {
    /// Text table key shown for this failure on the sliding panel screen
    pub fn text_key(self, mode: FormMode) -> &'static str {
        match (mode, self) {
            (FormMode::SignIn, _) => "error_code07",
            (FormMode::SignUp, ValidationError::MissingField) => "error_code02",
            (FormMode::SignUp, ValidationError::PasswordMismatch) => "error_code03",
            (FormMode::SignUp, ValidationError::InvalidUsernameChars) => "error_code04",
            (FormMode::SignUp, ValidationError::UsernameStartsWithDigit) => "error_code05",
        }
    }

    /// Text table key shown for this failure on the registration screen
    pub fn registration_text_key(self) -> &'static str {
        match self {
            ValidationError::PasswordMismatch => "passwords_must_match",
            _ => "fill_all_fields",
        }
    }
}

/// Validated sign-in payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Validated sign-up payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
}

fn require_all(values: &[&str]) -> Result<(), ValidationError> {
    if values.iter().any(|value| value.is_empty()) {
        return Err(ValidationError::MissingField);
    }
    Ok(())
}

fn require_match(password: &str, confirm_password: &str) -> Result<(), ValidationError> {
    if password != confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// Username and password must both be non-empty
pub fn validate_sign_in(fields: &FieldSet) -> Result<Credentials, ValidationError> {
    require_all(&[fields.username(), fields.password()])?;
    Ok(Credentials {
        username: fields.username().to_string(),
        password: fields.password().to_string(),
    })
}

/// Full sign-up rules: empty -> mismatch -> forbidden chars -> leading digit
pub fn validate_sign_up(fields: &FieldSet) -> Result<NewAccount, ValidationError> {
    let username = fields.username();
    let password = fields.password();
    let confirm_password = fields.confirm_password().unwrap_or_default();

    require_all(&[username, password, confirm_password])?;
    require_match(password, confirm_password)?;

    if username.chars().any(|ch| FORBIDDEN_USERNAME_CHARS.contains(ch)) {
        return Err(ValidationError::InvalidUsernameChars);
    }
    if username.starts_with(|ch: char| ch.is_ascii_digit()) {
        return Err(ValidationError::UsernameStartsWithDigit);
    }

    Ok(NewAccount {
        username: username.to_string(),
        password: password.to_string(),
        confirm_password: confirm_password.to_string(),
    })
}

/// Registration screen rules: empty -> mismatch. The confirmation is not sent.
pub fn validate_registration(fields: &FieldSet) -> Result<Credentials, ValidationError> {
    let confirm_password = fields.confirm_password().unwrap_or_default();

    require_all(&[fields.password(), confirm_password, fields.username()])?;
    require_match(fields.password(), confirm_password)?;

    Ok(Credentials {
        username: fields.username().to_string(),
        password: fields.password().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sign_up(username: &str, password: &str, confirm: &str) -> Result<NewAccount, ValidationError> {
        validate_sign_up(&FieldSet::filled(username, password, Some(confirm)))
    }

    #[test]
    fn sign_in_should_require_both_fields() {
        for (user, pass) in [("", ""), ("alice", ""), ("", "pw")] {
            let result = validate_sign_in(&FieldSet::filled(user, pass, None));
            assert_eq!(result, Err(ValidationError::MissingField));
        }
    }

    #[test]
    fn sign_in_should_not_apply_username_rules() {
        let result = validate_sign_in(&FieldSet::filled("0 bad!", "pw", None)).unwrap();
        assert_eq!(result.username, "0 bad!");
    }

    #[test]
    fn missing_field_should_win_over_every_other_rule() {
        assert_eq!(sign_up("", "a", "b"), Err(ValidationError::MissingField));
        assert_eq!(sign_up("0 x", "a", ""), Err(ValidationError::MissingField));
        assert_eq!(sign_up("ok", "", "b"), Err(ValidationError::MissingField));
    }

    #[test]
    fn mismatch_should_win_over_username_rules() {
        assert_eq!(sign_up("0a b", "p1", "p2"), Err(ValidationError::PasswordMismatch));
        assert_eq!(sign_up("alice", "p1", "p2"), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn every_forbidden_char_should_be_rejected() {
        for ch in FORBIDDEN_USERNAME_CHARS.chars() {
            let username = format!("a{ch}b");
            assert_eq!(
                sign_up(&username, "pw", "pw"),
                Err(ValidationError::InvalidUsernameChars),
                "char {ch:?} should be forbidden"
            );
        }
        assert!(sign_up("ab", "pw", "pw").is_ok());
        assert!(sign_up("a_b-c", "pw", "pw").is_ok());
    }

    #[test]
    fn forbidden_chars_should_win_over_leading_digit() {
        assert_eq!(sign_up("0a b", "pw", "pw"), Err(ValidationError::InvalidUsernameChars));
    }

    #[test]
    fn leading_digit_should_be_rejected() {
        assert_eq!(sign_up("0abc", "pw", "pw"), Err(ValidationError::UsernameStartsWithDigit));
        assert_eq!(sign_up("9", "pw", "pw"), Err(ValidationError::UsernameStartsWithDigit));
        assert!(sign_up("a0bc", "pw", "pw").is_ok());
    }

    #[test]
    fn success_should_return_values_untouched() {
        let account = sign_up("alice", " pw ", " pw ").unwrap();
        assert_eq!(
            account,
            NewAccount {
                username: "alice".to_string(),
                password: " pw ".to_string(),
                confirm_password: " pw ".to_string(),
            }
        );
    }

    #[test]
    fn registration_should_skip_username_rules() {
        let fields = FieldSet::filled("0 a", "pw", Some("pw"));
        assert!(validate_registration(&fields).is_ok());

        let fields = FieldSet::filled("bob", "pw", Some("px"));
        assert_eq!(validate_registration(&fields), Err(ValidationError::PasswordMismatch));
    }

    #[test]
    fn payloads_should_serialize_with_api_field_names() {
        let account = sign_up("alice", "pw", "pw").unwrap();
        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"username": "alice", "password": "pw", "confirm_password": "pw"})
        );
    }

    #[test]
    fn text_keys_should_follow_form_mode() {
        assert_eq!(ValidationError::MissingField.text_key(FormMode::SignIn), "error_code07");
        assert_eq!(ValidationError::MissingField.text_key(FormMode::SignUp), "error_code02");
        assert_eq!(ValidationError::PasswordMismatch.text_key(FormMode::SignUp), "error_code03");
        assert_eq!(
            ValidationError::InvalidUsernameChars.text_key(FormMode::SignUp),
            "error_code04"
        );
        assert_eq!(
            ValidationError::UsernameStartsWithDigit.text_key(FormMode::SignUp),
            "error_code05"
        );
        assert_eq!(
            ValidationError::PasswordMismatch.registration_text_key(),
            "passwords_must_match"
        );
    }
}
