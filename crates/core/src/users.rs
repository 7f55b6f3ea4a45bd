//! Account field validation for registration.

use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::error::CoreError;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{3,32}$").expect("valid regex"));

/// Usernames double as mention handles, so they use the same alphabet.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if USERNAME_RE.is_match(username) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Username must be 3-32 characters of letters, digits or underscores".to_string(),
        ))
    }
}

pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if email.validate_email() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!("Invalid email address '{email}'")))
    }
}
