//! Password validation functions

use crate::result::{push_if, ValidationResult};

/// Minimum password length, shared with the strength evaluator.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_NEEDS_UPPERCASE: &str = "Password must contain at least one uppercase letter";
pub const PASSWORD_NEEDS_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const PASSWORD_NEEDS_NUMBER: &str = "Password must contain at least one number";

pub(crate) fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub(crate) fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub(crate) fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub(crate) fn long_enough(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LENGTH
}

/// Validates a password for account creation
///
/// Valid when the password is 8+ characters with an uppercase letter, a
/// lowercase letter and a digit. Special characters raise the strength score
/// but are not required here.
///
/// Every unmet requirement is reported, in this order: length, uppercase,
/// lowercase, digit.
pub fn validate_password(password: &str) -> ValidationResult {
    let long_enough = long_enough(password);
    let has_uppercase = has_uppercase(password);
    let has_lowercase = has_lowercase(password);
    let has_digit = has_digit(password);

    let mut errors = Vec::new();
    push_if(&mut errors, !long_enough, PASSWORD_TOO_SHORT);
    push_if(&mut errors, !has_uppercase, PASSWORD_NEEDS_UPPERCASE);
    push_if(&mut errors, !has_lowercase, PASSWORD_NEEDS_LOWERCASE);
    push_if(&mut errors, !has_digit, PASSWORD_NEEDS_NUMBER);

    ValidationResult::new(
        long_enough && has_uppercase && has_lowercase && has_digit,
        errors,
    )
}
