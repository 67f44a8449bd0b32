//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

/// Longest address accepted, per the SMTP path limit.
pub const MAX_EMAIL_LENGTH: usize = 254;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is a valid regex")
});

/// Validates email format
///
/// Checks for:
/// - Local part made of letters, digits and the RFC 5322 atom specials
/// - Exactly one '@'
/// - Domain labels of 1-63 alphanumerics/hyphens, not starting or ending with a hyphen
/// - Total length of at most 254 characters
///
/// A dotless domain such as `user@localhost` is accepted.
pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email) && email.chars().count() <= MAX_EMAIL_LENGTH
}
