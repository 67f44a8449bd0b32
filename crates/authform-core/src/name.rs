//! Display name validation

use once_cell::sync::Lazy;
use regex::Regex;

use crate::result::{push_if, ValidationResult};

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 50;

pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const NAME_TOO_LONG: &str = "Name must be less than 50 characters";
pub const NAME_BAD_CHARACTERS: &str = "Name can only contain letters and spaces";

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").expect("name pattern is a valid regex"));

/// Validates a person's name: 2-50 characters, ASCII letters and whitespace only.
pub fn validate_name(name: &str) -> ValidationResult {
    let length = name.chars().count();
    let allowed_chars = NAME_REGEX.is_match(name);

    let mut errors = Vec::new();
    push_if(&mut errors, length < MIN_NAME_LENGTH, NAME_TOO_SHORT);
    push_if(&mut errors, length > MAX_NAME_LENGTH, NAME_TOO_LONG);
    push_if(&mut errors, !allowed_chars, NAME_BAD_CHARACTERS);

    ValidationResult::new(
        (MIN_NAME_LENGTH..=MAX_NAME_LENGTH).contains(&length) && allowed_chars,
        errors,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        assert!(validate_name("Jo").is_valid);
        assert!(validate_name("Ada Lovelace").is_valid);
        assert!(validate_name(&"a".repeat(50)).is_valid);
    }

    #[test]
    fn test_too_short() {
        let result = validate_name("J");
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![NAME_TOO_SHORT]);
    }

    #[test]
    fn test_too_long() {
        let result = validate_name(&"a".repeat(51));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![NAME_TOO_LONG]);
    }

    #[test]
    fn test_digits_rejected() {
        let result = validate_name("John123");
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec![NAME_BAD_CHARACTERS]);
    }

    #[test]
    fn test_empty_name_reports_both() {
        let result = validate_name("");
        assert_eq!(result.errors, vec![NAME_TOO_SHORT, NAME_BAD_CHARACTERS]);
    }
}
