//! Validation result shared by the field validators

use serde::{Deserialize, Serialize};

/// Outcome of a single field validation.
///
/// `errors` keeps the order in which requirements are checked, so the first
/// message is always the most basic unmet rule.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// A passing result with no messages.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Build a result from a validity flag and the messages collected for it.
    pub fn new(is_valid: bool, errors: Vec<String>) -> Self {
        Self { is_valid, errors }
    }

    /// Messages joined the way the page shows them inline.
    pub fn joined(&self) -> String {
        self.errors.join(". ")
    }
}

/// Push `message` when `failed` holds. Keeps validators reading as a flat rule list.
pub(crate) fn push_if(errors: &mut Vec<String>, failed: bool, message: impl Into<String>) {
    if failed {
        errors.push(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joined_messages() {
        let result = ValidationResult::new(
            false,
            vec!["First".to_string(), "Second".to_string()],
        );
        assert_eq!(result.joined(), "First. Second");
        assert_eq!(ValidationResult::valid().joined(), "");
    }
}
