//! Password strength scoring
//!
//! Five independent criteria are counted into a score of 0-5, then folded
//! into three visual levels:
//!
//! | score | level  | bar  |
//! |-------|--------|------|
//! | empty | none   | 0%   |
//! | 0-2   | weak   | 33%  |
//! | 3     | medium | 66%  |
//! | 4-5   | strong | 100% |
//!
//! Unlike [`crate::validate_password`], a special character counts here.

use serde::{Deserialize, Serialize};

use crate::password::{has_digit, has_lowercase, has_uppercase, long_enough};

/// Characters counted by the `special` criterion.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";

/// The five strength criteria, each checked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Criteria {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub special: bool,
}

impl Criteria {
    pub fn check(password: &str) -> Self {
        Self {
            length: long_enough(password),
            lowercase: has_lowercase(password),
            uppercase: has_uppercase(password),
            numbers: has_digit(password),
            special: password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }

    fn flags(&self) -> [(Criterion, bool); 5] {
        [
            (Criterion::Length, self.length),
            (Criterion::Lowercase, self.lowercase),
            (Criterion::Uppercase, self.uppercase),
            (Criterion::Numbers, self.numbers),
            (Criterion::Special, self.special),
        ]
    }

    /// Number of satisfied criteria.
    pub fn score(&self) -> u8 {
        self.flags().iter().filter(|(_, met)| *met).count() as u8
    }

    /// Criteria still to satisfy, in evaluation order.
    pub fn unmet(&self) -> Vec<Criterion> {
        self.flags()
            .into_iter()
            .filter(|(_, met)| !met)
            .map(|(criterion, _)| criterion)
            .collect()
    }
}

/// A single strength criterion, used to describe what is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Length,
    Lowercase,
    Uppercase,
    Numbers,
    Special,
}

impl Criterion {
    pub fn describe(&self) -> &'static str {
        match self {
            Criterion::Length => "at least 8 characters",
            Criterion::Lowercase => "a lowercase letter",
            Criterion::Uppercase => "an uppercase letter",
            Criterion::Numbers => "a number",
            Criterion::Special => "a special character",
        }
    }
}

/// Coarse classification shown by the strength meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthLevel {
    /// Nothing typed yet
    None,
    Weak,
    Medium,
    Strong,
}

impl StrengthLevel {
    /// Map a criteria score to a level. The empty-input case is handled by
    /// [`evaluate`], so a score of 0 here is still `Weak`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => StrengthLevel::Weak,
            3 => StrengthLevel::Medium,
            _ => StrengthLevel::Strong,
        }
    }

    /// Width of the fill bar, in percent.
    pub fn fill_percent(&self) -> u8 {
        match self {
            StrengthLevel::None => 0,
            StrengthLevel::Weak => 33,
            StrengthLevel::Medium => 66,
            StrengthLevel::Strong => 100,
        }
    }

    /// CSS class carried by the fill bar, if any.
    pub fn as_class(&self) -> Option<&'static str> {
        match self {
            StrengthLevel::None => None,
            StrengthLevel::Weak => Some("weak"),
            StrengthLevel::Medium => Some("medium"),
            StrengthLevel::Strong => Some("strong"),
        }
    }
}

/// Result of scoring a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrength {
    pub score: u8,
    pub level: StrengthLevel,
    pub criteria: Criteria,
}

impl PasswordStrength {
    /// Neutral state shown before anything is typed.
    pub fn empty() -> Self {
        Self {
            score: 0,
            level: StrengthLevel::None,
            criteria: Criteria::default(),
        }
    }

    /// Human-readable feedback line for the meter.
    pub fn feedback(&self) -> String {
        match self.level {
            StrengthLevel::None => "Enter password to see strength".to_string(),
            StrengthLevel::Weak => format!(
                "Weak password. Add {} more requirements.",
                3u8.saturating_sub(self.score)
            ),
            StrengthLevel::Medium => format!(
                "Medium strength. Add {} more for strong password.",
                5u8.saturating_sub(self.score)
            ),
            StrengthLevel::Strong => "Strong password! Great job.".to_string(),
        }
    }

    pub fn unmet(&self) -> Vec<Criterion> {
        if self.level == StrengthLevel::None {
            return Vec::new();
        }
        self.criteria.unmet()
    }
}

/// Score a password against the five criteria.
pub fn evaluate(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::empty();
    }

    let criteria = Criteria::check(password);
    let score = criteria.score();

    PasswordStrength {
        score,
        level: StrengthLevel::from_score(score),
        criteria,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_empty_is_neutral() {
        let strength = evaluate("");
        assert_eq!(strength.score, 0);
        assert_eq!(strength.level, StrengthLevel::None);
        assert_eq!(strength.level.fill_percent(), 0);
        assert_eq!(strength.feedback(), "Enter password to see strength");
        assert!(strength.unmet().is_empty());
    }

    #[test]
    fn test_all_criteria() {
        let strength = evaluate("TestPass123!");
        assert_eq!(strength.score, 5);
        assert_eq!(strength.level, StrengthLevel::Strong);
        assert_eq!(
            strength.criteria,
            Criteria {
                length: true,
                lowercase: true,
                uppercase: true,
                numbers: true,
                special: true,
            }
        );
        assert_eq!(strength.feedback(), "Strong password! Great job.");
    }

    #[rstest]
    #[case("a", 1, StrengthLevel::Weak)]
    #[case("aB", 2, StrengthLevel::Weak)]
    #[case("aB1", 3, StrengthLevel::Medium)]
    #[case("aB1!", 4, StrengthLevel::Strong)]
    #[case("abcdefgh", 2, StrengthLevel::Weak)]
    #[case("abcdefgH", 3, StrengthLevel::Medium)]
    #[case("abcdefH1", 4, StrengthLevel::Strong)]
    fn test_level_boundaries(
        #[case] password: &str,
        #[case] score: u8,
        #[case] level: StrengthLevel,
    ) {
        let strength = evaluate(password);
        assert_eq!(strength.score, score);
        assert_eq!(strength.level, level);
    }

    #[test]
    fn test_score_without_letters() {
        // Only the special criterion is met
        let strength = evaluate("!!");
        assert_eq!(strength.score, 1);
        assert_eq!(strength.level, StrengthLevel::Weak);
    }

    #[test]
    fn test_feedback_counts_remaining() {
        assert_eq!(evaluate("a").feedback(), "Weak password. Add 2 more requirements.");
        assert_eq!(evaluate("aB").feedback(), "Weak password. Add 1 more requirements.");
        assert_eq!(
            evaluate("aB1").feedback(),
            "Medium strength. Add 2 more for strong password."
        );
    }

    #[test]
    fn test_fill_percent() {
        assert_eq!(StrengthLevel::Weak.fill_percent(), 33);
        assert_eq!(StrengthLevel::Medium.fill_percent(), 66);
        assert_eq!(StrengthLevel::Strong.fill_percent(), 100);
    }

    #[test]
    fn test_unmet_in_order() {
        assert_eq!(
            evaluate("abc").unmet(),
            vec![Criterion::Length, Criterion::Uppercase, Criterion::Numbers, Criterion::Special]
        );
    }
}
