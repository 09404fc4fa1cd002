//! Password strength scoring
//!
//! Copyright (c) 2025 Taproom Team
//! Licensed under the Apache-2.0 license

use super::types::{PasswordStrengthResult, StrengthLevel, ValidationVerdict};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Minimum length for the length rule
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Characters accepted by the special-character rule
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

/// One of the five rules a password is scored against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    SpecialCharacter,
}

impl PasswordRule {
    /// All rules, in the order their requirements are reported
    pub const ALL: [PasswordRule; 5] = [
        PasswordRule::MinLength,
        PasswordRule::Uppercase,
        PasswordRule::Lowercase,
        PasswordRule::Digit,
        PasswordRule::SpecialCharacter,
    ];

    /// Requirement text shown when the rule is not met
    pub fn requirement(&self) -> &'static str {
        match self {
            PasswordRule::MinLength => "at least 8 characters",
            PasswordRule::Uppercase => "uppercase letter",
            PasswordRule::Lowercase => "lowercase letter",
            PasswordRule::Digit => "number",
            PasswordRule::SpecialCharacter => "special character",
        }
    }

    pub fn is_satisfied_by(&self, password: &str) -> bool {
        match self {
            // Length counts characters, not bytes
            PasswordRule::MinLength => password.chars().count() >= MIN_PASSWORD_LENGTH,
            PasswordRule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PasswordRule::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            PasswordRule::Digit => password.chars().any(|c| c.is_ascii_digit()),
            PasswordRule::SpecialCharacter => password.chars().any(|c| SPECIAL_CHARACTERS.contains(c)),
        }
    }
}

/// Score a password against the five strength rules
pub fn calculate_password_strength(password: &str) -> PasswordStrengthResult {
    let mut score = 0u8;
    let mut missing = Vec::new();

    for rule in PasswordRule::ALL {
        if rule.is_satisfied_by(password) {
            score += 1;
        } else {
            missing.push(rule.requirement().to_string());
        }
    }

    let level = StrengthLevel::from_score(score);
    let message = if score < PasswordStrengthResult::ACCEPTABLE_SCORE {
        format!("Password needs: {}", missing.join(", "))
    } else {
        "Strong password".to_string()
    };

    PasswordStrengthResult {
        score,
        level,
        missing,
        message,
    }
}

/// Verdict rendered on a password field after an input event
///
/// Empty input is neutral. Otherwise the field is invalid below a score of 3,
/// with the list of unmet requirements as its message.
pub fn validate_password_strength(password: &str) -> ValidationVerdict {
    if password.is_empty() {
        return ValidationVerdict::neutral();
    }

    let strength = calculate_password_strength(password);
    debug!(score = strength.score, level = %strength.level, "Scored password");

    if strength.is_acceptable() {
        ValidationVerdict::valid(format!("Password strength: {}", strength.level))
    } else {
        ValidationVerdict::invalid(strength.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::VerdictLevel;

    #[test]
    fn test_empty_password_scores_zero() {
        let result = calculate_password_strength("");
        assert_eq!(result.score, 0);
        assert_eq!(result.level, StrengthLevel::VeryWeak);
        assert_eq!(
            result.message,
            "Password needs: at least 8 characters, uppercase letter, lowercase letter, number, special character"
        );
    }

    #[test]
    fn test_all_rules_met() {
        let result = calculate_password_strength("Pale!Ale42");
        assert_eq!(result.score, 5);
        assert_eq!(result.level, StrengthLevel::Strong);
        assert!(result.missing.is_empty());
        assert_eq!(result.message, "Strong password");
    }

    #[test]
    fn test_three_rules_is_good() {
        // length, lowercase, digit
        let result = calculate_password_strength("stout1234");
        assert_eq!(result.score, 3);
        assert_eq!(result.level, StrengthLevel::Good);
        assert_eq!(result.message, "Strong password");
        assert_eq!(result.missing, vec!["uppercase letter", "special character"]);
    }

    #[test]
    fn test_two_rules_lists_missing() {
        let result = calculate_password_strength("ipa");
        assert_eq!(result.score, 1);
        assert_eq!(result.level, StrengthLevel::Weak);

        let result = calculate_password_strength("Ipa");
        assert_eq!(result.score, 2);
        assert_eq!(result.level, StrengthLevel::Fair);
        assert_eq!(
            result.message,
            "Password needs: at least 8 characters, number, special character"
        );
    }

    #[test]
    fn test_non_ascii_letters_do_not_count() {
        let result = calculate_password_strength("ÄÖÜäöüßé");
        assert_eq!(result.score, 1); // only length
    }

    #[test]
    fn test_length_counts_characters() {
        assert!(PasswordRule::MinLength.is_satisfied_by("ßßßßßßßß"));
        assert!(!PasswordRule::MinLength.is_satisfied_by("ßßßß"));
    }

    #[test]
    fn test_every_special_character_counts() {
        for c in SPECIAL_CHARACTERS.chars() {
            assert!(
                PasswordRule::SpecialCharacter.is_satisfied_by(&c.to_string()),
                "{c} should count as special"
            );
        }
        assert!(!PasswordRule::SpecialCharacter.is_satisfied_by("-_+=~"));
    }

    #[test]
    fn test_verdicts() {
        assert_eq!(validate_password_strength("").level, VerdictLevel::Neutral);

        let weak = validate_password_strength("lager");
        assert_eq!(weak.level, VerdictLevel::Invalid);
        assert!(weak.message.starts_with("Password needs: "));

        let good = validate_password_strength("stout1234");
        assert_eq!(good.level, VerdictLevel::Valid);
        assert_eq!(good.message, "Password strength: Good");

        let strong = validate_password_strength("Pale!Ale42");
        assert_eq!(strong.message, "Password strength: Strong");
    }
}
