//! Core validation types and enums
//!
//! Verdicts, strength results and feedback annotations shared by every
//! checker and by the feedback board.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome level of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerdictLevel {
    /// The value satisfies the rule
    Valid,
    /// The value violates the rule
    Invalid,
    /// Nothing to judge yet (the value is empty)
    Neutral,
}

/// Result of running one check against one value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationVerdict {
    /// True only for [`VerdictLevel::Valid`]
    pub is_valid: bool,
    pub message: String,
    pub level: VerdictLevel,
}

impl ValidationVerdict {
    pub fn valid(message: impl Into<String>) -> Self {
        Self {
            is_valid: true,
            message: message.into(),
            level: VerdictLevel::Valid,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            message: message.into(),
            level: VerdictLevel::Invalid,
        }
    }

    /// Verdict for an emptied field: no annotation is shown
    pub fn neutral() -> Self {
        Self {
            is_valid: false,
            message: String::new(),
            level: VerdictLevel::Neutral,
        }
    }

    pub fn is_invalid(&self) -> bool {
        self.level == VerdictLevel::Invalid
    }
}

/// Display level of a password strength score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
}

impl StrengthLevel {
    const ORDERED: [StrengthLevel; 5] = [
        StrengthLevel::VeryWeak,
        StrengthLevel::Weak,
        StrengthLevel::Fair,
        StrengthLevel::Good,
        StrengthLevel::Strong,
    ];

    /// Map a score to its level; scores above 4 clamp to `Strong`
    pub fn from_score(score: u8) -> Self {
        Self::ORDERED[usize::from(score).min(Self::ORDERED.len() - 1)]
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Score, level and unmet requirements of a password
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordStrengthResult {
    /// Number of satisfied rules, 0 to 5
    pub score: u8,
    pub level: StrengthLevel,
    /// Unmet requirement names, in rule order
    pub missing: Vec<String>,
    pub message: String,
}

impl PasswordStrengthResult {
    /// Scores below this threshold mark the field invalid
    pub const ACCEPTABLE_SCORE: u8 = 3;

    pub fn is_acceptable(&self) -> bool {
        self.score >= Self::ACCEPTABLE_SCORE
    }
}

/// The check an annotation belongs to; a field holds at most one annotation per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CheckCategory {
    PasswordStrength,
    EmailFormat,
    PasswordConfirmation,
    Required,
}

impl CheckCategory {
    /// Marker class identifying the feedback element of this category
    pub fn class_name(&self) -> &'static str {
        match self {
            CheckCategory::PasswordStrength => "password-strength",
            CheckCategory::EmailFormat => "email-validation",
            CheckCategory::PasswordConfirmation => "password-confirmation",
            CheckCategory::Required => "required-validation",
        }
    }
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.class_name())
    }
}

/// UI event that can trigger a check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    Input,
    Blur,
    Submit,
}

/// Visual validation state of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldState {
    /// No check has ever run
    Unvalidated,
    Valid,
    Invalid,
    /// Checks ran but every annotation is hidden
    Neutral,
}

impl FieldState {
    /// Class applied to the input element, if any
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            FieldState::Valid => Some("is-valid"),
            FieldState::Invalid => Some("is-invalid"),
            FieldState::Unvalidated | FieldState::Neutral => None,
        }
    }
}

/// Feedback element attached to a field for one check category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackAnnotation {
    pub field: String,
    pub category: CheckCategory,
    pub message: String,
    pub level: VerdictLevel,
    pub visible: bool,
}

impl FeedbackAnnotation {
    pub fn from_verdict(
        field: impl Into<String>,
        category: CheckCategory,
        verdict: &ValidationVerdict,
    ) -> Self {
        Self {
            field: field.into(),
            category,
            message: verdict.message.clone(),
            level: verdict.level,
            visible: verdict.level != VerdictLevel::Neutral,
        }
    }

    /// Full class list of the feedback element, e.g. `valid-feedback email-validation`
    pub fn class_list(&self) -> String {
        let style = match self.level {
            VerdictLevel::Valid => "valid-feedback",
            VerdictLevel::Invalid | VerdictLevel::Neutral => "invalid-feedback",
        };
        format!("{} {}", style, self.category.class_name())
    }

    pub fn is_visible_invalid(&self) -> bool {
        self.visible && self.level == VerdictLevel::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_level_clamps() {
        assert_eq!(StrengthLevel::from_score(0), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(3), StrengthLevel::Good);
        assert_eq!(StrengthLevel::from_score(4), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(5), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::VeryWeak.to_string(), "Very Weak");
    }

    #[test]
    fn test_annotation_classes() {
        let valid = FeedbackAnnotation::from_verdict(
            "email",
            CheckCategory::EmailFormat,
            &ValidationVerdict::valid("Valid email address"),
        );
        assert_eq!(valid.class_list(), "valid-feedback email-validation");
        assert!(valid.visible);

        let neutral = FeedbackAnnotation::from_verdict(
            "email",
            CheckCategory::EmailFormat,
            &ValidationVerdict::neutral(),
        );
        assert!(!neutral.visible);
        assert!(!neutral.is_visible_invalid());
    }

    #[test]
    fn test_field_state_classes() {
        assert_eq!(FieldState::Invalid.css_class(), Some("is-invalid"));
        assert_eq!(FieldState::Neutral.css_class(), None);
    }
}
