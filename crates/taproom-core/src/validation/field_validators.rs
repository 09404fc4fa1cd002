//! Field-specific validation logic
//!
//! Email format, password confirmation and required-field checks. Each
//! function is pure: it takes the current value(s) and returns a verdict.
//!
//! Copyright (c) 2025 Taproom Team
//! Licensed under the Apache-2.0 license

use super::types::ValidationVerdict;
use regex::Regex;
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

pub const EMAIL_INVALID_MESSAGE: &str = "Please enter a valid email address";
pub const EMAIL_VALID_MESSAGE: &str = "Valid email address";
pub const PASSWORDS_DIFFER_MESSAGE: &str = "Passwords do not match";
pub const PASSWORDS_MATCH_MESSAGE: &str = "Passwords match";
pub const REQUIRED_MESSAGE: &str = "This field is required";

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Syntactic sanity check: `local@domain.tld` with no whitespace or extra `@`
pub fn is_plausible_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Verdict rendered on an email field after a blur event
pub fn validate_email(value: &str) -> ValidationVerdict {
    if value.is_empty() {
        return ValidationVerdict::neutral();
    }

    if is_plausible_email(value) {
        ValidationVerdict::valid(EMAIL_VALID_MESSAGE)
    } else {
        ValidationVerdict::invalid(EMAIL_INVALID_MESSAGE)
    }
}

/// Verdict rendered on the confirmation field after an input event
///
/// `primary` is a snapshot of the primary password's value, or `None` when the
/// form has no primary password field.
pub fn validate_password_confirmation(confirmation: &str, primary: Option<&str>) -> ValidationVerdict {
    if confirmation.is_empty() {
        return ValidationVerdict::neutral();
    }

    match primary {
        Some(password) if password == confirmation => ValidationVerdict::valid(PASSWORDS_MATCH_MESSAGE),
        _ => ValidationVerdict::invalid(PASSWORDS_DIFFER_MESSAGE),
    }
}

/// Whether a required field holds something other than whitespace
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Verdict of the required check; a filled field has nothing to show
pub fn validate_required(value: &str) -> ValidationVerdict {
    if is_filled(value) {
        ValidationVerdict::neutral()
    } else {
        ValidationVerdict::invalid(REQUIRED_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::VerdictLevel;

    #[test]
    fn test_email_examples() {
        assert_eq!(validate_email("a@b.co").level, VerdictLevel::Valid);
        assert_eq!(validate_email("not-an-email").level, VerdictLevel::Invalid);
        assert_eq!(validate_email("").level, VerdictLevel::Neutral);
    }

    #[test]
    fn test_email_edge_cases() {
        assert!(is_plausible_email("brewer@taproom.co.uk"));
        assert!(!is_plausible_email("brew er@taproom.co"));
        assert!(!is_plausible_email("brewer@@taproom.co"));
        assert!(!is_plausible_email("brewer@taproom"));
        assert!(!is_plausible_email("@taproom.co"));
        assert!(!is_plausible_email("brewer@.co"));
        assert!(!is_plausible_email("brewer@taproom."));
        assert!(!is_plausible_email(" brewer@taproom.co"));
    }

    #[test]
    fn test_email_messages() {
        assert_eq!(validate_email("a@b.co").message, EMAIL_VALID_MESSAGE);
        assert_eq!(validate_email("nope").message, EMAIL_INVALID_MESSAGE);
    }

    #[test]
    fn test_confirmation() {
        let verdict = validate_password_confirmation("Pale!Ale42", Some("Pale!Ale42"));
        assert_eq!(verdict.level, VerdictLevel::Valid);
        assert_eq!(verdict.message, PASSWORDS_MATCH_MESSAGE);

        let verdict = validate_password_confirmation("Pale!Ale43", Some("Pale!Ale42"));
        assert_eq!(verdict.level, VerdictLevel::Invalid);
        assert_eq!(verdict.message, PASSWORDS_DIFFER_MESSAGE);

        assert_eq!(
            validate_password_confirmation("", Some("Pale!Ale42")).level,
            VerdictLevel::Neutral
        );
    }

    #[test]
    fn test_confirmation_without_primary_field() {
        let verdict = validate_password_confirmation("anything", None);
        assert_eq!(verdict.level, VerdictLevel::Invalid);
        assert_eq!(verdict.message, PASSWORDS_DIFFER_MESSAGE);
    }

    #[test]
    fn test_required() {
        assert!(!is_filled("   \t\n"));
        assert!(is_filled(" x "));
        assert_eq!(validate_required("  ").message, REQUIRED_MESSAGE);
        assert_eq!(validate_required("porter").level, VerdictLevel::Neutral);
    }
}
