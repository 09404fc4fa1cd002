//! Form field validation
//!
//! Live validation for the site's account forms: password strength,
//! email format and password confirmation while the user types, and a
//! required-field check that gates submission.
//!
//! The validator is organized into focused modules:
//! - `types`: verdicts, strength results, annotations and field states
//! - `password`: password strength scorer
//! - `field_validators`: email, confirmation and required checks
//! - `feedback`: the per-field annotation board
//! - `binding`: registration of checks against field events
//! - `core`: FormValidator, event dispatch and submission gating
//! - `tests`: end-to-end scenarios across the modules
//!
//! Copyright (c) 2025 Taproom Team
//! Licensed under the Apache-2.0 license

pub mod types;
pub mod password;
pub mod field_validators;
pub mod feedback;
pub mod binding;
pub mod core;

// Re-export public API
pub use types::{
    CheckCategory, FeedbackAnnotation, FieldState, PasswordStrengthResult, StrengthLevel,
    Trigger, ValidationVerdict, VerdictLevel,
};
pub use password::{calculate_password_strength, validate_password_strength, PasswordRule};
pub use field_validators::{validate_email, validate_password_confirmation, validate_required};
pub use feedback::FeedbackBoard;
pub use binding::{Binding, Check, FieldEvent, FormBinding};
pub use core::{DispatchOutcome, FormValidator, SubmissionOutcome};
