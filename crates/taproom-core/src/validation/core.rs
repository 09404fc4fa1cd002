//! Core validation engine and FormValidator implementation
//!
//! The FormValidator owns one form's field values, its binding table and its
//! feedback board. Events are dispatched into it synchronously; each bound
//! check runs to completion and overwrites its annotation before `dispatch`
//! returns.
//!
//! Copyright (c) 2025 Taproom Team
//! Licensed under the Apache-2.0 license

use super::binding::{Check, FieldEvent, FormBinding};
use super::feedback::FeedbackBoard;
use super::field_validators::{validate_email, validate_password_confirmation, validate_required, is_filled};
use super::password::validate_password_strength;
use super::types::{CheckCategory, FeedbackAnnotation, FieldState, ValidationVerdict};
use crate::types::Form;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Aggregate decision taken when the form is submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    /// Whether submission may proceed
    pub allowed: bool,
    /// The form is marked validated on every submit attempt
    pub was_validated: bool,
    /// Required fields left blank
    pub missing_required: Vec<String>,
    /// Fields currently holding an invalid strength, email or confirmation verdict
    pub invalid_fields: Vec<String>,
}

impl SubmissionOutcome {
    pub fn is_blocked(&self) -> bool {
        !self.allowed
    }
}

/// Result of dispatching one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// Annotations rendered by the checks bound to the event
    Rendered { annotations: Vec<FeedbackAnnotation> },
    /// The form was submitted
    Submitted(SubmissionOutcome),
}

/// Validator for a single rendered form
#[derive(Debug, Clone)]
pub struct FormValidator {
    form: Form,
    binding: FormBinding,
    board: FeedbackBoard,
    was_validated: bool,
}

impl FormValidator {
    /// Create a validator with the standard wiring for this form
    pub fn new(form: Form) -> Self {
        let binding = FormBinding::for_form(&form);
        Self::with_binding(form, binding)
    }

    /// Create a validator with an explicit binding table
    pub fn with_binding(form: Form, binding: FormBinding) -> Self {
        debug!(
            form = form.id.as_deref().unwrap_or("<anonymous>"),
            bindings = binding.bindings().len(),
            "Bound form validator"
        );
        Self {
            form,
            binding,
            board: FeedbackBoard::new(),
            was_validated: false,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn binding(&self) -> &FormBinding {
        &self.binding
    }

    pub fn board(&self) -> &FeedbackBoard {
        &self.board
    }

    /// Whether the form has been submitted at least once
    pub fn was_validated(&self) -> bool {
        self.was_validated
    }

    pub fn field_state(&self, field: &str) -> FieldState {
        self.board.field_state(field)
    }

    pub fn annotation(&self, field: &str, category: CheckCategory) -> Option<&FeedbackAnnotation> {
        self.board.annotation(field, category)
    }

    /// Update a field's value without running any check
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) -> Result<()> {
        let target = self
            .form
            .field_mut(field)
            .ok_or_else(|| Error::unknown_field(field))?;
        target.value = value.into();
        Ok(())
    }

    /// Dispatch an event: store the new value, then run every bound check
    pub fn dispatch(&mut self, event: FieldEvent) -> Result<DispatchOutcome> {
        let trigger = event.trigger();
        let (field, value) = match event {
            FieldEvent::Input { field, value } | FieldEvent::Blur { field, value } => (field, value),
            FieldEvent::Submit => return Ok(DispatchOutcome::Submitted(self.submit())),
        };

        self.set_value(&field, value)?;

        let checks: Vec<Check> = self.binding.checks_for(&field, trigger).cloned().collect();
        let mut annotations = Vec::with_capacity(checks.len());
        for check in checks {
            let verdict = self.run_check(&field, &check);
            debug!(
                field = %field,
                check = %check.category(),
                level = ?verdict.level,
                "Rendered verdict"
            );
            annotations.push(self.board.render(&field, check.category(), &verdict).clone());
        }

        Ok(DispatchOutcome::Rendered { annotations })
    }

    /// Run one check against the current form state
    fn run_check(&self, field: &str, check: &Check) -> ValidationVerdict {
        let value = self.form.value_of(field).unwrap_or_default();
        match check {
            Check::PasswordStrength => validate_password_strength(value),
            Check::EmailFormat => validate_email(value),
            Check::PasswordConfirmation { primary } => {
                // Snapshot of the primary value at the time the matcher runs
                let primary_value = primary.as_deref().and_then(|name| self.form.value_of(name));
                validate_password_confirmation(value, primary_value)
            }
        }
    }

    /// Submit the form
    ///
    /// Blank required fields get a "This field is required" annotation and
    /// required fields that are filled have theirs cleared. Submission is
    /// blocked by a blank required field and, independently, by any field
    /// still showing an invalid strength, email or confirmation verdict.
    pub fn submit(&mut self) -> SubmissionOutcome {
        let mut missing_required = Vec::new();

        let required: Vec<(String, String)> = self
            .form
            .required_fields()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect();

        for (name, value) in required {
            if is_filled(&value) {
                self.board.clear(&name, CheckCategory::Required);
            } else {
                self.board.render(&name, CheckCategory::Required, &validate_required(&value));
                missing_required.push(name);
            }
        }

        let invalid_fields: Vec<String> = self
            .board
            .invalid_fields_except(CheckCategory::Required)
            .into_iter()
            .filter(|name| self.form.field(name).is_some())
            .collect();

        self.was_validated = true;
        let allowed = missing_required.is_empty() && invalid_fields.is_empty();

        info!(
            form = self.form.id.as_deref().unwrap_or("<anonymous>"),
            allowed,
            missing = missing_required.len(),
            invalid = invalid_fields.len(),
            "Form submitted"
        );

        SubmissionOutcome {
            allowed,
            was_validated: true,
            missing_required,
            invalid_fields,
        }
    }
}
