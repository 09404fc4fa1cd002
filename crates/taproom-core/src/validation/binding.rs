//! Event bindings between form fields and checks
//!
//! A [`FormBinding`] is the explicit registration table the page host builds
//! once per form: which check runs for which field on which trigger. The
//! confirmation check carries the name of its primary password field, so no
//! lookup by selector happens at event time.
//!
//! Copyright (c) 2025 Taproom Team
//! Licensed under the Apache-2.0 license

use super::types::{CheckCategory, Trigger};
use crate::types::{FieldKind, Form};
use serde::{Deserialize, Serialize};

/// Field names that receive live strength scoring
pub const PRIMARY_PASSWORD_NAMES: [&str; 2] = ["password1", "password"];

/// Field name of the confirmation input
pub const CONFIRMATION_FIELD_NAME: &str = "password2";

/// A per-field check that can be bound to an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Check {
    PasswordStrength,
    EmailFormat,
    /// Compare against the named primary field; `None` when the form has none
    PasswordConfirmation { primary: Option<String> },
}

impl Check {
    pub fn category(&self) -> CheckCategory {
        match self {
            Check::PasswordStrength => CheckCategory::PasswordStrength,
            Check::EmailFormat => CheckCategory::EmailFormat,
            Check::PasswordConfirmation { .. } => CheckCategory::PasswordConfirmation,
        }
    }
}

/// One registered (field, trigger, check) triple
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub field: String,
    pub trigger: Trigger,
    pub check: Check,
}

/// An event fired by a form or one of its inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum FieldEvent {
    Input { field: String, value: String },
    Blur { field: String, value: String },
    Submit,
}

impl FieldEvent {
    pub fn input(field: impl Into<String>, value: impl Into<String>) -> Self {
        FieldEvent::Input {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn blur(field: impl Into<String>, value: impl Into<String>) -> Self {
        FieldEvent::Blur {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn trigger(&self) -> Trigger {
        match self {
            FieldEvent::Input { .. } => Trigger::Input,
            FieldEvent::Blur { .. } => Trigger::Blur,
            FieldEvent::Submit => Trigger::Submit,
        }
    }
}

/// Registration table of field checks for one form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormBinding {
    bindings: Vec<Binding>,
}

impl FormBinding {
    /// Create an empty binding table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a check for a field and trigger
    pub fn register(&mut self, field: impl Into<String>, trigger: Trigger, check: Check) -> &mut Self {
        self.bindings.push(Binding {
            field: field.into(),
            trigger,
            check,
        });
        self
    }

    /// Standard wiring for a rendered form
    ///
    /// - password inputs named `password1` or `password`: strength on input
    /// - email inputs: format on blur
    /// - the `password2` input: confirmation on input, against `password1`
    ///   if present, else `password`
    pub fn for_form(form: &Form) -> Self {
        let mut binding = Self::new();
        let primary = PRIMARY_PASSWORD_NAMES
            .iter()
            .find(|name| form.field(name).is_some())
            .map(|name| name.to_string());

        for field in &form.fields {
            if field.kind == FieldKind::Password && PRIMARY_PASSWORD_NAMES.contains(&field.name.as_str()) {
                binding.register(&field.name, Trigger::Input, Check::PasswordStrength);
            }
            if field.kind == FieldKind::Email {
                binding.register(&field.name, Trigger::Blur, Check::EmailFormat);
            }
        }

        if form.field(CONFIRMATION_FIELD_NAME).is_some() {
            binding.register(
                CONFIRMATION_FIELD_NAME,
                Trigger::Input,
                Check::PasswordConfirmation { primary },
            );
        }

        binding
    }

    /// Checks bound to a field for a trigger, in registration order
    pub fn checks_for<'a>(&'a self, field: &'a str, trigger: Trigger) -> impl Iterator<Item = &'a Check> + 'a {
        self.bindings
            .iter()
            .filter(move |b| b.field == field && b.trigger == trigger)
            .map(|b| &b.check)
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
