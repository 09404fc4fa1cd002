//! Recorded form sessions
//!
//! A [`Scenario`] is a form document plus the events a user produced on it.
//! Replaying it yields the annotations on every field and the submission
//! decision, which is how the CLI and the integration tests exercise the
//! validator without a browser.

use crate::types::Form;
use crate::validation::{FeedbackAnnotation, FieldEvent, FieldState, FormValidator, SubmissionOutcome};
use crate::validation::core::DispatchOutcome;
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub form: Form,

    /// Events in the order they happened; a trailing submit is implied
    #[serde(default)]
    pub events: Vec<FieldEvent>,
}

/// Final state of one field after a replay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldReport {
    pub name: String,
    pub state: FieldState,
    /// Visible annotations only
    pub annotations: Vec<FeedbackAnnotation>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub fields: Vec<FieldReport>,
    /// Outcome of the last submit in the replay
    pub submission: SubmissionOutcome,
}

impl ScenarioReport {
    pub fn is_blocked(&self) -> bool {
        self.submission.is_blocked()
    }
}

impl Scenario {
    pub fn new(form: Form, events: Vec<FieldEvent>) -> Self {
        Self { form, events }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replay the events against a fresh validator
    ///
    /// Without an explicit submit event the form is submitted once at the
    /// end. Events after the last submit still update the reported states.
    pub fn run(self) -> Result<ScenarioReport> {
        let mut validator = FormValidator::new(self.form);
        let mut submission = None;

        for event in self.events {
            if let DispatchOutcome::Submitted(outcome) = validator.dispatch(event)? {
                submission = Some(outcome);
            }
        }

        let submission = match submission {
            Some(outcome) => outcome,
            None => validator.submit(),
        };
        debug!(allowed = submission.allowed, "Replayed scenario");

        let fields = validator
            .form()
            .fields
            .iter()
            .map(|field| FieldReport {
                name: field.name.clone(),
                state: validator.field_state(&field.name),
                annotations: validator
                    .board()
                    .annotations_for(&field.name)
                    .filter(|a| a.visible)
                    .cloned()
                    .collect(),
            })
            .collect();

        Ok(ScenarioReport { fields, submission })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_implicit_submit() {
        let scenario: Scenario = serde_json::from_value(json!({
            "form": {
                "fields": [{"name": "email", "kind": "email", "required": true}]
            }
        }))
        .unwrap();

        let report = scenario.run().unwrap();
        assert!(report.is_blocked());
        assert_eq!(report.submission.missing_required, vec!["email".to_string()]);
        assert_eq!(report.fields[0].state, FieldState::Invalid);
        assert_eq!(report.fields[0].annotations[0].message, "This field is required");
    }

    #[test]
    fn test_events_after_submit_update_states() {
        let scenario: Scenario = serde_json::from_value(json!({
            "form": {"fields": [{"name": "email", "kind": "email"}]},
            "events": [
                {"event": "blur", "field": "email", "value": "nope"},
                {"event": "submit"},
                {"event": "blur", "field": "email", "value": "ok@example.com"}
            ]
        }))
        .unwrap();

        let report = scenario.run().unwrap();
        assert_eq!(report.submission.invalid_fields, vec!["email".to_string()]);
        assert_eq!(report.fields[0].state, FieldState::Valid);
    }

    #[test]
    fn test_unknown_field_fails_replay() {
        let scenario = Scenario::new(Form::default(), vec![FieldEvent::input("ghost", "boo")]);
        assert!(scenario.run().is_err());
    }
}
