//! Form validation session bound to one rendered form

use crate::to_js;
use taproom_core::{
    DispatchOutcome, FeedbackAnnotation, FieldEvent, FieldState, Form, FormValidator,
    SubmissionOutcome,
};
use wasm_bindgen::prelude::*;

/// Validator for one form on the page
///
/// Built from `{ id?, fields: [{ name, kind, value, required }] }`. Every
/// event method returns the annotations it rendered so the caller can
/// update the matching feedback elements.
#[wasm_bindgen]
pub struct FormSession {
    validator: FormValidator,
}

#[wasm_bindgen]
impl FormSession {
    #[wasm_bindgen(constructor)]
    pub fn new(form: JsValue) -> Result<FormSession, JsError> {
        let form: Form = serde_wasm_bindgen::from_value(form)?;
        Ok(Self::from_form(form))
    }

    /// Field received an `input` event
    pub fn input(&mut self, field: &str, value: &str) -> Result<JsValue, JsError> {
        let outcome = self.dispatch(FieldEvent::input(field, value))?;
        to_js(&outcome)
    }

    /// Field lost focus
    pub fn blur(&mut self, field: &str, value: &str) -> Result<JsValue, JsError> {
        let outcome = self.dispatch(FieldEvent::blur(field, value))?;
        to_js(&outcome)
    }

    /// Form submit; the caller calls `preventDefault` when `allowed` is false
    pub fn submit(&mut self) -> Result<JsValue, JsError> {
        to_js(&self.submit_outcome())
    }

    /// `is-valid`, `is-invalid` or undefined for the field's input element
    #[wasm_bindgen(js_name = fieldClass)]
    pub fn field_class(&self, field: &str) -> Option<String> {
        self.state(field).css_class().map(str::to_owned)
    }

    /// Whether the form carries `was-validated`
    #[wasm_bindgen(js_name = wasValidated)]
    pub fn was_validated(&self) -> bool {
        self.validator.was_validated()
    }

    /// Every annotation currently rendered for the field
    pub fn annotations(&self, field: &str) -> Result<JsValue, JsError> {
        to_js(&self.annotations_for(field))
    }
}

impl FormSession {
    pub fn from_form(form: Form) -> Self {
        Self {
            validator: FormValidator::new(form),
        }
    }

    fn dispatch(&mut self, event: FieldEvent) -> taproom_core::Result<DispatchOutcome> {
        self.validator.dispatch(event)
    }

    fn submit_outcome(&mut self) -> SubmissionOutcome {
        self.validator.submit()
    }

    fn state(&self, field: &str) -> FieldState {
        self.validator.field_state(field)
    }

    fn annotations_for(&self, field: &str) -> Vec<FeedbackAnnotation> {
        self.validator
            .board()
            .annotations_for(field)
            .cloned()
            .collect()
    }
}
