//! Feedback annotations attached to fields
//!
//! The board holds at most one annotation per (field, category). Rendering a
//! verdict overwrites the previous annotation of that category; nothing is
//! accumulated. A field's visual state is derived from its visible
//! annotations, so two checks disagreeing on one field resolve to invalid.
//!
//! Copyright (c) 2025 Taproom Team
//! Licensed under the Apache-2.0 license

use super::types::{CheckCategory, FeedbackAnnotation, FieldState, ValidationVerdict, VerdictLevel};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct FeedbackBoard {
    annotations: BTreeMap<(String, CheckCategory), FeedbackAnnotation>,
}

impl FeedbackBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a verdict into the field's annotation for `category`
    pub fn render(
        &mut self,
        field: &str,
        category: CheckCategory,
        verdict: &ValidationVerdict,
    ) -> &FeedbackAnnotation {
        let key = (field.to_string(), category);
        self.annotations
            .insert(key.clone(), FeedbackAnnotation::from_verdict(field, category, verdict));
        &self.annotations[&key]
    }

    /// Hide an existing annotation; fields never annotated stay untouched
    pub fn clear(&mut self, field: &str, category: CheckCategory) -> Option<&FeedbackAnnotation> {
        let slot = self.annotations.get_mut(&(field.to_string(), category))?;
        slot.level = VerdictLevel::Neutral;
        slot.message.clear();
        slot.visible = false;
        Some(slot)
    }

    pub fn annotation(&self, field: &str, category: CheckCategory) -> Option<&FeedbackAnnotation> {
        self.annotations.get(&(field.to_string(), category))
    }

    /// All annotations of one field, ordered by category
    pub fn annotations_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FeedbackAnnotation> + 'a {
        self.annotations
            .iter()
            .filter(move |((name, _), _)| name == field)
            .map(|(_, annotation)| annotation)
    }

    /// Every annotation on the board, ordered by field then category
    pub fn iter(&self) -> impl Iterator<Item = &FeedbackAnnotation> {
        self.annotations.values()
    }

    /// Visible annotations only
    pub fn visible(&self) -> impl Iterator<Item = &FeedbackAnnotation> {
        self.annotations.values().filter(|a| a.visible)
    }

    pub fn field_state(&self, field: &str) -> FieldState {
        let mut seen = false;
        let mut any_valid = false;

        for annotation in self.annotations_for(field) {
            seen = true;
            if !annotation.visible {
                continue;
            }
            match annotation.level {
                VerdictLevel::Invalid => return FieldState::Invalid,
                VerdictLevel::Valid => any_valid = true,
                VerdictLevel::Neutral => {}
            }
        }

        match (seen, any_valid) {
            (false, _) => FieldState::Unvalidated,
            (true, true) => FieldState::Valid,
            (true, false) => FieldState::Neutral,
        }
    }

    /// Fields with a visible invalid annotation outside of `excluded`
    pub fn invalid_fields_except(&self, excluded: CheckCategory) -> Vec<String> {
        let mut fields: Vec<String> = self
            .annotations
            .values()
            .filter(|a| a.category != excluded && a.is_visible_invalid())
            .map(|a| a.field.clone())
            .collect();
        fields.dedup();
        fields
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }
}
