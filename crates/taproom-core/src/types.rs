//! Form data model
//!
//! A [`Form`] is the set of labelled inputs rendered on a page. Field values
//! change with every keystroke; everything the validators derive from them is
//! recomputed on demand and never stored beyond the page session.

use serde::{Deserialize, Serialize};

/// Input type of a field, mirroring the HTML `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Password,
    Search,
    Textarea,
    Number,
}

/// A single labelled input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// The input's `name` attribute
    pub name: String,

    /// Input type
    #[serde(default)]
    pub kind: FieldKind,

    /// Current text content
    #[serde(default)]
    pub value: String,

    /// Whether the input carries the `required` attribute
    #[serde(default)]
    pub required: bool,
}

impl Field {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: String::new(),
            required: false,
        }
    }

    /// Builder-style helper marking the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Builder-style helper setting the initial value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// A rendered form and its fields, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    /// Optional `id` attribute, used only for logging
    #[serde(default)]
    pub id: Option<String>,

    pub fields: Vec<Field>,
}

impl Form {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { id: None, fields }
    }

    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Mutable lookup by name
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Current value of a field, if present
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.field(name).map(|f| f.value.as_str())
    }

    /// Fields carrying the `required` attribute
    pub fn required_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.required)
    }
}
