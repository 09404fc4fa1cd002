//! Toast notifications

use serde::{Deserialize, Serialize};
use std::fmt;

/// Class list of the container toasts are appended to
pub const TOAST_CONTAINER_CLASSES: &str = "toast-container position-fixed bottom-0 end-0 p-3";

/// Stacking order of the toast container
pub const TOAST_CONTAINER_Z_INDEX: u32 = 1100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    /// Bootstrap contextual colour; errors render as `danger`
    pub fn color(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Error => "danger",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToastKind::Info => write!(f, "info"),
            ToastKind::Success => write!(f, "success"),
            ToastKind::Warning => write!(f, "warning"),
            ToastKind::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    #[serde(default)]
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastKind::Info)
    }

    pub fn class_list(&self) -> String {
        format!(
            "toast align-items-center text-white bg-{} border-0",
            self.kind.color()
        )
    }

    /// ARIA attributes of the toast element
    pub fn aria_attributes(&self) -> [(&'static str, &'static str); 3] {
        [
            ("role", "alert"),
            ("aria-live", "assertive"),
            ("aria-atomic", "true"),
        ]
    }
}
