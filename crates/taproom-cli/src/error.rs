//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! the failure modes of the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from taproom-core library
    #[error("Core error: {0}")]
    Core(#[from] taproom_core::Error),

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Invalid file format
    #[error("Invalid file format for {}: expected {} format", path.display(), expected)]
    InvalidFormat { path: PathBuf, expected: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A check rejected its input
    #[error("{check} check failed: {message}")]
    CheckFailed { check: String, message: String },

    /// The replayed form would not submit
    #[error("Submission blocked: {missing} required field(s) empty, {invalid} field(s) invalid")]
    SubmissionBlocked { missing: usize, invalid: usize },

    /// No CSRF token could be found for a request that needs one
    #[error("No CSRF token found. Pass the browser cookies via --cookie, TAPROOM_COOKIE or site.cookie")]
    MissingCsrfToken,

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a failed-check error
    pub fn check_failed(check: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CheckFailed {
            check: check.into(),
            message: message.into(),
        }
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(_) => 2,
            Self::FileNotFound { .. } => 3,
            Self::InvalidFormat { .. } => 4,
            Self::Config(_) => 5,
            Self::CheckFailed { .. } => 7,
            Self::SubmissionBlocked { .. } => 8,
            Self::MissingCsrfToken => 9,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    ///
    /// A missing CSRF token means the cookie was never passed in, which the
    /// `like` help text explains.
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::MissingCsrfToken)
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    let mut message = error.to_string();

    // Surface the HTTP status of failed like requests
    if let Error::Core(taproom_core::Error::Http {
        status_code: Some(status),
        ..
    }) = error
    {
        message.push_str(&format!(" (status {})", status));
    }

    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), message)
    } else {
        format!("Error: {}", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_for_check_outcomes() {
        assert_eq!(Error::check_failed("email", "bad").exit_code(), 7);
        assert_eq!(
            Error::SubmissionBlocked {
                missing: 1,
                invalid: 0
            }
            .exit_code(),
            8
        );
    }

    #[test]
    fn test_help_hint_only_for_missing_cookie() {
        assert!(Error::MissingCsrfToken.should_show_help());
        assert!(!Error::check_failed("email", "bad").should_show_help());
        assert!(!Error::config("bad key").should_show_help());
    }

    #[test]
    fn test_format_error_plain() {
        let error = Error::check_failed("email", "Please enter a valid email address");
        assert_eq!(
            format_error(&error, false),
            "Error: email check failed: Please enter a valid email address"
        );
    }

    #[test]
    fn test_format_error_includes_http_status() {
        let error = Error::Core(taproom_core::Error::Http {
            message: "CSRF failed".to_string(),
            status_code: Some(403),
            source: None,
        });
        assert_eq!(
            format_error(&error, false),
            "Error: Core error: HTTP error: CSRF failed (status 403)"
        );
    }
}
