//! Error types for the Taproom core library
//!
//! Validation failures are never errors here: they are verdicts rendered
//! into feedback annotations. This enum covers the things that can actually
//! go wrong around them, such as the like request or malformed form documents.

use thiserror::Error;

/// Main error type for Taproom operations
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP/Network related errors
    #[error("HTTP error: {message}")]
    Http {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// A form document or event refers to something that does not exist
    #[error("Validation error: {field} - {message}")]
    Validation {
        field: String,
        message: String,
        expected: Option<String>,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Error for an event or lookup naming a field the form does not have
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Error::Validation {
            field: field.into(),
            message: "Field is not part of this form".to_string(),
            expected: Some("A field declared in the form".to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Configuration {
            message: "Missing base URL".to_string(),
            source: None,
        };
        assert_eq!(err.to_string(), "Configuration error: Missing base URL");
    }

    #[test]
    fn test_unknown_field_error() {
        let err = Error::unknown_field("nickname");
        assert_eq!(
            err.to_string(),
            "Validation error: nickname - Field is not part of this form"
        );
    }

    #[test]
    fn test_json_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json { .. }));
    }
}
