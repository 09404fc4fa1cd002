//! HTTP error classification for site endpoints
//!
//! Normalizes failures of site requests (transport errors, non-2xx statuses,
//! undecodable bodies) into one error type the page logic can log.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Classification of HTTP errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorClassification {
    /// Client errors (4xx) not covered below
    ClientError,
    /// 401 - the user is not logged in
    AuthenticationError,
    /// 403 - usually a missing or stale CSRF token
    Forbidden,
    /// 404 - the review does not exist
    NotFound,
    /// Server errors (5xx)
    ServerError,
    /// Connection failures
    NetworkError,
    /// The request exceeded its timeout
    Timeout,
    /// The body was not the expected JSON
    DecodeError,
    /// Unknown errors
    Unknown,
}

impl ErrorClassification {
    /// Whether trying the same click again later could succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ErrorClassification::ServerError
                | ErrorClassification::NetworkError
                | ErrorClassification::Timeout
        )
    }
}

/// Normalized HTTP error representation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpError {
    /// HTTP status code if available
    pub status_code: Option<u16>,
    pub classification: ErrorClassification,
    /// Human-readable error message
    pub message: String,
    /// Parsed JSON body of the error response, if any
    pub details: Option<Value>,
}

impl HttpError {
    /// Create from a non-success response
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let details = serde_json::from_str::<Value>(&body).ok();
        let message = Self::extract_message(&details, &body, status);

        Self {
            status_code: Some(status.as_u16()),
            classification: Self::classify_status(status),
            message,
            details,
        }
    }

    /// Create from a network/request error
    pub fn from_request_error(error: reqwest::Error) -> Self {
        let classification = if error.is_timeout() {
            ErrorClassification::Timeout
        } else if error.is_connect() {
            ErrorClassification::NetworkError
        } else if error.is_decode() {
            ErrorClassification::DecodeError
        } else {
            ErrorClassification::Unknown
        };

        Self {
            status_code: error.status().map(|s| s.as_u16()),
            classification,
            message: error.to_string(),
            details: None,
        }
    }

    /// A 2xx response whose body did not decode
    pub fn decode(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: Some(status.as_u16()),
            classification: ErrorClassification::DecodeError,
            message: message.into(),
            details: None,
        }
    }

    fn classify_status(status: StatusCode) -> ErrorClassification {
        match status.as_u16() {
            401 => ErrorClassification::AuthenticationError,
            403 => ErrorClassification::Forbidden,
            404 => ErrorClassification::NotFound,
            400..=499 => ErrorClassification::ClientError,
            500..=599 => ErrorClassification::ServerError,
            _ => ErrorClassification::Unknown,
        }
    }

    /// Pull a message out of `{"error": ...}` or `{"detail": ...}` bodies
    fn extract_message(details: &Option<Value>, body: &str, status: StatusCode) -> String {
        if let Some(json) = details {
            for key in ["error", "detail", "message"] {
                if let Some(message) = json.get(key).and_then(|m| m.as_str()) {
                    return message.to_string();
                }
            }
        }

        if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        } else {
            body.to_string()
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTTP Error [{}]: {} (classification: {:?})",
            self.status_code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            self.message,
            self.classification
        )
    }
}

impl std::error::Error for HttpError {}

impl From<HttpError> for crate::Error {
    fn from(http_error: HttpError) -> Self {
        crate::Error::Http {
            message: http_error.message.clone(),
            status_code: http_error.status_code,
            source: Some(anyhow::Error::new(http_error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(
            HttpError::classify_status(StatusCode::FORBIDDEN),
            ErrorClassification::Forbidden
        );
        assert_eq!(
            HttpError::classify_status(StatusCode::NOT_FOUND),
            ErrorClassification::NotFound
        );
        assert_eq!(
            HttpError::classify_status(StatusCode::BAD_REQUEST),
            ErrorClassification::ClientError
        );
        assert_eq!(
            HttpError::classify_status(StatusCode::BAD_GATEWAY),
            ErrorClassification::ServerError
        );
    }

    #[test]
    fn test_transient_classes() {
        assert!(ErrorClassification::ServerError.is_transient());
        assert!(ErrorClassification::Timeout.is_transient());
        assert!(!ErrorClassification::Forbidden.is_transient());
        assert!(!ErrorClassification::DecodeError.is_transient());
    }

    #[test]
    fn test_message_extraction() {
        let json = serde_json::json!({"detail": "CSRF Failed: CSRF token missing."});
        let message = HttpError::extract_message(&Some(json), "raw", StatusCode::FORBIDDEN);
        assert_eq!(message, "CSRF Failed: CSRF token missing.");

        let message = HttpError::extract_message(&None, "", StatusCode::NOT_FOUND);
        assert_eq!(message, "Not Found");

        let message = HttpError::extract_message(&None, "<html>oops</html>", StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(message, "<html>oops</html>");
    }

    #[test]
    fn test_into_crate_error() {
        let err: crate::Error = HttpError::decode(StatusCode::OK, "missing field `liked`").into();
        match err {
            crate::Error::Http { status_code, message, .. } => {
                assert_eq!(status_code, Some(200));
                assert_eq!(message, "missing field `liked`");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
