//! Error types for the Todo List REST client.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use todo_core::ValidationErrors;

/// Message shown when the backend gives no usable message, and for
/// transport failures.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Uniform shape of a non-2xx backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Human-readable message from the backend (or the generic fallback)
    pub message: String,
    /// Per-field validation messages, when the backend sent any
    pub errors: Option<ValidationErrors>,
}

impl ApiError {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: None,
        }
    }

    #[must_use]
    pub fn with_errors(mut self, errors: ValidationErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Build from a raw error body. Bodies that are not JSON, or that carry no
    /// message, fall back to [`GENERIC_ERROR_MESSAGE`].
    ///
    /// `message` and `errors` decode independently: an `errors` value of an
    /// unexpected shape is dropped without losing the message.
    pub(crate) fn from_body(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<Value>(body).ok();

        let message = parsed
            .as_ref()
            .and_then(|body| body.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string);

        let errors = parsed
            .as_ref()
            .and_then(|body| body.get("errors"))
            .and_then(|errors| ValidationErrors::deserialize(errors).ok());

        Self {
            status,
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
            errors: errors.filter(|e| !e.is_empty()),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

/// Errors that can occur when talking to the Todo List backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Invalid API base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// No response was obtained (connection refused, DNS, TLS, ...)
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Server error ({}): {}", .0.status, .0.message)]
    Api(#[from] ApiError),

    /// A success response had a body we could not decode
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Shorthand for an application-level failure
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api(ApiError::new(status, message))
    }

    /// Text to show to a person.
    ///
    /// Backend messages are shown as-is; every other failure collapses into
    /// the generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.message.clone(),
            Self::InvalidUrl(_) | Self::Request(_) | Self::ParseError(_) => {
                GENERIC_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// Field-keyed validation messages, if the backend sent any
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Api(err) => err.errors.as_ref(),
            _ => None,
        }
    }

    /// HTTP status of an application-level failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            _ => None,
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_with_message_and_errors() {
        let err = ApiError::from_body(
            422,
            r#"{"message":"Validation failed","errors":{"email":["has already been taken"]}}"#,
        );

        assert_eq!(err.status, 422);
        assert_eq!(err.message, "Validation failed");
        assert_eq!(
            err.errors.as_ref().and_then(|e| e.first("email")),
            Some("has already been taken")
        );
    }

    #[test]
    fn test_from_body_without_message_uses_generic() {
        let err = ApiError::from_body(500, r#"{"errors":{}}"#);
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
        assert!(err.errors.is_none());

        let err = ApiError::from_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err.status, 502);
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_from_body_keeps_message_when_errors_shape_is_unexpected() {
        let err = ApiError::from_body(
            422,
            r#"{"message":"Email already registered","errors":[{"field":"email","msg":"taken"}]}"#,
        );
        assert_eq!(err.message, "Email already registered");
        assert!(err.errors.is_none());

        let err = ApiError::from_body(422, r#"{"message":"Bad input","errors":{"email":null}}"#);
        assert_eq!(err.message, "Bad input");
        assert!(err.errors.is_none());

        let err = ApiError::from_body(400, r#"{"message":42}"#);
        assert_eq!(err.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_user_message() {
        let err = ClientError::api(401, "Invalid email or password");
        assert_eq!(err.user_message(), "Invalid email or password");
        assert_eq!(err.status(), Some(401));

        let err = ClientError::ParseError("truncated".into());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
        assert!(err.status().is_none());
        assert!(err.validation_errors().is_none());
    }
}
