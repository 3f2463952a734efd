//! Types for Todo List API requests and responses.

use serde::{Deserialize, Serialize};
use std::fmt;
use todo_core::{Task, User};

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:4000/api";

/// Configuration for connecting to the backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:4000/api")
    pub base_url: String,
}

impl ClientConfig {
    /// Create a config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

// =============================================================================
// Authentication Types
// =============================================================================

/// Request body for the signup endpoint.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Request body for the login endpoint.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Response from successful signup or login.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: User,
}

/// Response from `GET /auth/me`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CurrentUserResponse {
    pub user: User,
}

/// Response that only carries a message (logout, delete).
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MessageResponse {
    pub message: String,
}

// =============================================================================
// Task Types
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TaskListResponse {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TaskResponse {
    pub task: Task,
}

/// Response from task create/update.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskMutation {
    pub message: String,
    pub task: Task,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_is_camel_case() {
        let body = SignupRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            password: "secret123".into(),
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "password": "secret123"
            })
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let login = LoginRequest::new("a@b.com", "secret123");
        let debug = format!("{:?}", login);
        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("secret123"));
    }
}
