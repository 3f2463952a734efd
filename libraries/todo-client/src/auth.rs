//! Authentication endpoints.

use crate::client::parse_response;
use crate::error::Result;
use crate::types::{AuthResponse, CurrentUserResponse, LoginRequest, MessageResponse, SignupRequest};
use reqwest::Client;
use todo_core::User;
use tracing::{debug, info};

/// Authentication client for the Todo List backend.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// Create an account.
    ///
    /// On a 4xx the error may carry per-field validation messages.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse> {
        let url = format!("{}/auth/signup", self.base_url);
        debug!(url = %url, email = %request.email, "Attempting signup");

        let response = self.http.post(&url).json(request).send().await?;
        let signup: AuthResponse = parse_response(response, "signup").await?;

        info!(user_id = %signup.user.id, email = %signup.user.email, "Signup successful");
        Ok(signup)
    }

    /// Login with email and password.
    ///
    /// The backend answers with a session cookie, which the client keeps.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        let url = format!("{}/auth/login", self.base_url);
        debug!(url = %url, email = %request.email, "Attempting login");

        let response = self.http.post(&url).json(request).send().await?;
        let login: AuthResponse = parse_response(response, "login").await?;

        info!(user_id = %login.user.id, email = %login.user.email, "Login successful");
        Ok(login)
    }

    /// Get the user behind the current session cookie.
    pub async fn current_user(&self) -> Result<User> {
        let url = format!("{}/auth/me", self.base_url);
        debug!(url = %url, "Getting current user");

        let response = self.http.get(&url).send().await?;
        let me: CurrentUserResponse = parse_response(response, "current user").await?;

        Ok(me.user)
    }

    /// End the current session. Returns the backend's message.
    pub async fn logout(&self) -> Result<String> {
        let url = format!("{}/auth/logout", self.base_url);
        debug!(url = %url, "Logging out");

        let response = self.http.post(&url).send().await?;
        let logout: MessageResponse = parse_response(response, "logout").await?;

        info!("Logged out");
        Ok(logout.message)
    }
}
