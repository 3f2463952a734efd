//! Authentication session context.
//!
//! [`AuthSession`] is the single writer of the client's session state. Views
//! get it injected (usually as `Arc<AuthSession>`), read the state through it
//! and call its operations; nothing else mutates the state.
//!
//! ```text
//!            mount probe ok                 logout (always)
//! LOADING ───────────────────▶ AUTHENTICATED ───────────────▶ UNAUTHENTICATED
//!    │                              ▲                               │
//!    └── mount probe failed ────────┼───────────────────────────────┤
//!                                   └────────── login ok ───────────┘
//! ```

use crate::navigator::Navigator;
use crate::route::Route;
use async_trait::async_trait;
use std::sync::Arc;
use todo_client::{AuthResponse, ClientError, LoginRequest, TodoClient};
use todo_core::User;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// The backend calls the session needs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthBackend: Send + Sync {
    /// "Who am I" probe
    async fn current_user(&self) -> todo_client::Result<User>;

    async fn login(&self, credentials: &LoginRequest) -> todo_client::Result<AuthResponse>;

    async fn logout(&self) -> todo_client::Result<String>;
}

#[async_trait]
impl AuthBackend for TodoClient {
    async fn current_user(&self) -> todo_client::Result<User> {
        self.auth().current_user().await
    }

    async fn login(&self, credentials: &LoginRequest) -> todo_client::Result<AuthResponse> {
        self.auth().login(credentials).await
    }

    async fn logout(&self) -> todo_client::Result<String> {
        self.auth().logout().await
    }
}

/// Observable state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Snapshot of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl SessionState {
    /// State at mount, before the probe resolves
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_loading: false,
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            user: None,
            is_loading: false,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn status(&self) -> AuthStatus {
        if self.is_loading {
            AuthStatus::Loading
        } else if self.user.is_some() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Unauthenticated
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::loading()
    }
}

/// Client-side session service.
pub struct AuthSession {
    backend: Arc<dyn AuthBackend>,
    navigator: Arc<dyn Navigator>,
    state: watch::Sender<SessionState>,
}

impl AuthSession {
    /// Create a session in the LOADING state. Call [`check_auth`](Self::check_auth)
    /// (or use [`mount`](Self::mount)) to settle it.
    pub fn new(backend: Arc<dyn AuthBackend>, navigator: Arc<dyn Navigator>) -> Self {
        let (state, _) = watch::channel(SessionState::loading());
        Self {
            backend,
            navigator,
            state,
        }
    }

    /// Create a session and run the mount probe.
    ///
    /// The returned session is never in the LOADING state.
    pub async fn mount(backend: Arc<dyn AuthBackend>, navigator: Arc<dyn Navigator>) -> Self {
        let session = Self::new(backend, navigator);
        session.check_auth().await;
        session
    }

    /// Probe the backend for an existing session.
    ///
    /// Any failure counts as "no session". The loading flag clears only after
    /// the probe has resolved, in the same update that sets the user.
    pub async fn check_auth(&self) {
        let next = match self.backend.current_user().await {
            Ok(user) => {
                info!(user_id = %user.id, email = %user.email, "Existing session found");
                SessionState::authenticated(user)
            }
            Err(e) => {
                debug!(error = %e, "No active session");
                SessionState::unauthenticated()
            }
        };

        self.state.send_replace(next);
    }

    /// Sign in and go to the home page.
    ///
    /// On failure the backend's error is returned untouched and the state
    /// is left as it was.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, ClientError> {
        let response = self.backend.login(credentials).await?;
        let user = response.user;

        info!(user_id = %user.id, "Session started");
        self.state.send_modify(|state| state.user = Some(user.clone()));
        self.navigator.navigate(Route::Home);

        Ok(user)
    }

    /// Sign out and go to the login page.
    ///
    /// The session is cleared whatever the backend answers; a failed request
    /// is only logged.
    pub async fn logout(&self) {
        match self.backend.logout().await {
            Ok(message) => debug!(message = %message, "Backend session ended"),
            Err(e) => warn!(error = %e, "Logout request failed, clearing session anyway"),
        }

        self.state.send_modify(|state| state.user = None);
        info!("Session cleared");
        self.navigator.navigate(Route::Login);
    }

    /// Current snapshot
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn user(&self) -> Option<User> {
        self.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    pub fn status(&self) -> AuthStatus {
        self.state.borrow().status()
    }

    /// Watch state changes
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}
