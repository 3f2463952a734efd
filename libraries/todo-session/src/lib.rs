//! Todo List Session
//!
//! Client-side authentication session, route guards and navigation.
//!
//! # Architecture
//!
//! - [`AuthSession`]: single-writer session service (LOADING → AUTHENTICATED /
//!   UNAUTHENTICATED), injected into every view that needs it
//! - [`AuthBackend`]: the three backend calls the session makes; implemented
//!   for [`todo_client::TodoClient`]
//! - [`Guard`] / [`dispatch`]: pure decisions from session state to
//!   placeholder, redirect or render
//! - [`Navigator`] / [`History`]: where redirects go
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use todo_client::{ClientConfig, TodoClient};
//! use todo_session::{dispatch, AuthSession, History, Route};
//!
//! let client = Arc::new(TodoClient::new(ClientConfig::default())?);
//! let history = Arc::new(History::new(Route::Home));
//! let session = AuthSession::mount(client, history.clone()).await;
//!
//! match dispatch(&history.location(), &session.state()) {
//!     Dispatch::Render(route) => println!("showing {}", route),
//!     other => println!("{:?}", other),
//! }
//! ```

mod error;
mod guard;
mod navigator;
mod route;
mod session;

pub use error::{Result, SessionError};
pub use guard::{dispatch, Dispatch, Guard, GuardDecision, LOADING_PLACEHOLDER};
pub use navigator::{History, Navigator};
pub use route::Route;
pub use session::{AuthBackend, AuthSession, AuthStatus, SessionState};
