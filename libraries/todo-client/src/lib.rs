//! Todo List API Client
//!
//! HTTP client library for the Todo List REST backend.
//!
//! # Features
//!
//! - **Authentication**: signup, login, logout and the "who am I" probe
//! - **Session**: cookie-based; the client keeps the cookie the backend sets
//! - **Tasks**: list, get, create, update and delete
//! - **Errors**: every non-2xx response becomes one [`ApiError`] shape
//!
//! # Example
//!
//! ```ignore
//! use todo_client::{ClientConfig, LoginRequest, TodoClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TodoClient::new(ClientConfig::default())?;
//!
//!     let login = client
//!         .auth()
//!         .login(&LoginRequest::new("a@b.com", "secret123"))
//!         .await?;
//!     println!("{}", login.message);
//!
//!     let me = client.auth().current_user().await?;
//!     println!("Logged in as {}", me.full_name());
//!
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod error;
mod tasks;
mod types;

// Re-export main types
pub use client::TodoClient;
pub use error::{ApiError, ClientError, Result, GENERIC_ERROR_MESSAGE};
pub use types::{
    AuthResponse, ClientConfig, LoginRequest, SignupRequest, TaskMutation, DEFAULT_API_URL,
};

// Re-export sub-clients for direct use if needed
pub use auth::AuthClient;
pub use tasks::TaskClient;
