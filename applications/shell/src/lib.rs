//! Todo List Shell
//!
//! Terminal front end for the Todo List backend: renders the login, signup
//! and home pages as text and reads one command per line.
//!
//! The [`App`] owns everything explicitly: a [`todo_client::TodoClient`], the
//! [`todo_session::AuthSession`] built on it, the [`todo_session::History`]
//! the guards redirect through, and the page views.

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod views;

pub use app::{App, Flow, Screen};
pub use command::Command;
pub use config::ShellConfig;
pub use error::{Result, ShellError};
