//! Todo List Core
//!
//! Domain types shared by the REST client, the session layer and the shell.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Task` and the task request bodies
//! - **Identifiers**: `UserId`, `TaskId`
//! - **Validation errors**: the field-keyed message map returned on 4xx responses
//!
//! # Example
//!
//! ```rust
//! use todo_core::{NewTask, TaskFilter};
//! use chrono::{TimeZone, Utc};
//!
//! let task = NewTask::new("Print business card", Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap());
//! assert!(task.completed.is_none());
//!
//! let filter = TaskFilter::default().completed(false);
//! assert_eq!(filter.completed, Some(false));
//! ```

#![forbid(unsafe_code)]

pub mod types;

pub use types::{
    NewTask, Task, TaskFilter, TaskId, TaskUpdate, User, UserId, ValidationErrors,
};
