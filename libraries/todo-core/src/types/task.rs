/// Task domain types and request bodies
use crate::types::{TaskId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A task as stored by the backend.
///
/// Wire names are camelCase; snake_case names are accepted when decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,

    pub description: String,

    /// When the task is due
    #[serde(alias = "scheduled_at")]
    pub scheduled_at: DateTime<Utc>,

    #[serde(default)]
    pub completed: bool,

    #[serde(alias = "user_id")]
    pub user_id: UserId,

    /// Creation timestamp (ISO string, as sent by the backend)
    #[serde(alias = "inserted_at")]
    pub inserted_at: String,

    /// Last update timestamp (ISO string, as sent by the backend)
    #[serde(alias = "updated_at")]
    pub updated_at: String,
}

/// Body of `POST /tasks`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub description: String,
    pub scheduled_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl NewTask {
    /// Create a new task body; `completed` is left to the backend default.
    pub fn new(description: impl Into<String>, scheduled_at: DateTime<Utc>) -> Self {
        Self {
            description: description.into(),
            scheduled_at,
            completed: None,
        }
    }

    /// Set the initial completion flag
    #[must_use]
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}

/// Body of `PUT /tasks/:id`. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskUpdate {
    /// Whether the update would send an empty body
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.scheduled_at.is_none() && self.completed.is_none()
    }
}

/// Query parameters of `GET /tasks`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TaskFilter {
    /// Only tasks scheduled on this day (`YYYY-MM-DD`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskFilter {
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }
}
