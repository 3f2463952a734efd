//! Task endpoints.

use crate::client::parse_response;
use crate::error::Result;
use crate::types::{MessageResponse, TaskListResponse, TaskMutation, TaskResponse};
use reqwest::Client;
use todo_core::{NewTask, Task, TaskFilter, TaskId, TaskUpdate};
use tracing::{debug, info};

/// Task client for the Todo List backend. Every call needs a session.
pub struct TaskClient<'a> {
    http: &'a Client,
    base_url: &'a str,
}

impl<'a> TaskClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a str) -> Self {
        Self { http, base_url }
    }

    /// List tasks, optionally filtered by day and completion.
    pub async fn list(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let url = format!("{}/tasks", self.base_url);
        debug!(url = %url, filter = ?filter, "Fetching tasks");

        let response = self.http.get(&url).query(filter).send().await?;
        let list: TaskListResponse = parse_response(response, "task list").await?;

        debug!(tasks = list.tasks.len(), "Fetched tasks");
        Ok(list.tasks)
    }

    /// Get a single task by ID.
    pub async fn get(&self, id: TaskId) -> Result<Task> {
        let url = format!("{}/tasks/{}", self.base_url, id);
        debug!(url = %url, task_id = %id, "Fetching task");

        let response = self.http.get(&url).send().await?;
        let task: TaskResponse = parse_response(response, "task").await?;

        Ok(task.task)
    }

    /// Create a task.
    pub async fn create(&self, task: &NewTask) -> Result<TaskMutation> {
        let url = format!("{}/tasks", self.base_url);
        debug!(url = %url, description = %task.description, "Creating task");

        let response = self.http.post(&url).json(task).send().await?;
        let created: TaskMutation = parse_response(response, "create task").await?;

        info!(task_id = %created.task.id, "Task created");
        Ok(created)
    }

    /// Update the fields set in `update`.
    pub async fn update(&self, id: TaskId, update: &TaskUpdate) -> Result<TaskMutation> {
        let url = format!("{}/tasks/{}", self.base_url, id);
        debug!(url = %url, task_id = %id, "Updating task");

        let response = self.http.put(&url).json(update).send().await?;
        let updated: TaskMutation = parse_response(response, "update task").await?;

        info!(task_id = %id, "Task updated");
        Ok(updated)
    }

    /// Delete a task. Returns the backend's message.
    pub async fn delete(&self, id: TaskId) -> Result<String> {
        let url = format!("{}/tasks/{}", self.base_url, id);
        debug!(url = %url, task_id = %id, "Deleting task");

        let response = self.http.delete(&url).send().await?;
        let deleted: MessageResponse = parse_response(response, "delete task").await?;

        info!(task_id = %id, "Task deleted");
        Ok(deleted.message)
    }
}
