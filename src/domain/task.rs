//! Task Entity
//!
//! A single card on the board. Status decides which lane it renders in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Workflow state of a task, one fixed lane per variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl TaskStatus {
    /// The three lanes in board order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "in-progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Todo,
        }
    }
}

/// A task on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, stable for the life of the process
    pub id: String,
    /// Card title; emptiness is the caller's concern, not enforced here
    pub title: String,
    /// Optional free-text details
    pub description: Option<String>,
    /// Lane the task currently sits in
    pub status: TaskStatus,
    /// Creation time (fetch time for remotely seeded tasks)
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task with a fresh id, stamped now
    pub fn new(title: impl Into<String>, description: Option<String>, status: TaskStatus) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description,
            status,
            created_at: Utc::now(),
        }
    }
}

/// Typed partial update for a task
///
/// Absent fields are retained on merge. `id` and `created_at` are
/// deliberately not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Merge this patch into a task, field by field
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = Some(description.clone());
        }
        if let Some(status) = self.status {
            task.status = status;
        }
    }
}
