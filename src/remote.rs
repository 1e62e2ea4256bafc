//! Remote Task Source
//!
//! Read-only seed endpoint for the initial task set. Consumed exactly
//! once per session by `AppStore::fetch_initial`; there is no write-back
//! and no pagination beyond the fixed page.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{DomainError, DomainResult, Task, TaskStatus};

/// Public placeholder todos endpoint used to seed an empty board
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/todos";

/// Fixed page size requested on the initial fetch
pub const FETCH_PAGE_SIZE: usize = 10;

/// Wire shape of a remote to-do record; unknown fields are ignored
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteTodo {
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

impl RemoteTodo {
    /// Map a remote record into a board task: numeric id coerced to string,
    /// the done flag folded into the status, description left empty.
    pub fn into_task(self, fetched_at: DateTime<Utc>) -> Task {
        Task {
            id: self.id.to_string(),
            title: self.title,
            description: Some(String::new()),
            status: if self.completed {
                TaskStatus::Completed
            } else {
                TaskStatus::Todo
            },
            created_at: fetched_at,
        }
    }
}

/// Abstract source of the initial task page
#[async_trait]
pub trait TaskSource: Send + Sync {
    async fn fetch_page(&self, limit: usize) -> DomainResult<Vec<RemoteTodo>>;
}

/// HTTP implementation against a jsonplaceholder-style collection endpoint
pub struct HttpTaskSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTaskSource {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

impl Default for HttpTaskSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskSource for HttpTaskSource {
    async fn fetch_page(&self, limit: usize) -> DomainResult<Vec<RemoteTodo>> {
        let records = self
            .client
            .get(&self.endpoint)
            .query(&[("_limit", limit.to_string())])
            .send()
            .await
            .map_err(|e| DomainError::Fetch(e.to_string()))?
            .error_for_status()
            .map_err(|e| DomainError::Fetch(e.to_string()))?
            .json::<Vec<RemoteTodo>>()
            .await
            .map_err(|e| DomainError::Fetch(e.to_string()))?;
        Ok(records)
    }
}
