//! Application State Store
//!
//! The single client-side state container: session user plus the task
//! collection. Dependencies (snapshot storage, remote seed source,
//! notification sink) are constructor-injected so consumers and tests
//! can swap backends without process-wide state.
//!
//! Every mutation persists the snapshot synchronously. The payload is
//! small, so writes are neither batched nor debounced; a save failure is
//! logged and otherwise swallowed, it is outside the store's contract.

use chrono::Utc;

use board_dnd::DropOutcome;

use crate::domain::{DomainResult, Snapshot, Task, TaskPatch, TaskStatus, User};
use crate::notify::{Notifier, Severity};
use crate::remote::{TaskSource, FETCH_PAGE_SIZE};
use crate::storage::SnapshotStorage;

#[cfg(test)]
mod tests;

/// Error recorded on the store when the initial fetch fails
pub const FETCH_ERROR: &str = "Failed to fetch tasks";

/// Mutable application state, the in-memory side of the snapshot
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current session user, `None` when logged out
    pub user: Option<User>,
    /// Task collection, newest-first for locally created tasks
    pub tasks: Vec<Task>,
    /// True while the initial fetch is in flight
    pub is_loading: bool,
    /// Last fetch error, cleared when a fetch starts
    pub error: Option<String>,
}

/// The state container. Owns the state and the injected capabilities.
pub struct AppStore {
    state: AppState,
    storage: Box<dyn SnapshotStorage>,
    source: Box<dyn TaskSource>,
    notifier: Box<dyn Notifier>,
}

impl AppStore {
    /// Build a store, rehydrating from the last saved snapshot when one
    /// decodes; anything else starts from the empty default.
    pub fn new(
        storage: Box<dyn SnapshotStorage>,
        source: Box<dyn TaskSource>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let mut state = AppState::default();
        if let Some(snapshot) = storage.load() {
            state.user = snapshot.user;
            state.tasks = snapshot.tasks;
        }
        Self {
            state,
            storage,
            source,
            notifier,
        }
    }

    // ========================
    // Read access
    // ========================

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.state.tasks.iter().find(|t| t.id == id)
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error.as_deref()
    }

    /// The snapshot as it would be persisted right now
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            user: self.state.user.clone(),
            tasks: self.state.tasks.clone(),
        }
    }

    // ========================
    // Session
    // ========================

    /// Replace the session user wholesale (login and profile edits)
    pub fn set_user(&mut self, user: Option<User>) {
        if let Some(user) = &user {
            self.notifier
                .notify(Severity::Success, &format!("Welcome back, {}!", user.name));
        }
        self.state.user = user;
        self.persist();
    }

    pub fn logout(&mut self) {
        self.state.user = None;
        self.notifier.notify(Severity::Success, "Logged out successfully");
        self.persist();
    }

    // ========================
    // Tasks
    // ========================

    /// Seed the collection from the remote endpoint, once per session.
    ///
    /// No-op when tasks already exist: guards against redundant network
    /// calls and against clobbering local edits on remount. Not retried;
    /// on failure the collection is left untouched and the error is both
    /// recorded on the store and returned.
    pub async fn fetch_initial(&mut self) -> DomainResult<()> {
        if !self.state.tasks.is_empty() {
            return Ok(());
        }

        self.state.is_loading = true;
        self.state.error = None;

        match self.source.fetch_page(FETCH_PAGE_SIZE).await {
            Ok(records) => {
                let fetched_at = Utc::now();
                self.state.tasks = records
                    .into_iter()
                    .map(|record| record.into_task(fetched_at))
                    .collect();
                self.state.is_loading = false;
                log::debug!("seeded {} tasks from remote", self.state.tasks.len());
                self.persist();
                Ok(())
            }
            Err(err) => {
                log::error!("initial task fetch failed: {}", err);
                self.state.is_loading = false;
                self.state.error = Some(FETCH_ERROR.to_string());
                self.notifier.notify(Severity::Error, "Failed to load tasks");
                Err(err)
            }
        }
    }

    /// Prepend a fresh task and return its generated id.
    /// Title emptiness is enforced by the caller (the create form), not here.
    pub fn add_task(
        &mut self,
        title: impl Into<String>,
        description: Option<String>,
        status: TaskStatus,
    ) -> String {
        let task = Task::new(title, description, status);
        let id = task.id.clone();
        self.state.tasks.insert(0, task);
        self.notifier.notify(Severity::Success, "Task created successfully");
        self.persist();
        id
    }

    /// Merge a patch into the matching task. An unknown id falls through
    /// silently and still reports success, matching the shipped behavior.
    pub fn update_task(&mut self, id: &str, patch: TaskPatch) {
        if let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == id) {
            patch.apply(task);
        }
        self.notifier.notify(Severity::Success, "Task updated");
        self.persist();
    }

    /// Remove the matching task if present; an unknown id is a no-op that
    /// still reports success.
    pub fn delete_task(&mut self, id: &str) {
        self.state.tasks.retain(|t| t.id != id);
        self.notifier.notify(Severity::Success, "Task deleted");
        self.persist();
    }

    /// Status-only mutation. Deliberately silent: drag-and-drop would
    /// otherwise emit one toast per drop.
    pub fn set_task_status(&mut self, id: &str, status: TaskStatus) {
        if let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == id) {
            task.status = status;
        }
        self.persist();
    }

    /// Map a finished drag gesture back onto the collection. Only a
    /// cross-lane move mutates anything.
    pub fn apply_drop(&mut self, outcome: DropOutcome<TaskStatus>) {
        match outcome {
            DropOutcome::Moved { task_id, lane } => self.set_task_status(&task_id, lane),
            DropOutcome::Outside | DropOutcome::NoOp => {}
        }
    }

    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.snapshot()) {
            log::warn!("failed to persist snapshot: {}", err);
        }
    }
}
