//! Board Projection
//!
//! Derived, read-only lane views over the task collection, plus the
//! search debounce that throttles the query upstream of the projection.
//! Lane order is always the collection's order; nothing here mutates.

use std::time::{Duration, Instant};

use crate::domain::{Task, TaskStatus};

/// Quiet period applied to the search box before the query takes effect
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Optional narrowing of the whole board to a single status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusFilter {
    fn admits(&self, status: TaskStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(only) => *only == status,
        }
    }
}

/// The three fixed lanes, in board order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardView {
    pub todo: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub completed: Vec<Task>,
}

impl BoardView {
    pub fn lane(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Todo => &self.todo,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::Completed => &self.completed,
        }
    }

    /// Total tasks across all lanes
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition the collection into lanes, narrowed by the free-text query
/// (case-insensitive title substring) and the status filter. The relative
/// order of the source collection is preserved within each lane.
pub fn project(tasks: &[Task], query: &str, filter: StatusFilter) -> BoardView {
    let needle = query.to_lowercase();
    let mut view = BoardView::default();
    for task in tasks {
        if !task.title.to_lowercase().contains(&needle) {
            continue;
        }
        if !filter.admits(task.status) {
            continue;
        }
        match task.status {
            TaskStatus::Todo => view.todo.push(task.clone()),
            TaskStatus::InProgress => view.in_progress.push(task.clone()),
            TaskStatus::Completed => view.completed.push(task.clone()),
        }
    }
    view
}

/// Clock-driven search debounce
///
/// The rendering layer submits every keystroke; a query only becomes the
/// applied one once the quiet period elapses with no newer submission.
/// Time is passed in explicitly so the contract is testable without timers.
#[derive(Debug, Clone)]
pub struct SearchDebounce {
    delay: Duration,
    applied: String,
    pending: Option<(String, Instant)>,
}

impl SearchDebounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            applied: String::new(),
            pending: None,
        }
    }

    /// Record a keystroke at `now`, restarting the quiet period
    pub fn submit(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some((query.into(), now));
    }

    /// Apply the pending query if its quiet period has elapsed.
    /// Returns true when the applied query changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let elapsed = matches!(
            &self.pending,
            Some((_, submitted)) if now.duration_since(*submitted) >= self.delay
        );
        if !elapsed {
            return false;
        }
        if let Some((query, _)) = self.pending.take() {
            if query != self.applied {
                self.applied = query;
                return true;
            }
        }
        false
    }

    /// The query the projection should currently use
    pub fn applied(&self) -> &str {
        &self.applied
    }
}

impl Default for SearchDebounce {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}
