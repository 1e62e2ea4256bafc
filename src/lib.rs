//! Task Board Core
//!
//! Client-side state core for a three-lane kanban board.
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - storage / remote / notify: Injected capabilities (snapshot
//!   persistence, remote seed endpoint, transient messages)
//! - store: The application state container
//! - board: Derived lane projections and the search debounce
//!
//! Rendering, routing and the toast surface live outside this crate; they
//! consume the store through [`AppStore`] and [`project`], and feed drag
//! gestures through [`DndController`].

pub mod board;
pub mod domain;
pub mod notify;
pub mod remote;
pub mod storage;
pub mod store;

pub use board::{project, BoardView, SearchDebounce, StatusFilter, SEARCH_DEBOUNCE};
pub use domain::{DomainError, DomainResult, Snapshot, Task, TaskPatch, TaskStatus, User, STORAGE_KEY};
pub use notify::{LogNotifier, Notifier, Severity};
pub use remote::{HttpTaskSource, RemoteTodo, TaskSource, DEFAULT_ENDPOINT, FETCH_PAGE_SIZE};
pub use storage::{JsonFileStorage, MemoryStorage, SnapshotStorage};
pub use store::{AppState, AppStore, FETCH_ERROR};

pub use board_dnd::{DndController, DragPoint, DragState, DropOutcome};
