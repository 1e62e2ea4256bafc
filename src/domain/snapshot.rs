//! Application Snapshot
//!
//! The serializable union of session and task state, persisted as one
//! opaque blob under a single storage key. There is no schema version:
//! loaders must tolerate absent or legacy-shaped data by falling back
//! to the empty default.

use serde::{Deserialize, Serialize};

use super::task::Task;
use super::user::User;

/// Fixed namespace for the persisted snapshot
pub const STORAGE_KEY: &str = "app-storage";

/// Everything worth persisting between sessions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}
