//! Store Scenario Tests
//!
//! Exercises the state container end to end against in-memory backends.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use board_dnd::{DndController, DragPoint, DropOutcome};

    use crate::domain::{DomainError, DomainResult, Snapshot, TaskPatch, TaskStatus, User};
    use crate::notify::{Notifier, Severity};
    use crate::remote::{RemoteTodo, TaskSource};
    use crate::storage::MemoryStorage;
    use crate::store::{AppStore, FETCH_ERROR};

    struct StubSource {
        records: Vec<RemoteTodo>,
        fail: bool,
    }

    impl StubSource {
        fn with_records(records: Vec<RemoteTodo>) -> Self {
            Self { records, fail: false }
        }

        fn empty() -> Self {
            Self::with_records(Vec::new())
        }

        fn failing() -> Self {
            Self {
                records: Vec::new(),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl TaskSource for StubSource {
        async fn fetch_page(&self, limit: usize) -> DomainResult<Vec<RemoteTodo>> {
            if self.fail {
                return Err(DomainError::Fetch("connection refused".to_string()));
            }
            Ok(self.records.iter().take(limit).cloned().collect())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<(Severity, String)>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<(Severity, String)> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, severity: Severity, message: &str) {
            self.messages
                .lock()
                .unwrap()
                .push((severity, message.to_string()));
        }
    }

    fn remote(id: u64, title: &str, completed: bool) -> RemoteTodo {
        RemoteTodo {
            id,
            title: title.to_string(),
            completed,
        }
    }

    fn setup(source: StubSource) -> (AppStore, Arc<MemoryStorage>, Arc<RecordingNotifier>) {
        let storage = Arc::new(MemoryStorage::new());
        let notes = Arc::new(RecordingNotifier::default());
        let store = AppStore::new(
            Box::new(Arc::clone(&storage)),
            Box::new(source),
            Box::new(Arc::clone(&notes)),
        );
        (store, storage, notes)
    }

    #[tokio::test]
    async fn test_fetch_seeds_empty_collection() {
        // Scenario A: 10 remote records, 4 marked done.
        let records: Vec<RemoteTodo> = (1..=10u64)
            .map(|id| remote(id, &format!("todo {}", id), id <= 4))
            .collect();
        let (mut store, _, notes) = setup(StubSource::with_records(records));

        store.fetch_initial().await.expect("fetch should succeed");

        assert_eq!(store.tasks().len(), 10);
        let completed = store
            .tasks()
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        let todo = store
            .tasks()
            .iter()
            .filter(|t| t.status == TaskStatus::Todo)
            .count();
        assert_eq!(completed, 4);
        assert_eq!(todo, 6);
        assert!(!store.tasks().iter().any(|t| t.status == TaskStatus::InProgress));
        assert!(!store.is_loading());
        assert!(store.error().is_none());
        // Seeding is not a user action, no toast.
        assert!(notes.messages().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_guard_when_tasks_exist() {
        // A failing source proves the guard short-circuits before the network.
        let (mut store, _, _) = setup(StubSource::failing());
        store.add_task("local edit", None, TaskStatus::Todo);

        store.fetch_initial().await.expect("guard path is Ok");

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].title, "local edit");
        assert!(!store.is_loading());
        assert!(store.error().is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_records_error() {
        let (mut store, _, notes) = setup(StubSource::failing());

        let err = store.fetch_initial().await.unwrap_err();

        assert!(matches!(err, DomainError::Fetch(_)));
        assert!(store.tasks().is_empty());
        assert!(!store.is_loading());
        assert_eq!(store.error(), Some(FETCH_ERROR));
        assert_eq!(
            notes.messages(),
            vec![(Severity::Error, "Failed to load tasks".to_string())]
        );
    }

    #[tokio::test]
    async fn test_fetch_clears_previous_error() {
        let (mut store, _, _) = setup(StubSource::empty());
        let _ = store.fetch_initial().await;
        // Empty result leaves the collection empty, so a second fetch runs.
        assert!(store.error().is_none());
        let _ = store.fetch_initial().await;
        assert!(store.error().is_none());
    }

    #[test]
    fn test_add_prepends_fresh_task() {
        // Scenario B.
        let (mut store, _, notes) = setup(StubSource::empty());
        store.add_task("existing", None, TaskStatus::InProgress);

        let id = store.add_task("Buy milk", Some(String::new()), TaskStatus::Todo);

        let front = &store.tasks()[0];
        assert_eq!(front.id, id);
        assert_eq!(front.title, "Buy milk");
        assert_eq!(front.description.as_deref(), Some(""));
        assert_eq!(front.status, TaskStatus::Todo);
        assert_eq!(store.tasks().len(), 2);
        assert_eq!(
            notes.messages().last(),
            Some(&(Severity::Success, "Task created successfully".to_string()))
        );
    }

    #[test]
    fn test_added_ids_are_pairwise_distinct() {
        let (mut store, _, _) = setup(StubSource::empty());
        for i in 0..50 {
            store.add_task(format!("task {}", i), None, TaskStatus::Todo);
        }
        let mut ids: Vec<&str> = store.tasks().iter().map(|t| t.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_update_merges_partial_fields() {
        let (mut store, _, _) = setup(StubSource::empty());
        let id = store.add_task("Original", Some("old".to_string()), TaskStatus::Todo);
        let created = store.task(&id).unwrap().created_at;

        store.update_task(
            &id,
            TaskPatch {
                description: Some("x".to_string()),
                ..Default::default()
            },
        );

        let task = store.task(&id).unwrap();
        assert_eq!(task.title, "Original");
        assert_eq!(task.description.as_deref(), Some("x"));
        assert_eq!(task.status, TaskStatus::Todo);
        assert_eq!(task.created_at, created);
    }

    #[test]
    fn test_update_unknown_id_still_reports_success() {
        let (mut store, _, notes) = setup(StubSource::empty());
        store.add_task("only", None, TaskStatus::Todo);
        let before = store.tasks().to_vec();

        store.update_task(
            "no-such-id",
            TaskPatch {
                title: Some("ghost".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(store.tasks(), &before[..]);
        assert_eq!(
            notes.messages().last(),
            Some(&(Severity::Success, "Task updated".to_string()))
        );
    }

    #[test]
    fn test_delete_is_idempotent() {
        let (mut store, _, notes) = setup(StubSource::empty());
        let id = store.add_task("doomed", None, TaskStatus::Todo);

        store.delete_task(&id);
        assert!(store.tasks().is_empty());

        store.delete_task(&id);
        assert!(store.tasks().is_empty());
        // Both calls report success, the second removed nothing.
        let deletes = notes
            .messages()
            .iter()
            .filter(|(_, m)| m == "Task deleted")
            .count();
        assert_eq!(deletes, 2);
    }

    #[test]
    fn test_set_status_touches_only_status() {
        let (mut store, _, notes) = setup(StubSource::empty());
        let id = store.add_task("move me", Some("d".to_string()), TaskStatus::Todo);
        let before = store.task(&id).unwrap().clone();
        let toasts = notes.messages().len();

        store.set_task_status(&id, TaskStatus::Completed);

        let task = store.task(&id).unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.title, before.title);
        assert_eq!(task.description, before.description);
        assert_eq!(task.created_at, before.created_at);
        // Deliberately silent.
        assert_eq!(notes.messages().len(), toasts);
    }

    #[test]
    fn test_login_and_logout_leave_tasks_alone() {
        let (mut store, _, notes) = setup(StubSource::empty());
        store.add_task("keep", None, TaskStatus::Todo);

        store.set_user(Some(User::from_email("a@b.com")));
        assert_eq!(store.user().map(|u| u.name.as_str()), Some("A"));
        assert_eq!(
            notes.messages().last(),
            Some(&(Severity::Success, "Welcome back, A!".to_string()))
        );

        store.logout();
        assert!(store.user().is_none());
        assert_eq!(
            notes.messages().last(),
            Some(&(Severity::Success, "Logged out successfully".to_string()))
        );
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn test_clearing_user_is_silent() {
        let (mut store, _, notes) = setup(StubSource::empty());
        store.set_user(None);
        assert!(store.user().is_none());
        assert!(notes.messages().is_empty());
    }

    #[test]
    fn test_mutations_persist_snapshot() {
        let (mut store, storage, _) = setup(StubSource::empty());
        let id = store.add_task("persisted", None, TaskStatus::Todo);
        store.set_user(Some(User::from_email("a@b.com")));

        let saved: Snapshot = serde_json::from_str(&storage.raw().unwrap()).unwrap();
        assert_eq!(saved.tasks.len(), 1);
        assert_eq!(saved.tasks[0].id, id);
        assert!(saved.user.is_some());

        // A fresh store over the same storage rehydrates.
        let revived = AppStore::new(
            Box::new(Arc::clone(&storage)),
            Box::new(StubSource::failing()),
            Box::new(Arc::new(RecordingNotifier::default())),
        );
        assert_eq!(revived.tasks().len(), 1);
        assert_eq!(revived.user().map(|u| u.email.as_str()), Some("a@b.com"));
    }

    #[test]
    fn test_cross_lane_drop_moves_exactly_one_task() {
        // Scenario C.
        let (mut store, _, _) = setup(StubSource::empty());
        let other = store.add_task("stay", None, TaskStatus::InProgress);
        let id = store.add_task("drag me", None, TaskStatus::Todo);

        let mut dnd = DndController::new();
        dnd.begin_drag(id.clone(), TaskStatus::Todo, 0);
        let outcome = dnd.drop_at(Some(DragPoint::new(TaskStatus::Completed, 2)));
        store.apply_drop(outcome);

        assert_eq!(store.task(&id).unwrap().status, TaskStatus::Completed);
        assert_eq!(store.task(&other).unwrap().status, TaskStatus::InProgress);
    }

    #[test]
    fn test_drop_back_on_source_changes_nothing() {
        // Scenario D.
        let (mut store, _, notes) = setup(StubSource::empty());
        let id = store.add_task("drag me", None, TaskStatus::Todo);
        let before = store.tasks().to_vec();
        let toasts = notes.messages().len();

        let mut dnd = DndController::new();
        dnd.begin_drag(id, TaskStatus::Todo, 0);
        let outcome = dnd.drop_at(Some(DragPoint::new(TaskStatus::Todo, 0)));
        assert_eq!(outcome, DropOutcome::NoOp);
        store.apply_drop(outcome);

        assert_eq!(store.tasks(), &before[..]);
        assert_eq!(notes.messages().len(), toasts);
    }

    #[test]
    fn test_drop_outside_changes_nothing() {
        let (mut store, _, _) = setup(StubSource::empty());
        let id = store.add_task("drag me", None, TaskStatus::Todo);

        let mut dnd = DndController::new();
        dnd.begin_drag(id.clone(), TaskStatus::Todo, 0);
        store.apply_drop(dnd.drop_at(None));

        assert_eq!(store.task(&id).unwrap().status, TaskStatus::Todo);
    }
}
