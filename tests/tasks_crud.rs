#[cfg(test)]
mod tests {
    use chrono::Duration;
    use taskman::libs::error::TaskError;
    use taskman::libs::task::{Priority, TaskDraft};
    use taskman::store::tasks::TaskStore;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TaskTestContext {
        fn store(&self) -> TaskStore {
            TaskStore::new(self.temp_dir.path().join("tasks.json"))
        }
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            TaskTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn draft(title: &str) -> TaskDraft {
        TaskDraft::new(title, "", "12/24/2026", "1")
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_assigns_increasing_ids(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();

        let ids: Vec<i32> = (1..=5).map(|i| store.add(draft(&format!("Task {}", i))).unwrap().task.id).collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(store.next_id(), 6);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_sets_defaults(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();

        let outcome = store.add(TaskDraft::new("Write report", "Quarterly numbers", "12/24/2026", "3")).unwrap();
        assert!(!outcome.due_date_defaulted);

        let task = outcome.task;
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, "Quarterly numbers");
        assert_eq!(task.priority, Priority::High);
        assert!(!task.completed);
        assert_eq!(task.due_date.format("%Y-%m-%d").to_string(), "2026-12-24");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_with_unparsable_due_date_uses_a_week_later(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();

        let outcome = store.add(TaskDraft::new("Call plumber", "", "whenever", "2")).unwrap();

        assert!(outcome.due_date_defaulted);
        assert_eq!(outcome.task.due_date, outcome.task.created_date + Duration::days(7));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_allows_empty_title(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();

        let task = store.add(TaskDraft::new("", "", "", "")).unwrap().task;

        assert_eq!(task.title, "");
        assert_eq!(task.priority, Priority::Low);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_unknown_priority_selector_defaults_to_low(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();

        for choice in ["0", "5", "urgent", ""] {
            let task = store.add(TaskDraft::new("Task", "", "", choice)).unwrap().task;
            assert_eq!(task.priority, Priority::Low, "selector {:?}", choice);
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_marks_only_the_flag(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        store.add(draft("First")).unwrap();
        store.add(draft("Second")).unwrap();
        let before = store.list_all()[1].clone();

        let completed = store.complete("2").unwrap().clone();

        assert!(completed.completed);
        assert_eq!(completed.id, before.id);
        assert_eq!(completed.title, before.title);
        assert_eq!(completed.description, before.description);
        assert_eq!(completed.due_date, before.due_date);
        assert_eq!(completed.priority, before.priority);
        assert_eq!(completed.created_date, before.created_date);
        assert!(!store.list_all()[0].completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_is_idempotent(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        store.add(draft("Only")).unwrap();

        store.complete("1").unwrap();
        let again = store.complete("1").unwrap();

        assert!(again.completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_distinguishes_bad_format_from_missing(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        store.add(draft("Only")).unwrap();

        assert!(matches!(store.complete("abc"), Err(TaskError::InvalidIdFormat(raw)) if raw == "abc"));
        assert!(matches!(store.complete("1.5"), Err(TaskError::InvalidIdFormat(_))));
        assert!(matches!(store.complete("42"), Err(TaskError::NotFound(42))));
        assert!(!store.list_all()[0].completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_id_input_is_trimmed(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        store.add(draft("Only")).unwrap();

        assert!(store.complete(" 1 ").is_ok());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_removes_exactly_one(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        for i in 1..=3 {
            store.add(draft(&format!("Task {}", i))).unwrap();
        }

        let removed = store.delete("2").unwrap();

        assert_eq!(removed.id, 2);
        let remaining: Vec<i32> = store.list_all().iter().map(|task| task.id).collect();
        assert_eq!(remaining, vec![1, 3]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_missing_leaves_collection_unchanged(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        store.add(draft("Keep me")).unwrap();
        let before = store.list_all().to_vec();

        assert!(matches!(store.delete("9"), Err(TaskError::NotFound(9))));
        assert!(matches!(store.delete("nine"), Err(TaskError::InvalidIdFormat(_))));
        assert_eq!(store.list_all(), before.as_slice());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_deleted_ids_are_not_reused(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        store.add(draft("One")).unwrap();
        store.add(draft("Two")).unwrap();

        store.delete("2").unwrap();
        let next = store.add(draft("Three")).unwrap().task.id;

        assert_eq!(next, 3);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_completed_task_can_still_be_deleted(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        store.add(draft("Done soon")).unwrap();

        store.complete("1").unwrap();
        store.delete("1").unwrap();

        assert!(store.is_empty());
        assert!(matches!(store.complete("1"), Err(TaskError::NotFound(1))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_returns_task_or_error(ctx: &mut TaskTestContext) {
        let mut store = ctx.store();
        store.add(TaskDraft::new("Inspect", "the roof", "", "4")).unwrap();

        let task = store.get("1").unwrap();
        assert_eq!(task.description, "the roof");
        assert_eq!(task.status(), "Pending");
        assert!(matches!(store.get("2"), Err(TaskError::NotFound(2))));
        assert!(matches!(store.get(""), Err(TaskError::InvalidIdFormat(_))));
    }
}
