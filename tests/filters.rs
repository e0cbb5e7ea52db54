#[cfg(test)]
mod tests {
    use taskman::libs::task::{Priority, PriorityFilter, TaskDraft};
    use taskman::store::tasks::TaskStore;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct FilterTestContext {
        _temp_dir: TempDir,
        store: TaskStore,
    }

    impl TestContext for FilterTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let mut store = TaskStore::new(temp_dir.path().join("tasks.json"));
            // Low, Urgent, Medium, Urgent
            store.add(TaskDraft::new("Water plants", "", "", "1")).unwrap();
            store.add(TaskDraft::new("Report", "Quarterly numbers", "", "4")).unwrap();
            store.add(TaskDraft::new("Email Bob", "about the weekly report", "", "2")).unwrap();
            store.add(TaskDraft::new("Fix build", "", "", "4")).unwrap();
            FilterTestContext {
                _temp_dir: temp_dir,
                store,
            }
        }
    }

    fn ids(tasks: &[&taskman::libs::task::Task]) -> Vec<i32> {
        tasks.iter().map(|task| task.id).collect()
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_all_sorts_by_priority_descending_and_stable(ctx: &mut FilterTestContext) {
        let sorted = ctx.store.filter_by_priority(PriorityFilter::All);

        let priorities: Vec<Priority> = sorted.iter().map(|task| task.priority).collect();
        assert_eq!(priorities, vec![Priority::Urgent, Priority::Urgent, Priority::Medium, Priority::Low]);
        assert_eq!(ids(&sorted), vec![2, 4, 3, 1]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_all_does_not_reorder_the_store(ctx: &mut FilterTestContext) {
        ctx.store.filter_by_priority(PriorityFilter::All);

        let order: Vec<i32> = ctx.store.list_all().iter().map(|task| task.id).collect();
        assert_eq!(order, vec![1, 2, 3, 4]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_single_priority_keeps_insertion_order(ctx: &mut FilterTestContext) {
        let urgent = ctx.store.filter_by_priority(PriorityFilter::Only(Priority::Urgent));

        assert_eq!(ids(&urgent), vec![2, 4]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_no_matching_priority_is_empty(ctx: &mut FilterTestContext) {
        assert!(ctx.store.filter_by_priority(PriorityFilter::Only(Priority::High)).is_empty());
    }

    #[test]
    fn test_priority_filter_selectors() {
        assert_eq!(PriorityFilter::from_choice("1"), PriorityFilter::Only(Priority::Low));
        assert_eq!(PriorityFilter::from_choice("3"), PriorityFilter::Only(Priority::High));
        assert_eq!(PriorityFilter::from_choice("5"), PriorityFilter::All);
        assert_eq!(PriorityFilter::from_choice("x"), PriorityFilter::All);
    }

    #[test]
    fn test_priority_order() {
        assert!(Priority::Low < Priority::Medium);
        assert!(Priority::Medium < Priority::High);
        assert!(Priority::High < Priority::Urgent);
        assert_eq!(Priority::from_ordinal(2), Some(Priority::High));
        assert_eq!(Priority::from_ordinal(4), None);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_search_is_case_insensitive_over_title_and_description(ctx: &mut FilterTestContext) {
        let found = ctx.store.search("report");

        assert_eq!(ids(&found), vec![2, 3]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_search_uppercase_term(ctx: &mut FilterTestContext) {
        assert_eq!(ids(&ctx.store.search("QUARTERLY")), vec![2]);
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_search_without_match_is_empty(ctx: &mut FilterTestContext) {
        assert!(ctx.store.search("vacation").is_empty());
    }

    #[test_context(FilterTestContext)]
    #[test]
    fn test_empty_search_term_matches_everything(ctx: &mut FilterTestContext) {
        assert_eq!(ids(&ctx.store.search("")), vec![1, 2, 3, 4]);
    }
}
