//! In-memory task collection with id assignment and file persistence.
//!
//! The store owns every [`Task`] in insertion order together with the next id
//! to hand out. Lookups are linear scans over that order so listings, filters
//! and search results always come back in the order tasks were added.
//!
//! Operations that take an id accept the raw text the user typed and tell
//! apart text that is not an integer ([`TaskError::InvalidIdFormat`]) from an
//! integer that matches nothing ([`TaskError::NotFound`]). Neither mutates.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::libs::task::{PriorityFilter, TaskDraft};
//! use taskman::store::tasks::TaskStore;
//!
//! let mut store = TaskStore::new("tasks.json");
//! if let Err(e) = store.load() {
//!     eprintln!("{e}; starting with an empty task list");
//! }
//! store.add(TaskDraft::new("Write report", "weekly", "12/24/2026", "3"))?;
//! store.complete("1")?;
//! let urgent_first = store.filter_by_priority(PriorityFilter::All);
//! store.save()?;
//! # Ok::<(), taskman::libs::error::TaskError>(())
//! ```

use super::file::{read_tasks, write_tasks};
use crate::libs::error::TaskError;
use crate::libs::formatter::parse_due_date;
use crate::libs::task::{Priority, PriorityFilter, Task, TaskDraft};
use crate::msg_debug;
use chrono::{Duration, Local, NaiveDateTime};
use std::path::{Path, PathBuf};

/// Days added to the creation date when the due date cannot be parsed.
pub const DEFAULT_DUE_DAYS: i64 = 7;

/// Result of [`TaskStore::add`].
#[derive(Debug)]
pub struct AddOutcome<'a> {
    pub task: &'a Task,
    /// The due date input was unparsable and the default was used instead.
    pub due_date_defaulted: bool,
}

#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    // Wider than ids so that handing out `i32::MAX` leaves a value that no id can take.
    next_id: i64,
    default_due_days: i64,
}

impl TaskStore {
    /// Creates an empty store persisted at `path`. Nothing is read until [`load`](Self::load).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TaskStore {
            path: path.into(),
            tasks: Vec::new(),
            next_id: 1,
            default_due_days: DEFAULT_DUE_DAYS,
        }
    }

    pub fn with_default_due_days(mut self, days: i64) -> Self {
        self.default_due_days = days;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn next_id(&self) -> i64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Replaces the collection with the contents of the tasks file.
    ///
    /// A missing file leaves the store empty. On any read or parse failure the
    /// store is also left empty and the error is returned for reporting.
    /// Either way the next id is recomputed from what was loaded.
    pub fn load(&mut self) -> Result<usize, TaskError> {
        let loaded = read_tasks(&self.path);
        let result = match loaded {
            Ok(tasks) => {
                self.tasks = tasks.unwrap_or_default();
                Ok(self.tasks.len())
            }
            Err(e) => {
                self.tasks.clear();
                Err(e)
            }
        };
        self.next_id = self.tasks.iter().map(|task| task.id).max().map_or(1, |max| i64::from(max) + 1);

        msg_debug!(format!(
            "Loaded {} task(s) from {}, next id {}",
            self.tasks.len(),
            self.path.display(),
            self.next_id
        ));
        result
    }

    /// Overwrites the tasks file with the whole collection. Memory is untouched on failure.
    pub fn save(&self) -> Result<(), TaskError> {
        write_tasks(&self.path, &self.tasks)?;
        msg_debug!(format!("Saved {} task(s) to {}", self.tasks.len(), self.path.display()));
        Ok(())
    }

    /// All tasks in insertion order.
    pub fn list_all(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a new pending task built from raw user input.
    ///
    /// Fails only with [`TaskError::IdsExhausted`] once `i32::MAX` has been handed out;
    /// ids are never reused.
    pub fn add(&mut self, draft: TaskDraft) -> Result<AddOutcome<'_>, TaskError> {
        self.add_at(draft, Local::now().naive_local())
    }

    fn add_at(&mut self, draft: TaskDraft, now: NaiveDateTime) -> Result<AddOutcome<'_>, TaskError> {
        let id = i32::try_from(self.next_id).map_err(|_| TaskError::IdsExhausted)?;
        self.next_id += 1;
        msg_debug!(format!("Assigning id {} to '{}'", id, draft.title));

        let parsed_due = parse_due_date(&draft.due_date);
        let due_date_defaulted = parsed_due.is_none();
        let due_date = parsed_due.unwrap_or_else(|| now + Duration::days(self.default_due_days));

        self.tasks.push(Task {
            id,
            title: draft.title,
            description: draft.description,
            due_date,
            priority: Priority::from_choice(&draft.priority),
            completed: false,
            created_date: now,
        });

        let task = &self.tasks[self.tasks.len() - 1];
        Ok(AddOutcome { task, due_date_defaulted })
    }

    /// Looks up a single task by raw id text.
    pub fn get(&self, raw_id: &str) -> Result<&Task, TaskError> {
        let id = parse_id(raw_id)?;
        self.tasks.iter().find(|task| task.id == id).ok_or(TaskError::NotFound(id))
    }

    /// Marks a task completed. Completing an already completed task is a no-op success.
    pub fn complete(&mut self, raw_id: &str) -> Result<&Task, TaskError> {
        let id = parse_id(raw_id)?;
        let task = self.tasks.iter_mut().find(|task| task.id == id).ok_or(TaskError::NotFound(id))?;
        task.completed = true;
        Ok(&*task)
    }

    /// Removes a task and hands it back. Its id is never reassigned.
    pub fn delete(&mut self, raw_id: &str) -> Result<Task, TaskError> {
        let id = parse_id(raw_id)?;
        let index = self.tasks.iter().position(|task| task.id == id).ok_or(TaskError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    /// Tasks of one priority in insertion order, or all tasks most urgent first.
    ///
    /// The sort is stable, so equal priorities keep their insertion order.
    pub fn filter_by_priority(&self, filter: PriorityFilter) -> Vec<&Task> {
        match filter {
            PriorityFilter::Only(priority) => self.tasks.iter().filter(|task| task.priority == priority).collect(),
            PriorityFilter::All => {
                let mut sorted: Vec<&Task> = self.tasks.iter().collect();
                sorted.sort_by(|a, b| b.priority.cmp(&a.priority));
                sorted
            }
        }
    }

    /// Tasks whose title or description contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<&Task> {
        let needle = term.to_lowercase();
        self.tasks.iter().filter(|task| task.matches(&needle)).collect()
    }
}

/// Parses id text typed by the user.
pub fn parse_id(raw_id: &str) -> Result<i32, TaskError> {
    raw_id.trim().parse().map_err(|_| TaskError::InvalidIdFormat(raw_id.to_string()))
}
