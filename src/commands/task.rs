//! Task actions shared by the subcommands and the interactive menu.
//!
//! Each action takes already collected input, calls the store and renders the
//! outcome. Lookup failures and persistence failures are reported here and
//! never abort the session.

use crate::{
    libs::{
        config::Config,
        error::TaskError,
        formatter::format_short_date,
        messages::Message,
        task::{PriorityFilter, TaskDraft},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success,
    store::tasks::TaskStore,
};
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: String,
    /// Task description
    #[arg(short, long, default_value = "")]
    description: String,
    /// Due date (MM/DD/YYYY or YYYY-MM-DD); defaults to a week from now
    #[arg(long, default_value = "")]
    due: String,
    /// 1 = Low, 2 = Medium, 3 = High, 4 = Urgent
    #[arg(short, long, default_value = "1")]
    priority: String,
}

impl AddArgs {
    pub fn into_draft(self) -> TaskDraft {
        TaskDraft {
            title: self.title,
            description: self.description,
            due_date: self.due,
            priority: self.priority,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    #[command(about = "View all tasks")]
    List,
    #[command(about = "Add a new task")]
    Add(AddArgs),
    #[command(about = "Mark a task as complete")]
    Complete {
        /// Task ID
        id: String,
    },
    #[command(about = "Delete a task")]
    Delete {
        /// Task ID
        id: String,
    },
    #[command(about = "View tasks by priority")]
    Priority {
        /// 1 = Low, 2 = Medium, 3 = High, 4 = Urgent, anything else = all sorted by priority
        choice: Option<String>,
    },
    #[command(about = "Search tasks by title or description")]
    Search {
        /// Case-insensitive search term
        term: String,
    },
    #[command(about = "Show task details")]
    Show {
        /// Task ID
        id: String,
    },
}

/// Runs one subcommand. Returns whether the store changed and needs saving.
pub fn cmd(command: TaskCommand, store: &mut TaskStore) -> bool {
    match command {
        TaskCommand::List => {
            show_all(store);
            false
        }
        TaskCommand::Add(args) => add(store, args.into_draft()),
        TaskCommand::Complete { id } => complete(store, &id),
        TaskCommand::Delete { id } => delete(store, &id),
        TaskCommand::Priority { choice } => {
            show_by_priority(store, choice.as_deref().unwrap_or_default());
            false
        }
        TaskCommand::Search { term } => {
            search(store, &term);
            false
        }
        TaskCommand::Show { id } => {
            show(store, &id);
            false
        }
    }
}

/// Creates the configured store and loads it, reporting a failed load.
///
/// The flag is `false` when the file existed but could not be loaded.
pub fn open_store(config: &Config) -> (TaskStore, bool) {
    let mut store = config.store();
    match store.load() {
        Ok(_) => (store, true),
        Err(e) => {
            msg_error!(Message::TasksLoadFailed(e.to_string()));
            (store, false)
        }
    }
}

/// Saves the store, reporting failure. Returns whether the save succeeded.
pub fn save_store(store: &TaskStore) -> bool {
    match store.save() {
        Ok(()) => true,
        Err(e) => {
            report(&e);
            false
        }
    }
}

pub fn show_all(store: &TaskStore) {
    if store.is_empty() {
        msg_print!(Message::NoTasksFound);
        return;
    }

    msg_print!(Message::AllTasksHeader, true);
    View::tasks(store.list_all());
}

/// Returns whether a task was added.
pub fn add(store: &mut TaskStore, draft: TaskDraft) -> bool {
    match store.add(draft) {
        Ok(outcome) => {
            if outcome.due_date_defaulted {
                msg_info!(Message::DueDateDefaulted(format_short_date(&outcome.task.due_date)));
            }
            msg_success!(Message::TaskAdded(outcome.task.to_string()));
            true
        }
        Err(e) => {
            report(&e);
            false
        }
    }
}

/// Returns whether a task was marked complete.
pub fn complete(store: &mut TaskStore, raw_id: &str) -> bool {
    match store.complete(raw_id) {
        Ok(task) => {
            msg_success!(Message::TaskCompleted(task.id));
            true
        }
        Err(e) => {
            report(&e);
            false
        }
    }
}

/// Returns whether a task was removed.
pub fn delete(store: &mut TaskStore, raw_id: &str) -> bool {
    match store.delete(raw_id) {
        Ok(task) => {
            msg_success!(Message::TaskDeleted(task.to_string()));
            true
        }
        Err(e) => {
            report(&e);
            false
        }
    }
}

pub fn show_by_priority(store: &TaskStore, choice: &str) {
    let filter = PriorityFilter::from_choice(choice);
    let tasks = store.filter_by_priority(filter);

    let header = match filter {
        PriorityFilter::Only(priority) => Message::PriorityTasksHeader(priority),
        PriorityFilter::All => Message::AllTasksByPriorityHeader,
    };
    msg_print!(header, true);

    if tasks.is_empty() {
        msg_print!(Message::NoMatchingTasks);
        return;
    }
    View::tasks(tasks);
}

pub fn search(store: &TaskStore, term: &str) {
    let tasks = store.search(term);
    if tasks.is_empty() {
        msg_print!(Message::NoMatchingTasks);
        return;
    }

    msg_print!(Message::SearchResultsHeader(term.to_string()), true);
    View::tasks(tasks);
}

pub fn show(store: &TaskStore, raw_id: &str) {
    match store.get(raw_id) {
        Ok(task) => {
            msg_print!(Message::TaskDetailsHeader(task.id), true);
            View::task(task);
        }
        Err(e) => report(&e),
    }
}

/// Maps a store failure to its console message.
pub fn error_message(error: &TaskError) -> Message {
    match error {
        TaskError::InvalidIdFormat(raw) => Message::InvalidIdFormat(raw.clone()),
        TaskError::NotFound(id) => Message::TaskNotFound(*id),
        TaskError::IdsExhausted => Message::IdsExhausted,
        TaskError::Read { .. } | TaskError::Parse { .. } => Message::TasksLoadFailed(error.to_string()),
        TaskError::Write { .. } | TaskError::Serialize(_) => Message::TasksSaveFailed(error.to_string()),
    }
}

fn report(error: &TaskError) {
    msg_error!(error_message(error));
}
