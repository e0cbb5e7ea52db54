//! Display implementation for taskman messages.
//!
//! All console text is defined here in one match, so wording stays consistent
//! between the interactive menu and the one-shot subcommands. Parameterized
//! variants interpolate their values directly:
//!
//! ```rust
//! use taskman::libs::messages::Message;
//!
//! assert_eq!(Message::TaskNotFound(4).to_string(), "Task 4 not found.");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MenuTitle => "=== Task Management System ===".to_string(),
            Message::MenuViewAll => "View All Tasks".to_string(),
            Message::MenuAddTask => "Add New Task".to_string(),
            Message::MenuCompleteTask => "Mark Task as Complete".to_string(),
            Message::MenuDeleteTask => "Delete Task".to_string(),
            Message::MenuViewByPriority => "View Tasks by Priority".to_string(),
            Message::MenuSearchTasks => "Search Tasks".to_string(),
            Message::MenuExit => "Exit".to_string(),
            Message::PromptMenuChoice => "Choose an action".to_string(),
            Message::Goodbye => "Thank you for using taskman!".to_string(),

            // === TASK MESSAGES ===
            Message::NoTasksFound => "No tasks found.".to_string(),
            Message::NoMatchingTasks => "No matching tasks found.".to_string(),
            Message::AllTasksHeader => "=== All Tasks ===".to_string(),
            Message::PriorityTasksHeader(priority) => format!("=== {} Priority Tasks ===", priority),
            Message::AllTasksByPriorityHeader => "=== All Tasks (Sorted by Priority) ===".to_string(),
            Message::SearchResultsHeader(term) => format!("=== Search Results for '{}' ===", term),
            Message::TaskDetailsHeader(id) => format!("=== Task {} ===", id),
            Message::TaskAdded(summary) => format!("Task added successfully: {}", summary),
            Message::DueDateDefaulted(date) => format!("Invalid date format. Setting due date to {}", date),
            Message::TaskCompleted(id) => format!("Task {} marked as complete!", id),
            Message::TaskDeleted(summary) => format!("Task deleted successfully: {}", summary),
            Message::TaskNotFound(id) => format!("Task {} not found.", id),
            Message::InvalidIdFormat(raw) => format!("Invalid ID format: '{}'", raw),
            Message::IdsExhausted => "No task IDs left to assign.".to_string(),

            // === TASK PROMPTS ===
            Message::PromptTaskTitle => "Enter task title".to_string(),
            Message::PromptTaskDescription => "Enter task description".to_string(),
            Message::PromptDueDate => "Enter due date (MM/DD/YYYY)".to_string(),
            Message::PromptSelectPriority => "Select priority".to_string(),
            Message::PromptCompleteId => "Enter the ID of the task to mark as complete".to_string(),
            Message::PromptDeleteId => "Enter the ID of the task to delete".to_string(),
            Message::PromptPriorityView => "Select priority to view".to_string(),
            Message::PriorityViewAll => "All (sorted by priority)".to_string(),
            Message::PromptSearchTerm => "Enter search term".to_string(),

            // === PERSISTENCE MESSAGES ===
            Message::TasksLoadFailed(error) => {
                format!("Error loading tasks: {}\nStarting with an empty task list.", error)
            }
            Message::TasksSaveFailed(error) => format!("Error saving tasks: {}", error),
            Message::SaveSkipped(path) => {
                format!("{} could not be loaded, so it was left untouched and this change was not saved.", path)
            }

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigLoadFailed(error) => format!("Failed to read configuration, using defaults: {}", error),
            Message::PromptTasksFile => "Tasks file".to_string(),
            Message::PromptDefaultDueDays => "Default due date offset (days)".to_string(),
        };
        write!(f, "{}", text)
    }
}
