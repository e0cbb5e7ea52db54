//! Interactive menu loop.
//!
//! Seven actions, each mapped to one store operation. Free text typed at the
//! prompts goes to the store unmodified so it can tell a malformed id from an
//! unknown one. The store is saved exactly once, when the loop ends, even if a
//! prompt fails.

use super::task;
use crate::{
    libs::{
        messages::Message,
        task::{Priority, TaskDraft},
    },
    msg_print,
    store::tasks::TaskStore,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    ViewAll,
    Add,
    Complete,
    Delete,
    ViewByPriority,
    Search,
    Exit,
}

impl MenuAction {
    const ALL: [MenuAction; 7] = [
        MenuAction::ViewAll,
        MenuAction::Add,
        MenuAction::Complete,
        MenuAction::Delete,
        MenuAction::ViewByPriority,
        MenuAction::Search,
        MenuAction::Exit,
    ];

    fn label(&self) -> Message {
        match self {
            MenuAction::ViewAll => Message::MenuViewAll,
            MenuAction::Add => Message::MenuAddTask,
            MenuAction::Complete => Message::MenuCompleteTask,
            MenuAction::Delete => Message::MenuDeleteTask,
            MenuAction::ViewByPriority => Message::MenuViewByPriority,
            MenuAction::Search => Message::MenuSearchTasks,
            MenuAction::Exit => Message::MenuExit,
        }
    }

    /// Actions that have nothing to work on while the store is empty.
    fn needs_tasks(&self) -> bool {
        !matches!(self, MenuAction::Add | MenuAction::Exit)
    }
}

pub fn run(store: &mut TaskStore) -> Result<()> {
    let result = run_loop(store);
    task::save_store(store);
    msg_print!(Message::Goodbye);
    result
}

fn run_loop(store: &mut TaskStore) -> Result<()> {
    let labels: Vec<String> = MenuAction::ALL.iter().map(|action| action.label().to_string()).collect();

    loop {
        msg_print!(Message::MenuTitle, true);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptMenuChoice.to_string())
            .items(&labels)
            .default(0)
            .interact()?;
        let action = MenuAction::ALL[selection];

        if action.needs_tasks() && store.is_empty() {
            msg_print!(Message::NoTasksFound);
            continue;
        }

        match action {
            MenuAction::ViewAll => task::show_all(store),
            MenuAction::Add => {
                task::add(store, prompt_draft()?);
            }
            MenuAction::Complete => {
                task::show_all(store);
                let raw_id = prompt_text(Message::PromptCompleteId)?;
                task::complete(store, &raw_id);
            }
            MenuAction::Delete => {
                task::show_all(store);
                let raw_id = prompt_text(Message::PromptDeleteId)?;
                task::delete(store, &raw_id);
            }
            MenuAction::ViewByPriority => {
                let choice = prompt_priority_view()?;
                task::show_by_priority(store, &choice);
            }
            MenuAction::Search => {
                let term = prompt_text(Message::PromptSearchTerm)?;
                task::search(store, &term);
            }
            MenuAction::Exit => return Ok(()),
        }
    }
}

fn prompt_text(prompt: Message) -> Result<String> {
    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}

fn prompt_draft() -> Result<TaskDraft> {
    let title = prompt_text(Message::PromptTaskTitle)?;
    let description = prompt_text(Message::PromptTaskDescription)?;
    let due_date = prompt_text(Message::PromptDueDate)?;

    let priorities: Vec<&str> = Priority::ALL.iter().map(|priority| priority.name()).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSelectPriority.to_string())
        .items(&priorities)
        .default(0)
        .interact()?;

    Ok(TaskDraft {
        title,
        description,
        due_date,
        priority: (selection + 1).to_string(),
    })
}

/// Returns the selector `"1"`..`"5"`; the last entry means all priorities.
fn prompt_priority_view() -> Result<String> {
    let mut items: Vec<String> = Priority::ALL.iter().map(|priority| priority.to_string()).collect();
    items.push(Message::PriorityViewAll.to_string());

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPriorityView.to_string())
        .items(&items)
        .default(items.len() - 1)
        .interact()?;
    Ok((selection + 1).to_string())
}
