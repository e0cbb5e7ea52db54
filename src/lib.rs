//! # Taskman
//!
//! A single-user console task tracker. Tasks carry a title, description, due
//! date, priority and completion flag, and are kept in a JSON file between runs.
//!
//! ## Features
//!
//! - **Task Store**: add, complete, delete, filter by priority and search tasks
//! - **Persistence**: whole-file JSON load and save with non-fatal failures
//! - **Console**: interactive menu plus one-shot subcommands
//! - **Configuration**: tasks file location and default due date offset
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod store;
