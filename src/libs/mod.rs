//! Core library modules for the taskman application.
//!
//! - **Domain**: [`task`] record and priority types, [`formatter`] for due dates
//! - **Errors**: [`error`] with the store's failure taxonomy
//! - **Settings**: [`config`] backed by [`data_storage`]
//! - **Console**: [`messages`] text and output macros, [`view`] tables
//!
//! ```rust
//! use taskman::libs::task::{Priority, PriorityFilter};
//!
//! assert_eq!(Priority::from_choice("4"), Priority::Urgent);
//! assert_eq!(PriorityFilter::from_choice("5"), PriorityFilter::All);
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod messages;
pub mod task;
pub mod view;
