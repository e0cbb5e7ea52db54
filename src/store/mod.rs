//! Task store and its persisted file.
//!
//! - [`tasks`]: the owning collection and every create/read/update/delete/query operation
//! - [`file`]: whole-file JSON read and overwrite of the tasks file

pub mod file;
pub mod tasks;
