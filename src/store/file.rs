//! The persisted tasks file.
//!
//! The file holds a JSON array of task objects and is read whole at load and
//! rewritten whole at save:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Write weekly report",
//!     "description": "",
//!     "dueDate": "2026-10-26T09:30:00",
//!     "priority": "High",
//!     "completed": false,
//!     "createdDate": "2026-10-19T09:30:00"
//!   }
//! ]
//! ```

use crate::libs::error::TaskError;
use crate::libs::task::Task;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Default file name, resolved against the working directory.
pub const TASKS_FILE_NAME: &str = "tasks.json";

/// Reads the tasks file. A missing file yields `Ok(None)`.
pub fn read_tasks(path: &Path) -> Result<Option<Vec<Task>>, TaskError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(TaskError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let tasks = serde_json::from_str(&content).map_err(|source| TaskError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Some(tasks))
}

/// Overwrites the tasks file with the given tasks as pretty-printed JSON.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<(), TaskError> {
    let json = serde_json::to_string_pretty(tasks).map_err(TaskError::Serialize)?;

    let write_error = |source| TaskError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, json).map_err(write_error)
}
