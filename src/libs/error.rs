use std::path::PathBuf;

/// Failures reported by the task store.
///
/// None of these are fatal: the console reports them and keeps running.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    /// The id text is not an integer.
    #[error("invalid ID format: '{0}'")]
    InvalidIdFormat(String),
    /// Well-formed id with no matching task.
    #[error("task {0} not found")]
    NotFound(i32),
    /// Every id up to `i32::MAX` has been handed out.
    #[error("no task ids left: {} has already been assigned", i32::MAX)]
    IdsExhausted,
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[source] serde_json::Error),
}
