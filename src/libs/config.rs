//! Configuration for the taskman application.
//!
//! Settings live in `config.json` inside the platform application data directory:
//!
//! - **Windows**: `%LOCALAPPDATA%\taskman\config.json`
//! - **macOS**: `~/Library/Application Support/taskman/config.json`
//! - **Linux**: `~/.local/share/taskman/config.json`
//!
//! A missing file is not an error: every field has a default and the tool runs
//! without any setup. `taskman init` walks through the settings interactively.
//!
//! ```rust,no_run
//! use taskman::libs::config::Config;
//!
//! let mut config = Config::read()?;
//! config.default_due_days = 14;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::store::file::TASKS_FILE_NAME;
use crate::store::tasks::{TaskStore, DEFAULT_DUE_DAYS};
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Where tasks are persisted. Relative paths resolve against the working directory.
    pub tasks_file: PathBuf,

    /// Days from creation used as the due date when the entered date cannot be parsed.
    pub default_due_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tasks_file: PathBuf::from(TASKS_FILE_NAME),
            default_due_days: DEFAULT_DUE_DAYS,
        }
    }
}

impl Config {
    /// Reads the configuration from the application data directory.
    ///
    /// Returns the defaults when no configuration file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from an explicit path.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Writes the configuration to the application data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Writes the configuration as pretty-printed JSON to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path).with_context(|| format!("writing {}", path.display()))?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard, pre-filled with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let tasks_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTasksFile.to_string())
            .default(current.tasks_file.display().to_string())
            .interact_text()?;

        let default_due_days: i64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultDueDays.to_string())
            .default(current.default_due_days)
            .interact_text()?;

        Ok(Config {
            tasks_file: PathBuf::from(tasks_file),
            default_due_days,
        })
    }

    /// Builds an empty store wired to these settings. Call `load` on it next.
    pub fn store(&self) -> TaskStore {
        TaskStore::new(self.tasks_file.clone()).with_default_due_days(self.default_due_days)
    }
}
