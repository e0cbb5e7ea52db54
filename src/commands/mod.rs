//! Console surface: clap command line and the interactive menu.
//!
//! Running `taskman` without a subcommand opens the menu, which saves once on
//! exit. Each task subcommand performs a single action and saves right away
//! when it changed something.

pub mod init;
pub mod menu;
pub mod task;

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(flatten)]
    Task(task::TaskCommand),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tasks file to use instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        Self::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let command = match self.command {
            Some(Commands::Init(args)) => return init::cmd(args),
            Some(Commands::Task(command)) => Some(command),
            None => None,
        };

        let mut config = Config::read().unwrap_or_else(|e| {
            msg_warning!(Message::ConfigLoadFailed(e.to_string()));
            Config::default()
        });
        if let Some(file) = self.file {
            config.tasks_file = file;
        }

        let (mut store, loaded) = task::open_store(&config);
        match command {
            Some(command) => {
                // Saving now would replace the unreadable file with only this change.
                if task::cmd(command, &mut store) {
                    if loaded {
                        task::save_store(&store);
                    } else {
                        msg_warning!(Message::SaveSkipped(store.path().display().to_string()));
                    }
                }
                Ok(())
            }
            None => menu::run(&mut store),
        }
    }
}
