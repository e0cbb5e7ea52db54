use anyhow::Result;
use taskman::commands::Cli;
use taskman::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "taskman=debug";

/// Sends `tracing` output to stderr. Only installed in debug mode; otherwise
/// the message macros print directly.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    if is_debug_mode() {
        init_logging();
    }

    Cli::menu()
}
