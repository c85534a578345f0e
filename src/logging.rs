//! Tracing subscriber setup.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Build the filter: `SEGPLAY_LOG`, then `RUST_LOG`, then `default_level`.
fn build_filter(default_level: &str, verbose: bool) -> EnvFilter {
    std::env::var("SEGPLAY_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| {
                if verbose {
                    EnvFilter::new("debug")
                } else {
                    EnvFilter::try_new(default_level).unwrap_or_else(|_| EnvFilter::new("info"))
                }
            },
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new("info")),
        )
}

/// Install the global subscriber.
///
/// With `file` set, events are appended there without ANSI colors; this is
/// what the interactive player uses, since it owns the terminal. Otherwise
/// events go to stderr.
pub fn init_logging(default_level: &str, verbose: bool, file: Option<&Path>) -> Result<()> {
    let filter = build_filter(default_level, verbose);

    let result = match file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create log directory: {}", parent.display())
                })?;
            }
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;

            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        }
        None => {
            let subscriber = FmtSubscriber::builder()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
        }
    };

    if let Err(err) = result {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
    Ok(())
}
