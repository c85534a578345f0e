//! segplay CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use segplay::cli::{Cli, Commands, ConfigCommands};
use segplay::logging::init_logging;
use segplay::Config;

fn config_path(cli: &Cli) -> Result<PathBuf> {
    match &cli.config {
        Some(path) => Ok(path.clone()),
        None => Config::config_path(),
    }
}

/// Interactive commands log to a file so output doesn't tear the screen.
fn log_file(command: &Commands, config: &Config) -> Result<Option<PathBuf>> {
    match command {
        Commands::Play { .. } | Commands::Page { .. } => match &config.logging.file {
            Some(path) => Ok(Some(path.clone())),
            None => Ok(Some(Config::default_log_path()?)),
        },
        _ => Ok(config.logging.file.clone()),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = config_path(&cli)?;
    let config = Config::load_from(&config_path)?;

    let log_file = log_file(&cli.command, &config)?;
    init_logging(&config.logging.level, cli.verbose, log_file.as_deref())?;
    tracing::debug!(config = %config_path.display(), "configuration loaded");

    match cli.command {
        Commands::Play {
            video_id,
            start,
            end,
            duration,
        } => commands::play::handle_play(&video_id, start, end, duration, &config),
        Commands::Page { file } => commands::play::handle_page(&file, &config),
        Commands::Check { file, json } => commands::check::handle(&file, json),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(&config),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(&config_path),
        Commands::Config(ConfigCommands::Init { force }) => {
            commands::config::handle_init(&config_path, force)
        }
        Commands::Completions { shell } => commands::handle_completions(shell),
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        let theme = segplay::theme::current_theme();
        eprintln!("{} {:#}", theme.error_text("error:"), e);
        std::process::exit(1);
    }
}
