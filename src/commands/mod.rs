//! Subcommand handlers

pub mod check;
pub mod config;
pub mod play;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::Shell;

use segplay::cli::Cli;

/// Write shell completions for `shell` to stdout.
pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}
