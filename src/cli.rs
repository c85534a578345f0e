//! Command-line interface definition
//!
//! Lives in the library so `xtask` can render the man page from it.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Version string with git SHA and build date
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("SEGPLAY_BUILD_DATE"),
    ")"
);

/// Version string with build date
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("SEGPLAY_BUILD_DATE"),
    ")"
);

#[derive(Debug, Parser)]
#[command(
    name = "segplay",
    version,
    long_version = LONG_VERSION,
    about = "Play a bounded segment of a video with custom transport controls",
    long_about = "Play a bounded segment of a video with custom transport controls.\n\n\
                  Each player keeps playback inside its [start, end) window: it starts at \
                  the start time, stops at the end time, and shows progress relative to the \
                  segment rather than the whole video."
)]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play one segment in the terminal
    #[command(long_about = "Play one segment in the terminal.\n\n\
        Times are whole seconds. Without --end the segment runs to the end of the video.\n\n\
        EXAMPLES:\n  \
        segplay play dQw4w9WgXcQ --start 30 --end 90\n  \
        segplay play dQw4w9WgXcQ --start 45 --duration 212")]
    Play {
        /// Video identifier
        video_id: String,

        /// Segment start in seconds
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        start: i64,

        /// Segment end in seconds (exclusive)
        #[arg(short, long, allow_negative_numbers = true)]
        end: Option<i64>,

        /// Simulated media length in seconds
        #[arg(long)]
        duration: Option<f64>,
    },

    /// Play every placement of a page manifest
    #[command(long_about = "Play every placement of a page manifest.\n\n\
        The manifest is TOML, or JSON when the file ends in .json. Tab switches \
        between players.\n\n\
        EXAMPLE MANIFEST:\n  \
        title = \"Clips\"\n\n  \
        [[player]]\n  \
        video_id = \"dQw4w9WgXcQ\"\n  \
        start_time = 30\n  \
        end_time = 90")]
    Page {
        /// Path to the manifest
        file: PathBuf,
    },

    /// Validate a page manifest without playing it
    Check {
        /// Path to the manifest
        file: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or write the configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
