//! Play and page command handlers

use anyhow::{bail, Result};
use std::path::Path;

use segplay::page::{Page, Placement};
use segplay::player::play_page;
use segplay::Config;

/// The interactive player owns the terminal; refuse to start without one.
fn ensure_terminal() -> Result<()> {
    if !atty::is(atty::Stream::Stdout) || !atty::is(atty::Stream::Stdin) {
        bail!("The player needs an interactive terminal");
    }
    Ok(())
}

/// Play a single segment.
#[cfg(not(tarpaulin_include))]
pub fn handle_play(
    video_id: &str,
    start: i64,
    end: Option<i64>,
    duration: Option<f64>,
    config: &Config,
) -> Result<()> {
    ensure_terminal()?;
    let page = Page {
        title: Some(format!("segplay {}", video_id)),
        players: vec![Placement {
            video_id: video_id.to_string(),
            start_time: Some(start),
            end_time: end,
            duration,
        }],
    };
    play_page(&page, config)
}

/// Play every placement of a manifest.
#[cfg(not(tarpaulin_include))]
pub fn handle_page(file: &Path, config: &Config) -> Result<()> {
    let mut page = Page::load(file)?;
    if page.players.is_empty() {
        bail!("No placements found in {}", file.display());
    }
    ensure_terminal()?;
    if page.title.is_none() {
        page.title = Some(file.display().to_string());
    }
    play_page(&page, config)
}
