//! Help overlay rendering for the terminal player.
//!
//! Displays a centered help overlay with all available controls.

use std::io::Write;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
};

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "╔═══════════════════════════════════════════╗",
    "║           Segment Player Help             ║",
    "╠═══════════════════════════════════════════╣",
    "║                                           ║",
    "║  Playback                                 ║",
    "║    Space / k    Play / Pause              ║",
    "║    <- / j       Seek back                 ║",
    "║    -> / l       Seek forward              ║",
    "║    - / +        Slower / Faster           ║",
    "║    Home / End   Segment start / end       ║",
    "║    Mouse drag   Scrub the progress bar    ║",
    "║                                           ║",
    "║  General                                  ║",
    "║    f            Fullscreen                ║",
    "║    Tab          Next player               ║",
    "║    ?            Show this help            ║",
    "║    q / Esc      Quit                      ║",
    "║                                           ║",
    "║         Press any key to close            ║",
    "╚═══════════════════════════════════════════╝",
];

/// Width of the help box (for centering calculations).
pub const HELP_BOX_WIDTH: usize = 45;

/// Calculate the starting row for centering the help box.
pub fn calc_help_start_row(term_height: u16) -> u16 {
    let box_height = HELP_LINES.len() as u16;
    (term_height.saturating_sub(box_height)) / 2
}

/// Calculate the starting column for centering the help box.
pub fn calc_help_start_col(term_width: u16) -> u16 {
    ((term_width as usize).saturating_sub(HELP_BOX_WIDTH) / 2) as u16
}

/// Render the help overlay on top of the current screen.
///
/// # Arguments
/// * `out` - Writer to render into
/// * `width` - Terminal width
/// * `height` - Terminal height
pub fn render_help<W: Write>(out: &mut W, width: u16, height: u16) -> Result<()> {
    let start_row = calc_help_start_row(height);
    let col = calc_help_start_col(width);

    for (i, line) in HELP_LINES.iter().enumerate() {
        let row = start_row + i as u16;
        queue!(
            out,
            MoveTo(col, row),
            SetForegroundColor(Color::Green),
            Print(line),
            ResetColor,
        )?;
    }

    Ok(())
}
