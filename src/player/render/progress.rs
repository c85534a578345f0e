//! Progress bar rendering for the terminal player.
//!
//! Displays segment progress with the playhead and `M:SS / M:SS` labels.

use std::io::Write;

use anyhow::Result;

use crate::player::state::ControlsView;
use crate::theme::{color_to_ansi, current_theme, ANSI_RESET};

/// First column of the bar
pub const BAR_START_COL: u16 = 1;

/// Columns kept free for padding and the time labels
const RESERVED_COLS: usize = 18;

/// Width of the bar for a terminal `width` columns wide.
pub fn bar_width(width: u16) -> usize {
    (width as usize).saturating_sub(RESERVED_COLS)
}

/// Whether `column` lies on the bar.
pub fn bar_contains(column: u16, width: u16) -> bool {
    let bar = bar_width(width);
    bar > 0 && column >= BAR_START_COL && ((column - BAR_START_COL) as usize) < bar
}

/// Map a column to a slider percentage. Columns past either end clamp.
pub fn column_to_percent(column: u16, width: u16) -> f64 {
    let bar = bar_width(width);
    if bar <= 1 {
        return 0.0;
    }
    let offset = column.saturating_sub(BAR_START_COL) as f64;
    (offset / (bar - 1) as f64 * 100.0).clamp(0.0, 100.0)
}

/// Build the progress bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `percent` - Slider position, 0..=100
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where bar_chars contains the visual
/// representation and filled_count is the number of filled positions.
pub fn build_progress_bar_chars(bar_width: usize, percent: f64) -> (Vec<char>, usize) {
    let progress = if percent.is_nan() {
        0.0
    } else {
        (percent / 100.0).clamp(0.0, 1.0)
    };

    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    for c in bar.iter_mut().take(filled) {
        *c = '━';
    }
    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Render the progress bar row of one instance.
///
/// # Arguments
/// * `out` - Writer to render into
/// * `width` - Terminal width
/// * `row` - Row to render at (0-indexed)
/// * `view` - Values recorded for the instance
pub fn render_progress_bar<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    view: &ControlsView,
) -> Result<()> {
    let theme = current_theme();
    let bar_width = bar_width(width);
    let (bar, filled) = build_progress_bar_chars(bar_width, view.progress);

    let time_display = format!(" {} / {}", view.current_time, view.duration);

    let mut output = String::with_capacity(width as usize * 4);
    output.push_str(&format!("\x1b[{};1H ", row + 1));

    const WHITE: &str = "\x1b[97m";

    output.push_str(color_to_ansi(theme.progress_filled));
    for (i, &c) in bar.iter().enumerate() {
        if i == filled {
            output.push_str(WHITE);
            output.push(c);
            output.push_str(color_to_ansi(theme.progress_empty));
        } else {
            output.push(c);
        }
    }

    output.push_str(color_to_ansi(theme.text_primary));
    output.push_str(&time_display);

    // Fill remaining width
    let used_width = 1 + bar_width + time_display.chars().count();
    let remaining = (width as usize).saturating_sub(used_width);
    output.push_str(&" ".repeat(remaining));

    output.push_str(ANSI_RESET);
    write!(out, "{}", output)?;

    Ok(())
}
