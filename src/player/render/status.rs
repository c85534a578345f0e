//! Title, status and error rows for the terminal player.

use std::io::Write;

use anyhow::Result;

use crate::player::state::ControlsView;
use crate::segment::{format_time, PlayerConfig};
use crate::theme::{color_to_ansi, current_theme, ANSI_RESET};

const WHITE: &str = "\x1b[97m";
const CYAN: &str = "\x1b[36m";

/// Title for an instance: video id plus its segment range.
pub fn segment_title(config: &PlayerConfig) -> String {
    let start = format_time(config.start_time());
    match config.end_time() {
        Some(end) => format!("{}  [{} - {}]", config.video_id(), start, format_time(end)),
        None => format!("{}  [{} - end]", config.video_id(), start),
    }
}

/// Pad `output` with spaces so the row overwrites leftover content.
fn pad_to_width(output: &mut String, visible_len: usize, width: u16) {
    let padding = (width as usize).saturating_sub(visible_len);
    output.push_str(&" ".repeat(padding));
}

/// Render a separator line.
pub fn render_separator_line<W: Write>(out: &mut W, width: u16, row: u16) -> Result<()> {
    let mut output = String::with_capacity(width as usize * 3 + 20);
    output.push_str(&format!("\x1b[{};1H\x1b[90m", row + 1));
    output.push_str(&"─".repeat(width as usize));
    output.push_str(ANSI_RESET);
    write!(out, "{}", output)?;
    Ok(())
}

/// Render the title row of an instance. The focused instance gets a marker.
pub fn render_title_line<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    title: &str,
    focused: bool,
) -> Result<()> {
    let theme = current_theme();
    let mut output = String::with_capacity(width as usize + 32);
    output.push_str(&format!("\x1b[{};1H", row + 1));

    let marker = if focused { "› " } else { "  " };
    output.push_str(color_to_ansi(theme.accent));
    output.push_str(marker);
    output.push_str(if focused {
        WHITE
    } else {
        color_to_ansi(theme.text_primary)
    });

    let max_title = (width as usize).saturating_sub(2);
    let title: String = title.chars().take(max_title).collect();
    output.push_str(&title);
    pad_to_width(&mut output, 2 + title.chars().count(), width);

    output.push_str(ANSI_RESET);
    write!(out, "{}", output)?;
    Ok(())
}

/// Render the status/controls row: play state, rate and key hints.
pub fn render_status_bar<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    view: &ControlsView,
) -> Result<()> {
    let theme = current_theme();
    let dark_grey = color_to_ansi(theme.text_secondary);

    let mut output = String::with_capacity(256);
    let mut visible_len: usize = 0;

    output.push_str(&format!("\x1b[{};1H", row + 1));

    output.push_str(WHITE);
    output.push(' ');
    output.push_str(view.glyph.symbol());
    output.push_str("  ");
    visible_len += 5; // space + double-width icon + 2 spaces

    output.push_str(dark_grey);
    output.push_str("rate:");
    output.push_str(WHITE);
    output.push_str(&view.rate);
    output.push(' ');
    visible_len += 5 + view.rate.chars().count() + 1;

    let play_action = if view.glyph == crate::controller::PlayPauseGlyph::Pause {
        ":pause "
    } else {
        ":play "
    };
    let hints: [(&str, &str); 6] = [
        ("space", play_action),
        ("←/→", ":seek "),
        ("-/+", ":rate "),
        ("tab", ":next "),
        ("?", ":hlp "),
        ("q", ":quit"),
    ];

    output.push_str(dark_grey);
    output.push_str("│ ");
    visible_len += 2;
    for (key, action) in hints {
        output.push_str(CYAN);
        output.push_str(key);
        output.push_str(dark_grey);
        output.push_str(action);
        visible_len += key.chars().count() + action.len();
    }

    pad_to_width(&mut output, visible_len, width);
    output.push_str(ANSI_RESET);
    write!(out, "{}", output)?;

    Ok(())
}

/// Render the single-line error shown in place of the controls.
pub fn render_error_line<W: Write>(
    out: &mut W,
    width: u16,
    row: u16,
    message: &str,
) -> Result<()> {
    let theme = current_theme();
    let mut output = String::with_capacity(width as usize + 32);
    output.push_str(&format!("\x1b[{};1H ", row + 1));
    output.push_str(color_to_ansi(theme.error));

    let max_len = (width as usize).saturating_sub(1);
    let message: String = message.chars().take(max_len).collect();
    output.push_str(&message);
    pad_to_width(&mut output, 1 + message.chars().count(), width);

    output.push_str(ANSI_RESET);
    write!(out, "{}", output)?;
    Ok(())
}

/// Blank out a row.
pub fn render_blank_line<W: Write>(out: &mut W, row: u16) -> Result<()> {
    write!(out, "\x1b[{};1H\x1b[2K", row + 1)?;
    Ok(())
}
