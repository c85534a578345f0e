//! Rendering components for the terminal player.
//!
//! This module contains all the UI rendering functions for the player:
//! per-instance title, progress bar and status rows, the error line, and
//! the help overlay.

mod help;
mod progress;
mod status;

pub use help::{calc_help_start_col, calc_help_start_row, render_help, HELP_BOX_WIDTH, HELP_LINES};
pub use progress::{
    bar_contains, bar_width, build_progress_bar_chars, column_to_percent, render_progress_bar,
    BAR_START_COL,
};
pub use status::{
    render_blank_line, render_error_line, render_separator_line, render_status_bar,
    render_title_line, segment_title,
};

use std::io::Write;

use anyhow::Result;
use crossterm::{
    queue,
    terminal::{Clear, ClearType},
};

use crate::player::state::{ControlsView, PageState, TerminalHost};
use crate::registry::InstanceRegistry;
use crate::theme::current_theme;

/// Draw the rows of one instance block below its title.
fn render_controls<W: Write>(out: &mut W, width: u16, top: u16, view: &ControlsView) -> Result<()> {
    if let Some(error) = &view.error {
        render_error_line(out, width, top + 1, error)?;
        render_blank_line(out, top + 2)?;
    } else if view.controls_visible {
        render_progress_bar(out, width, top + 1, view)?;
        render_status_bar(out, width, top + 2, view)?;
    } else {
        let theme = current_theme();
        // Escape rows are 1-based: this is block row top + 1
        write!(
            out,
            "\x1b[{};1H {}",
            top + 2,
            theme.secondary_text("Loading...")
        )?;
        render_blank_line(out, top + 2)?;
    }
    Ok(())
}

/// Redraw the whole page: header, every instance block, then the help
/// overlay of the focused instance if it is open.
pub fn render_page<W: Write>(
    out: &mut W,
    page: &PageState,
    registry: &InstanceRegistry<'_, TerminalHost>,
) -> Result<()> {
    let width = page.term_cols;
    queue!(out, Clear(ClearType::All))?;

    let theme = current_theme();
    write!(out, "\x1b[1;1H {}", theme.accent_text(&page.title))?;
    render_separator_line(out, width, 1)?;

    let mut help_open = false;
    for (index, controller) in registry.iter().enumerate() {
        let top = PageState::block_top(index);
        let view = &controller.ui().view;
        let focused = index == page.focus;
        render_title_line(
            out,
            width,
            top,
            &segment_title(controller.config()),
            focused,
        )?;
        render_controls(out, width, top, view)?;
        help_open |= focused && view.help_visible;
    }

    for (offset, rejected) in registry.rejected().iter().enumerate() {
        let top = PageState::block_top(registry.len() + offset);
        let title = if rejected.video_id.trim().is_empty() {
            rejected.instance_id.clone()
        } else {
            rejected.video_id.clone()
        };
        render_title_line(out, width, top, &title, false)?;
        render_controls(out, width, top, &rejected.ui.view)?;
    }

    if help_open {
        render_help(out, width, page.term_rows)?;
    }

    out.flush()?;
    Ok(())
}
