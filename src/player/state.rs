//! Player state management
//!
//! Contains the terminal `UiHost` (`TerminalHost`), the plain values it
//! records (`ControlsView`), and the page-level layout and focus state
//! (`PageState`) shared by input handling and rendering.

use crate::controller::{PlayPauseGlyph, UiHost};

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// Exit the player normally
    Quit,
}

/// Last values pushed by a controller, ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsView {
    pub glyph: PlayPauseGlyph,
    /// Progress slider position, 0..=100
    pub progress: f64,
    pub current_time: String,
    pub duration: String,
    pub rate: String,
    /// When set, replaces the progress and status rows
    pub error: Option<String>,
    pub controls_visible: bool,
    pub help_visible: bool,
}

impl Default for ControlsView {
    fn default() -> Self {
        Self {
            glyph: PlayPauseGlyph::Play,
            progress: 0.0,
            current_time: "0:00".to_string(),
            duration: "0:00".to_string(),
            rate: "1×".to_string(),
            error: None,
            controls_visible: false,
            help_visible: false,
        }
    }
}

/// Terminal host for one player instance.
///
/// Records every update into a [`ControlsView`] and flags the screen dirty
/// when a value actually changed.
#[derive(Debug, Default)]
pub struct TerminalHost {
    pub view: ControlsView,
    pub needs_render: bool,
}

impl TerminalHost {
    fn update<T: PartialEq>(field: &mut T, value: T, needs_render: &mut bool) {
        if *field != value {
            *field = value;
            *needs_render = true;
        }
    }
}

impl UiHost for TerminalHost {
    fn set_play_pause(&mut self, glyph: PlayPauseGlyph) {
        Self::update(&mut self.view.glyph, glyph, &mut self.needs_render);
    }

    fn set_progress(&mut self, percent: f64) {
        Self::update(&mut self.view.progress, percent, &mut self.needs_render);
    }

    fn set_current_time(&mut self, label: &str) {
        if self.view.current_time != label {
            self.view.current_time = label.to_string();
            self.needs_render = true;
        }
    }

    fn set_duration(&mut self, label: &str) {
        if self.view.duration != label {
            self.view.duration = label.to_string();
            self.needs_render = true;
        }
    }

    fn set_rate(&mut self, label: &str) {
        if self.view.rate != label {
            self.view.rate = label.to_string();
            self.needs_render = true;
        }
    }

    fn show_error(&mut self, message: &str) {
        Self::update(
            &mut self.view.error,
            Some(message.to_string()),
            &mut self.needs_render,
        );
    }

    fn hide_error(&mut self) {
        Self::update(&mut self.view.error, None, &mut self.needs_render);
    }

    fn set_controls_visible(&mut self, visible: bool) {
        Self::update(
            &mut self.view.controls_visible,
            visible,
            &mut self.needs_render,
        );
    }

    fn set_help_visible(&mut self, visible: bool) {
        Self::update(&mut self.view.help_visible, visible, &mut self.needs_render);
    }
}

/// Page-wide state for the terminal player.
#[derive(Debug)]
pub struct PageState {
    /// Page title shown on the header row
    pub title: String,
    /// Index of the instance receiving keyboard input
    pub focus: usize,
    /// Instance whose progress bar is being dragged
    pub dragging: Option<usize>,
    /// Current terminal width
    pub term_cols: u16,
    /// Current terminal height
    pub term_rows: u16,
    /// True when the screen needs to be redrawn
    pub needs_render: bool,
}

impl PageState {
    /// Rows above the first instance block (title + separator)
    pub const HEADER_ROWS: u16 = 2;
    /// Rows per instance: title, progress, status, blank
    pub const BLOCK_ROWS: u16 = 4;

    pub fn new(title: impl Into<String>, term_cols: u16, term_rows: u16) -> Self {
        Self {
            title: title.into(),
            focus: 0,
            dragging: None,
            term_cols,
            term_rows,
            needs_render: true,
        }
    }

    /// First row of the block for instance `index`.
    pub fn block_top(index: usize) -> u16 {
        Self::HEADER_ROWS.saturating_add((index as u16).saturating_mul(Self::BLOCK_ROWS))
    }

    /// Row holding the progress bar of instance `index`.
    pub fn progress_row(index: usize) -> u16 {
        Self::block_top(index).saturating_add(1)
    }

    /// Instance whose progress bar sits on `row`, if any.
    pub fn instance_at_progress_row(row: u16, count: usize) -> Option<usize> {
        let offset = row.checked_sub(Self::HEADER_ROWS + 1)?;
        if offset % Self::BLOCK_ROWS != 0 {
            return None;
        }
        let index = (offset / Self::BLOCK_ROWS) as usize;
        (index < count).then_some(index)
    }

    /// Move keyboard focus to the next instance, wrapping around.
    pub fn focus_next(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        self.focus = (self.focus + 1) % count;
        self.needs_render = true;
    }

    /// Handle terminal resize event.
    pub fn handle_resize(&mut self, new_cols: u16, new_rows: u16) {
        self.term_cols = new_cols;
        self.term_rows = new_rows;
        self.needs_render = true;
    }
}
