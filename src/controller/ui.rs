//! Presentation surface driven by the controller.
//!
//! The controller only pushes plain values (percentages, preformatted
//! labels, visibility flags). How they are drawn is up to the host.

/// Icon shown on the play/pause affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayPauseGlyph {
    /// Playback is stopped; pressing resumes
    #[default]
    Play,
    /// Playback is running; pressing pauses
    Pause,
}

impl PlayPauseGlyph {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Play => "▶",
            Self::Pause => "⏸",
        }
    }
}

/// Host that renders one player's controls.
pub trait UiHost {
    fn set_play_pause(&mut self, glyph: PlayPauseGlyph);

    /// Progress slider position, 0..=100.
    fn set_progress(&mut self, percent: f64);

    fn set_current_time(&mut self, label: &str);

    fn set_duration(&mut self, label: &str);

    fn set_rate(&mut self, label: &str);

    /// Replace the controls with a single-line error.
    fn show_error(&mut self, message: &str);

    fn hide_error(&mut self);

    fn set_controls_visible(&mut self, visible: bool);

    fn set_help_visible(&mut self, visible: bool);
}
