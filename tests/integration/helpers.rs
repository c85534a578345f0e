//! Shared helpers for integration tests

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use segplay::controller::PlayPauseGlyph;
use segplay::provider::simulated::SimClock;
use segplay::UiHost;

/// UiHost that keeps the last value of every control.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub glyph: Option<PlayPauseGlyph>,
    pub progress: Option<f64>,
    pub current_time: String,
    pub duration: String,
    pub rate: String,
    pub error: Option<String>,
    pub controls_visible: bool,
}

impl UiHost for RecordingHost {
    fn set_play_pause(&mut self, glyph: PlayPauseGlyph) {
        self.glyph = Some(glyph);
    }

    fn set_progress(&mut self, percent: f64) {
        self.progress = Some(percent);
    }

    fn set_current_time(&mut self, label: &str) {
        self.current_time = label.to_string();
    }

    fn set_duration(&mut self, label: &str) {
        self.duration = label.to_string();
    }

    fn set_rate(&mut self, label: &str) {
        self.rate = label.to_string();
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn hide_error(&mut self) {
        self.error = None;
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.controls_visible = visible;
    }

    fn set_help_visible(&mut self, _visible: bool) {}
}

/// Manually advanced clock shared by the simulated provider and the test.
pub struct ManualClock {
    now: Rc<Cell<Instant>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(Instant::now())),
        }
    }

    pub fn now(&self) -> Instant {
        self.now.get()
    }

    pub fn advance(&self, by: Duration) -> Instant {
        self.now.set(self.now.get() + by);
        self.now.get()
    }

    pub fn sim_clock(&self) -> SimClock {
        let handle = self.now.clone();
        Rc::new(move || handle.get())
    }
}
