//! Mutable per-instance playback session.

use crate::provider::PlayerState;
use crate::segment::{PollSettings, PollingScheduler};

/// Session state owned by one controller.
#[derive(Debug)]
pub struct PlaybackSession {
    /// True between the provider's ready event and the next error
    pub ready: bool,
    /// Last rate successfully applied to the provider
    pub current_rate: f64,
    /// Last state reported through a handled state-change event
    pub last_state: Option<PlayerState>,
    /// True while the user holds the progress slider
    pub dragging: bool,
    /// Progress and boundary timers
    pub scheduler: PollingScheduler,
}

impl PlaybackSession {
    /// Slowest supported rate.
    pub const MIN_RATE: f64 = 0.1;
    /// Fastest supported rate.
    pub const MAX_RATE: f64 = 3.0;

    pub fn new(settings: PollSettings) -> Self {
        Self {
            ready: false,
            current_rate: 1.0,
            last_state: None,
            dragging: false,
            scheduler: PollingScheduler::new(settings),
        }
    }

    /// Rate after applying `delta`, clamped and rounded to hundredths.
    pub fn next_rate(&self, delta: f64) -> f64 {
        let rate = (self.current_rate + delta).clamp(Self::MIN_RATE, Self::MAX_RATE);
        (rate * 100.0).round() / 100.0
    }

    /// Drop readiness and cancel both timers.
    pub fn invalidate(&mut self) {
        self.ready = false;
        self.dragging = false;
        self.scheduler.stop();
    }
}
