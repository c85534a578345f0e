//! End-of-segment enforcement.
//!
//! The provider has no "stop at" primitive, so the controller samples the
//! playhead and pauses once it is within `padding` of the end. A sample
//! that already ran past the end by more than [`SEEK_TOLERANCE`] gets a
//! corrective seek back onto the boundary.

use crate::provider::PlayerState;

/// Default distance before the end time at which playback is stopped.
pub const END_TIME_PADDING: f64 = 0.2;

/// Maximum distance from the end time that is left uncorrected.
pub const SEEK_TOLERANCE: f64 = 0.1;

/// What the controller must do after a boundary check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryAction {
    /// Still inside the segment (or not playing)
    Continue,
    /// Pause; if `seek_to` is set, also seek there exactly
    Stop { seek_to: Option<f64> },
}

/// Decides when playback has reached the end of a bounded segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryMonitor {
    end_time: f64,
    padding: f64,
}

impl BoundaryMonitor {
    /// Create a monitor for a segment ending at `end_time`.
    pub fn new(end_time: f64, padding: f64) -> Self {
        Self {
            end_time,
            padding: padding.max(0.0),
        }
    }

    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// Evaluate one sample of the provider.
    ///
    /// # Arguments
    /// * `current_time` - Absolute provider time
    /// * `state` - Provider state at the time of the sample
    pub fn check(&self, current_time: f64, state: PlayerState) -> BoundaryAction {
        if state != PlayerState::Playing || current_time.is_nan() {
            return BoundaryAction::Continue;
        }
        if current_time < self.end_time - self.padding {
            return BoundaryAction::Continue;
        }

        let seek_to = if (current_time - self.end_time).abs() > SEEK_TOLERANCE {
            Some(self.end_time)
        } else {
            None
        };
        BoundaryAction::Stop { seek_to }
    }
}
