//! Player placement configuration.
//!
//! A `PlayerConfig` is validated once at construction and never changes.

use serde::Serialize;

use crate::error::ConfigError;

/// Immutable configuration for one player instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerConfig {
    video_id: String,
    start_time: f64,
    end_time: Option<f64>,
}

impl PlayerConfig {
    /// Validate and build a configuration.
    ///
    /// # Errors
    /// * `MissingVideoId` - id is empty or whitespace
    /// * `InvalidStart` / `NegativeStart` - start is NaN, infinite or below zero
    /// * `InvalidEnd` - end is present but infinite
    /// * `EndNotAfterStart` - end is present and not strictly after start
    pub fn new(
        video_id: impl Into<String>,
        start_time: f64,
        end_time: Option<f64>,
    ) -> Result<Self, ConfigError> {
        let video_id = video_id.into().trim().to_string();
        if video_id.is_empty() {
            return Err(ConfigError::MissingVideoId);
        }
        if !start_time.is_finite() {
            return Err(ConfigError::InvalidStart);
        }
        if start_time < 0.0 {
            return Err(ConfigError::NegativeStart { start: start_time });
        }
        if let Some(end) = end_time {
            if end.is_infinite() {
                return Err(ConfigError::InvalidEnd);
            }
            if end.is_nan() || end <= start_time {
                return Err(ConfigError::EndNotAfterStart {
                    start: start_time,
                    end,
                });
            }
        }

        Ok(Self {
            video_id,
            start_time,
            end_time,
        })
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn end_time(&self) -> Option<f64> {
        self.end_time
    }

    /// Length of the bounded segment, or `None` for an open-ended placement.
    pub fn segment_duration(&self) -> Option<f64> {
        self.end_time.map(|end| end - self.start_time)
    }
}
