//! Segment clock: absolute provider time <-> logical segment time.
//!
//! The logical clock starts at the configured start time. Its length is
//! the bounded segment when an end time is set, otherwise whatever remains
//! of the media after the start time. Everything here is pure.

use crate::segment::config::PlayerConfig;

/// Position of the playhead in segment coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogicalPosition {
    /// Seconds since the segment start (never negative)
    pub logical_elapsed: f64,
    /// Progress through the segment, 0..=100
    pub progress_percent: f64,
    /// Length of the logical clock in seconds
    pub logical_duration: f64,
}

/// Length of the logical clock.
///
/// # Arguments
/// * `config` - Player configuration
/// * `reported_duration` - Total media duration as reported by the provider
///   (0 or NaN when the provider does not know it yet)
pub fn logical_duration(config: &PlayerConfig, reported_duration: f64) -> f64 {
    match config.segment_duration() {
        Some(segment) => segment,
        None => {
            let total = if reported_duration.is_finite() {
                reported_duration
            } else {
                0.0
            };
            (total - config.start_time()).max(0.0)
        }
    }
}

/// Map an absolute provider time onto the logical segment clock.
pub fn to_logical(
    absolute_time: f64,
    config: &PlayerConfig,
    reported_duration: f64,
) -> LogicalPosition {
    let duration = logical_duration(config, reported_duration);
    let elapsed = if absolute_time.is_nan() {
        0.0
    } else {
        (absolute_time - config.start_time()).max(0.0)
    };

    let progress = if duration > 0.0 {
        (elapsed / duration * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    LogicalPosition {
        logical_elapsed: elapsed,
        progress_percent: progress,
        logical_duration: duration,
    }
}

/// Map a progress percentage back to an absolute seek target.
///
/// The result always lies within `[start, end]` (or `[start, start + remaining]`
/// for open-ended placements).
pub fn from_logical_percent(percent: f64, config: &PlayerConfig, reported_duration: f64) -> f64 {
    let percent = if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    };
    let start = config.start_time();
    let duration = logical_duration(config, reported_duration);
    let upper = config.end_time().unwrap_or(start + duration);

    (start + percent / 100.0 * duration).clamp(start, upper)
}
