//! Display formatting for time labels and the rate label.

/// Format a duration in seconds as `M:SS`.
///
/// Seconds are rounded to the nearest whole second. Negative and NaN
/// inputs are shown as `0:00`.
///
/// # Arguments
/// * `seconds` - Duration in seconds
///
/// # Returns
/// A string in M:SS format (minutes are not zero-padded)
pub fn format_time(seconds: f64) -> String {
    let total_secs = if seconds.is_nan() || seconds <= 0.0 {
        0
    } else {
        seconds.round() as u64
    };
    let mins = total_secs / 60;
    let secs = total_secs % 60;
    format!("{}:{:02}", mins, secs)
}

/// Format a playback rate for the rate label.
///
/// Whole rates show no decimal (`2×`), fractional rates show one (`1.1×`).
pub fn format_rate(rate: f64) -> String {
    if (rate - rate.round()).abs() < 1e-9 {
        format!("{:.0}×", rate)
    } else {
        format!("{:.1}×", rate)
    }
}
