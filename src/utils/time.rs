/// Format seconds as `M:SS`.
///
/// Fractions are floored and minutes are not folded into hours. Negative and
/// non-finite input renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    let minutes = total / 60;
    let seconds = total % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Fraction of the media played, or `None` while the duration is unknown
pub fn progress_ratio(current_time: f64, duration: f64) -> Option<f64> {
    if duration > 0.0 {
        Some(current_time / duration)
    } else {
        None
    }
}
