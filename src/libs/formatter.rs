//! Playtime formatting for display consumers.
//!
//! Converts accumulated active seconds into the compact duration form used
//! by the overlay and the `today` view: `"2h 05m"` once a full hour has
//! accumulated, `"45m"` before that. Seconds are truncated to whole minutes.

/// Formats accumulated active seconds as `"{h}h {mm:02}m"` or `"{m}m"`.
///
/// Negative inputs are treated as zero.
pub fn format_playtime(active_seconds: f64) -> String {
    let total_minutes = (active_seconds.max(0.0) as u64) / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours > 0 {
        format!("{}h {:02}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}
