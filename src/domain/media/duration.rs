// SPDX-License-Identifier: MPL-2.0
//! Duration label formatting.

/// Formats a duration in seconds as a playback label.
///
/// The reported duration is rounded to whole seconds, then rendered as
/// `00:SS` under a minute, `MM:SS` under an hour, and `HH:MM:SS` beyond
/// that (hours are not capped). Negative or non-finite input yields an
/// empty string.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() {
        return String::new();
    }

    let rounded = seconds.round();
    if rounded < 0.0 {
        return String::new();
    }

    let total = rounded as u64;
    match total {
        0..=59 => format!("00:{total:02}"),
        60..=3599 => format!("{:02}:{:02}", total / 60, total % 60),
        _ => format!(
            "{:02}:{:02}:{:02}",
            total / 3600,
            (total % 3600) / 60,
            total % 60
        ),
    }
}
