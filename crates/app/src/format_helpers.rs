//! Shared formatting utilities for the UI layer.
//!
//! Creation timestamps arrive as ISO-8601 strings (e.g.
//! "2026-01-20T21:35:00Z") and are formatted by slicing, so equal inputs
//! always produce equal output.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

struct IsoParts<'a> {
    year: &'a str,
    month: usize,
    day: u32,
    hour: Option<u32>,
    minute: Option<&'a str>,
}

fn split_iso(raw: &str) -> Option<IsoParts<'_>> {
    // Checked slicing: any short input or slice landing inside a multibyte
    // character falls back to the raw string instead of panicking.
    let year = raw.get(..4)?;
    let month: usize = raw.get(5..7)?.parse().ok().filter(|m| (1..=12).contains(m))?;
    let day: u32 = raw.get(8..10)?.parse().ok().filter(|d| (1..=31).contains(d))?;

    // Time portion needs at least "YYYY-MM-DDTHH:MM" (16 chars).
    let (hour, minute) = match (raw.get(11..13), raw.get(14..16)) {
        (Some(h), Some(m)) => (h.parse::<u32>().ok(), Some(m)),
        _ => (None, None),
    };

    Some(IsoParts {
        year,
        month,
        day,
        hour,
        minute,
    })
}

/// Format a project creation timestamp as "Jan 20, 2026, 09:35 PM".
///
/// Falls back to the date portion when the time is missing and to the raw
/// string when the input is not ISO-8601.
pub fn format_created_at(raw: &str) -> String {
    let Some(parts) = split_iso(raw) else {
        return raw.to_string();
    };

    let date = format!(
        "{} {}, {}",
        MONTH_NAMES[parts.month - 1],
        parts.day,
        parts.year
    );

    match (parts.hour, parts.minute) {
        (Some(hour), Some(minute)) if hour < 24 => {
            let (display_hour, meridiem) = match hour {
                0 => (12, "AM"),
                1..=11 => (hour, "AM"),
                12 => (12, "PM"),
                _ => (hour - 12, "PM"),
            };
            format!("{date}, {display_hour:02}:{minute} {meridiem}")
        }
        _ => date,
    }
}
