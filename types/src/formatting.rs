//! Display formatting helpers.
//!
//! Small, pure string builders shared by the page sections so the same value
//! is always rendered the same way (clock, read time, tag overflow badges).

/// Characters per minute used for the message read-time estimate.
const READ_CHARS_PER_MINUTE: usize = 200;

/// Format a wall-clock time as a 12-hour `HH:MM AM/PM` string.
///
/// Hours outside `0..24` wrap, minutes are clamped to `59`.
///
/// # Examples
/// ```
/// use folio_types::formatting::format_clock_12h;
/// assert_eq!(format_clock_12h(0, 5), "12:05 AM");
/// assert_eq!(format_clock_12h(9, 30), "09:30 AM");
/// assert_eq!(format_clock_12h(12, 0), "12:00 PM");
/// assert_eq!(format_clock_12h(21, 45), "09:45 PM");
/// ```
pub fn format_clock_12h(hour: u32, minute: u32) -> String {
    let hour = hour % 24;
    let minute = minute.min(59);
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{:02}:{:02} {}", display_hour, minute, suffix)
}

/// Estimated read time in whole minutes, rounded up.
///
/// # Examples
/// ```
/// use folio_types::formatting::read_time_minutes;
/// assert_eq!(read_time_minutes(0), 0);
/// assert_eq!(read_time_minutes(1), 1);
/// assert_eq!(read_time_minutes(200), 1);
/// assert_eq!(read_time_minutes(201), 2);
/// ```
pub fn read_time_minutes(chars: usize) -> usize {
    chars.div_ceil(READ_CHARS_PER_MINUTE)
}

/// Badge text for tags hidden behind a `shown` limit, e.g. `+2`.
///
/// Returns `None` when everything fits.
///
/// # Examples
/// ```
/// use folio_types::formatting::format_overflow;
/// assert_eq!(format_overflow(5, 3), Some("+2".to_string()));
/// assert_eq!(format_overflow(3, 3), None);
/// ```
pub fn format_overflow(total: usize, shown: usize) -> Option<String> {
    if total > shown {
        Some(format!("+{}", total - shown))
    } else {
        None
    }
}

/// Anchor id for a section label ("About" -> "#about").
pub fn section_anchor(label: &str) -> String {
    format!("#{}", label.trim().to_lowercase().replace(' ', "-"))
}

/// Width style for a skill bar; levels above 100 are clamped.
pub fn percent_width(level: u8) -> String {
    format!("width: {}%;", level.min(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock_12h() {
        assert_eq!(format_clock_12h(0, 0), "12:00 AM");
        assert_eq!(format_clock_12h(1, 7), "01:07 AM");
        assert_eq!(format_clock_12h(11, 59), "11:59 AM");
        assert_eq!(format_clock_12h(12, 1), "12:01 PM");
        assert_eq!(format_clock_12h(23, 59), "11:59 PM");
    }

    #[test]
    fn test_format_clock_12h_out_of_range() {
        assert_eq!(format_clock_12h(24, 0), "12:00 AM");
        assert_eq!(format_clock_12h(13, 75), "01:59 PM");
    }

    #[test]
    fn test_read_time_minutes() {
        assert_eq!(read_time_minutes(0), 0);
        assert_eq!(read_time_minutes(199), 1);
        assert_eq!(read_time_minutes(400), 2);
        assert_eq!(read_time_minutes(401), 3);
    }

    #[test]
    fn test_format_overflow() {
        assert_eq!(format_overflow(0, 3), None);
        assert_eq!(format_overflow(4, 3), Some("+1".to_string()));
        assert_eq!(format_overflow(10, 4), Some("+6".to_string()));
    }

    #[test]
    fn test_section_anchor() {
        assert_eq!(section_anchor("Work"), "#work");
        assert_eq!(section_anchor(" Quick Links "), "#quick-links");
    }

    #[test]
    fn test_percent_width() {
        assert_eq!(percent_width(85), "width: 85%;");
        assert_eq!(percent_width(250), "width: 100%;");
    }
}
