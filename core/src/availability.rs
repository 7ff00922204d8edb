//! Owner's local clock and the response-time hint on the contact panel.

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use folio_types::formatting::format_clock_12h;

use crate::error::CoreError;

/// Working hours (inclusive) in which replies are expected the same day
const WORKDAY_HOURS: std::ops::RangeInclusive<u32> = 9..=18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseWindow {
    SameDay,
    NextMorning,
}

impl ResponseWindow {
    pub fn for_hour(hour: u32) -> Self {
        if WORKDAY_HOURS.contains(&hour) {
            Self::SameDay
        } else {
            Self::NextMorning
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::SameDay => "Usually within 2-4 hours",
            Self::NextMorning => "Usually by next morning",
        }
    }
}

/// Wall clock at a fixed UTC offset (e.g. IST, +05:30).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerClock {
    offset: FixedOffset,
}

impl OwnerClock {
    pub fn new(utc_offset_minutes: i32) -> Result<Self, CoreError> {
        utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .map(|offset| Self { offset })
            .ok_or(CoreError::InvalidUtcOffset {
                minutes: utc_offset_minutes,
            })
    }

    pub fn local(&self, now: DateTime<Utc>) -> DateTime<FixedOffset> {
        now.with_timezone(&self.offset)
    }

    /// `HH:MM AM/PM` in the owner's timezone
    pub fn display(&self, now: DateTime<Utc>) -> String {
        let local = self.local(now);
        format_clock_12h(local.hour(), local.minute())
    }

    pub fn response_window(&self, now: DateTime<Utc>) -> ResponseWindow {
        ResponseWindow::for_hour(self.local(now).hour())
    }
}

/// Snapshot rendered by the contact header; refreshed on a timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockReading {
    pub time: String,
    pub response: &'static str,
}

impl ClockReading {
    pub fn at(clock: &OwnerClock, now: DateTime<Utc>) -> Self {
        Self {
            time: clock.display(now),
            response: clock.response_window(now).message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, h, m, 0).unwrap()
    }

    #[test]
    fn test_response_window_boundaries() {
        assert_eq!(ResponseWindow::for_hour(8), ResponseWindow::NextMorning);
        assert_eq!(ResponseWindow::for_hour(9), ResponseWindow::SameDay);
        assert_eq!(ResponseWindow::for_hour(18), ResponseWindow::SameDay);
        assert_eq!(ResponseWindow::for_hour(19), ResponseWindow::NextMorning);
    }

    #[test]
    fn test_ist_display() {
        let ist = OwnerClock::new(330).unwrap();
        // 04:00 UTC = 09:30 IST
        assert_eq!(ist.display(utc(4, 0)), "09:30 AM");
        assert_eq!(ist.display(utc(18, 45)), "12:15 AM");
    }

    #[test]
    fn test_reading_uses_owner_hour() {
        let ist = OwnerClock::new(330).unwrap();
        let reading = ClockReading::at(&ist, utc(4, 0));
        assert_eq!(reading.response, "Usually within 2-4 hours");

        let late = ClockReading::at(&ist, utc(16, 0));
        assert_eq!(late.time, "09:30 PM");
        assert_eq!(late.response, "Usually by next morning");
    }

    #[test]
    fn test_offset_out_of_range() {
        assert_eq!(
            OwnerClock::new(24 * 60),
            Err(CoreError::InvalidUtcOffset { minutes: 1440 })
        );
        assert!(OwnerClock::new(-300).is_ok());
    }
}
