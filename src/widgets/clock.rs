//! Wall clock state, refreshed once per second.

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    now: DateTime<Local>,
}

impl ClockState {
    pub fn new() -> Self {
        Self { now: Local::now() }
    }

    /// Capture the current time.
    pub fn tick(&mut self) {
        self.now = Local::now();
    }

    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    pub fn time_string(&self) -> String {
        format_clock_time(&self.now)
    }

    pub fn date_string(&self) -> String {
        format_clock_date(&self.now)
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::new()
    }
}

/// 24-hour `HH:MM:SS`.
pub fn format_clock_time<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%H:%M:%S").to_string()
}

/// Long weekday, short month, numeric day, e.g. `Sunday, Oct 18`.
pub fn format_clock_date<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    time.format("%A, %b %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_time_is_24_hour() {
        let t = Utc.with_ymd_and_hms(2026, 10, 18, 21, 5, 9).unwrap();
        assert_eq!(format_clock_time(&t), "21:05:09");

        let midnight = Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap();
        assert_eq!(format_clock_time(&midnight), "00:00:00");
    }

    #[test]
    fn test_long_date() {
        let t = Utc.with_ymd_and_hms(2026, 10, 18, 9, 0, 0).unwrap();
        assert_eq!(format_clock_date(&t), "Sunday, Oct 18");

        let t = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        assert_eq!(format_clock_date(&t), "Monday, Mar 2");
    }

    #[test]
    fn test_tick_moves_forward() {
        let mut clock = ClockState::new();
        let before = clock.now();
        clock.tick();
        assert!(clock.now() >= before);
    }
}
