//! Slot keys and the calendar window they are drawn from.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use craft_core::CalendarConfig;

/// Text form of a slot: `2025-12-30T10:00`.
pub const SLOT_FORMAT: &str = "%Y-%m-%dT%H:%M";
/// Also accepted when parsing: `2025-12-30T10:00:00`.
const SLOT_FORMAT_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// A (date, hour) cell of the planning grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct SlotKey {
    pub date: NaiveDate,
    pub time: NaiveTime,
}

impl SlotKey {
    pub fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// The slot starting at `hour:00` on `date`.
    pub fn at_hour(date: NaiveDate, hour: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, 0, 0).map(|time| Self { date, time })
    }

    /// The slot a timestamp falls into, truncating to the hour.
    pub fn containing(ts: NaiveDateTime) -> Self {
        // hour() is always < 24, so this never falls back.
        let time = NaiveTime::from_hms_opt(ts.hour(), 0, 0).unwrap_or(NaiveTime::MIN);
        Self {
            date: ts.date(),
            time,
        }
    }

    /// Combined timestamp at the slot boundary.
    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start().format(SLOT_FORMAT))
    }
}

impl FromStr for SlotKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let ts = NaiveDateTime::parse_from_str(s, SLOT_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(s, SLOT_FORMAT_SECONDS))?;
        Ok(Self {
            date: ts.date(),
            time: ts.time(),
        })
    }
}

/// The fixed set of days and hourly start times shown on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWindow {
    dates: Vec<NaiveDate>,
    times: Vec<NaiveTime>,
}

impl CalendarWindow {
    pub fn new(dates: Vec<NaiveDate>, hours: impl IntoIterator<Item = u32>) -> Self {
        let times = hours
            .into_iter()
            .filter_map(|h| NaiveTime::from_hms_opt(h, 0, 0))
            .collect();
        Self { dates, times }
    }

    pub fn from_config(cal: &CalendarConfig) -> Self {
        Self::new(cal.dates(), cal.hours())
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn times(&self) -> &[NaiveTime] {
        &self.times
    }

    pub fn hours(&self) -> Vec<u32> {
        self.times.iter().map(|t| t.hour()).collect()
    }

    pub fn contains(&self, key: &SlotKey) -> bool {
        self.dates.contains(&key.date) && self.times.contains(&key.time)
    }

    /// All slots, row-major: one row per hour, one column per day.
    pub fn keys(&self) -> impl Iterator<Item = SlotKey> + '_ {
        self.times
            .iter()
            .flat_map(|&time| self.dates.iter().map(move |&date| SlotKey::new(date, time)))
    }

    pub fn len(&self) -> usize {
        self.dates.len() * self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for CalendarWindow {
    fn default() -> Self {
        Self::from_config(&CalendarConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn default_window_is_three_days_of_ten_hours() {
        let window = CalendarWindow::default();
        assert_eq!(window.len(), 30);
        assert_eq!(window.hours(), (8..=17).collect::<Vec<_>>());
        assert_eq!(window.dates()[0], date("2025-12-29"));
    }

    #[test]
    fn keys_are_row_major() {
        let window = CalendarWindow::default();
        let keys: Vec<String> = window.keys().take(4).map(|k| k.to_string()).collect();
        assert_eq!(
            keys,
            vec![
                "2025-12-29T08:00",
                "2025-12-30T08:00",
                "2025-12-31T08:00",
                "2025-12-29T09:00",
            ]
        );
    }

    #[test]
    fn containing_truncates_to_the_hour() {
        let ts = date("2025-12-30").and_hms_opt(10, 45, 30).unwrap();
        let key = SlotKey::containing(ts);
        assert_eq!(key, SlotKey::at_hour(date("2025-12-30"), 10).unwrap());
        assert_eq!(key.start(), date("2025-12-30").and_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn parse_and_display() {
        let key: SlotKey = "2025-12-30T10:00".parse().unwrap();
        assert_eq!(key.date, date("2025-12-30"));
        assert_eq!(key.hour(), 10);
        assert_eq!(key.to_string(), "2025-12-30T10:00");
        assert!("tomorrow".parse::<SlotKey>().is_err());
    }

    #[test]
    fn parse_accepts_timestamp_with_seconds() {
        let key: SlotKey = "2025-12-30T10:00:00".parse().unwrap();
        assert_eq!(key, "2025-12-30T10:00".parse().unwrap());
        assert!(CalendarWindow::default().contains(&key));

        // Off the hour, so never a window slot.
        let odd: SlotKey = "2025-12-30T10:00:30".parse().unwrap();
        assert!(!CalendarWindow::default().contains(&odd));
    }

    #[test]
    fn contains_only_window_slots() {
        let window = CalendarWindow::default();
        assert!(window.contains(&"2025-12-31T17:00".parse().unwrap()));
        assert!(!window.contains(&"2025-12-31T18:00".parse().unwrap()));
        assert!(!window.contains(&"2026-01-01T10:00".parse().unwrap()));
        assert!(!window.contains(&"2025-12-30T10:30".parse().unwrap()));
    }

    #[test]
    fn at_hour_rejects_invalid_hours() {
        assert!(SlotKey::at_hour(date("2025-12-30"), 24).is_none());
    }
}
