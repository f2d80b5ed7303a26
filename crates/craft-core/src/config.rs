//! planner.toml configuration parser.

use std::path::Path;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hour of the first slot on the board.
pub const DEFAULT_FIRST_HOUR: u32 = 8;
/// Hour of the last slot (inclusive start time).
pub const DEFAULT_LAST_HOUR: u32 = 17;
pub const DEFAULT_DAYS: u32 = 3;
/// Longest calendar window accepted.
pub const MAX_DAYS: u32 = 366;
pub const DEFAULT_FALLBACK_EMPLOYEE: &str = "u1";
pub const DEFAULT_DURATION_MINUTES: u32 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("calendar must span at least one day")]
    NoDays,
    #[error("calendar spans {0} days, at most {max} are allowed", max = MAX_DAYS)]
    TooManyDays(u32),
    #[error("first_hour {first} is after last_hour {last}")]
    InvertedHours { first: u32, last: u32 },
    #[error("last_hour {0} is not a valid hour of day")]
    HourOutOfRange(u32),
    #[error("default_duration_minutes must be positive")]
    ZeroDuration,
    #[error("fallback_employee must not be empty")]
    EmptyFallback,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub assignment: AssignmentConfig,
    #[serde(default)]
    pub worker: WorkerConfig,
}

/// The fixed (day × hour) window shown on the planning board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    pub start_date: NaiveDate,
    pub days: u32,
    pub first_hour: u32,
    pub last_hour: u32,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            days: DEFAULT_DAYS,
            first_hour: DEFAULT_FIRST_HOUR,
            last_hour: DEFAULT_LAST_HOUR,
        }
    }
}

impl CalendarConfig {
    /// Dates covered by the window, in order.
    pub fn dates(&self) -> Vec<NaiveDate> {
        (0..self.days)
            .filter_map(|offset| self.start_date.checked_add_days(Days::new(u64::from(offset))))
            .collect()
    }

    /// Slot start hours, inclusive on both ends.
    pub fn hours(&self) -> Vec<u32> {
        (self.first_hour..=self.last_hour).collect()
    }
}

/// How a drop onto a slot fills in `assigned_to` and `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssignmentConfig {
    /// Employee assigned when dropping under the "all" filter onto a job with no assignment.
    pub fallback_employee: String,
    pub default_duration_minutes: u32,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            fallback_employee: DEFAULT_FALLBACK_EMPLOYEE.to_string(),
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
        }
    }
}

/// Defaults for the field-worker agenda.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    pub current_user: String,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            current_user: DEFAULT_FALLBACK_EMPLOYEE.to_string(),
        }
    }
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 29).unwrap_or_default()
}

impl PlannerConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: PlannerConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject windows and policies the board cannot render.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cal = &self.calendar;
        if cal.days == 0 {
            return Err(ConfigError::NoDays);
        }
        if cal.days > MAX_DAYS {
            return Err(ConfigError::TooManyDays(cal.days));
        }
        if cal.last_hour > 23 {
            return Err(ConfigError::HourOutOfRange(cal.last_hour));
        }
        if cal.first_hour > cal.last_hour {
            return Err(ConfigError::InvertedHours {
                first: cal.first_hour,
                last: cal.last_hour,
            });
        }
        if self.assignment.default_duration_minutes == 0 {
            return Err(ConfigError::ZeroDuration);
        }
        if self.assignment.fallback_employee.trim().is_empty() {
            return Err(ConfigError::EmptyFallback);
        }
        Ok(())
    }

    /// Scaffold a planner.toml for `days` days starting at `start_date`.
    pub fn scaffold(start_date: NaiveDate, days: u32) -> Self {
        PlannerConfig {
            calendar: CalendarConfig {
                start_date,
                days,
                ..CalendarConfig::default()
            },
            ..PlannerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_board() {
        let config = PlannerConfig::default();
        assert_eq!(config.calendar.hours().len(), 10);
        assert_eq!(config.calendar.hours().first(), Some(&8));
        assert_eq!(config.calendar.hours().last(), Some(&17));
        let dates: Vec<String> = config.calendar.dates().iter().map(|d| d.to_string()).collect();
        assert_eq!(dates, vec!["2025-12-29", "2025-12-30", "2025-12-31"]);
        assert_eq!(config.assignment.fallback_employee, "u1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_empty_uses_defaults() {
        let config: PlannerConfig = toml::from_str("").unwrap();
        assert_eq!(config, PlannerConfig::default());
    }

    #[test]
    fn test_parse_partial_calendar() {
        let toml_str = r#"
[calendar]
start_date = "2026-03-02"
days = 5
"#;
        let config: PlannerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.calendar.days, 5);
        assert_eq!(config.calendar.first_hour, 8);
        assert_eq!(config.calendar.dates().len(), 5);
        assert_eq!(config.calendar.dates()[4].to_string(), "2026-03-06");
    }

    #[test]
    fn test_validate_rejects_bad_windows() {
        let mut config = PlannerConfig::default();
        config.calendar.days = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoDays));

        let mut config = PlannerConfig::default();
        config.calendar.days = 4_000_000_000;
        assert_eq!(config.validate(), Err(ConfigError::TooManyDays(4_000_000_000)));

        let mut config = PlannerConfig::default();
        config.calendar.days = MAX_DAYS;
        assert!(config.validate().is_ok());

        let mut config = PlannerConfig::default();
        config.calendar.first_hour = 18;
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvertedHours { first: 18, last: 17 })
        );

        let mut config = PlannerConfig::default();
        config.calendar.last_hour = 24;
        assert_eq!(config.validate(), Err(ConfigError::HourOutOfRange(24)));

        let mut config = PlannerConfig::default();
        config.assignment.default_duration_minutes = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroDuration));
    }

    #[test]
    fn test_scaffold_roundtrips_through_toml() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let config = PlannerConfig::scaffold(start, 5);
        let toml_str = config.to_toml_string().unwrap();
        assert!(toml_str.contains("2026-01-05"));
        let back: PlannerConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, config);
    }
}
