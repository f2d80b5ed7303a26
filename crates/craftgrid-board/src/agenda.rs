//! Worker agenda: one employee's day, as the field-worker view shows it.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use craftgrid_state::{EmployeeId, Job, JobStore};

use crate::view::JobCard;

/// Message shown for a day without assigned jobs.
pub const EMPTY_DAY_MESSAGE: &str = "Keine Aufträge für diesen Tag.";

/// Message shown when no upcoming job is left.
pub const EMPTY_NEXT_JOB_MESSAGE: &str = "Keine anstehenden Aufträge.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaEntry {
    pub card: JobCard,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

/// One hour mark of the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaHour {
    pub time: NaiveTime,
    pub entries: Vec<AgendaEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Timeline {
    Empty { message: &'static str },
    Hours { hours: Vec<AgendaHour> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Agenda {
    pub employee: EmployeeId,
    pub date: NaiveDate,
    pub timeline: Timeline,
}

impl Agenda {
    /// Jobs assigned to `employee` that start on `date`, bucketed by start
    /// hour over `hours`. Jobs starting outside those hours count for the
    /// day but get no row.
    pub fn build(store: &JobStore, employee: &str, date: NaiveDate, hours: &[u32]) -> Self {
        let day_jobs: Vec<(&Job, NaiveDateTime)> = store
            .iter()
            .filter(|j| !j.is_unscheduled() && j.is_assigned_to(employee))
            .filter_map(|j| j.start.filter(|s| s.date() == date).map(|s| (j, s)))
            .collect();

        let timeline = if day_jobs.is_empty() {
            Timeline::Empty {
                message: EMPTY_DAY_MESSAGE,
            }
        } else {
            let hours = hours
                .iter()
                .filter_map(|&h| NaiveTime::from_hms_opt(h, 0, 0))
                .map(|time| AgendaHour {
                    time,
                    entries: day_jobs
                        .iter()
                        .filter(|(_, start)| start.hour() == time.hour())
                        .map(|(job, start)| AgendaEntry {
                            card: JobCard::from_job(job),
                            start: *start,
                            end: job.end,
                        })
                        .collect(),
                })
                .collect();
            Timeline::Hours { hours }
        };

        Self {
            employee: employee.to_string(),
            date,
            timeline,
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &AgendaEntry> {
        let hours: &[AgendaHour] = match &self.timeline {
            Timeline::Empty { .. } => &[],
            Timeline::Hours { hours } => hours,
        };
        hours.iter().flat_map(|h| h.entries.iter())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.timeline, Timeline::Empty { .. })
    }
}

/// The employee's first scheduled job that has not ended by `now`.
pub fn next_job<'a>(store: &'a JobStore, employee: &str, now: NaiveDateTime) -> Option<&'a Job> {
    let mut jobs: Vec<&Job> = store
        .iter()
        .filter(|j| !j.is_unscheduled() && j.is_assigned_to(employee) && j.start.is_some())
        .collect();
    jobs.sort_by_key(|j| j.start);
    jobs.into_iter().find(|j| j.end.is_some_and(|end| end > now))
}

/// The day the agenda is looking at, moved with prev/next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgendaCursor {
    date: NaiveDate,
}

impl AgendaCursor {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Move by `days` (negative goes back). Stays put at the calendar's ends.
    pub fn shift(&mut self, days: i64) -> NaiveDate {
        let step = Days::new(days.unsigned_abs());
        let moved = if days >= 0 {
            self.date.checked_add_days(step)
        } else {
            self.date.checked_sub_days(step)
        };
        if let Some(date) = moved {
            self.date = date;
        }
        self.date
    }

    pub fn next(&mut self) -> NaiveDate {
        self.shift(1)
    }

    pub fn prev(&mut self) -> NaiveDate {
        self.shift(-1)
    }
}
