//! Domain types for the craftgrid job store.
//!
//! These mirror the records of the planning front-end's mock data:
//! jobs (orders) with an optional time window and employee assignment,
//! and the employees they can be assigned to. All types serialize
//! to/from the same JSON shape.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Unique identifier for a job, e.g. `j1`.
pub type JobId = String;

/// Unique identifier for an employee, e.g. `u1`.
pub type EmployeeId = String;

// ── Job ───────────────────────────────────────────────────────────

/// Lifecycle status of a job.
///
/// The planning board only moves jobs between `Offen` and `Geplant`;
/// the remaining variants come from the backend and are carried through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JobStatus {
    #[serde(rename = "offen")]
    Offen,
    #[serde(rename = "geplant")]
    Geplant,
    #[serde(rename = "erledigt")]
    Erledigt,
    #[serde(rename = "überfällig")]
    Ueberfaellig,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Offen => write!(f, "offen"),
            JobStatus::Geplant => write!(f, "geplant"),
            JobStatus::Erledigt => write!(f, "erledigt"),
            JobStatus::Ueberfaellig => write!(f, "überfällig"),
        }
    }
}

/// Kind of work. Unknown kinds from seed data are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobType {
    Wartung,
    Reparatur,
    Installation,
    Other(String),
}

impl JobType {
    pub fn as_str(&self) -> &str {
        match self {
            JobType::Wartung => "Wartung",
            JobType::Reparatur => "Reparatur",
            JobType::Installation => "Installation",
            JobType::Other(s) => s,
        }
    }
}

impl From<String> for JobType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Wartung" => JobType::Wartung,
            "Reparatur" => JobType::Reparatur,
            "Installation" => JobType::Installation,
            _ => JobType::Other(s),
        }
    }
}

impl From<&str> for JobType {
    fn from(s: &str) -> Self {
        JobType::from(s.to_string())
    }
}

impl From<JobType> for String {
    fn from(t: JobType) -> Self {
        t.as_str().to_string()
    }
}

impl fmt::Display for JobType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A schedulable unit of work.
///
/// Invariant (kept by the assignment engine): `status == Offen` exactly
/// when `start`, `end` are `None` and `assigned_to` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub customer: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub status: JobStatus,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    #[serde(default)]
    pub assigned_to: BTreeSet<EmployeeId>,
}

impl Job {
    /// A fresh, unscheduled order.
    pub fn new_order(
        id: impl Into<JobId>,
        title: impl Into<String>,
        customer: impl Into<String>,
        job_type: impl Into<JobType>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            customer: customer.into(),
            job_type: job_type.into(),
            status: JobStatus::Offen,
            start: None,
            end: None,
            assigned_to: BTreeSet::new(),
        }
    }

    pub fn is_unscheduled(&self) -> bool {
        self.status == JobStatus::Offen
    }

    pub fn is_assigned_to(&self, employee: &str) -> bool {
        self.assigned_to.contains(employee)
    }

    /// Date part of `start`, if scheduled.
    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start.map(|s| s.date())
    }

    /// Check the offen ⇔ unscheduled ⇔ unassigned invariant.
    pub fn is_consistent(&self) -> bool {
        let offen = self.status == JobStatus::Offen;
        let no_window = self.start.is_none() && self.end.is_none();
        let has_window = self.start.is_some() && self.end.is_some();
        let unassigned = self.assigned_to.is_empty();
        if offen {
            no_window && unassigned
        } else {
            has_window && !unassigned
        }
    }
}

// ── Employee ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeRole {
    Buero,
    Handwerker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    Aktiv,
    Krank,
    Urlaub,
}

/// A member of staff jobs can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub role: EmployeeRole,
    pub status: EmployeeStatus,
}

impl Employee {
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Aktiv
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(date: &str, hour: u32) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn job_json_uses_front_end_field_names() {
        let json = r#"{
            "id": "j2",
            "title": "Heizung entlüften",
            "customer": "Familie Weber",
            "type": "Wartung",
            "status": "geplant",
            "start": "2025-12-29T09:00:00",
            "end": "2025-12-29T10:00:00",
            "assigned_to": ["u2"]
        }"#;
        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_type, JobType::Wartung);
        assert_eq!(job.status, JobStatus::Geplant);
        assert_eq!(job.start, Some(at("2025-12-29", 9)));
        assert!(job.is_assigned_to("u2"));

        let out = serde_json::to_value(&job).unwrap();
        assert_eq!(out["type"], "Wartung");
        assert_eq!(out["start"], "2025-12-29T09:00:00");
    }

    #[test]
    fn backend_only_statuses_deserialize() {
        let s: JobStatus = serde_json::from_str("\"überfällig\"").unwrap();
        assert_eq!(s, JobStatus::Ueberfaellig);
        assert_eq!(s.to_string(), "überfällig");
        let s: JobStatus = serde_json::from_str("\"erledigt\"").unwrap();
        assert_eq!(s, JobStatus::Erledigt);
    }

    #[test]
    fn unknown_job_type_is_kept() {
        let t: JobType = serde_json::from_str("\"Notdienst\"").unwrap();
        assert_eq!(t, JobType::Other("Notdienst".to_string()));
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"Notdienst\"");
    }

    #[test]
    fn new_order_is_consistent() {
        let job = Job::new_order("j9", "Rohrbruch", "Meier", "Reparatur");
        assert!(job.is_unscheduled());
        assert!(job.is_consistent());
    }

    #[test]
    fn consistency_catches_half_scheduled_jobs() {
        let mut job = Job::new_order("j9", "Rohrbruch", "Meier", "Reparatur");
        job.start = Some(at("2025-12-30", 10));
        assert!(!job.is_consistent());

        job.status = JobStatus::Geplant;
        job.end = Some(at("2025-12-30", 11));
        assert!(!job.is_consistent()); // no assignment yet

        job.assigned_to.insert("u1".to_string());
        assert!(job.is_consistent());
    }

    #[test]
    fn employee_roundtrip() {
        let json = r#"{"id":"u3","name":"Azubi Tim","role":"handwerker","status":"urlaub"}"#;
        let e: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(e.role, EmployeeRole::Handwerker);
        assert!(!e.is_active());
    }
}
