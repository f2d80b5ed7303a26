//! Employee filter: which jobs the slot grid shows.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use craftgrid_state::{EmployeeId, Job};

/// Sentinel accepted by [`EmployeeFilter::from_str`] for "everyone".
pub const ALL: &str = "all";

/// View state narrowing the slot grid to one employee.
///
/// Never stored on a job. The unscheduled pool ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum EmployeeFilter {
    #[default]
    All,
    Employee(EmployeeId),
}

impl EmployeeFilter {
    pub fn employee(id: impl Into<EmployeeId>) -> Self {
        EmployeeFilter::Employee(id.into())
    }

    /// The selected employee, or `None` for "all".
    pub fn as_employee(&self) -> Option<&str> {
        match self {
            EmployeeFilter::All => None,
            EmployeeFilter::Employee(id) => Some(id),
        }
    }

    /// Whether a job's assignment passes the filter.
    pub fn matches(&self, job: &Job) -> bool {
        match self {
            EmployeeFilter::All => true,
            EmployeeFilter::Employee(id) => job.is_assigned_to(id),
        }
    }
}

impl FromStr for EmployeeFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == ALL {
            Ok(EmployeeFilter::All)
        } else {
            Ok(EmployeeFilter::Employee(s.to_string()))
        }
    }
}

impl fmt::Display for EmployeeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeFilter::All => f.write_str(ALL),
            EmployeeFilter::Employee(id) => f.write_str(id),
        }
    }
}

impl Serialize for EmployeeFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job_for(employees: &[&str]) -> Job {
        let mut job = Job::new_order("j1", "t", "c", "Wartung");
        job.assigned_to = employees.iter().map(|e| e.to_string()).collect();
        job
    }

    #[test]
    fn parse_sentinel_and_ids() {
        assert_eq!("all".parse::<EmployeeFilter>().unwrap(), EmployeeFilter::All);
        assert_eq!("".parse::<EmployeeFilter>().unwrap(), EmployeeFilter::All);
        assert_eq!(
            "u2".parse::<EmployeeFilter>().unwrap(),
            EmployeeFilter::employee("u2")
        );
    }

    #[test]
    fn display_matches_parse() {
        assert_eq!(EmployeeFilter::All.to_string(), "all");
        assert_eq!(EmployeeFilter::employee("u3").to_string(), "u3");
    }

    #[test]
    fn all_matches_everything() {
        assert!(EmployeeFilter::All.matches(&job_for(&[])));
        assert!(EmployeeFilter::All.matches(&job_for(&["u1"])));
    }

    #[test]
    fn employee_matches_membership() {
        let filter = EmployeeFilter::employee("u2");
        assert!(filter.matches(&job_for(&["u1", "u2"])));
        assert!(!filter.matches(&job_for(&["u1"])));
        assert!(!filter.matches(&job_for(&[])));
    }
}
