//! Dashboard counters.

use chrono::NaiveDate;
use serde::Serialize;

use craftgrid_state::{Employee, JobStatus, JobStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardStats {
    /// Employees currently at work (not sick, not on leave).
    pub active_workers: usize,
    /// Scheduled jobs starting on the given day.
    pub orders_today: usize,
    /// Orders waiting in the pool.
    pub open_requests: usize,
}

impl BoardStats {
    pub fn derive(employees: &[Employee], store: &JobStore, today: NaiveDate) -> Self {
        Self {
            active_workers: employees.iter().filter(|e| e.is_active()).count(),
            orders_today: store
                .iter()
                .filter(|j| !j.is_unscheduled() && j.start_date() == Some(today))
                .count(),
            open_requests: store.count_by_status(JobStatus::Offen),
        }
    }
}
