//! SlotGrid: the (day × hour) matrix of scheduled jobs.
//!
//! The grid is always derived in full from the job store; there is no
//! incremental update path. A job lands in the cell whose date and hour
//! match its start truncated to the hour. Jobs sharing a slot are
//! stacked in store order and never rejected as overlapping. Jobs
//! starting outside the window are not shown anywhere.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use craftgrid_state::{JobStatus, JobStore};

use crate::filter::EmployeeFilter;
use crate::slot::{CalendarWindow, SlotKey};
use crate::view::JobCard;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotCell {
    pub slot: SlotKey,
    pub jobs: Vec<JobCard>,
}

/// One hour across all days of the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotRow {
    pub time: NaiveTime,
    pub cells: Vec<SlotCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotGrid {
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<SlotRow>,
}

impl SlotGrid {
    /// Map the store's scheduled jobs onto the window.
    pub fn derive(window: &CalendarWindow, store: &JobStore, filter: &EmployeeFilter) -> Self {
        let mut by_slot: HashMap<SlotKey, Vec<JobCard>> = HashMap::new();
        for job in store.iter() {
            if job.status != JobStatus::Geplant || !filter.matches(job) {
                continue;
            }
            let Some(start) = job.start else { continue };
            let key = SlotKey::containing(start);
            if window.contains(&key) {
                by_slot.entry(key).or_default().push(JobCard::from_job(job));
            }
        }

        let rows = window
            .times()
            .iter()
            .map(|&time| SlotRow {
                time,
                cells: window
                    .dates()
                    .iter()
                    .map(|&date| {
                        let slot = SlotKey::new(date, time);
                        SlotCell {
                            slot,
                            jobs: by_slot.remove(&slot).unwrap_or_default(),
                        }
                    })
                    .collect(),
            })
            .collect();

        Self {
            dates: window.dates().to_vec(),
            rows,
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = &SlotCell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }

    pub fn cell(&self, slot: &SlotKey) -> Option<&SlotCell> {
        self.cells().find(|c| &c.slot == slot)
    }

    /// The slot a job is displayed in, if any.
    pub fn slot_of(&self, job_id: &str) -> Option<SlotKey> {
        self.cells()
            .find(|c| c.jobs.iter().any(|j| j.id == job_id))
            .map(|c| c.slot)
    }

    /// Number of job cards on the grid.
    pub fn placed_count(&self) -> usize {
        self.cells().map(|c| c.jobs.len()).sum()
    }
}
