//! UnscheduledPool: open orders waiting for a slot.

use serde::Serialize;

use craftgrid_state::JobStore;

use crate::view::JobCard;

/// Message shown instead of cards when nothing is waiting.
pub const EMPTY_POOL_MESSAGE: &str = "Keine offenen Aufträge";

/// Rendered pool. The empty state is a value of its own so the
/// presentation layer can draw the message instead of an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PoolView {
    Empty { message: &'static str },
    Jobs { jobs: Vec<JobCard> },
}

impl PoolView {
    /// Every `offen` job, in store order. The employee filter does not apply.
    pub fn derive(store: &JobStore) -> Self {
        let jobs: Vec<JobCard> = store
            .iter()
            .filter(|j| j.is_unscheduled())
            .map(JobCard::from_job)
            .collect();
        if jobs.is_empty() {
            PoolView::Empty {
                message: EMPTY_POOL_MESSAGE,
            }
        } else {
            PoolView::Jobs { jobs }
        }
    }

    pub fn jobs(&self) -> &[JobCard] {
        match self {
            PoolView::Empty { .. } => &[],
            PoolView::Jobs { jobs } => jobs,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PoolView::Empty { .. })
    }

    pub fn contains(&self, job_id: &str) -> bool {
        self.jobs().iter().any(|j| j.id == job_id)
    }
}
