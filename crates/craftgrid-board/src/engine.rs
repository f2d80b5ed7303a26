//! Assignment engine: drives the drag-and-drop state machine.
//!
//! A drag session captures one opaque job id on drag start and applies
//! exactly one transition when it is dropped:
//!
//! ```text
//! Idle ──drag_start(id)──▶ Dragging { id } ──drop(target)──▶ Idle
//!                               │
//!                               └──drag_cancel()──▶ Idle
//! ```
//!
//! Dropping onto the pool unschedules the job; dropping onto a slot
//! schedules it for the default duration and fills in its assignment.
//! Unknown ids and unresolved targets are silent no-ops.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use tracing::{debug, info};

use craft_core::AssignmentConfig;
use craftgrid_state::{EmployeeId, Job, JobId, JobStatus, JobStore};

use crate::filter::EmployeeFilter;
use crate::slot::SlotKey;

/// Where a dragged job was dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// The unscheduled pool.
    Pool,
    /// A calendar slot.
    Slot(SlotKey),
}

impl fmt::Display for DropTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DropTarget::Pool => f.write_str("pool"),
            DropTarget::Slot(slot) => write!(f, "{slot}"),
        }
    }
}

impl FromStr for DropTarget {
    type Err = chrono::ParseError;

    /// `pool` or a slot such as `2025-12-30T10:00`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("pool") {
            Ok(DropTarget::Pool)
        } else {
            s.parse().map(DropTarget::Slot)
        }
    }
}

/// Current phase of a drag session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// A job card is being dragged.
    Dragging { job_id: JobId },
}

/// Result of a drop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DropOutcome {
    /// The job was placed on a slot.
    Scheduled { job_id: JobId, slot: SlotKey },
    /// The job was moved back to the pool.
    Unscheduled { job_id: JobId },
    /// The dragged id is not in the store.
    UnknownJob { job_id: JobId },
    /// The drop landed outside any slot or the pool.
    UnresolvedTarget { job_id: JobId },
    /// Drop without a preceding drag start.
    NoDragInProgress,
}

impl DropOutcome {
    /// Whether the store was changed.
    pub fn is_applied(&self) -> bool {
        matches!(
            self,
            DropOutcome::Scheduled { .. } | DropOutcome::Unscheduled { .. }
        )
    }
}

/// How a slot drop fills in `end` and `assigned_to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentPolicy {
    /// Assigned when dropping under "all" onto a job nobody has yet.
    pub fallback_employee: EmployeeId,
    pub default_duration: Duration,
}

impl AssignmentPolicy {
    pub fn from_config(cfg: &AssignmentConfig) -> Self {
        Self {
            fallback_employee: cfg.fallback_employee.clone(),
            default_duration: Duration::minutes(i64::from(cfg.default_duration_minutes)),
        }
    }
}

impl Default for AssignmentPolicy {
    fn default() -> Self {
        Self::from_config(&AssignmentConfig::default())
    }
}

/// Drag session plus the policy its drops are applied with.
#[derive(Debug, Clone, Default)]
pub struct AssignmentEngine {
    policy: AssignmentPolicy,
    phase: DragPhase,
}

impl AssignmentEngine {
    pub fn new(policy: AssignmentPolicy) -> Self {
        Self {
            policy,
            phase: DragPhase::Idle,
        }
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    pub fn policy(&self) -> &AssignmentPolicy {
        &self.policy
    }

    /// Capture the dragged job id. A new drag replaces a stale one.
    pub fn drag_start(&mut self, job_id: impl Into<JobId>) {
        let job_id = job_id.into();
        debug!(job = %job_id, "drag started");
        self.phase = DragPhase::Dragging { job_id };
    }

    /// Abandon the current drag without touching the store.
    pub fn drag_cancel(&mut self) {
        if let DragPhase::Dragging { job_id } = &self.phase {
            debug!(job = %job_id, "drag cancelled");
        }
        self.phase = DragPhase::Idle;
    }

    /// End the session and apply its transition.
    ///
    /// `target` is `None` when the drop point could not be resolved to a
    /// slot or the pool. The session is idle afterwards in every case.
    pub fn drop(
        &mut self,
        target: Option<DropTarget>,
        store: &mut JobStore,
        filter: &EmployeeFilter,
    ) -> DropOutcome {
        let job_id = match std::mem::take(&mut self.phase) {
            DragPhase::Idle => {
                debug!("drop without drag, ignoring");
                return DropOutcome::NoDragInProgress;
            }
            DragPhase::Dragging { job_id } => job_id,
        };

        if !store.contains(&job_id) {
            debug!(job = %job_id, "dropped job not in store, ignoring");
            return DropOutcome::UnknownJob { job_id };
        }

        let Some(target) = target else {
            debug!(job = %job_id, "drop target unresolved, ignoring");
            return DropOutcome::UnresolvedTarget { job_id };
        };

        let policy = &self.policy;
        store
            .update(&job_id, |job| apply_drop(job, target, filter, policy))
            .unwrap_or(DropOutcome::UnknownJob { job_id })
    }
}

/// Apply a drop transition to one job.
///
/// Keeps the invariant that a job is `offen` exactly when it has no
/// window and no assignment.
pub fn apply_drop(
    job: &mut Job,
    target: DropTarget,
    filter: &EmployeeFilter,
    policy: &AssignmentPolicy,
) -> DropOutcome {
    match target {
        DropTarget::Pool => {
            job.status = JobStatus::Offen;
            job.assigned_to.clear();
            job.start = None;
            job.end = None;
            info!(job = %job.id, "job moved back to pool");
            DropOutcome::Unscheduled {
                job_id: job.id.clone(),
            }
        }
        DropTarget::Slot(slot) => {
            let start: NaiveDateTime = slot.start();
            job.status = JobStatus::Geplant;
            job.start = Some(start);
            job.end = Some(start + policy.default_duration);

            match filter.as_employee() {
                Some(employee) => {
                    // Under a specific filter the job belongs to that employee alone.
                    job.assigned_to.clear();
                    job.assigned_to.insert(employee.to_string());
                }
                None => {
                    if job.assigned_to.is_empty() {
                        job.assigned_to.insert(policy.fallback_employee.clone());
                    }
                }
            }

            info!(
                job = %job.id,
                %slot,
                assigned = ?job.assigned_to,
                "job scheduled"
            );
            DropOutcome::Scheduled {
                job_id: job.id.clone(),
                slot,
            }
        }
    }
}
