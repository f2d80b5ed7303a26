//! JobStore: the in-memory job collection behind the planning board.
//!
//! Jobs keep their insertion order, which is also the order they are
//! stacked in a slot cell and listed in the unscheduled pool. The store
//! has a single owner; it never notifies anyone about changes, callers
//! re-derive their views explicitly after mutating it.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{StateError, StateResult};
use crate::types::*;

/// The mock-data document: employees plus jobs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

impl SeedData {
    /// Read a seed document from a JSON file.
    pub fn load(path: &Path) -> StateResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let seed = Self::from_json(&content)?;
        debug!(?path, jobs = seed.jobs.len(), employees = seed.employees.len(), "seed data loaded");
        Ok(seed)
    }

    pub fn from_json(content: &str) -> StateResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn to_json_pretty(&self) -> StateResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StateError::Encode(e.to_string()))
    }

    /// Write the document back out as pretty JSON.
    ///
    /// `assigned_to` is a set, so each job's assignment is written sorted
    /// by employee id with duplicates removed, whatever order it was read in.
    pub fn save(&self, path: &Path) -> StateResult<()> {
        std::fs::write(path, self.to_json_pretty()?)?;
        debug!(?path, "seed data written");
        Ok(())
    }
}

/// Ordered, in-memory collection of jobs.
#[derive(Debug, Clone, Default)]
pub struct JobStore {
    jobs: Vec<Job>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from pre-populated jobs.
    ///
    /// Jobs that break the status/schedule invariant are kept as-is and
    /// reported; later id duplicates are dropped.
    pub fn from_seed(jobs: Vec<Job>) -> Self {
        let mut store = Self::new();
        for job in jobs {
            if !job.is_consistent() {
                warn!(job = %job.id, status = %job.status, "seed job has inconsistent schedule");
            }
            if let Err(e) = store.insert(job) {
                warn!(error = %e, "skipping seed job");
            }
        }
        store
    }

    /// Load a store from a seed JSON file, ignoring its employees.
    pub fn load(path: &Path) -> StateResult<Self> {
        Ok(Self::from_seed(SeedData::load(path)?.jobs))
    }

    /// Snapshot all jobs, in store order.
    pub fn export(&self) -> Vec<Job> {
        self.jobs.clone()
    }

    /// Append a job. Fails if the id is already taken.
    pub fn insert(&mut self, job: Job) -> StateResult<()> {
        if self.contains(&job.id) {
            return Err(StateError::Duplicate(job.id));
        }
        debug!(job = %job.id, status = %job.status, "job stored");
        self.jobs.push(job);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Mutate a job in place. Returns `None` if the id is unknown.
    pub fn update<R>(&mut self, id: &str, f: impl FnOnce(&mut Job) -> R) -> Option<R> {
        self.jobs.iter_mut().find(|j| j.id == id).map(f)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Job> {
        self.jobs.iter()
    }

    pub fn list(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn count_by_status(&self, status: JobStatus) -> usize {
        self.jobs.iter().filter(|j| j.status == status).count()
    }
}
