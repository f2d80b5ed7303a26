//! View types handed to the presentation layer.
//!
//! Like dashboard view models, these carry only what a renderer draws:
//! no references back into the store, so a derived board can be kept,
//! compared and serialized independently of later mutations.

use serde::Serialize;

use craftgrid_state::{Job, JobId, JobType};

/// Left-border colour class of a job card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAccent {
    Primary,
    /// Maintenance jobs stand out from repairs and installations.
    Accent,
}

/// A draggable job card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobCard {
    pub id: JobId,
    pub title: String,
    pub customer: String,
    pub job_type: String,
    pub accent: CardAccent,
}

impl JobCard {
    pub fn from_job(job: &Job) -> Self {
        let accent = match job.job_type {
            JobType::Wartung => CardAccent::Accent,
            _ => CardAccent::Primary,
        };
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            customer: job.customer.clone(),
            job_type: job.job_type.to_string(),
            accent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maintenance_cards_use_accent() {
        let card = JobCard::from_job(&Job::new_order("j1", "Wartung Gastherme", "Weber", "Wartung"));
        assert_eq!(card.accent, CardAccent::Accent);

        let card = JobCard::from_job(&Job::new_order("j2", "Rohrbruch", "Meier", "Reparatur"));
        assert_eq!(card.accent, CardAccent::Primary);
        assert_eq!(card.job_type, "Reparatur");
    }
}
