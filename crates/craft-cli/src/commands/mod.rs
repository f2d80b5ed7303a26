pub mod agenda;
pub mod board;
pub mod init;
pub mod order;
pub mod stats;
pub mod template;

use std::path::{Path, PathBuf};

use anyhow::Context;
use craft_core::PlannerConfig;
use craftgrid_board::Planner;
use craftgrid_state::SeedData;
use tracing::debug;

const DEMO_SEED: &str = include_str!("../demo_seed.json");
const DEFAULT_CONFIG: &str = "planner.toml";

/// Where the planner's config and data come from.
pub struct Source {
    pub data: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

impl Source {
    pub fn config(&self) -> anyhow::Result<PlannerConfig> {
        match &self.config {
            Some(path) => PlannerConfig::from_file(path),
            None if Path::new(DEFAULT_CONFIG).exists() => {
                PlannerConfig::from_file(Path::new(DEFAULT_CONFIG))
            }
            None => Ok(PlannerConfig::default()),
        }
    }

    pub fn seed(&self) -> anyhow::Result<SeedData> {
        match &self.data {
            Some(path) => {
                debug!(path = %path.display(), "loading seed data");
                SeedData::load(path)
                    .with_context(|| format!("failed to load seed data from {}", path.display()))
            }
            None => {
                debug!("using built-in demo data");
                Ok(SeedData::from_json(DEMO_SEED)?)
            }
        }
    }

    pub fn planner(&self) -> anyhow::Result<Planner> {
        Ok(Planner::from_seed(self.config()?, self.seed()?)?)
    }
}

/// Persist the planner's jobs and roster if an output path was given.
pub fn write_seed(planner: &Planner, out: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = out {
        planner
            .seed()
            .save(path)
            .with_context(|| format!("failed to write seed data to {}", path.display()))?;
        println!("✓ Wrote {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_seed_is_consistent() {
        let seed = SeedData::from_json(DEMO_SEED).unwrap();
        assert_eq!(seed.employees.len(), 4);
        assert!(seed.jobs.iter().all(|j| j.is_consistent()));
    }

    #[test]
    fn explicit_paths_are_used() {
        let dir = tempfile::tempdir().unwrap();
        let data = dir.path().join("seed.json");
        let config = dir.path().join("planner.toml");
        std::fs::write(&data, r#"{"employees": [], "jobs": []}"#).unwrap();
        std::fs::write(&config, "[calendar]\ndays = 5\n").unwrap();

        let source = Source {
            data: Some(data),
            config: Some(config),
        };
        let planner = source.planner().unwrap();
        assert!(planner.store().is_empty());
        assert_eq!(planner.window().dates().len(), 5);
    }

    #[test]
    fn write_seed_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("out.json");
        let source = Source {
            data: None,
            config: None,
        };
        let mut planner = source.planner().unwrap();
        planner.new_order("Dachrinne", "Herr Koch", "Reparatur").unwrap();

        write_seed(&planner, Some(&out)).unwrap();

        let saved = SeedData::load(&out).unwrap();
        assert_eq!(saved.jobs.len(), planner.store().len());
    }
}
