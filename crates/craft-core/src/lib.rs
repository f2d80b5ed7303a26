pub mod config;

pub use config::{AssignmentConfig, CalendarConfig, ConfigError, PlannerConfig, WorkerConfig};
