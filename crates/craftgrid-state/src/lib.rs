//! craftgrid-state: in-memory job store for the craftgrid planner.
//!
//! Holds the jobs (orders) and employees of a trades business as loaded
//! from a seed document. The store is a plain owned value: there is one
//! writer (the planner driving the board), so no locking is involved.
//!
//! # Architecture
//!
//! `SeedData` is the JSON document exchanged with the data provider
//! (mock data or an export of the backend). `JobStore` keeps the jobs in
//! insertion order and offers scans plus in-place mutation by id.

pub mod error;
pub mod store;
pub mod types;

pub use error::{StateError, StateResult};
pub use store::{JobStore, SeedData};
pub use types::*;
