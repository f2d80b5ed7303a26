use std::path::Path;

use super::{Source, write_seed};

pub fn create(
    source: &Source,
    title: &str,
    customer: &str,
    job_type: &str,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let mut planner = source.planner()?;
    let id = planner.new_order(title, customer, job_type)?;

    println!("✓ Created order {id} ({job_type}) for {customer}");
    println!("  Open orders: {}", planner.board().pool.jobs().len());

    write_seed(&planner, out)
}
