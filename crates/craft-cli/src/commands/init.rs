use std::path::Path;

use chrono::{Local, NaiveDate};
use craft_core::PlannerConfig;

pub fn init(path: &Path, start_date: Option<NaiveDate>, days: u32, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }

    let start_date = start_date.unwrap_or_else(|| Local::now().date_naive());
    let config = PlannerConfig::scaffold(start_date, days);
    config.validate()?;
    std::fs::write(path, config.to_toml_string()?)?;
    println!("✓ Generated {}", path.display());

    Ok(())
}
