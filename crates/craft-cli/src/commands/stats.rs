use chrono::{Local, NaiveDate};

use super::Source;
use crate::render;

pub fn show(source: &Source, today: Option<NaiveDate>, format: &str) -> anyhow::Result<()> {
    let planner = source.planner()?;
    let today = today.unwrap_or_else(|| Local::now().date_naive());
    let stats = planner.stats(today);

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        _ => {
            println!("{}", render::format_stats(&stats, today));
        }
    }

    Ok(())
}
