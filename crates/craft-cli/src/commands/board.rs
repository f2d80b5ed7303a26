use std::path::Path;

use anyhow::Context;
use craftgrid_board::{DropTarget, EmployeeFilter};

use super::{Source, write_seed};
use crate::render;

pub fn show(source: &Source, filter: &str, format: &str) -> anyhow::Result<()> {
    let mut planner = source.planner()?;
    planner.set_filter(parse_filter(filter));
    let board = planner.board();

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&board)?);
        }
        _ => {
            println!("{}", render::format_board(&board, planner.employees()));
        }
    }

    Ok(())
}

pub fn drop_job(
    source: &Source,
    job: &str,
    target: &str,
    filter: &str,
    format: &str,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    let target: DropTarget = target
        .parse()
        .with_context(|| format!("invalid drop target '{target}', expected 'pool' or YYYY-MM-DDTHH:MM[:SS]"))?;

    let mut planner = source.planner()?;
    planner.set_filter(parse_filter(filter));
    planner.drag_start(job);
    let outcome = planner.drop(target);
    let board = planner.board();

    match format {
        "json" => {
            let doc = serde_json::json!({ "result": outcome, "board": board });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        _ => {
            println!("{}", render::format_outcome(&outcome));
            println!("{}", render::format_board(&board, planner.employees()));
        }
    }

    write_seed(&planner, out)
}

fn parse_filter(filter: &str) -> EmployeeFilter {
    filter.parse().unwrap_or_default()
}
