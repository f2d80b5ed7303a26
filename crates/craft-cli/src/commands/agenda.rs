use chrono::{Local, NaiveDate, NaiveDateTime};
use craftgrid_board::AgendaCursor;

use super::Source;
use crate::render;

pub struct AgendaRequest {
    pub employee: Option<String>,
    pub date: Option<NaiveDate>,
    pub offset: i64,
    pub now: Option<NaiveDateTime>,
}

pub fn show(source: &Source, request: AgendaRequest, format: &str) -> anyhow::Result<()> {
    let planner = source.planner()?;
    let config = planner.config();

    let employee = request
        .employee
        .unwrap_or_else(|| config.worker.current_user.clone());
    let mut cursor = AgendaCursor::new(request.date.unwrap_or(config.calendar.start_date));
    let date = cursor.shift(request.offset);
    let now = request.now.unwrap_or_else(|| Local::now().naive_local());

    let agenda = planner.agenda(&employee, date)?;
    let next = planner.next_job(&employee, now)?;

    match format {
        "json" => {
            let doc = serde_json::json!({ "agenda": agenda, "next_job": next });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
        _ => {
            println!("{}", render::format_agenda(&agenda, next));
        }
    }

    Ok(())
}
