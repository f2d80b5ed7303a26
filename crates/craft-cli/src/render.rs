//! Human-readable board, agenda, report and dashboard formatting.

use chrono::NaiveDate;
use craftgrid_board::{
    Agenda, BoardStats, BoardView, DropOutcome, EMPTY_NEXT_JOB_MESSAGE, EmployeeFilter, PoolView,
    ReportTemplate, Timeline, WorkReport,
};
use craftgrid_state::{Employee, Job};

const COLUMN: usize = 16;

pub fn format_board(board: &BoardView, employees: &[Employee]) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n╔══════════════════════════════════════════╗\n"));
    out.push_str(&format!("║  Job Planning Board                      ║\n"));
    out.push_str(&format!("╠══════════════════════════════════════════╣\n"));
    out.push_str(&format!("║  Filter:   {:<29} ║\n", fit(&filter_label(&board.filter, employees), 29)));
    out.push_str(&format!("║  Planned:  {:<29} ║\n", board.grid.placed_count()));
    out.push_str(&format!("║  Open:     {:<29} ║\n", board.pool.jobs().len()));
    out.push_str(&format!("╚══════════════════════════════════════════╝\n\n"));

    out.push_str(&" ".repeat(9));
    for date in &board.grid.dates {
        out.push_str(&format!("{:<COLUMN$}", date.format("%a %d.%m.").to_string()));
    }
    out.push('\n');

    for row in &board.grid.rows {
        out.push_str(&format!("  {}  ", row.time.format("%H:%M")));
        for cell in &row.cells {
            let ids: Vec<&str> = cell.jobs.iter().map(|j| j.id.as_str()).collect();
            let text = if ids.is_empty() { "·".to_string() } else { ids.join(", ") };
            out.push_str(&format!("{:<COLUMN$}", fit(&text, COLUMN - 1)));
        }
        out.push('\n');
    }
    out.push('\n');

    out.push_str("OPEN ORDERS:\n\n");
    match &board.pool {
        PoolView::Empty { message } => {
            out.push_str(&format!("  {message}\n"));
        }
        PoolView::Jobs { jobs } => {
            for card in jobs {
                out.push_str(&format!(
                    "  • {}  {} ({}) [{}]\n",
                    card.id, card.title, card.customer, card.job_type
                ));
            }
        }
    }

    out
}

pub fn format_outcome(outcome: &DropOutcome) -> String {
    match outcome {
        DropOutcome::Scheduled { job_id, slot } => format!("✓ {job_id} scheduled at {slot}"),
        DropOutcome::Unscheduled { job_id } => format!("✓ {job_id} moved back to the pool"),
        DropOutcome::UnknownJob { job_id } => format!("· No change: job {job_id} not found"),
        DropOutcome::UnresolvedTarget { .. } => {
            "· No change: target is outside the calendar".to_string()
        }
        DropOutcome::NoDragInProgress => "· No change: nothing was dragged".to_string(),
    }
}

pub fn format_agenda(agenda: &Agenda, next: Option<&Job>) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n╔══════════════════════════════════════════╗\n"));
    out.push_str(&format!("║  Day Schedule                            ║\n"));
    out.push_str(&format!("╠══════════════════════════════════════════╣\n"));
    out.push_str(&format!("║  Employee: {:<29} ║\n", fit(&agenda.employee, 29)));
    out.push_str(&format!("║  Date:     {:<29} ║\n", agenda.date.format("%a %d.%m.%Y").to_string()));
    out.push_str(&format!("╚══════════════════════════════════════════╝\n\n"));

    match next {
        Some(job) => {
            let when = job
                .start
                .map(|s| s.format("%a %d.%m. %H:%M").to_string())
                .unwrap_or_default();
            out.push_str(&format!("Next job: {} {}, {} ({})\n\n", job.id, job.title, when, job.customer));
        }
        None => out.push_str(&format!("Next job: {EMPTY_NEXT_JOB_MESSAGE}\n\n")),
    }

    match &agenda.timeline {
        Timeline::Empty { message } => {
            out.push_str(&format!("  {message}\n"));
        }
        Timeline::Hours { hours } => {
            for hour in hours {
                if hour.entries.is_empty() {
                    out.push_str(&format!("  {}\n", hour.time.format("%H:%M")));
                    continue;
                }
                for entry in &hour.entries {
                    let until = entry
                        .end
                        .map(|e| format!(" until {}", e.format("%H:%M")))
                        .unwrap_or_default();
                    out.push_str(&format!(
                        "  {}  {}  {} ({}){}\n",
                        hour.time.format("%H:%M"),
                        entry.card.id,
                        entry.card.title,
                        entry.card.customer,
                        until
                    ));
                }
            }
        }
    }

    out
}

pub fn format_stats(stats: &BoardStats, today: NaiveDate) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n╔══════════════════════════════════════════╗\n"));
    out.push_str(&format!("║  Dashboard {:<29} ║\n", today.format("%d.%m.%Y").to_string()));
    out.push_str(&format!("╠══════════════════════════════════════════╣\n"));
    out.push_str(&format!("║  Active workers:  {:<22} ║\n", stats.active_workers));
    out.push_str(&format!("║  Orders today:    {:<22} ║\n", stats.orders_today));
    out.push_str(&format!("║  Open requests:   {:<22} ║\n", stats.open_requests));
    out.push_str(&format!("╚══════════════════════════════════════════╝\n"));

    out
}

pub fn format_templates(templates: &[ReportTemplate]) -> String {
    let mut out = String::from("REPORT TEMPLATES:\n\n");
    for t in templates {
        out.push_str(&format!("  • {:<18}{}\n", t.key, t.title));
    }
    out
}

pub fn format_report(report: &WorkReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("\n╔══════════════════════════════════════════╗\n"));
    out.push_str(&format!("║  Work Report                             ║\n"));
    out.push_str(&format!("╠══════════════════════════════════════════╣\n"));
    out.push_str(&format!("║  Project:  {:<29} ║\n", fit(&report.title, 29)));
    out.push_str(&format!("╚══════════════════════════════════════════╝\n\n"));

    for (label, text) in [("Description", &report.description), ("Materials", &report.materials)] {
        out.push_str(&format!("{label}:\n"));
        for line in text.lines() {
            out.push_str(&format!("  {line}\n"));
        }
        out.push('\n');
    }

    out
}

fn filter_label(filter: &EmployeeFilter, employees: &[Employee]) -> String {
    match filter.as_employee() {
        None => "all employees".to_string(),
        Some(id) => match employees.iter().find(|e| e.id == id) {
            Some(e) => format!("{} ({id})", e.name),
            None => id.to_string(),
        },
    }
}

/// Cut `s` to at most `width` characters, marking the cut with `…`.
fn fit(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut cut: String = s.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
