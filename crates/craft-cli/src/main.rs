use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};

mod commands;
mod render;

#[derive(Parser)]
#[command(
    name = "craft",
    about = "craftgrid: job planning board for trades businesses",
    version,
    propagate_version = true,
)]
struct Cli {
    /// Seed data (JSON with employees and jobs). Uses built-in demo data if omitted.
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Planner config. Falls back to ./planner.toml, then to defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the slot grid and the pool of open orders
    Board {
        /// Employee id, or "all"
        #[arg(long, default_value = "all")]
        filter: String,
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Move a job onto a slot or back to the pool.
    ///
    /// TARGET is "pool" or a slot such as 2025-12-30T10:00.
    Drop {
        job: String,
        target: String,
        /// Employee id, or "all". Decides who the job is assigned to.
        #[arg(long, default_value = "all")]
        filter: String,
        #[arg(short, long, default_value = "text")]
        format: String,
        /// Write the updated seed data here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Create a new open order
    Order {
        #[arg(long)]
        title: String,
        #[arg(long)]
        customer: String,
        /// Wartung, Reparatur or Installation
        #[arg(long = "type", default_value = "Reparatur")]
        job_type: String,
        /// Write the updated seed data here
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Show one worker's day
    Agenda {
        /// Defaults to [worker].current_user
        #[arg(long)]
        employee: Option<String>,
        /// Defaults to the first day of the calendar window
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Days to move from --date (negative goes back)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
        /// Reference time for the next job, e.g. 2025-12-29T12:00:00
        #[arg(long)]
        now: Option<NaiveDateTime>,
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Dashboard counters
    Stats {
        /// Defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// List work-report templates, or fill a report from one.
    ///
    /// Without KEY the catalog is listed.
    Template {
        key: Option<String>,
        /// Project or customer the report is about
        #[arg(long, default_value = "")]
        title: String,
        /// Description already typed into the report
        #[arg(long, default_value = "")]
        description: String,
        /// Materials already typed into the report
        #[arg(long, default_value = "")]
        materials: String,
        /// Replace an existing description without asking
        #[arg(long)]
        force: bool,
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Generate a planner.toml scaffold
    Init {
        #[arg(short, long, default_value = "planner.toml")]
        path: PathBuf,
        /// First day of the calendar window (defaults to today)
        #[arg(long)]
        start_date: Option<NaiveDate>,
        #[arg(long, default_value_t = 3)]
        days: u32,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("craft=info".parse()?)
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = commands::Source {
        data: cli.data,
        config: cli.config,
    };

    match cli.command {
        Commands::Board { filter, format } => {
            commands::board::show(&source, &filter, &format)
        }
        Commands::Drop { job, target, filter, format, out } => {
            commands::board::drop_job(&source, &job, &target, &filter, &format, out.as_deref())
        }
        Commands::Order { title, customer, job_type, out } => {
            commands::order::create(&source, &title, &customer, &job_type, out.as_deref())
        }
        Commands::Agenda { employee, date, offset, now, format } => {
            let request = commands::agenda::AgendaRequest {
                employee,
                date,
                offset,
                now,
            };
            commands::agenda::show(&source, request, &format)
        }
        Commands::Stats { today, format } => {
            commands::stats::show(&source, today, &format)
        }
        Commands::Template { key, title, description, materials, force, format } => {
            let report = craftgrid_board::WorkReport {
                title,
                description,
                materials,
            };
            commands::template::fill(key.as_deref(), report, force, &format)
        }
        Commands::Init { path, start_date, days, force } => {
            commands::init::init(&path, start_date, days, force)
        }
    }
}
