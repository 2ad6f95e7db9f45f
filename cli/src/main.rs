mod chart;
mod logging;
mod report;
mod session;
mod tui;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use clap::{Parser, ValueEnum};
use timecard_core::model::thresholds::{DEFAULT_DAILY_MIN_HOURS, DEFAULT_WEEKLY_MIN_HOURS};
use timecard_core::{AttendanceTracker, ComplianceThresholds, DashboardUseCase};
use tracing::error;

use crate::logging::{enable_logging, LogTarget};

#[derive(Parser)]
#[command(name = "timecard")]
#[command(about = "Daily clock-in/clock-out tracker with weekly compliance", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Minimum hours for a day to count as compliant
    #[arg(long, global = true, default_value_t = DEFAULT_DAILY_MIN_HOURS)]
    daily_min: f64,

    /// Minimum hours for a week to count as compliant
    #[arg(long, global = true, default_value_t = DEFAULT_WEEKLY_MIN_HOURS)]
    weekly_min: f64,

    /// Log level (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive session
    Tui {
        /// Write logs to this file (the terminal belongs to the UI)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
    /// Submit entries from text lines: "Name date:YYYY-MM-DD in:HH:MM out:HH:MM"
    Replay {
        /// Read lines from this file instead of stdin
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn run_replay(
    input: Option<PathBuf>,
    format: OutputFormat,
    thresholds: ComplianceThresholds,
) -> Result<()> {
    let reader: Box<dyn BufRead> = match &input {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut tracker = AttendanceTracker::new(thresholds);
    let outcome = session::replay(reader, &mut tracker, Local::now().date_naive())?;
    for (line, e) in &outcome.rejected {
        eprintln!("line {line}: {e}");
    }

    let dashboard = DashboardUseCase::new(&tracker).build();
    match format {
        OutputFormat::Text => print!("{}", report::build_text_report(&dashboard, thresholds.weekly_min_hours)),
        OutputFormat::Json => println!("{}", dashboard.to_json_pretty()?),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let thresholds = ComplianceThresholds {
        daily_min_hours: cli.daily_min,
        weekly_min_hours: cli.weekly_min,
    };

    let result = match cli.command {
        Some(Commands::Replay { input, format }) => {
            enable_logging(cli.log_level.as_deref(), LogTarget::Stderr)?;
            run_replay(input, format, thresholds)
        }
        Some(Commands::Tui { log_file }) => {
            let target = log_file.map(LogTarget::File).unwrap_or(LogTarget::Off);
            enable_logging(cli.log_level.as_deref(), target)?;
            tui::run(thresholds, Local::now().date_naive())
        }
        None => {
            enable_logging(cli.log_level.as_deref(), LogTarget::Off)?;
            tui::run(thresholds, Local::now().date_naive())
        }
    };

    result.inspect_err(|e| error!("timecard failed: {e:?}"))
}
