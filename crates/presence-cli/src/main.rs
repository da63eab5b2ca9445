//! `presence` CLI: query availability status, holidays and the weekly schedule.
//!
//! ## Usage
//!
//! ```sh
//! # Status right now (or at a given instant)
//! presence status
//! presence status --at 2025-12-25T12:00:00Z --json
//!
//! # Easter Sunday for a year
//! presence easter 2026
//!
//! # Merged holiday table, weekly grid, single schedule cell
//! presence holidays --year 2026
//! presence schedule
//! presence schedule --day 1 --hour 9
//!
//! # Would a contact attempt go through? (exit code 1 when blocked)
//! presence contact --at 2026-10-19T01:00:00Z
//!
//! # Now-playing line, reproducible with a seed
//! presence song --seed 7
//!
//! # Poll once per second, printing status changes
//! presence watch --interval-ms 1000
//! ```
//!
//! Logs go to stderr; filter them with `RUST_LOG` (default `presence=info`).

use std::process;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::{DateTime, Datelike, NaiveDateTime, Utc, Weekday};
use clap::{CommandFactory, Parser, Subcommand};
use presence_engine::easter::{easter_date, FIRST_GREGORIAN_YEAR};
use presence_engine::oracle::DEFAULT_UTC_OFFSET_HOURS;
use presence_engine::schedule::{day_index, weekday_from_index};
use presence_engine::{AvailabilityOracle, ContactDecision, OracleConfig, StatusEntry, WeeklySchedule};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "presence",
    version,
    about = "Availability status: weekly schedule, holidays and Easter"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Hours added to the UTC hour before the schedule lookup (0-23)
    #[arg(
        long,
        global = true,
        default_value_t = DEFAULT_UTC_OFFSET_HOURS,
        value_parser = clap::value_parser!(u32).range(0..24)
    )]
    offset: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the status for an instant
    Status {
        /// RFC 3339 timestamp, or YYYY-MM-DDTHH:MM:SS in UTC (defaults to now)
        #[arg(long)]
        at: Option<String>,
        /// Print JSON instead of the status text
        #[arg(long)]
        json: bool,
    },
    /// Print the date of Easter Sunday
    Easter {
        /// Gregorian year (1583 or later)
        year: i32,
    },
    /// List the merged holiday table
    Holidays {
        /// Year whose Easter is merged in (defaults to the current UTC year)
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        json: bool,
    },
    /// Show the weekly schedule, or one cell of it
    Schedule {
        /// Day of week, 0 = Sunday .. 6 = Saturday
        #[arg(long, requires = "hour")]
        day: Option<u32>,
        /// Offset hour of day (values past 23 wrap)
        #[arg(long, requires = "day")]
        hour: Option<u32>,
        #[arg(long)]
        json: bool,
    },
    /// Check whether a contact attempt would be allowed
    Contact {
        #[arg(long)]
        at: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Show the now-playing line
    Song {
        #[arg(long)]
        at: Option<String>,
        /// Seed for the song pick (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Poll the status and print every change
    Watch {
        /// Poll interval in milliseconds
        #[arg(long, default_value_t = 1_000)]
        interval_ms: u64,
        /// Stop after this many polls
        #[arg(long)]
        ticks: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("presence=info,presence_engine=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = OracleConfig {
        utc_offset_hours: cli.offset,
    };

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Status { at, json } => {
            let now = resolve_now(at.as_deref())?;
            let oracle = AvailabilityOracle::for_timestamp(now, config)
                .context("Failed to initialise availability oracle")?;
            let status = oracle.current_status(now);
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("{}", status.message);
            }
        }
        Commands::Easter { year } => {
            let date = easter_date(year).with_context(|| {
                format!(
                    "Year {} is outside the Gregorian computus (use {} or later)",
                    year, FIRST_GREGORIAN_YEAR
                )
            })?;
            println!("{}", date);
        }
        Commands::Holidays { year, json } => {
            let year = match year {
                Some(year) => year,
                None => Utc::now().year(),
            };
            let oracle = AvailabilityOracle::with_config(year, config)
                .with_context(|| format!("Failed to build holiday table for {}", year))?;
            let holidays: Vec<_> = oracle.holidays().iter().collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&holidays)?);
            } else {
                for holiday in holidays {
                    println!("{}  {}", holiday.date, holiday.name);
                }
            }
        }
        Commands::Schedule { day, hour, json } => {
            let schedule =
                WeeklySchedule::standard().context("Failed to build weekly schedule")?;
            match (day, hour) {
                (Some(day), Some(hour)) => {
                    let weekday = weekday_from_index(day)?;
                    let cell = CellDto::new(weekday, hour, schedule.resolve(weekday, hour));
                    if json {
                        println!("{}", serde_json::to_string_pretty(&cell)?);
                    } else {
                        println!("{}", cell.entry.message);
                    }
                }
                _ if json => {
                    let cells: Vec<CellDto> = schedule
                        .cells()
                        .map(|(weekday, hour, entry)| CellDto::new(weekday, hour, entry))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&cells)?);
                }
                _ => {
                    for line in schedule_runs(&schedule) {
                        println!("{}", line);
                    }
                }
            }
        }
        Commands::Contact { at, json } => {
            let now = resolve_now(at.as_deref())?;
            let oracle = AvailabilityOracle::for_timestamp(now, config)
                .context("Failed to initialise availability oracle")?;
            let decision = oracle.contact_gate().check(now);
            if json {
                println!("{}", serde_json::to_string_pretty(&decision)?);
            } else {
                match &decision {
                    ContactDecision::Allowed => println!("allowed"),
                    ContactDecision::Blocked { notice } => println!("{}", notice.text),
                }
            }
            if !decision.is_allowed() {
                process::exit(1);
            }
        }
        Commands::Song { at, seed } => {
            let now = resolve_now(at.as_deref())?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            println!("{}", presence_engine::now_playing(now, &config, &mut rng));
        }
        Commands::Watch { interval_ms, ticks } => watch(config, interval_ms, ticks)?,
    }

    Ok(())
}

/// Poll the status every `interval_ms`, printing the message whenever it
/// changes. The oracle is rebuilt when the UTC year rolls over.
fn watch(config: OracleConfig, interval_ms: u64, ticks: Option<u64>) -> Result<()> {
    let mut oracle = AvailabilityOracle::for_timestamp(Utc::now(), config)
        .context("Failed to initialise availability oracle")?;
    let mut last: Option<String> = None;
    let mut polls = 0u64;

    tracing::info!(year = oracle.year(), interval_ms, "watching status");

    loop {
        let now = Utc::now();
        if let Some(fresh) = oracle
            .refreshed_for(now)
            .context("Failed to rebuild availability oracle")?
        {
            oracle = fresh;
        }

        let status = oracle.current_status(now);
        if last.as_deref() != Some(status.message.as_str()) {
            println!("{}", status.message);
            last = Some(status.message);
        }

        polls += 1;
        if ticks.is_some_and(|limit| polls >= limit) {
            return Ok(());
        }
        thread::sleep(Duration::from_millis(interval_ms));
    }
}

/// Parse `--at`, falling back to the current time.
///
/// Accepts RFC 3339 (e.g. "2025-12-25T12:00:00Z") and naive
/// "YYYY-MM-DDTHH:MM:SS", which is interpreted as UTC.
fn resolve_now(at: Option<&str>) -> Result<DateTime<Utc>> {
    let Some(raw) = at else {
        return Ok(Utc::now());
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .with_context(|| format!("Invalid timestamp: {}", raw))
}

#[derive(Serialize)]
struct CellDto {
    day: u32,
    weekday: String,
    hour: u32,
    #[serde(flatten)]
    entry: StatusEntry,
}

impl CellDto {
    fn new(weekday: Weekday, hour: u32, entry: StatusEntry) -> Self {
        Self {
            day: day_index(weekday),
            weekday: weekday.to_string(),
            hour: hour % 24,
            entry,
        }
    }
}

/// Collapse the grid into one line per run of identical entries, e.g.
/// `Mon 07-17  ⚠️ Busy. ⛔ Do Not Disturb`.
fn schedule_runs(schedule: &WeeklySchedule) -> Vec<String> {
    let mut lines = Vec::new();
    let mut run: Option<(Weekday, u32, u32, StatusEntry)> = None;

    for (weekday, hour, entry) in schedule.cells() {
        if let Some((day, _, end, current)) = run.as_mut() {
            if *day == weekday && *current == entry {
                *end = hour;
                continue;
            }
        }
        if let Some(finished) = run.replace((weekday, hour, hour, entry)) {
            lines.push(format_run(finished));
        }
    }
    if let Some(finished) = run {
        lines.push(format_run(finished));
    }
    lines
}

fn format_run((weekday, start, end, entry): (Weekday, u32, u32, StatusEntry)) -> String {
    let dnd = if entry.do_not_disturb { " [dnd]" } else { "" };
    format!("{} {:02}-{:02}  {}{}", weekday, start, end, entry.message, dnd)
}
