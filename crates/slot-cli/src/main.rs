//! `slots` CLI — search and book meeting slots from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Find the next 3 free 90-minute slots starting at 9:00
//! slots search --start 2023-01-28T09:00 --duration 90 --amount 3
//!
//! # Book a slot (fails when the exact slot is taken)
//! slots book --name "Standup" --start 2023-01-28T09:00 --duration 30
//!
//! # Show the booked calendar
//! slots list
//!
//! # Run against a calendar file instead of the built-in sample
//! slots search --calendar my-calendar.json
//! ```
//!
//! Without `--calendar`, commands run against a built-in sample calendar of
//! five meetings on 2023-01-28; bookings against the sample are not persisted
//! anywhere.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Timelike, Utc};
use clap::{Parser, Subcommand};
use slot_engine::{find_available_slots, BookedCalendar, Interval};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "slots", version, about = "Meeting slot search and booking")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find available time slots
    Search {
        /// Desired start time (RFC 3339 or YYYY-MM-DDTHH:MM; defaults to one
        /// hour from now)
        #[arg(long)]
        start: Option<String>,
        /// Slot duration in minutes
        #[arg(long, default_value_t = 60)]
        duration: i64,
        /// How many slots to return
        #[arg(long, default_value_t = 10)]
        amount: usize,
        /// Calendar file (uses the built-in sample calendar if omitted)
        #[arg(long)]
        calendar: Option<PathBuf>,
    },
    /// Book a time slot if it is still available
    Book {
        /// Name of the meeting
        #[arg(long)]
        name: String,
        /// Desired start time (RFC 3339 or YYYY-MM-DDTHH:MM; defaults to one
        /// hour from now)
        #[arg(long)]
        start: Option<String>,
        /// Meeting duration in minutes
        #[arg(long, default_value_t = 60)]
        duration: i64,
        /// Calendar file to book into (and write back to)
        #[arg(long)]
        calendar: Option<PathBuf>,
    },
    /// Print the booked calendar as JSON
    List {
        /// Calendar file (uses the built-in sample calendar if omitted)
        #[arg(long)]
        calendar: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            start,
            duration,
            amount,
            calendar,
        } => {
            let booked = load_calendar(calendar.as_deref())?;
            let start = parse_start(start.as_deref())?;
            let desired =
                Interval::new("Desired Slot", start, start + Duration::minutes(duration))?;

            let slots = find_available_slots(&desired, amount, &booked)?;
            println!("{}", serde_json::to_string_pretty(&slots)?);
        }
        Commands::Book {
            name,
            start,
            duration,
            calendar,
        } => {
            let mut booked = load_calendar(calendar.as_deref())?;
            let start = parse_start(start.as_deref())?;
            let interval = Interval::new(name, start, start + Duration::minutes(duration))?;

            if !booked.book(interval)? {
                bail!("Time slot is no longer available");
            }
            if let Some(path) = calendar.as_deref() {
                save_calendar(path, &booked)?;
            }
            println!("Meeting booked");
        }
        Commands::List { calendar } => {
            let booked = load_calendar(calendar.as_deref())?;
            println!("{}", serde_json::to_string_pretty(&booked)?);
        }
    }

    Ok(())
}

/// Load a calendar from a JSON file, or fall back to the built-in sample.
/// Validation (sorted, non-overlapping) happens during deserialization.
fn load_calendar(path: Option<&Path>) -> Result<BookedCalendar> {
    match path {
        Some(path) if path.exists() => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading calendar file {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("parsing calendar file {}", path.display()))
        }
        Some(_) => Ok(BookedCalendar::new()),
        None => Ok(sample_calendar()),
    }
}

fn save_calendar(path: &Path, calendar: &BookedCalendar) -> Result<()> {
    let json = serde_json::to_string_pretty(calendar)?;
    fs::write(path, json).with_context(|| format!("writing calendar file {}", path.display()))
}

/// Parse the `--start` argument, defaulting to one hour from now. Either way
/// the result is truncated to minute resolution, since the engine expects
/// seconds and sub-second components to be zero.
fn parse_start(arg: Option<&str>) -> Result<DateTime<Utc>> {
    let start = match arg {
        Some(text) => parse_datetime(text)?,
        None => Utc::now() + Duration::hours(1),
    };
    truncate_to_minute(start)
}

/// Accept RFC 3339 (`2023-01-28T09:00:00Z`) or a naive `YYYY-MM-DDTHH:MM[:SS]`,
/// interpreted as UTC.
fn parse_datetime(text: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Ok(parsed.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(parsed.and_utc());
        }
    }
    bail!("unrecognized datetime {text:?}, expected RFC 3339 or YYYY-MM-DDTHH:MM");
}

fn truncate_to_minute(time: DateTime<Utc>) -> Result<DateTime<Utc>> {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .context("truncating timestamp to minute resolution")
}

/// The sample calendar the original service seeds itself with: five meetings
/// on 2023-01-28, inserted out of order and sorted by the calendar.
fn sample_calendar() -> BookedCalendar {
    let meeting = |label: &str, start_hour, end_hour| {
        Interval::new(
            label,
            Utc.with_ymd_and_hms(2023, 1, 28, start_hour, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2023, 1, 28, end_hour, 0, 0).unwrap(),
        )
        .expect("sample interval is valid")
    };

    BookedCalendar::from_intervals(vec![
        meeting("meeting 2", 10, 11),
        meeting("meeting 1", 8, 9),
        meeting("meeting 3", 12, 14),
        meeting("meeting 4", 16, 17),
        meeting("meeting 5", 18, 19),
    ])
    .expect("sample calendar is valid")
}
