//! `barber-slots` CLI — list bookable slots, check admissions and audit
//! reservations from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # List bookable start times for a day (stdin → stdout)
//! cat day.json | barber-slots slots
//!
//! # Same, as a JSON array, at 30 minute spacing
//! barber-slots --granularity 30 slots -i day.json --json
//!
//! # Check whether a request can be admitted
//! barber-slots admit -i request.json
//!
//! # Free intervals and double-booking audit
//! barber-slots free -i day.json
//! barber-slots conflicts -i reservations.json
//!
//! # Time arithmetic
//! barber-slots time add 23:30 45
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use slot_engine::{
    add_minutes, admit_reservation, compute_available_slots, find_conflicts, format_slots,
    free_intervals, minutes_to_time, time_to_minutes, EngineConfig, Reservation, Service,
    SlotRequest, WorkingWindow,
};
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "barber-slots",
    version,
    about = "Barbershop slot availability and reservation admission"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with engine settings
    #[arg(long, global = true)]
    config: Option<String>,

    /// Minutes between candidate start times (overrides the config file)
    #[arg(long, global = true)]
    granularity: Option<u32>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List bookable start times for a barber and day
    Slots {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Print a JSON array instead of one time per line
        #[arg(long)]
        json: bool,
    },
    /// Check a reservation request and print the admitted reservation
    Admit {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Show free intervals inside working hours
    Free {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Report overlapping reservations
    Conflicts {
        /// Input file with a JSON array of reservations (stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// "HH:mm" arithmetic
    Time {
        #[command(subcommand)]
        command: TimeCommand,
    },
}

#[derive(Subcommand)]
enum TimeCommand {
    /// Convert "HH:mm" to minutes since midnight
    ToMinutes { time: String },
    /// Convert minutes since midnight to "HH:mm"
    FromMinutes { minutes: u32 },
    /// Add (or subtract) minutes, wrapping past midnight
    Add {
        time: String,
        #[arg(allow_negative_numbers = true)]
        delta: i64,
    },
}

/// One barber's day: the input of `slots` and `free`.
#[derive(Deserialize)]
struct DayInput {
    barber_id: String,
    date: NaiveDate,
    #[serde(default)]
    duration_minutes: Option<u32>,
    windows: Vec<WorkingWindow>,
    #[serde(default)]
    reservations: Vec<Reservation>,
}

/// Input of `admit`.
#[derive(Deserialize)]
struct AdmitInput {
    request: SlotRequest,
    service: Service,
    windows: Vec<WorkingWindow>,
    #[serde(default)]
    reservations: Vec<Reservation>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let config = load_config(cli.config.as_deref(), cli.granularity)?;
    debug!(?config, "engine config");

    match cli.command {
        Commands::Slots { input, json } => {
            let day: DayInput = parse_input(input.as_deref())?;
            let duration = day
                .duration_minutes
                .context("'duration_minutes' is required to list slots")?;
            let slots = compute_available_slots(
                &day.barber_id,
                day.date,
                duration,
                &day.windows,
                &day.reservations,
                config.granularity_minutes,
            )
            .context("Failed to compute available slots")?;
            let labels = format_slots(&slots);
            if json {
                println!("{}", serde_json::to_string(&labels)?);
            } else {
                for label in labels {
                    println!("{}", label);
                }
            }
        }
        Commands::Admit { input } => {
            let admit: AdmitInput = parse_input(input.as_deref())?;
            let reservation = admit_reservation(
                &admit.request,
                &admit.service,
                &admit.windows,
                &admit.reservations,
            )
            .context("Reservation rejected")?;
            println!("{}", serde_json::to_string_pretty(&reservation)?);
        }
        Commands::Free { input } => {
            let day: DayInput = parse_input(input.as_deref())?;
            let free = free_intervals(&day.barber_id, day.date, &day.windows, &day.reservations)
                .context("Failed to compute free intervals")?;
            for interval in free {
                println!(
                    "{}-{} ({} min)",
                    minutes_to_time(interval.start_minute),
                    minutes_to_time(interval.end_minute),
                    interval.duration_minutes
                );
            }
        }
        Commands::Conflicts { input } => {
            let reservations: Vec<Reservation> = parse_input(input.as_deref())?;
            let conflicts = find_conflicts(&reservations);
            if conflicts.is_empty() {
                println!("No conflicts");
            }
            for conflict in conflicts {
                println!(
                    "{} {} {}: {} overlaps {} by {} min",
                    conflict.first.barber_id,
                    conflict.first.date,
                    minutes_to_time(conflict.first.start_minute.max(conflict.second.start_minute)),
                    conflict.first.id,
                    conflict.second.id,
                    conflict.overlap_minutes
                );
            }
        }
        Commands::Time { command } => match command {
            TimeCommand::ToMinutes { time } => {
                println!("{}", time_to_minutes(&time).context("Failed to parse time")?);
            }
            TimeCommand::FromMinutes { minutes } => {
                println!("{}", minutes_to_time(minutes));
            }
            TimeCommand::Add { time, delta } => {
                println!(
                    "{}",
                    add_minutes(&time, delta).context("Failed to add minutes")?
                );
            }
        },
    }

    Ok(())
}

/// Logs go to stderr so stdout stays pipeable.
fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "slot_engine=debug,barber_slots=debug"
    } else {
        "slot_engine=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Build the engine config from an optional file, then apply flag overrides.
fn load_config(path: Option<&str>, granularity: Option<u32>) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            EngineConfig::from_json(&raw)
                .with_context(|| format!("Invalid config file: {}", path))?
        }
        None => EngineConfig::default(),
    };
    if let Some(minutes) = granularity {
        config.granularity_minutes = minutes;
    }
    config.validate().context("Invalid engine config")?;
    Ok(config)
}

fn parse_input<T: for<'de> Deserialize<'de>>(path: Option<&str>) -> Result<T> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse input JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
