use std::path::PathBuf;

use clap::{Parser, Subcommand};

use workday_calendar::{Date, DateTime, TimeOfDay};

/// Workday arithmetic over a working window and holiday calendar.
#[derive(Parser)]
#[command(
    name = "workday",
    version,
    about = "Add fractional working days to a date and time"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Add a number of working days to a start date and time.
    Increment(IncrementArgs),
    /// Run the built-in reference scenario.
    Demo,
}

/// Arguments for the `increment` subcommand.
#[derive(clap::Args)]
pub struct IncrementArgs {
    /// Start as `YYYY-MM-DD HH:MM`; out-of-range components are clamped.
    #[arg(short, long)]
    pub start: DateTime,

    /// Working days to add; negative values move backwards.
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    pub workdays: f64,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the start of the working window (`HH:MM`).
    #[arg(long)]
    pub workday_start: Option<TimeOfDay>,

    /// Override the end of the working window (`HH:MM`).
    #[arg(long)]
    pub workday_stop: Option<TimeOfDay>,

    /// Additional fixed holiday (`YYYY-MM-DD`); may be repeated.
    #[arg(long = "holiday")]
    pub holidays: Vec<Date>,

    /// Additional recurring holiday (`MM-DD`); may be repeated.
    #[arg(long = "recurring-holiday")]
    pub recurring_holidays: Vec<String>,

    /// Override the output pattern (chrono strftime syntax).
    #[arg(short, long)]
    pub format: Option<String>,
}
