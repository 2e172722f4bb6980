use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Chronos classification-series post-processor.
#[derive(Parser)]
#[command(
    name = "chronos",
    version,
    about = "Post-processing for weather-type classification series from no-leap climate models"
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
    /// Insert leap-day placeholder records into a 365-day series.
    Insert(InsertArgs),
    /// Extract one column from multi-column classifier output.
    Extract(ExtractArgs),
    /// Generate a YYYY MM DD date-vector file for a year range.
    Dates(DatesArgs),
    /// Paste a date vector and per-member series into one wide file.
    Combine(CombineArgs),
}

/// Arguments for the `insert` subcommand.
#[derive(clap::Args)]
pub struct InsertArgs {
    /// Path to the input series file (one record per line, 365 per year).
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the extended output file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// RNG seed for reproducible placeholder positions.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Placeholder record value inserted into leap blocks.
    #[arg(long)]
    pub placeholder: Option<String>,
}

/// Arguments for the `extract` subcommand.
#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Path to the multi-column classifier output file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path for the single-column output file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// 1-based column to keep (classifier layout is "YYYY MM DD class").
    #[arg(long, default_value_t = 4)]
    pub column: usize,
}

/// Arguments for the `dates` subcommand.
#[derive(clap::Args)]
pub struct DatesArgs {
    /// First year of the date vector (inclusive).
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Last year of the date vector (inclusive).
    #[arg(long)]
    pub end_year: Option<i32>,

    /// Path for the date-vector output file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Calendar convention for the generated dates.
    #[arg(long, value_enum)]
    pub calendar: Option<CalendarArg>,
}

/// Calendar choice exposed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CalendarArg {
    /// Real-world calendar with leap Februaries.
    Gregorian,
    /// 365-day model calendar.
    Noleap,
}

/// Arguments for the `combine` subcommand.
#[derive(clap::Args)]
pub struct CombineArgs {
    /// Input files to paste, left to right (date vector first by
    /// convention).
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Path for the combined output file.
    #[arg(short, long)]
    pub output: PathBuf,

    /// Separator placed between pasted columns.
    #[arg(short, long, default_value = "\t")]
    pub delimiter: String,
}
