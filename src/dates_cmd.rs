//! Dates command: generate a date-vector file for a year range.

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use chronos_calendar::{Calendar, date_range};
use chronos_series::write_records;

use crate::cli::{CalendarArg, DatesArgs};
use crate::config::ChronosConfig;

/// Run the date-vector generation.
pub fn run(args: DatesArgs) -> Result<()> {
    let _cmd = info_span!("dates").entered();

    // CLI flags override the optional config file.
    let toml_cfg = load_config(&args)?;
    let start_year = args.start_year.unwrap_or(toml_cfg.dates.start_year);
    let end_year = args.end_year.unwrap_or(toml_cfg.dates.end_year);
    let calendar = match args.calendar {
        Some(CalendarArg::Gregorian) => Calendar::Gregorian,
        Some(CalendarArg::Noleap) => Calendar::NoLeap,
        None => parse_calendar(&toml_cfg.dates.calendar)?,
    };

    let stamps = date_range(calendar, start_year, end_year)
        .with_context(|| format!("invalid date range {start_year}..={end_year}"))?;
    info!(
        n = stamps.len(),
        %calendar,
        start_year,
        end_year,
        "generated date vector"
    );

    let lines: Vec<String> = stamps.iter().map(|s| s.to_string()).collect();
    write_records(&args.output, &lines)
        .with_context(|| format!("failed to write output: {}", args.output.display()))?;
    info!(path = %args.output.display(), "date vector written");

    Ok(())
}

fn parse_calendar(name: &str) -> Result<Calendar> {
    match name {
        "gregorian" => Ok(Calendar::Gregorian),
        "noleap" => Ok(Calendar::NoLeap),
        other => bail!("unknown calendar '{other}' (expected 'gregorian' or 'noleap')"),
    }
}

fn load_config(args: &DatesArgs) -> Result<ChronosConfig> {
    match &args.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str(&toml_str).context("failed to parse configuration TOML")
        }
        None => Ok(ChronosConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_calendars() {
        assert_eq!(parse_calendar("gregorian").unwrap(), Calendar::Gregorian);
        assert_eq!(parse_calendar("noleap").unwrap(), Calendar::NoLeap);
    }

    #[test]
    fn parse_unknown_calendar() {
        assert!(parse_calendar("julian").is_err());
    }
}
