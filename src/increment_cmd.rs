//! Increment command: add working days to a start date and time.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use workday_calendar::{DateTime, DateTimeFormat};
use workday_increment::{WorkdayCalendar, WorkdayWindow};

use crate::cli::IncrementArgs;
use crate::config::WorkdayConfig;
use crate::convert;

/// Run a single increment and print the result.
pub fn run(args: IncrementArgs) -> Result<()> {
    let _cmd = info_span!("increment").entered();

    // 1. Load the configuration file, if any
    let config = load_config(args.config.as_deref())?;

    // 2. Build the calendar, then apply command-line overrides
    let mut calendar = convert::build_calendar(&config)?;
    apply_overrides(&mut calendar, &args)?;
    info!(
        start = %calendar.window().start(),
        stop = %calendar.window().stop(),
        "working window"
    );

    let format = match &args.format {
        Some(pattern) => {
            DateTimeFormat::new(pattern.as_str()).context("invalid --format pattern")?
        }
        None => convert::build_format(&config.output)?,
    };

    // 3. Compute and report
    let result = calendar
        .increment(args.start, args.workdays)
        .with_context(|| {
            format!(
                "cannot add {} working days to {}",
                args.workdays, args.start
            )
        })?;
    info!(%result, "increment computed");

    println!("{}", describe(&format, args.start, args.workdays, result));
    Ok(())
}

/// Reads a TOML configuration file, or returns the defaults when no path
/// is given.
pub fn load_config(path: Option<&Path>) -> Result<WorkdayConfig> {
    let Some(path) = path else {
        return Ok(WorkdayConfig::default());
    };
    info!(path = %path.display(), "reading configuration");
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

/// Applies `--workday-start`, `--workday-stop`, `--holiday` and
/// `--recurring-holiday` on top of the configured calendar.
fn apply_overrides(calendar: &mut WorkdayCalendar, args: &IncrementArgs) -> Result<()> {
    if args.workday_start.is_some() || args.workday_stop.is_some() {
        let current = calendar.window();
        let window = WorkdayWindow::new(
            args.workday_start.unwrap_or(current.start()),
            args.workday_stop.unwrap_or(current.stop()),
        )
        .context("invalid working window override")?;
        calendar.set_workday(window);
    }
    for &date in &args.holidays {
        calendar.add_fixed_holiday(date);
    }
    for s in &args.recurring_holidays {
        calendar.add_recurring_holiday(convert::parse_month_day(s)?);
    }
    Ok(())
}

/// Renders the one-line report printed by `increment` and `demo`.
pub fn describe(
    format: &DateTimeFormat,
    start: DateTime,
    workdays: f64,
    result: DateTime,
) -> String {
    format!(
        "{} with the addition of {} working days is {}",
        format.format(&start),
        workdays,
        format.format(&result)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use workday_calendar::{Date, TimeOfDay};

    fn args(start: &str, workdays: f64) -> IncrementArgs {
        IncrementArgs {
            start: start.parse().unwrap(),
            workdays,
            config: None,
            workday_start: None,
            workday_stop: None,
            holidays: Vec::new(),
            recurring_holidays: Vec::new(),
            format: None,
        }
    }

    #[test]
    fn describe_reference_sentence() {
        let format = DateTimeFormat::new("%d-%m-%Y %H:%M").unwrap();
        let line = describe(
            &format,
            DateTime::from_components(2004, 5, 24, 18, 5),
            -5.5,
            DateTime::from_components(2004, 5, 14, 12, 0),
        );
        assert_eq!(
            line,
            "24-05-2004 18:05 with the addition of -5.5 working days is 14-05-2004 12:00"
        );
    }

    #[test]
    fn load_config_without_path_is_default() {
        let config = load_config(None).unwrap();
        assert_eq!(config.workday.start, "08:00");
    }

    #[test]
    fn load_config_from_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("workday.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[workday]\nstart = \"07:30\"\nstop = \"15:30\"").unwrap();
        writeln!(file, "[holidays]\nrecurring = [\"05-17\"]").unwrap();
        drop(file);

        let config = load_config(Some(path.as_path())).unwrap();
        let calendar = convert::build_calendar(&config).unwrap();
        assert_eq!(calendar.window().start(), TimeOfDay::new(7, 30));
        assert!(calendar.is_holiday(Date::new(2030, 5, 17)));
    }

    #[test]
    fn load_config_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_config(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(err.to_string().starts_with("failed to read config file"));
    }

    #[test]
    fn overrides_replace_window_endpoints_independently() {
        let mut calendar = WorkdayCalendar::new();
        let mut overrides = args("2025-12-08 08:00", 1.0);
        overrides.workday_stop = Some(TimeOfDay::new(17, 0));
        apply_overrides(&mut calendar, &overrides).unwrap();
        assert_eq!(calendar.window().start(), TimeOfDay::new(8, 0));
        assert_eq!(calendar.window().stop(), TimeOfDay::new(17, 0));
    }

    #[test]
    fn overrides_reject_inverted_window() {
        let mut calendar = WorkdayCalendar::new();
        let mut overrides = args("2025-12-08 08:00", 1.0);
        overrides.workday_start = Some(TimeOfDay::new(18, 0));
        assert!(apply_overrides(&mut calendar, &overrides).is_err());
    }

    #[test]
    fn overrides_add_holidays() {
        let mut calendar = WorkdayCalendar::new();
        let mut overrides = args("2025-12-08 08:00", 1.0);
        overrides.holidays = vec![Date::new(2025, 12, 9)];
        overrides.recurring_holidays = vec!["12-10".to_string()];
        apply_overrides(&mut calendar, &overrides).unwrap();

        let result = calendar.increment(overrides.start, 1.0).unwrap();
        assert_eq!(result.date(), Date::new(2025, 12, 11));
    }
}
