//! Pure conversion functions: TOML config structs -> library types.

use anyhow::{Context, Result};

use workday_calendar::{Date, DateTimeFormat, TimeOfDay};
use workday_increment::{WorkdayCalendar, WorkdayWindow};

use crate::config::{HolidaysToml, OutputToml, WindowToml, WorkdayConfig};

/// Year used to hold recurring month-days; a leap year so `02-29` survives.
const RECURRING_REFERENCE_YEAR: i16 = 2000;

/// Parses an `HH:MM` time of day.
pub fn parse_time(s: &str) -> Result<TimeOfDay> {
    s.parse().with_context(|| format!("invalid time of day: {s:?}"))
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<Date> {
    s.parse().with_context(|| format!("invalid date: {s:?}"))
}

/// Parses a recurring holiday given as `MM-DD` or as a full date whose year
/// is ignored.
pub fn parse_month_day(s: &str) -> Result<Date> {
    if let Ok(date) = s.parse::<Date>() {
        return Ok(date);
    }
    let parsed = s
        .trim()
        .split_once('-')
        .and_then(|(m, d)| Some((m.parse::<u8>().ok()?, d.parse::<u8>().ok()?)));
    let Some((month, day)) = parsed else {
        anyhow::bail!("invalid recurring holiday: {s:?} (expected MM-DD)");
    };
    Ok(Date::new(RECURRING_REFERENCE_YEAR, month, day))
}

/// Builds a [`WorkdayWindow`] from the TOML window section.
pub fn build_window(window: &WindowToml) -> Result<WorkdayWindow> {
    let start = parse_time(&window.start)?;
    let stop = parse_time(&window.stop)?;
    WorkdayWindow::new(start, stop).context("invalid [workday] window")
}

/// Adds every holiday listed in the TOML holidays section to `calendar`.
pub fn add_holidays(calendar: &mut WorkdayCalendar, holidays: &HolidaysToml) -> Result<()> {
    for s in &holidays.fixed {
        calendar.add_fixed_holiday(parse_date(s)?);
    }
    for s in &holidays.recurring {
        calendar.add_recurring_holiday(parse_month_day(s)?);
    }
    Ok(())
}

/// Builds a [`WorkdayCalendar`] from the full configuration.
pub fn build_calendar(config: &WorkdayConfig) -> Result<WorkdayCalendar> {
    let mut calendar = WorkdayCalendar::new().with_window(build_window(&config.workday)?);
    add_holidays(&mut calendar, &config.holidays)?;
    Ok(calendar)
}

/// Builds the output [`DateTimeFormat`].
pub fn build_format(output: &OutputToml) -> Result<DateTimeFormat> {
    DateTimeFormat::new(output.format.as_str()).context("invalid [output] format")
}
