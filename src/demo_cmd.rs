//! Demo command: the reference scenario with fixed inputs.

use anyhow::Result;
use tracing::info_span;

use workday_calendar::{Date, DateTime, DateTimeFormat, TimeOfDay};
use workday_increment::WorkdayCalendar;

use crate::increment_cmd::describe;

/// Runs the reference scenario and prints its report line.
pub fn run() -> Result<()> {
    let _cmd = info_span!("demo").entered();
    let (format, start, workdays, result) = reference()?;
    println!("{}", describe(&format, start, workdays, result));
    Ok(())
}

/// Window 08:00-16:00, recurring holiday May 17, fixed holiday 2004-05-27,
/// starting 2004-05-24 18:05 and moving back 5.5 working days.
fn reference() -> Result<(DateTimeFormat, DateTime, f64, DateTime)> {
    let mut calendar = WorkdayCalendar::new();
    calendar.set_workday_hours(TimeOfDay::new(8, 0), TimeOfDay::new(16, 0))?;
    calendar.add_recurring_holiday(Date::new(2004, 5, 17));
    calendar.add_fixed_holiday(Date::new(2004, 5, 27));

    let format = DateTimeFormat::new("%d-%m-%Y %H:%M")?;
    let start = DateTime::from_components(2004, 5, 24, 18, 5);
    let workdays = -5.5;
    let result = calendar.increment(start, workdays)?;
    Ok((format, start, workdays, result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_result() {
        let (format, start, workdays, result) = reference().unwrap();
        assert_eq!(
            describe(&format, start, workdays, result),
            "24-05-2004 18:05 with the addition of -5.5 working days is 14-05-2004 12:00"
        );
    }
}
