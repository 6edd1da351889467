//! Fixed and recurring holiday sets.

use std::collections::BTreeSet;

use workday_calendar::Date;

/// Number of distinct month-days, February 29 included.
const MONTH_DAYS: usize = 366;

/// Non-working dates beyond the weekend.
///
/// Fixed holidays match one exact date. Recurring holidays match a month and
/// day in every year. Adding the same holiday twice has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Holidays {
    fixed: BTreeSet<Date>,
    recurring: BTreeSet<(u8, u8)>,
}

impl Holidays {
    /// Creates an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday for this exact date only.
    pub fn add_fixed(&mut self, date: Date) {
        self.fixed.insert(date);
    }

    /// Adds a holiday on this month and day of every year. The year of
    /// `date` is ignored.
    pub fn add_recurring(&mut self, date: Date) {
        self.recurring.insert(date.month_day());
    }

    /// Returns the fixed holidays in ascending order.
    pub fn fixed(&self) -> impl Iterator<Item = Date> + '_ {
        self.fixed.iter().copied()
    }

    /// Returns the recurring `(month, day)` pairs in calendar order.
    pub fn recurring(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.recurring.iter().copied()
    }

    /// Returns `true` if `date` is a fixed or a recurring holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.fixed.contains(&date) || self.recurring.contains(&date.month_day())
    }

    /// Returns `true` if no holiday has been added.
    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty() && self.recurring.is_empty()
    }

    /// Returns `true` if every month-day of the year recurs as a holiday.
    pub fn covers_every_day(&self) -> bool {
        self.recurring.len() == MONTH_DAYS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let holidays = Holidays::new();
        assert!(holidays.is_empty());
        assert!(!holidays.contains(Date::new(2004, 5, 17)));
    }

    #[test]
    fn fixed_matches_year() {
        let mut holidays = Holidays::new();
        holidays.add_fixed(Date::new(2004, 5, 27));
        assert!(holidays.contains(Date::new(2004, 5, 27)));
        assert!(!holidays.contains(Date::new(2025, 5, 27)));
    }

    #[test]
    fn recurring_ignores_year() {
        let mut holidays = Holidays::new();
        holidays.add_recurring(Date::new(2025, 5, 17));
        assert!(holidays.contains(Date::new(2023, 5, 17)));
        assert!(holidays.contains(Date::new(1814, 5, 17)));
        assert!(!holidays.contains(Date::new(2023, 5, 18)));
        assert_eq!(holidays.recurring().collect::<Vec<_>>(), vec![(5, 17)]);
    }

    #[test]
    fn duplicates_are_harmless() {
        let mut holidays = Holidays::new();
        holidays.add_fixed(Date::new(2004, 5, 27));
        holidays.add_fixed(Date::new(2004, 5, 27));
        holidays.add_recurring(Date::new(2004, 5, 17));
        holidays.add_recurring(Date::new(1999, 5, 17));
        assert_eq!(holidays.fixed().count(), 1);
        assert_eq!(holidays.recurring().count(), 1);
    }

    #[test]
    fn covers_every_day_needs_leap_day() {
        let mut holidays = Holidays::new();
        let mut date = Date::new(2025, 1, 1);
        while date.year() == 2025 {
            holidays.add_recurring(date);
            date = date.succ().unwrap();
        }
        assert!(!holidays.covers_every_day());
        holidays.add_recurring(Date::new(2024, 2, 29));
        assert!(holidays.covers_every_day());
    }
}
