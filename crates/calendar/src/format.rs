//! Pattern-based rendering of [`DateTime`] values.

use std::fmt::Write;

use chrono::NaiveDateTime;

use crate::datetime::DateTime;
use crate::error::CalendarError;

/// A strftime-style output pattern, e.g. `%d-%m-%Y %H:%M`.
///
/// The pattern uses chrono's specifiers. It is checked once at construction,
/// so [`DateTimeFormat::format`] cannot fail. Specifiers that need a time
/// zone (`%z`, `%Z`, ...) are rejected because values carry none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeFormat {
    pattern: String,
}

impl DateTimeFormat {
    /// Validates `pattern` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidFormat`] if chrono cannot render the
    /// pattern for a zone-less value.
    pub fn new(pattern: impl Into<String>) -> Result<Self, CalendarError> {
        let pattern = pattern.into();
        let mut probe = String::new();
        if write!(probe, "{}", NaiveDateTime::default().format(&pattern)).is_err() {
            return Err(CalendarError::InvalidFormat { pattern });
        }
        Ok(Self { pattern })
    }

    /// Returns the pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Renders `value` with this pattern.
    pub fn format(&self, value: &DateTime) -> String {
        value.to_naive().format(&self.pattern).to_string()
    }
}

impl Default for DateTimeFormat {
    fn default() -> Self {
        Self {
            pattern: "%Y-%m-%d %H:%M".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_first_pattern() {
        let format = DateTimeFormat::new("%d-%m-%Y %H:%M").unwrap();
        let value = DateTime::from_components(2004, 5, 14, 12, 0);
        assert_eq!(format.format(&value), "14-05-2004 12:00");
    }

    #[test]
    fn default_matches_display() {
        let value = DateTime::from_components(2025, 12, 8, 9, 30);
        assert_eq!(DateTimeFormat::default().format(&value), value.to_string());
    }

    #[test]
    fn weekday_names() {
        let format = DateTimeFormat::new("%A %e %B").unwrap();
        let value = DateTime::from_components(2025, 12, 8, 9, 30);
        assert_eq!(format.format(&value), "Monday  8 December");
    }

    #[test]
    fn rejects_unknown_specifier() {
        assert_eq!(
            DateTimeFormat::new("%Q").unwrap_err(),
            CalendarError::InvalidFormat {
                pattern: "%Q".to_string()
            }
        );
    }

    #[test]
    fn rejects_zone_specifier() {
        assert!(DateTimeFormat::new("%H:%M %z").is_err());
    }

    #[test]
    fn keeps_pattern_text() {
        let format = DateTimeFormat::new("%H:%M").unwrap();
        assert_eq!(format.pattern(), "%H:%M");
    }
}
