//! Error types for the workday-calendar crate.

/// Error type for the fallible text operations in the workday-calendar crate.
///
/// Construction from numeric components never fails; it clamps instead.
/// Only text that cannot be read as numbers, and format patterns chrono
/// does not understand, are reported.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a string does not have the expected shape or one of its
    /// numeric components does not fit its integer width.
    #[error("cannot parse {input:?} as {expected}")]
    Parse {
        /// The text that was rejected.
        input: String,
        /// Human-readable description of the accepted shape.
        expected: &'static str,
    },

    /// Returned when a strftime-style pattern contains an unknown specifier.
    #[error("invalid format pattern: {pattern:?}")]
    InvalidFormat {
        /// The rejected pattern.
        pattern: String,
    },
}
