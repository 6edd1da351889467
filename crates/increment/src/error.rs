//! Error types for the workday-increment crate.

use workday_calendar::{MAX_YEAR, MIN_YEAR, TimeOfDay};

/// Error type for all fallible operations in the workday-increment crate.
///
/// Raw timestamp components are never an error (they are clamped by
/// `workday-calendar`). These variants cover configurations and inputs for
/// which no result is defined.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkdayError {
    /// Returned when a workday window does not end strictly after it starts.
    #[error("workday window must end after it starts, got {start}-{stop}")]
    InvalidWindow {
        /// Requested start of the window.
        start: TimeOfDay,
        /// Requested end of the window.
        stop: TimeOfDay,
    },

    /// Returned when the increment is NaN or infinite.
    #[error("workday increment must be finite, got {value}")]
    NonFiniteIncrement {
        /// The rejected increment.
        value: f64,
    },

    /// Returned when stepping would leave the supported year range.
    #[error("date stepping left the supported year range {}..={}", MIN_YEAR, MAX_YEAR)]
    DateOutOfRange,

    /// Returned when every month-day is a recurring holiday, so no working
    /// day can ever be reached.
    #[error("every day of the year is a recurring holiday")]
    NoWorkingDays,
}
