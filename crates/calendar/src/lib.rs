//! # workday-calendar
//!
//! Proleptic Gregorian date and time-of-day values at minute resolution.
//!
//! Every constructor that takes raw numbers is total: out-of-range
//! components are clamped to the nearest valid value by an ordered list of
//! [`ClampRule`]s rather than rejected.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["RawTimestamp"] -->|"ClampRule::ALL"| B["DateTime"]
//!     C["Date"] --> B
//!     D["TimeOfDay"] --> B
//!     B -->|"DateTimeFormat::format()"| E["String"]
//!     F["&str"] -->|"FromStr"| B
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use workday_calendar::{Date, DateTime, DateTimeFormat, TimeOfDay};
//!
//! // Raw components are clamped, never rejected.
//! assert_eq!(Date::new(2025, 2, 29), Date::new(2025, 2, 28));
//! assert_eq!(TimeOfDay::new(24, 0), TimeOfDay::new(23, 59));
//!
//! let start: DateTime = "2004-05-24 18:05".parse().unwrap();
//! let format = DateTimeFormat::new("%d-%m-%Y %H:%M").unwrap();
//! assert_eq!(format.format(&start), "24-05-2004 18:05");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `clamp` | Raw components and the ordered clamp policy |
//! | `date` | Calendar date backed by `chrono::NaiveDate` |
//! | `time` | Hour and minute within a day |
//! | `datetime` | Date plus time of day |
//! | `format` | strftime-style rendering |
//! | `error` | Error types |

mod clamp;
mod date;
mod datetime;
mod error;
mod format;
mod time;

pub use chrono::Weekday;
pub use clamp::{ClampRule, RawTimestamp};
pub use date::{Date, MAX_YEAR, MIN_YEAR, days_in_month, is_leap_year};
pub use datetime::DateTime;
pub use error::CalendarError;
pub use format::DateTimeFormat;
pub use time::{MINUTES_PER_DAY, TimeOfDay};
