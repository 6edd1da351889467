//! # workday-increment
//!
//! Adds a signed, fractional number of working days to a timestamp.
//!
//! A [`WorkdayCalendar`] holds the daily [`WorkdayWindow`] and the
//! [`Holidays`]. [`WorkdayCalendar::increment`] walks whole working days,
//! skipping weekends and holidays, and moves the time of day by the
//! fractional share of the window, carrying across the window's edges.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["WorkdayWindow"] --> C["WorkdayCalendar"]
//!     B["Holidays"] --> C
//!     D["DateTime + f64"] -->|"increment()"| C
//!     C --> E["DateTime"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use workday_calendar::{Date, DateTime, TimeOfDay};
//! use workday_increment::{WorkdayCalendar, WorkdayWindow};
//!
//! let window = WorkdayWindow::new(TimeOfDay::new(8, 0), TimeOfDay::new(16, 0)).unwrap();
//! let calendar = WorkdayCalendar::new().with_window(window);
//!
//! // Friday afternoon plus one workday is Monday afternoon.
//! let friday = DateTime::from_components(2025, 12, 5, 14, 0);
//! let monday = calendar.increment(friday, 1.0).unwrap();
//! assert_eq!(monday.date(), Date::new(2025, 12, 8));
//! assert_eq!(monday.time(), TimeOfDay::new(14, 0));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `window` | Daily working window and edge carry |
//! | `holidays` | Fixed and recurring holiday sets |
//! | `calendar` | Calendar configuration and working-day queries |
//! | `increment` | The increment engine |
//! | `error` | Error types |

mod calendar;
mod error;
mod holidays;
mod increment;
mod window;

pub use calendar::WorkdayCalendar;
pub use error::WorkdayError;
pub use holidays::Holidays;
pub use window::WorkdayWindow;
