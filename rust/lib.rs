//! Lazily generate recurring dates: every n days, weeks, months or years, anchored on a fixed
//! day of the month or on the n'th weekday of the month, optionally moved onto workdays of a
//! country or custom holiday calendar.
//!
//! ```rust
//! use datecycles::{RecurrenceRule, Unit, WorkdayPolicy};
//! use datecycles::calendars::ndt;
//!
//! let rule = RecurrenceRule::builder(1, Unit::Month)
//!     .day(24)
//!     .workday_policy(WorkdayPolicy::Previous)
//!     .country("FI")
//!     .start(ndt(2021, 7, 1))
//!     .count(3)
//!     .build()
//!     .unwrap();
//! let dates: Vec<_> = rule.iter().collect();
//! assert_eq!(dates, vec![ndt(2021, 7, 23), ndt(2021, 8, 24), ndt(2021, 9, 24)]);
//! ```


pub mod calendars;
pub mod cycles;
pub mod errors;
pub mod json;

pub use crate::cycles::{
    datecycles, DateCycles, RecurrenceRule, RuleBuilder, RuleParams, Unit, WeekdayRule,
    WorkdayPolicy,
};
pub use crate::errors::CycleError;
