//! Create workday and holiday calendars used to adjust recurring dates.
//!
//! ### Basic usage
//!
//! The `Cal` struct allows the construction of a single calendar from an explicit list of
//! holidays. The below constructs a calendar with some custom office closure days.
//!
//! ```rust
//! # use datecycles::calendars::{Cal, ndt};
//! let office = Cal::from_holidays(vec![ndt(2021, 8, 24), ndt(2021, 9, 24)]);
//! ```
//! These calendars are used to roll dates to workdays, e.g.
//!
//! ```rust
//! # use datecycles::calendars::{Cal, ndt, DateRoll};
//! # let office = Cal::from_holidays(vec![ndt(2021, 8, 24), ndt(2021, 9, 24)]);
//! let date = ndt(2021, 9, 24);  // Friday 24th September 2021
//! let next = office.roll_forward_bus_day(&date);
//! // Monday 27th September 2021, observing the closure and the weekend.
//! assert_eq!(next, Some(ndt(2021, 9, 27)));
//! ```
//!
//! ### Country calendars
//!
//! National holidays are computed from rules for each year by the `NamedCal`, which accepts
//! one or more comma separated country codes.
//!
//! ```rust
//! # use datecycles::calendars::{NamedCal, ndt, DateRoll};
//! let fi = NamedCal::try_new("fi").unwrap();
//! // Friday 24th December 2021 is Christmas Eve.
//! assert_eq!(fi.roll_forward_bus_day(&ndt(2021, 12, 24)), Some(ndt(2021, 12, 27)));
//! assert_eq!(fi.roll_backward_bus_day(&ndt(2021, 12, 24)), Some(ndt(2021, 12, 23)));
//! ```
//!
//! ### Combination usage
//!
//! Custom holidays are added to a country calendar with a `UnionCal`.
//!
//! ```rust
//! # use datecycles::calendars::{UnionCal, NamedCal, Cal, ndt, DateRoll};
//! let fi = NamedCal::try_new("fi").unwrap();
//! let office = Cal::from_holidays(vec![ndt(2021, 11, 24), ndt(2021, 11, 25), ndt(2021, 11, 26)]);
//! let fi_office = UnionCal::new(vec![fi.into(), office.into()]);
//! assert_eq!(fi_office.roll_forward_bus_day(&ndt(2021, 11, 24)), Some(ndt(2021, 11, 29)));
//! ```

mod cal;
mod calendar;
mod dateroll;
pub mod named;
mod named_cal;
mod union_cal;

mod serde;

pub use crate::calendars::{
    cal::Cal,
    calendar::{ndt, Calendar},
    dateroll::DateRoll,
    named::Country,
    named_cal::NamedCal,
    union_cal::UnionCal,
};
