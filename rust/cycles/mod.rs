// SPDX-License-Identifier: LicenseRef-Rateslib-Dual
//
// Copyright (c) 2026 Siffrorna Technology Limited
// This code cannot be used or copied externally
//
// Dual-licensed: Free Educational Licence or Paid Commercial Licence (commercial/professional use)
// Source-available, not open source.
//
// See LICENSE and https://rateslib.com/py/en/latest/i_licence.html for details,
// and/or contact info (at) rateslib (dot) com
////////////////////////////////////////////////////////////////////////////////////////////////////

//! Generate recurring dates from a [RecurrenceRule].
//!
//! ### Basic usage
//!
//! A rule steps from its `start` date by an interval of days, weeks, months or years. The
//! occurrences are yielded lazily and in order.
//!
//! ```rust
//! # use datecycles::cycles::{RecurrenceRule, Unit};
//! # use datecycles::calendars::ndt;
//! let rule = RecurrenceRule::builder(2, Unit::Week)
//!     .start(ndt(2021, 7, 10))
//!     .count(4)
//!     .build()
//!     .unwrap();
//! let dates: Vec<_> = rule.iter().collect();
//! assert_eq!(dates, vec![ndt(2021, 7, 10), ndt(2021, 7, 24), ndt(2021, 8, 7), ndt(2021, 8, 21)]);
//! ```
//!
//! ### Anchoring in the month
//!
//! Monthly and yearly rules may fix a day of the month, which is clamped in shorter months, or
//! choose the n'th weekday of the month with a [WeekdayRule].
//!
//! ```rust
//! # use datecycles::cycles::{RecurrenceRule, Unit, WeekdayRule};
//! # use datecycles::calendars::ndt;
//! use chrono::Weekday;
//! // the second to last Thursday of each month, within a complete Monday to Sunday week
//! let rule = RecurrenceRule::builder(1, Unit::Month)
//!     .weekday(WeekdayRule::new(-2, true, Weekday::Thu))
//!     .start(ndt(2021, 7, 10))
//!     .count(3)
//!     .build()
//!     .unwrap();
//! let dates: Vec<_> = rule.iter().collect();
//! assert_eq!(dates, vec![ndt(2021, 7, 15), ndt(2021, 8, 19), ndt(2021, 9, 16)]);
//! ```
//!
//! ### Workdays
//!
//! A [WorkdayPolicy] moves occurrences off weekends and holidays, or drops them.
//!
//! ```rust
//! # use datecycles::cycles::{RecurrenceRule, Unit, WorkdayPolicy};
//! # use datecycles::calendars::ndt;
//! let rule = RecurrenceRule::builder(1, Unit::Month)
//!     .day(10)
//!     .workday_policy(WorkdayPolicy::Next)
//!     .start(ndt(2021, 7, 1))
//!     .count(2)
//!     .build()
//!     .unwrap();
//! let dates: Vec<_> = rule.iter().collect();
//! assert_eq!(dates, vec![ndt(2021, 7, 12), ndt(2021, 8, 10)]);
//! ```

mod adjuster;
mod anchor;
mod cycle;
mod enums;
mod rule;
mod weekday;

pub use crate::cycles::{
    adjuster::{Adjusted, Adjustment},
    anchor::{get_anchor, get_day_anchor, get_eom, get_weekday_anchor, shift_by_unit, Anchor},
    cycle::{datecycles, DateCycles},
    enums::{parse_weekday, Unit, WeekdayRule, WorkdayPolicy},
    rule::{resolve_holidays, RecurrenceRule, RuleBuilder, RuleParams},
    weekday::{first_weekday_of_month, is_full_week, last_weekday_of_month},
};
