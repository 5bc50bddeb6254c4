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

//! Finnish national holidays.

use chrono::prelude::*;
use chrono::Weekday;

use crate::calendars::named::{easter_offset, weekday_on_or_after, ymd};

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

/// Holidays observed in Finland in `year`, including Midsummer Eve and Christmas Eve.
pub(crate) fn holidays(year: i32) -> Vec<Option<NaiveDate>> {
    vec![
        ymd(year, 1, 1),                               // New Year's Day
        ymd(year, 1, 6),                               // Epiphany
        easter_offset(year, -2),                       // Good Friday
        easter_offset(year, 0),                        // Easter Sunday
        easter_offset(year, 1),                        // Easter Monday
        ymd(year, 5, 1),                               // May Day
        easter_offset(year, 39),                       // Ascension Day
        easter_offset(year, 49),                       // Whit Sunday
        weekday_on_or_after(year, 6, 19, Weekday::Fri), // Midsummer Eve
        weekday_on_or_after(year, 6, 20, Weekday::Sat), // Midsummer Day
        weekday_on_or_after(year, 10, 31, Weekday::Sat), // All Saints' Day
        ymd(year, 12, 6),                              // Independence Day
        ymd(year, 12, 24),                             // Christmas Eve
        ymd(year, 12, 25),                             // Christmas Day
        ymd(year, 12, 26),                             // St. Stephen's Day
    ]
}
