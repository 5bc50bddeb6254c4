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

//! Norwegian national holidays.

use chrono::prelude::*;

use crate::calendars::named::{easter_offset, ymd};

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

/// Holidays observed in Norway in `year`.
pub(crate) fn holidays(year: i32) -> Vec<Option<NaiveDate>> {
    vec![
        ymd(year, 1, 1),         // New Year's Day
        easter_offset(year, -3), // Maundy Thursday
        easter_offset(year, -2), // Good Friday
        easter_offset(year, 0),  // Easter Sunday
        easter_offset(year, 1),  // Easter Monday
        ymd(year, 5, 1),         // Labour Day
        ymd(year, 5, 17),        // Constitution Day
        easter_offset(year, 39), // Ascension Day
        easter_offset(year, 49), // Whit Sunday
        easter_offset(year, 50), // Whit Monday
        ymd(year, 12, 25),       // Christmas Day
        ymd(year, 12, 26),       // Boxing Day
    ]
}
