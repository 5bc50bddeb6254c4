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

//! German nationwide holidays. Regional holidays of the federal states are not included.

use chrono::prelude::*;

use crate::calendars::named::{easter_offset, ymd};

pub const WEEKMASK: &[u8] = &[5, 6]; // Saturday and Sunday weekend

/// Holidays observed throughout Germany in `year`.
pub(crate) fn holidays(year: i32) -> Vec<Option<NaiveDate>> {
    let mut hols = vec![
        ymd(year, 1, 1),         // New Year's Day
        easter_offset(year, -2), // Good Friday
        easter_offset(year, 1),  // Easter Monday
        ymd(year, 5, 1),         // Labour Day
        easter_offset(year, 39), // Ascension Day
        easter_offset(year, 50), // Whit Monday
        ymd(year, 12, 25),       // Christmas Day
        ymd(year, 12, 26),       // Boxing Day
    ];
    if year >= 1990 {
        hols.push(ymd(year, 10, 3)); // German Unity Day
    }
    if year == 2017 {
        hols.push(ymd(year, 10, 31)); // Reformation Day, 500th anniversary
    }
    hols
}

#[cfg(test)]
mod tests {
    use crate::calendars::named::Country;
    use chrono::NaiveDate;

    fn nd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_unity_day() {
        assert!(Country::DE.is_holiday(&nd(2021, 10, 3)));
        assert!(!Country::DE.is_holiday(&nd(1989, 10, 3)));
    }

    #[test]
    fn test_reformation_anniversary() {
        assert!(Country::DE.is_holiday(&nd(2017, 10, 31)));
        assert!(!Country::DE.is_holiday(&nd(2018, 10, 31)));
    }
}
