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

//! Rule based national holiday calendars.
//!
//! Holidays are derived per year from fixed dates, offsets from Gregorian Easter Sunday and
//! "weekday within a date window" rules, so any year in the representable range is supported.

pub mod de;
pub mod dk;
pub mod fi;
pub mod no;
pub mod se;

use chrono::prelude::*;
use chrono::{Days, Weekday};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::errors::CycleError;

/// A country with a known set of national holiday rules.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    /// Germany, nationwide holidays only.
    DE,
    /// Denmark.
    DK,
    /// Finland.
    FI,
    /// Norway.
    NO,
    /// Sweden.
    SE,
}

impl Country {
    /// Resolve a country from an ISO 3166 alpha-2 or alpha-3 code, or its English name.
    pub fn try_from_name(name: &str) -> Result<Self, CycleError> {
        match name.trim().to_lowercase().as_str() {
            "de" | "deu" | "germany" => Ok(Country::DE),
            "dk" | "dnk" | "denmark" => Ok(Country::DK),
            "fi" | "fin" | "finland" => Ok(Country::FI),
            "no" | "nor" | "norway" => Ok(Country::NO),
            "se" | "swe" | "sweden" => Ok(Country::SE),
            _ => Err(CycleError::UnknownCountry(name.to_string())),
        }
    }

    /// The ISO 3166 alpha-2 code, lowercase.
    pub fn code(&self) -> &'static str {
        match self {
            Country::DE => "de",
            Country::DK => "dk",
            Country::FI => "fi",
            Country::NO => "no",
            Country::SE => "se",
        }
    }

    /// Days of the week that are not part of the working week (0=Mon,.., 6=Sun).
    pub fn week_mask(&self) -> &'static [u8] {
        match self {
            Country::DE => de::WEEKMASK,
            Country::DK => dk::WEEKMASK,
            Country::FI => fi::WEEKMASK,
            Country::NO => no::WEEKMASK,
            Country::SE => se::WEEKMASK,
        }
    }

    /// Return the sorted holidays observed in `year`.
    pub fn holidays(&self, year: i32) -> Vec<NaiveDate> {
        let dates = match self {
            Country::DE => de::holidays(year),
            Country::DK => dk::holidays(year),
            Country::FI => fi::holidays(year),
            Country::NO => no::holidays(year),
            Country::SE => se::holidays(year),
        };
        dates.into_iter().flatten().sorted().dedup().collect()
    }

    /// Returns whether `date` is a holiday in this country.
    pub fn is_holiday(&self, date: &NaiveDate) -> bool {
        self.holidays(date.year()).contains(date)
    }
}

/// Return Easter Sunday of the Gregorian calendar for `year`.
///
/// Uses the anonymous Gregorian algorithm (Meeus/Jones/Butcher).
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

/// Return the date `days` away from Easter Sunday of `year`.
pub(crate) fn easter_offset(year: i32, days: i64) -> Option<NaiveDate> {
    let easter = easter_sunday(year)?;
    if days < 0 {
        easter.checked_sub_days(Days::new(days.unsigned_abs()))
    } else {
        easter.checked_add_days(Days::new(days.unsigned_abs()))
    }
}

/// Return the first `weekday` on or after the given date, e.g. the Saturday between
/// 20th and 26th June is `weekday_on_or_after(year, 6, 20, Weekday::Sat)`.
pub(crate) fn weekday_on_or_after(
    year: i32,
    month: u32,
    day: u32,
    weekday: Weekday,
) -> Option<NaiveDate> {
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let shift = (7 + weekday.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7;
    date.checked_add_days(Days::new(shift.into()))
}

/// Shorthand for a fixed day in the year.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}
