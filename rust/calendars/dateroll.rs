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

use chrono::prelude::*;
use chrono::Days;

/// Simple date adjustment defining workdays, holidays and rolling.
///
/// Only the calendar date of a `NaiveDateTime` is ever inspected, so a time of day carried by
/// the input survives rolling unchanged.
pub trait DateRoll {
    /// Returns whether the date is part of the general working week.
    fn is_weekday(&self, date: &NaiveDateTime) -> bool;

    /// Returns whether the date is a specific holiday excluded from the regular working week.
    fn is_holiday(&self, date: &NaiveDateTime) -> bool;

    /// Returns whether the date is a business day, i.e. part of the working week and not a holiday.
    fn is_bus_day(&self, date: &NaiveDateTime) -> bool {
        self.is_weekday(date) && !self.is_holiday(date)
    }

    /// Returns whether the date is not a business day, i.e. either not in working week or a
    /// specific holiday.
    fn is_non_bus_day(&self, date: &NaiveDateTime) -> bool {
        !self.is_bus_day(date)
    }

    /// Returns whether any day of the week is part of the working week.
    ///
    /// `is_weekday` depends only on the day of the week, so one sample week is inspected.
    fn has_weekdays(&self) -> bool {
        (1..=7)
            .filter_map(|d| NaiveDate::from_ymd_opt(2024, 1, d)?.and_hms_opt(0, 0, 0))
            .any(|d| self.is_weekday(&d))
    }

    /// Return the `date`, if a business day, or get the next business date after `date`.
    ///
    /// Returns `None` if the calendar has no working days or the calendar range is exhausted
    /// before a business day is found.
    fn roll_forward_bus_day(&self, date: &NaiveDateTime) -> Option<NaiveDateTime> {
        if !self.has_weekdays() {
            return None;
        }
        let mut new_date = *date;
        while !self.is_bus_day(&new_date) {
            new_date = new_date.checked_add_days(Days::new(1))?;
        }
        Some(new_date)
    }

    /// Return the `date`, if a business day, or get the business day preceding `date`.
    ///
    /// Returns `None` if the calendar has no working days or the calendar range is exhausted
    /// before a business day is found.
    fn roll_backward_bus_day(&self, date: &NaiveDateTime) -> Option<NaiveDateTime> {
        if !self.has_weekdays() {
            return None;
        }
        let mut new_date = *date;
        while !self.is_bus_day(&new_date) {
            new_date = new_date.checked_sub_days(Days::new(1))?;
        }
        Some(new_date)
    }
}
