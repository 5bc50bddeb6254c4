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

//! The error type returned when a recurrence rule cannot be constructed.

use thiserror::Error;

/// A validation failure raised before any date is generated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    /// A fixed `day` and a `weekday` rule were both given.
    #[error("`day` and `weekday` cannot both be defined.")]
    DayAndWeekday,
    /// A `weekday` rule was given with a unit other than month.
    #[error("`weekday` can only be defined when `unit` is month.")]
    WeekdayRequiresMonth,
    /// The unit is not one of day, week, month or year.
    #[error("Invalid unit '{0}', allowed units: day, week, month, year.")]
    InvalidUnit(String),
    /// The day of month is outside of [1, 31].
    #[error("Invalid day {0}, only values in range [1, 31] are allowed.")]
    InvalidDay(i64),
    /// The workday policy is not one of next, previous or skip.
    #[error("Invalid workday policy '{0}', allowed values: next, previous, skip.")]
    InvalidWorkdayPolicy(String),
    /// The interval between occurrences is zero or negative.
    #[error("Invalid interval {0}, `interval` must be at least 1.")]
    InvalidInterval(i64),
    /// The weekday name or number could not be parsed.
    #[error("Invalid weekday '{0}', expected a name, an abbreviation or a number 0-6.")]
    InvalidWeekday(String),
    /// A week mask value is outside of 0 (Monday) to 6 (Sunday).
    #[error("Invalid week mask value {0}, expected a number 0-6.")]
    InvalidWeekMask(u8),
    /// A week mask excludes every day of the week, leaving no workdays.
    #[error("A week mask cannot exclude all seven days of the week.")]
    FullWeekMask,
    /// No holiday rules exist for the requested country.
    #[error("'{0}' is not found in list of supported holiday countries.")]
    UnknownCountry(String),
    /// The time zone is not a known IANA identifier.
    #[error("Invalid time zone '{0}'.")]
    InvalidTimeZone(String),
}
