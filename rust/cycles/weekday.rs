use chrono::prelude::*;
use chrono::{Days, Weekday};

use crate::cycles::anchor::get_eom;

/// Return the first `weekday` of the month.
///
/// If `full_week` is set and the Monday to Sunday week containing that date spans two months,
/// the date one week later is returned instead, so that its whole week lies within the month.
///
/// Returns `None` only outside of the representable date range.
///
/// # Examples
/// ```rust
/// # use datecycles::cycles::first_weekday_of_month;
/// # use datecycles::calendars::ndt;
/// # use chrono::Weekday;
/// // Thursday 2nd September 2021 is in a week starting Monday 30th August.
/// assert_eq!(first_weekday_of_month(2021, 9, Weekday::Thu, false), Some(ndt(2021, 9, 2)));
/// assert_eq!(first_weekday_of_month(2021, 9, Weekday::Thu, true), Some(ndt(2021, 9, 9)));
/// ```
pub fn first_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    full_week: bool,
) -> Option<NaiveDateTime> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?.and_hms_opt(0, 0, 0)?;
    let shift = (7 + weekday.num_days_from_monday() - first.weekday().num_days_from_monday()) % 7;
    let date = first.checked_add_days(Days::new(shift.into()))?;
    if full_week && !is_full_week(&date) {
        date.checked_add_days(Days::new(7))
    } else {
        Some(date)
    }
}

/// Return the last `weekday` of the month.
///
/// If `full_week` is set and the Monday to Sunday week containing that date spans two months,
/// the date one week earlier is returned instead.
///
/// Returns `None` only outside of the representable date range.
pub fn last_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    full_week: bool,
) -> Option<NaiveDateTime> {
    let last = get_eom(year, month)?;
    let shift = (7 + last.weekday().num_days_from_monday() - weekday.num_days_from_monday()) % 7;
    let date = last.checked_sub_days(Days::new(shift.into()))?;
    if full_week && !is_full_week(&date) {
        date.checked_sub_days(Days::new(7))
    } else {
        Some(date)
    }
}

/// Test whether the Monday to Sunday week containing `date` lies within a single month.
pub fn is_full_week(date: &NaiveDateTime) -> bool {
    let from_monday = u64::from(date.weekday().num_days_from_monday());
    let monday = date.checked_sub_days(Days::new(from_monday));
    let sunday = date.checked_add_days(Days::new(6 - from_monday));
    match (monday, sunday) {
        (Some(m), Some(s)) => m.month() == s.month(),
        _ => false,
    }
}
