use chrono::prelude::*;
use chrono::{Days, Months};

use crate::cycles::{
    first_weekday_of_month, last_weekday_of_month, RecurrenceRule, Unit, WeekdayRule,
};

/// The candidate date computed for a given number of unit shifts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Anchor {
    /// A candidate date, before any workday adjustment.
    Date(NaiveDateTime),
    /// A weekday anchor which falls before the start day; the next shift must be tried.
    BeforeStart(NaiveDateTime),
    /// Date arithmetic left the representable range so no further candidates exist.
    Exhausted,
}

/// Return the candidate date of `rule` after `shifts` interval sized unit shifts from its start.
pub fn get_anchor(rule: &RecurrenceRule, shifts: u32) -> Anchor {
    let steps = i64::from(rule.interval) * i64::from(shifts);
    match (rule.day, &rule.weekday) {
        (Some(day), _) => get_day_anchor(&rule.start, day, rule.unit, steps)
            .map_or(Anchor::Exhausted, Anchor::Date),
        (None, Some(weekday)) => get_weekday_anchor(&rule.start, weekday, rule.unit, steps),
        (None, None) => {
            shift_by_unit(&rule.start, rule.unit, steps).map_or(Anchor::Exhausted, Anchor::Date)
        }
    }
}

/// Return the date with a fixed day of the month, `steps` units after the first such date on or
/// after `start`.
///
/// # Notes
/// When `day` exceeds the length of a month the last day of that month is used. The clamp is
/// re-evaluated after every shift, so a day clamped to 28th February expands back to the 30th
/// or 31st in longer months.
///
/// # Examples
/// ```rust
/// # use datecycles::cycles::{get_day_anchor, Unit};
/// # use datecycles::calendars::ndt;
/// let start = ndt(2021, 6, 30);
/// assert_eq!(get_day_anchor(&start, 30, Unit::Month, 8), Some(ndt(2022, 2, 28)));
/// assert_eq!(get_day_anchor(&start, 30, Unit::Month, 10), Some(ndt(2022, 4, 30)));
/// ```
pub fn get_day_anchor(
    start: &NaiveDateTime,
    day: u32,
    unit: Unit,
    steps: i64,
) -> Option<NaiveDateTime> {
    let base = if start.day() <= day {
        *start
    } else {
        add_months(start, 1)?
    };
    let anchor = with_clamped_day(&base, day)?;
    let shifted = shift_by_unit(&anchor, unit, steps)?;
    let max_day = get_eom(shifted.year(), shifted.month())?.day();
    if shifted.day() != day && shifted.day() != max_day {
        with_clamped_day(&shifted, day)
    } else {
        Some(shifted)
    }
}

/// Return the date of a [WeekdayRule] in the month reached by shifting `start` by `steps` units.
///
/// A zero or positive `ordinal` adds that many weeks to the first matching weekday of the month,
/// a negative `ordinal` adds `ordinal + 1` weeks to the last matching weekday of the month.
pub fn get_weekday_anchor(
    start: &NaiveDateTime,
    rule: &WeekdayRule,
    unit: Unit,
    steps: i64,
) -> Anchor {
    let Some(target) = shift_by_unit(start, unit, steps) else {
        return Anchor::Exhausted;
    };
    let date = if rule.ordinal >= 0 {
        first_weekday_of_month(target.year(), target.month(), rule.weekday, rule.full_week)
            .and_then(|d| shift_by_unit(&d, Unit::Week, i64::from(rule.ordinal)))
    } else {
        last_weekday_of_month(target.year(), target.month(), rule.weekday, rule.full_week)
            .and_then(|d| shift_by_unit(&d, Unit::Week, i64::from(rule.ordinal) + 1))
    };
    match date {
        None => Anchor::Exhausted,
        Some(d) if d.date() < start.date() => Anchor::BeforeStart(d),
        Some(d) => Anchor::Date(d),
    }
}

/// Shift a date by an `amount` of a [Unit], which may be negative.
///
/// Month and year shifts keep the day of the month, clamped to the last day of the resulting
/// month, e.g. 31st January plus one month is 28th February.
pub fn shift_by_unit(date: &NaiveDateTime, unit: Unit, amount: i64) -> Option<NaiveDateTime> {
    match unit {
        Unit::Day => add_days(date, amount),
        Unit::Week => add_days(date, amount.checked_mul(7)?),
        Unit::Month => add_months(date, amount),
        Unit::Year => add_months(date, amount.checked_mul(12)?),
    }
}

fn add_days(date: &NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    let n = Days::new(days.unsigned_abs());
    if days < 0 {
        date.checked_sub_days(n)
    } else {
        date.checked_add_days(n)
    }
}

fn add_months(date: &NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let n = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months < 0 {
        date.checked_sub_months(n)
    } else {
        date.checked_add_months(n)
    }
}

/// Set the day of the month to `day`, or the last day of the month if it is shorter.
fn with_clamped_day(date: &NaiveDateTime, day: u32) -> Option<NaiveDateTime> {
    let max_day = get_eom(date.year(), date.month())?.day();
    date.with_day(day.min(max_day))
}

/// Return an end of month date for given month and year.
pub fn get_eom(year: i32, month: u32) -> Option<NaiveDateTime> {
    let mut day = 31;
    let mut date = NaiveDate::from_ymd_opt(year, month, day);
    while date.is_none() && day > 28 {
        day -= 1;
        date = NaiveDate::from_ymd_opt(year, month, day);
    }
    date?.and_hms_opt(0, 0, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::ndt;
    use chrono::Weekday;

    #[test]
    fn test_get_eom() {
        assert_eq!(Some(ndt(2022, 2, 28)), get_eom(2022, 2));
        assert_eq!(Some(ndt(2024, 2, 29)), get_eom(2024, 2));
        assert_eq!(Some(ndt(2022, 4, 30)), get_eom(2022, 4));
        assert_eq!(Some(ndt(2022, 3, 31)), get_eom(2022, 3));
        assert_eq!(None, get_eom(2022, 13));
    }

    #[test]
    fn test_shift_by_unit() {
        let d = ndt(2021, 1, 31);
        assert_eq!(shift_by_unit(&d, Unit::Day, 10), Some(ndt(2021, 2, 10)));
        assert_eq!(shift_by_unit(&d, Unit::Week, -1), Some(ndt(2021, 1, 24)));
        assert_eq!(shift_by_unit(&d, Unit::Month, 1), Some(ndt(2021, 2, 28)));
        assert_eq!(shift_by_unit(&d, Unit::Month, -2), Some(ndt(2020, 11, 30)));
        assert_eq!(shift_by_unit(&ndt(2024, 2, 29), Unit::Year, 1), Some(ndt(2025, 2, 28)));
        assert_eq!(shift_by_unit(&d, Unit::Year, i64::MAX), None);
    }

    #[test]
    fn test_day_anchor_base_month() {
        // start day before the requested day stays in the start month
        assert_eq!(get_day_anchor(&ndt(2021, 7, 10), 15, Unit::Month, 0), Some(ndt(2021, 7, 15)));
        // start day on the requested day is included
        assert_eq!(get_day_anchor(&ndt(2021, 7, 15), 15, Unit::Month, 0), Some(ndt(2021, 7, 15)));
        // start day after the requested day moves to next month
        assert_eq!(get_day_anchor(&ndt(2021, 7, 16), 15, Unit::Month, 0), Some(ndt(2021, 8, 15)));
        // carrying into the next year
        assert_eq!(get_day_anchor(&ndt(2021, 12, 16), 1, Unit::Month, 0), Some(ndt(2022, 1, 1)));
    }

    #[test]
    fn test_day_anchor_clamps_and_expands() {
        let start = ndt(2021, 6, 30);
        let result: Vec<NaiveDateTime> = (0..6)
            .map(|i| get_day_anchor(&start, 31, Unit::Month, 2 * i).unwrap())
            .collect();
        assert_eq!(
            result,
            vec![
                ndt(2021, 6, 30),
                ndt(2021, 8, 31),
                ndt(2021, 10, 31),
                ndt(2021, 12, 31),
                ndt(2022, 2, 28),
                ndt(2022, 4, 30),
            ]
        );
    }

    #[test]
    fn test_day_anchor_start_in_short_month() {
        // 31st requested from 31st January, next month is February
        assert_eq!(get_day_anchor(&ndt(2021, 1, 31), 31, Unit::Month, 1), Some(ndt(2021, 2, 28)));
        assert_eq!(get_day_anchor(&ndt(2021, 1, 31), 31, Unit::Month, 2), Some(ndt(2021, 3, 31)));
        // 30th requested after 28th February
        assert_eq!(get_day_anchor(&ndt(2023, 2, 28), 30, Unit::Month, 0), Some(ndt(2023, 2, 28)));
        assert_eq!(get_day_anchor(&ndt(2023, 2, 28), 30, Unit::Month, 1), Some(ndt(2023, 3, 30)));
    }

    #[test]
    fn test_day_anchor_keeps_time_of_day() {
        let start = ndt(2021, 7, 10).date().and_hms_opt(8, 15, 0).unwrap();
        let result = get_day_anchor(&start, 1, Unit::Month, 1).unwrap();
        assert_eq!(result, ndt(2021, 9, 1).date().and_hms_opt(8, 15, 0).unwrap());
    }

    #[test]
    fn test_weekday_anchor() {
        let start = ndt(2021, 7, 10);
        let rule = WeekdayRule::new(0, false, Weekday::Thu);
        // 1st July is before the start
        assert_eq!(
            get_weekday_anchor(&start, &rule, Unit::Month, 0),
            Anchor::BeforeStart(ndt(2021, 7, 1))
        );
        assert_eq!(
            get_weekday_anchor(&start, &rule, Unit::Month, 1),
            Anchor::Date(ndt(2021, 8, 5))
        );
    }

    #[test]
    fn test_weekday_anchor_negative_ordinals() {
        let start = ndt(2021, 7, 1);
        let last = WeekdayRule::new(-1, false, Weekday::Thu);
        let second_last = WeekdayRule::new(-2, false, Weekday::Thu);
        assert_eq!(
            get_weekday_anchor(&start, &last, Unit::Month, 0),
            Anchor::Date(ndt(2021, 7, 29))
        );
        assert_eq!(
            get_weekday_anchor(&start, &second_last, Unit::Month, 0),
            Anchor::Date(ndt(2021, 7, 22))
        );
    }

    #[test]
    fn test_weekday_anchor_on_start_day() {
        // an anchor on the start day is kept even if the start has a later time of day
        let start = ndt(2021, 7, 1).date().and_hms_opt(12, 0, 0).unwrap();
        let rule = WeekdayRule::new(0, false, Weekday::Thu);
        assert_eq!(
            get_weekday_anchor(&start, &rule, Unit::Month, 0),
            Anchor::Date(ndt(2021, 7, 1))
        );
    }
}
