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
use chrono::{LocalResult, TimeDelta};
use chrono_tz::Tz;
use std::iter::FusedIterator;
use tracing::{debug, trace};

use crate::calendars::DateRoll;
use crate::cycles::{get_anchor, Adjusted, Adjustment, Anchor, RecurrenceRule};

/// A lazy, forward-only sequence of the occurrences of a [RecurrenceRule].
///
/// The sequence is finite when the rule has a `count` or an `end`, otherwise it is unbounded and
/// the caller must limit consumption, e.g. with [Iterator::take].
#[derive(Debug, Clone)]
pub struct DateCycles<'r> {
    rule: &'r RecurrenceRule,
    shifts: u32,
    yielded: u32,
    done: bool,
}

impl<'r> DateCycles<'r> {
    pub fn new(rule: &'r RecurrenceRule) -> Self {
        DateCycles {
            rule,
            shifts: 0,
            yielded: 0,
            done: false,
        }
    }

    /// The rule generating the sequence.
    pub fn rule(&self) -> &'r RecurrenceRule {
        self.rule
    }

    /// Attach the rule's time zone, or UTC if it has none, to every occurrence.
    ///
    /// Local times repeated by a daylight saving transition resolve to the earliest instant.
    /// Local times skipped by a transition move forward by the length of the gap, one hour.
    ///
    /// # Examples
    /// ```rust
    /// # use datecycles::cycles::{RecurrenceRule, Unit};
    /// # use datecycles::calendars::ndt;
    /// use chrono_tz::Europe::Helsinki;
    /// let rule = RecurrenceRule::builder(10, Unit::Day)
    ///     .start(ndt(2021, 7, 10))
    ///     .time_zone(Helsinki)
    ///     .count(2)
    ///     .build()
    ///     .unwrap();
    /// let dates: Vec<_> = rule.iter().zoned().map(|d| d.to_rfc3339()).collect();
    /// assert_eq!(dates, vec!["2021-07-10T00:00:00+03:00", "2021-07-20T00:00:00+03:00"]);
    /// ```
    pub fn zoned(self) -> impl Iterator<Item = DateTime<Tz>> + 'r {
        let tz = self.rule.time_zone.unwrap_or(Tz::UTC);
        self.filter_map(move |d| localize(&tz, &d))
    }

    fn finish(&mut self, reason: &str) -> Option<NaiveDateTime> {
        debug!(reason, yielded = self.yielded, shifts = self.shifts, "date cycles finished");
        self.done = true;
        None
    }

    fn is_after_end(&self, date: &NaiveDateTime) -> bool {
        self.rule.end.is_some_and(|end| date.date() > end.date())
    }
}

/// Attach `tz` to a local date, resolving a local time inside a daylight saving gap forward.
///
/// Returns `None` only at the limits of the representable date range.
fn localize(tz: &Tz, date: &NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(date) {
        LocalResult::Single(d) => Some(d),
        LocalResult::Ambiguous(earliest, _) => Some(earliest),
        LocalResult::None => {
            let shifted = date.checked_add_signed(TimeDelta::hours(1))?;
            tz.from_local_datetime(&shifted).earliest()
        }
    }
}

impl Iterator for DateCycles<'_> {
    type Item = NaiveDateTime;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.rule.count.is_some_and(|c| self.yielded >= c) {
            return self.finish("count reached");
        }
        if self.rule.workday_policy.is_some() && !self.rule.holidays.has_weekdays() {
            return self.finish("calendar has no workdays");
        }
        loop {
            let candidate = match get_anchor(self.rule, self.shifts) {
                Anchor::Date(d) => d,
                Anchor::BeforeStart(d) => {
                    trace!(%d, "candidate before start rejected");
                    self.shifts += 1;
                    continue;
                }
                Anchor::Exhausted => return self.finish("date range exhausted"),
            };
            let date = match self
                .rule
                .workday_policy
                .adjust(&candidate, &self.rule.holidays)
            {
                Adjusted::Date(d) => d,
                Adjusted::Skipped(d) => {
                    if self.is_after_end(&d) {
                        return self.finish("end reached");
                    }
                    trace!(%d, "candidate on non-workday skipped");
                    self.shifts += 1;
                    continue;
                }
                Adjusted::Exhausted => return self.finish("date range exhausted"),
            };
            if self.is_after_end(&date) {
                return self.finish("end reached");
            }
            self.yielded += 1;
            self.shifts += 1;
            if self.rule.count.is_some_and(|c| self.yielded >= c) {
                debug!(yielded = self.yielded, shifts = self.shifts, "date cycles finished");
                self.done = true;
            }
            return Some(date);
        }
    }
}

impl FusedIterator for DateCycles<'_> {}

/// Return the lazy sequence of occurrences of `rule`.
///
/// # Examples
/// ```rust
/// # use datecycles::cycles::{datecycles, RecurrenceRule, Unit};
/// # use datecycles::calendars::ndt;
/// let rule = RecurrenceRule::builder(2, Unit::Month)
///     .day(31)
///     .start(ndt(2021, 6, 30))
///     .end(ndt(2022, 2, 28))
///     .build()
///     .unwrap();
/// let dates: Vec<_> = datecycles(&rule).collect();
/// assert_eq!(
///     dates,
///     vec![
///         ndt(2021, 6, 30),
///         ndt(2021, 8, 31),
///         ndt(2021, 10, 31),
///         ndt(2021, 12, 31),
///         ndt(2022, 2, 28)
///     ]
/// );
/// ```
pub fn datecycles(rule: &RecurrenceRule) -> DateCycles<'_> {
    DateCycles::new(rule)
}

impl RecurrenceRule {
    /// Return the lazy sequence of occurrences of this rule.
    pub fn iter(&self) -> DateCycles<'_> {
        DateCycles::new(self)
    }
}

impl<'r> IntoIterator for &'r RecurrenceRule {
    type Item = NaiveDateTime;
    type IntoIter = DateCycles<'r>;

    fn into_iter(self) -> Self::IntoIter {
        DateCycles::new(self)
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{ndt, Cal, UnionCal};
    use crate::cycles::{Unit, WeekdayRule, WorkdayPolicy};
    use chrono::Weekday;

    fn fixture_monthly(day: u32) -> RecurrenceRule {
        RecurrenceRule::builder(1, Unit::Month)
            .day(day)
            .start(ndt(2021, 7, 10))
            .count(3)
            .build()
            .unwrap()
    }

    #[test_log::test]
    fn test_count_limits_sequence() {
        let rule = fixture_monthly(1);
        let dates: Vec<_> = rule.iter().collect();
        assert_eq!(dates, vec![ndt(2021, 8, 1), ndt(2021, 9, 1), ndt(2021, 10, 1)]);
    }

    #[test_log::test]
    fn test_zero_count_is_empty() {
        let rule = RecurrenceRule::builder(1, Unit::Day)
            .start(ndt(2021, 7, 10))
            .count(0)
            .build()
            .unwrap();
        assert_eq!(rule.iter().next(), None);
    }

    #[test_log::test]
    fn test_fused_after_finish() {
        let rule = fixture_monthly(1);
        let mut cycles = rule.iter();
        assert_eq!(cycles.by_ref().count(), 3);
        assert_eq!(cycles.next(), None);
        assert_eq!(cycles.next(), None);
    }

    #[test_log::test]
    fn test_unbounded_with_take() {
        let rule = RecurrenceRule::builder(1, Unit::Week)
            .start(ndt(2021, 7, 10))
            .build()
            .unwrap();
        let dates: Vec<_> = rule.iter().take(500).collect();
        assert_eq!(dates.len(), 500);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
    }

    #[test_log::test]
    fn test_end_is_inclusive_of_day() {
        let rule = RecurrenceRule::builder(1, Unit::Day)
            .start(ndt(2021, 7, 10).date().and_hms_opt(12, 0, 0).unwrap())
            .end(ndt(2021, 7, 12))
            .build()
            .unwrap();
        let dates: Vec<_> = rule.iter().collect();
        assert_eq!(dates.len(), 3);
        assert_eq!(dates[2], ndt(2021, 7, 12).date().and_hms_opt(12, 0, 0).unwrap());
    }

    #[test_log::test]
    fn test_skip_rejection_after_end_finishes() {
        // every occurrence is a Saturday, so every candidate is skipped
        let rule = RecurrenceRule::builder(1, Unit::Week)
            .start(ndt(2021, 7, 10))
            .end(ndt(2021, 9, 1))
            .workday_policy(WorkdayPolicy::Skip)
            .build()
            .unwrap();
        assert_eq!(rule.iter().count(), 0);
    }

    #[test_log::test]
    fn test_exhausted_at_calendar_limit() {
        let start = NaiveDateTime::MAX.date().and_hms_opt(0, 0, 0).unwrap();
        let rule = RecurrenceRule::builder(1, Unit::Year).start(start).build().unwrap();
        let dates: Vec<_> = rule.iter().take(5).collect();
        assert_eq!(dates, vec![start]);
    }

    #[test_log::test]
    fn test_weekday_before_start_retried() {
        let rule = RecurrenceRule::builder(1, Unit::Month)
            .weekday(WeekdayRule::new(0, false, Weekday::Thu))
            .start(ndt(2021, 7, 10))
            .count(1)
            .build()
            .unwrap();
        assert_eq!(rule.iter().collect::<Vec<_>>(), vec![ndt(2021, 8, 5)]);
    }

    #[test_log::test]
    fn test_into_iterator_and_datecycles_agree() {
        let rule = RecurrenceRule::builder(1, Unit::Month)
            .day(15)
            .workday_policy(WorkdayPolicy::Previous)
            .holidays(Cal::from_holidays(vec![ndt(2021, 9, 15)]))
            .start(ndt(2021, 7, 1))
            .count(4)
            .build()
            .unwrap();
        let mut via_loop = vec![];
        for d in &rule {
            via_loop.push(d);
        }
        assert_eq!(via_loop, datecycles(&rule).collect::<Vec<_>>());
        assert_eq!(
            via_loop,
            vec![ndt(2021, 7, 15), ndt(2021, 8, 13), ndt(2021, 9, 14), ndt(2021, 10, 15)]
        );
    }

    #[test_log::test]
    fn test_zoned_defaults_to_utc() {
        let rule = fixture_monthly(1);
        let first = rule.iter().zoned().next().unwrap();
        assert_eq!(first.timezone(), Tz::UTC);
        assert_eq!(first.naive_local(), ndt(2021, 8, 1));
    }

    #[test_log::test]
    fn test_zoned_keeps_daylight_saving_gap() {
        // clocks in Helsinki jump from 03:00 to 04:00 on 28th March 2021
        let rule = RecurrenceRule::builder(1, Unit::Day)
            .start(ndt(2021, 3, 27).date().and_hms_opt(3, 30, 0).unwrap())
            .time_zone(chrono_tz::Europe::Helsinki)
            .count(3)
            .build()
            .unwrap();
        let zoned: Vec<_> = rule.iter().zoned().map(|d| d.to_rfc3339()).collect();
        assert_eq!(
            zoned,
            vec![
                "2021-03-27T03:30:00+02:00",
                "2021-03-28T04:30:00+03:00",
                "2021-03-29T03:30:00+03:00"
            ]
        );
        assert_eq!(zoned.len(), rule.iter().count());
    }

    #[test_log::test]
    fn test_zoned_ambiguous_takes_earliest() {
        // 03:30 occurs twice in Helsinki on 31st October 2021
        let rule = RecurrenceRule::builder(1, Unit::Day)
            .start(ndt(2021, 10, 31).date().and_hms_opt(3, 30, 0).unwrap())
            .time_zone(chrono_tz::Europe::Helsinki)
            .count(1)
            .build()
            .unwrap();
        let zoned: Vec<_> = rule.iter().zoned().map(|d| d.to_rfc3339()).collect();
        assert_eq!(zoned, vec!["2021-10-31T03:30:00+03:00"]);
    }

    #[test_log::test]
    fn test_calendar_without_workdays_finishes() {
        let weekend = Cal::try_new(vec![], vec![5, 6]).unwrap();
        let weekdays = Cal::try_new(vec![], vec![0, 1, 2, 3, 4]).unwrap();
        for policy in [WorkdayPolicy::Next, WorkdayPolicy::Previous, WorkdayPolicy::Skip] {
            let rule = RecurrenceRule::builder(1, Unit::Day)
                .workday_policy(policy)
                .holidays(UnionCal::new(vec![weekend.clone().into(), weekdays.clone().into()]))
                .start(ndt(2021, 7, 10))
                .build()
                .unwrap();
            assert_eq!(rule.iter().next(), None);
        }
    }
}
