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
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calendars::{Cal, Calendar, NamedCal};
use crate::cycles::{parse_weekday, Unit, WeekdayRule, WorkdayPolicy};
use crate::errors::CycleError;
use crate::json::JSON;

/// A validated, immutable recurrence rule.
///
/// Construct with [RecurrenceRule::builder] from typed values, or with
/// [RuleParams::try_into_rule] from raw configuration values.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurrenceRule {
    pub(crate) interval: u32,
    pub(crate) unit: Unit,
    pub(crate) day: Option<u32>,
    pub(crate) weekday: Option<WeekdayRule>,
    pub(crate) workday_policy: Option<WorkdayPolicy>,
    pub(crate) start: NaiveDateTime,
    pub(crate) end: Option<NaiveDateTime>,
    pub(crate) count: Option<u32>,
    pub(crate) holidays: Calendar,
    pub(crate) time_zone: Option<Tz>,
}

impl RecurrenceRule {
    /// Start building a rule recurring every `interval` of `unit`.
    ///
    /// # Examples
    /// ```rust
    /// # use datecycles::cycles::{RecurrenceRule, Unit, WorkdayPolicy};
    /// # use datecycles::calendars::ndt;
    /// let rule = RecurrenceRule::builder(1, Unit::Month)
    ///     .day(24)
    ///     .workday_policy(WorkdayPolicy::Next)
    ///     .country("FI")
    ///     .start(ndt(2021, 7, 1))
    ///     .count(1)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(rule.iter().collect::<Vec<_>>(), vec![ndt(2021, 7, 26)]);
    /// ```
    pub fn builder(interval: u32, unit: Unit) -> RuleBuilder {
        RuleBuilder::new(interval, unit)
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn weekday(&self) -> Option<WeekdayRule> {
        self.weekday
    }

    pub fn workday_policy(&self) -> Option<WorkdayPolicy> {
        self.workday_policy
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        self.end
    }

    pub fn count(&self) -> Option<u32> {
        self.count
    }

    /// The resolved holiday calendar, possibly without any holidays.
    pub fn holidays(&self) -> &Calendar {
        &self.holidays
    }

    pub fn time_zone(&self) -> Option<Tz> {
        self.time_zone
    }
}

/// A builder for constructing a valid [RecurrenceRule].
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    interval: u32,
    unit: Unit,
    day: Option<u32>,
    weekday: Option<WeekdayRule>,
    workday_policy: Option<WorkdayPolicy>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    count: Option<u32>,
    holidays: Option<Calendar>,
    country: Option<String>,
    time_zone: Option<Tz>,
}

impl RuleBuilder {
    pub fn new(interval: u32, unit: Unit) -> Self {
        RuleBuilder {
            interval,
            unit,
            day: None,
            weekday: None,
            workday_policy: None,
            start: None,
            end: None,
            count: None,
            holidays: None,
            country: None,
            time_zone: None,
        }
    }

    /// Recur on a fixed day of the month, clamped to the month end in shorter months.
    pub fn day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    /// Recur on the n'th weekday of the month, see [WeekdayRule].
    pub fn weekday(mut self, weekday: WeekdayRule) -> Self {
        self.weekday = Some(weekday);
        self
    }

    pub fn workday_policy(mut self, policy: WorkdayPolicy) -> Self {
        self.workday_policy = Some(policy);
        self
    }

    /// The first date from which occurrences are sought. Defaults to today.
    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    /// The last date on which an occurrence may fall, inclusive of the whole day.
    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// The maximum number of occurrences.
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// An explicit holiday calendar, which takes precedence over any `country`.
    pub fn holidays<T: Into<Calendar>>(mut self, holidays: T) -> Self {
        self.holidays = Some(holidays.into());
        self
    }

    /// A country whose holidays are observed when a workday policy is set and no explicit
    /// holidays are given.
    pub fn country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = Some(time_zone);
        self
    }

    /// Validate the parameters and build the [RecurrenceRule].
    pub fn build(self) -> Result<RecurrenceRule, CycleError> {
        if self.day.is_some() && self.weekday.is_some() {
            return Err(CycleError::DayAndWeekday);
        }
        if self.weekday.is_some() && self.unit != Unit::Month {
            return Err(CycleError::WeekdayRequiresMonth);
        }
        if let Some(day) = self.day {
            if !(1..=31).contains(&day) {
                return Err(CycleError::InvalidDay(i64::from(day)));
            }
        }
        if self.interval < 1 {
            return Err(CycleError::InvalidInterval(i64::from(self.interval)));
        }

        let holidays =
            resolve_holidays(self.holidays, self.country.as_deref(), self.workday_policy)?;
        let start = self.start.unwrap_or_else(|| today(self.time_zone));

        debug!(
            interval = self.interval,
            unit = ?self.unit,
            day = ?self.day,
            weekday = ?self.weekday,
            workday_policy = ?self.workday_policy,
            %start,
            "built recurrence rule"
        );

        Ok(RecurrenceRule {
            interval: self.interval,
            unit: self.unit,
            day: self.day,
            weekday: self.weekday,
            workday_policy: self.workday_policy,
            start,
            end: self.end,
            count: self.count,
            holidays,
            time_zone: self.time_zone,
        })
    }
}

/// Select the single holiday calendar a rule observes.
///
/// Explicit holidays always win. Otherwise a country calendar is used when both a country and a
/// workday policy are given, and an empty calendar in any other case.
pub fn resolve_holidays(
    holidays: Option<Calendar>,
    country: Option<&str>,
    workday_policy: Option<WorkdayPolicy>,
) -> Result<Calendar, CycleError> {
    match (holidays, country, workday_policy) {
        (Some(calendar), _, _) => Ok(calendar),
        (None, Some(country), Some(_)) => {
            let named = NamedCal::try_new(country)?;
            debug!(country = %named.name, "resolved country holiday calendar");
            Ok(Calendar::NamedCal(named))
        }
        (None, _, _) => Ok(Calendar::Cal(Cal::default())),
    }
}

/// Today's date at midnight, in `time_zone` if given, otherwise in UTC.
fn today(time_zone: Option<Tz>) -> NaiveDateTime {
    let now = Utc::now();
    let date = match time_zone {
        Some(tz) => now.with_timezone(&tz).date_naive(),
        None => now.date_naive(),
    };
    date.and_time(NaiveTime::MIN)
}

/// Raw, string typed recurrence parameters, as received from configuration.
///
/// # Examples
/// ```rust
/// # use datecycles::cycles::RuleParams;
/// # use datecycles::json::JSON;
/// # use datecycles::calendars::ndt;
/// let params = RuleParams::from_json(r#"{
///     "every_n": 1,
///     "unit": "month",
///     "weekday": [0, false, "thursday"],
///     "start": "2021-07-10",
///     "count": 3
/// }"#).unwrap();
/// let rule = params.try_into_rule().unwrap();
/// let dates: Vec<_> = rule.iter().collect();
/// assert_eq!(dates, vec![ndt(2021, 8, 5), ndt(2021, 9, 2), ndt(2021, 10, 7)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleParams {
    pub every_n: i64,
    pub unit: String,
    pub day: Option<i64>,
    pub weekday: Option<(i32, bool, String)>,
    pub shift_to_workday: Option<String>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub count: Option<u32>,
    pub country: Option<String>,
    pub holidays: Option<Vec<NaiveDate>>,
    pub tzinfo: Option<String>,
}

impl JSON for RuleParams {}

impl RuleParams {
    /// Validate the raw parameters and convert them into a [RecurrenceRule].
    pub fn try_into_rule(&self) -> Result<RecurrenceRule, CycleError> {
        if self.day.is_some() && self.weekday.is_some() {
            return Err(CycleError::DayAndWeekday);
        }
        let unit = self.unit.parse::<Unit>();
        if self.weekday.is_some() && unit != Ok(Unit::Month) {
            return Err(CycleError::WeekdayRequiresMonth);
        }
        let unit = unit?;
        let day = self
            .day
            .map(|d| {
                u32::try_from(d)
                    .ok()
                    .filter(|v| (1..=31).contains(v))
                    .ok_or(CycleError::InvalidDay(d))
            })
            .transpose()?;
        let policy = self
            .shift_to_workday
            .as_deref()
            .map(str::parse::<WorkdayPolicy>)
            .transpose()?;
        let interval = u32::try_from(self.every_n)
            .ok()
            .filter(|v| *v >= 1)
            .ok_or(CycleError::InvalidInterval(self.every_n))?;

        let mut builder = RecurrenceRule::builder(interval, unit);
        if let Some(day) = day {
            builder = builder.day(day);
        }
        if let Some((ordinal, full_week, name)) = &self.weekday {
            builder = builder.weekday(WeekdayRule::new(*ordinal, *full_week, parse_weekday(name)?));
        }
        if let Some(policy) = policy {
            builder = builder.workday_policy(policy);
        }
        if let Some(start) = self.start {
            builder = builder.start(start.and_time(NaiveTime::MIN));
        }
        if let Some(end) = self.end {
            builder = builder.end(end.and_time(NaiveTime::MIN));
        }
        if let Some(count) = self.count {
            builder = builder.count(count);
        }
        let holidays = self.holidays.as_ref().map(|dates| {
            let dates = dates.iter().map(|d| d.and_time(NaiveTime::MIN)).collect();
            Calendar::Cal(Cal::from_holidays(dates))
        });
        builder = builder.holidays(resolve_holidays(holidays, self.country.as_deref(), policy)?);
        if let Some(tz) = &self.tzinfo {
            let tz = tz
                .parse::<Tz>()
                .map_err(|_| CycleError::InvalidTimeZone(tz.to_string()))?;
            builder = builder.time_zone(tz);
        }
        builder.build()
    }
}
