use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::CycleError;

/// The granularity of recurrence stepping.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Calendar days.
    Day,
    /// Seven calendar days.
    Week,
    /// Calendar months, clamping to month end where the day does not exist.
    Month,
    /// Calendar years, clamping 29th February to 28th February.
    Year,
}

impl FromStr for Unit {
    type Err = CycleError;

    /// Parse a unit from its singular or plural name, e.g. "month" or "Months".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" | "days" => Ok(Unit::Day),
            "week" | "weeks" => Ok(Unit::Week),
            "month" | "months" => Ok(Unit::Month),
            "year" | "years" => Ok(Unit::Year),
            _ => Err(CycleError::InvalidUnit(s.to_string())),
        }
    }
}

/// A rule for handling candidate dates landing on a weekend or holiday.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkdayPolicy {
    /// Advance to the next workday.
    Next,
    /// Retreat to the previous workday.
    Previous,
    /// Discard the candidate altogether.
    Skip,
}

impl FromStr for WorkdayPolicy {
    type Err = CycleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "next" => Ok(WorkdayPolicy::Next),
            "previous" => Ok(WorkdayPolicy::Previous),
            "skip" => Ok(WorkdayPolicy::Skip),
            _ => Err(CycleError::InvalidWorkdayPolicy(s.to_string())),
        }
    }
}

/// The n'th given weekday of a month.
///
/// # Notes
/// The `ordinal` counts from the start of the month when zero or positive and from the end of
/// the month when negative, and the two directions are not symmetric:
///
/// - `0` is the first, `1` the second, `2` the third matching weekday;
/// - `-1` is the last, `-2` the second-to-last matching weekday.
///
/// When `full_week` is set only weekdays whose Monday to Sunday week lies entirely within the
/// month are counted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekdayRule {
    pub ordinal: i32,
    pub full_week: bool,
    pub weekday: Weekday,
}

impl WeekdayRule {
    /// Create a new [WeekdayRule].
    pub fn new(ordinal: i32, full_week: bool, weekday: Weekday) -> Self {
        WeekdayRule {
            ordinal,
            full_week,
            weekday,
        }
    }

    /// Create a new [WeekdayRule] parsing the weekday with [parse_weekday].
    pub fn try_new(ordinal: i32, full_week: bool, weekday: &str) -> Result<Self, CycleError> {
        Ok(WeekdayRule::new(ordinal, full_week, parse_weekday(weekday)?))
    }
}

/// Parse a weekday from an English name, a three letter abbreviation or a number where
/// 0 is Monday and 6 is Sunday.
pub fn parse_weekday(s: &str) -> Result<Weekday, CycleError> {
    match s.trim().to_lowercase().as_str() {
        "monday" | "mon" | "0" => Ok(Weekday::Mon),
        "tuesday" | "tue" | "1" => Ok(Weekday::Tue),
        "wednesday" | "wed" | "2" => Ok(Weekday::Wed),
        "thursday" | "thu" | "3" => Ok(Weekday::Thu),
        "friday" | "fri" | "4" => Ok(Weekday::Fri),
        "saturday" | "sat" | "5" => Ok(Weekday::Sat),
        "sunday" | "sun" | "6" => Ok(Weekday::Sun),
        _ => Err(CycleError::InvalidWeekday(s.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_str() {
        assert_eq!(Unit::from_str("day"), Ok(Unit::Day));
        assert_eq!(Unit::from_str("Weeks"), Ok(Unit::Week));
        assert_eq!(Unit::from_str("month"), Ok(Unit::Month));
        assert_eq!(Unit::from_str("years"), Ok(Unit::Year));
        assert_eq!(
            Unit::from_str("fortnight"),
            Err(CycleError::InvalidUnit("fortnight".to_string()))
        );
    }

    #[test]
    fn test_workday_policy_from_str() {
        assert_eq!("next".parse::<WorkdayPolicy>(), Ok(WorkdayPolicy::Next));
        assert_eq!("Previous".parse::<WorkdayPolicy>(), Ok(WorkdayPolicy::Previous));
        assert_eq!("skip".parse::<WorkdayPolicy>(), Ok(WorkdayPolicy::Skip));
        assert_eq!(
            "following".parse::<WorkdayPolicy>(),
            Err(CycleError::InvalidWorkdayPolicy("following".to_string()))
        );
    }

    #[test]
    fn test_parse_weekday() {
        assert_eq!(parse_weekday("thursday"), Ok(Weekday::Thu));
        assert_eq!(parse_weekday("Thu"), Ok(Weekday::Thu));
        assert_eq!(parse_weekday("3"), Ok(Weekday::Thu));
        assert_eq!(parse_weekday("6"), Ok(Weekday::Sun));
        assert!(parse_weekday("7").is_err());
        assert!(parse_weekday("thurs").is_err());
    }

    #[test]
    fn test_weekday_rule_try_new() {
        let rule = WeekdayRule::try_new(-2, true, "fri").unwrap();
        assert_eq!(rule, WeekdayRule::new(-2, true, Weekday::Fri));
    }
}
