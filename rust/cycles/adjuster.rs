use chrono::prelude::*;

use crate::calendars::DateRoll;
use crate::cycles::WorkdayPolicy;

/// The outcome of adjusting a candidate date to a workday.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Adjusted {
    /// The adjusted date, which is a workday unless no policy applies.
    Date(NaiveDateTime),
    /// The unadjusted date was a weekend or holiday and was discarded.
    Skipped(NaiveDateTime),
    /// Rolling ran out of the representable date range.
    Exhausted,
}

/// Perform date adjustment according to calendar definitions, i.e. a known [`DateRoll`].
pub trait Adjustment {
    /// Adjust a date under an adjustment rule.
    fn adjust<T: DateRoll>(&self, udate: &NaiveDateTime, calendar: &T) -> Adjusted;
}

impl Adjustment for WorkdayPolicy {
    /// `Skip` is judged on the unadjusted date only; it never rolls.
    fn adjust<T: DateRoll>(&self, udate: &NaiveDateTime, calendar: &T) -> Adjusted {
        let rolled = match self {
            WorkdayPolicy::Next => calendar.roll_forward_bus_day(udate),
            WorkdayPolicy::Previous => calendar.roll_backward_bus_day(udate),
            WorkdayPolicy::Skip => {
                if calendar.is_non_bus_day(udate) {
                    return Adjusted::Skipped(*udate);
                }
                Some(*udate)
            }
        };
        rolled.map_or(Adjusted::Exhausted, Adjusted::Date)
    }
}

impl Adjustment for Option<WorkdayPolicy> {
    fn adjust<T: DateRoll>(&self, udate: &NaiveDateTime, calendar: &T) -> Adjusted {
        match self {
            None => Adjusted::Date(*udate),
            Some(policy) => policy.adjust(udate, calendar),
        }
    }
}
