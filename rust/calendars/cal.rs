use chrono::prelude::*;
use chrono::Weekday;
use indexmap::set::IndexSet;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::calendars::DateRoll;
use crate::errors::CycleError;

/// A workday calendar with a singular list of holidays.
///
/// A workday calendar is formed of 2 components:
///
/// - `week_mask`: which defines the days of the week that are not general workdays. In Western
///   culture these are typically Saturday and Sunday.
/// - `holidays`: which defines specific dates that may be exceptions to the general working week,
///   and cannot be workdays.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cal {
    pub(crate) holidays: IndexSet<NaiveDate>,
    pub(crate) week_mask: HashSet<Weekday>,
}

impl Cal {
    /// Create a calendar.
    ///
    /// `holidays` provide a vector of dates that cannot be workdays, only their calendar date is
    /// retained. `week_mask` is a vector of days that are excluded from the working week, and
    /// must leave at least one workday.
    pub fn new(holidays: Vec<NaiveDateTime>, week_mask: Vec<Weekday>) -> Result<Self, CycleError> {
        let week_mask: HashSet<Weekday> = HashSet::from_iter(week_mask);
        if week_mask.len() == 7 {
            return Err(CycleError::FullWeekMask);
        }
        Ok(Cal {
            holidays: IndexSet::from_iter(holidays.into_iter().map(|d| d.date())),
            week_mask,
        })
    }

    /// Create a calendar with a numeric week mask (0=Mon,.., 6=Sun).
    pub fn try_new(holidays: Vec<NaiveDateTime>, week_mask: Vec<u8>) -> Result<Self, CycleError> {
        let week_mask = week_mask
            .into_iter()
            .map(|v| Weekday::try_from(v).map_err(|_| CycleError::InvalidWeekMask(v)))
            .collect::<Result<Vec<Weekday>, CycleError>>()?;
        Cal::new(holidays, week_mask)
    }

    /// Create a calendar with a Saturday and Sunday weekend and the given holidays.
    pub fn from_holidays(holidays: Vec<NaiveDateTime>) -> Self {
        Cal {
            holidays: IndexSet::from_iter(holidays.into_iter().map(|d| d.date())),
            week_mask: HashSet::from([Weekday::Sat, Weekday::Sun]),
        }
    }
}

impl Default for Cal {
    /// A calendar with a Saturday and Sunday weekend and no holidays.
    fn default() -> Self {
        Cal::from_holidays(vec![])
    }
}

impl DateRoll for Cal {
    fn is_weekday(&self, date: &NaiveDateTime) -> bool {
        !self.week_mask.contains(&date.weekday())
    }

    fn is_holiday(&self, date: &NaiveDateTime) -> bool {
        self.holidays.contains(&date.date())
    }
}

// UNIT TESTS
#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::ndt;

    fn fixture_hol_cal() -> Cal {
        let hols = vec![ndt(2015, 9, 5), ndt(2015, 9, 7)]; // Saturday and Monday
        Cal::try_new(hols, vec![5, 6]).unwrap()
    }

    #[test]
    fn test_is_holiday() {
        let cal = fixture_hol_cal();
        let hol =
            NaiveDateTime::parse_from_str("2015-09-07 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let hol_afternoon =
            NaiveDateTime::parse_from_str("2015-09-07 15:45:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let no_hol =
            NaiveDateTime::parse_from_str("2015-09-10 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        let saturday =
            NaiveDateTime::parse_from_str("2024-01-06 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
        assert!(cal.is_holiday(&hol)); // In hol list
        assert!(cal.is_holiday(&hol_afternoon)); // Time of day is ignored
        assert!(!cal.is_holiday(&no_hol)); // Not in hol list
        assert!(!cal.is_holiday(&saturday)); // Not in hol list
    }

    #[test]
    fn test_is_weekday() {
        let cal = fixture_hol_cal();
        assert!(cal.is_weekday(&ndt(2015, 9, 7))); // Monday
        assert!(cal.is_weekday(&ndt(2015, 9, 10))); //Thursday
        assert!(!cal.is_weekday(&ndt(2024, 1, 6))); // Saturday
        assert!(!cal.is_weekday(&ndt(2024, 1, 7))); // Sunday
    }

    #[test]
    fn test_try_new_bad_week_mask() {
        let result = Cal::try_new(vec![], vec![5, 7]);
        assert_eq!(result, Err(CycleError::InvalidWeekMask(7)));
    }

    #[test]
    fn test_default_is_weekend_only() {
        let cal = Cal::default();
        assert_eq!(cal, fixture_hol_cal_empty());
        assert!(cal.is_bus_day(&ndt(2021, 12, 24)));
        assert!(cal.is_non_bus_day(&ndt(2021, 12, 25)));
    }

    fn fixture_hol_cal_empty() -> Cal {
        Cal::try_new(vec![], vec![6, 5]).unwrap()
    }

    #[test]
    fn test_full_week_mask_rejected() {
        let result = Cal::try_new(vec![], vec![0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(result, Err(CycleError::FullWeekMask));
        // repeated days do not make a full week
        assert!(Cal::try_new(vec![], vec![5, 6, 6, 5]).is_ok());
    }
}
