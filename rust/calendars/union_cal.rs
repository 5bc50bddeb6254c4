use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calendars::{Calendar, DateRoll};

/// A workday calendar which is the potential union of multiple calendars.
///
/// When the union of a workday calendar is observed the following are true:
///
/// - a weekday is such if it is a weekday in all calendars.
/// - a holiday is such if it is a holiday in any calendar.
/// - a workday is such if it is a workday in all calendars.
///
/// This is the way to extend a country's holidays with custom, caller specific dates.
#[derive(Clone, Default, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnionCal {
    /// A vector of [Calendar] used to determine **workdays**.
    pub calendars: Vec<Calendar>,
}

impl UnionCal {
    /// Create a new [UnionCal].
    ///
    /// # Examples
    /// ```rust
    /// # use datecycles::calendars::{Cal, NamedCal, UnionCal, ndt};
    /// let fi = NamedCal::try_new("fi").unwrap();
    /// let office = Cal::from_holidays(vec![ndt(2021, 9, 24)]);
    /// let fi_office = UnionCal::new(vec![fi.into(), office.into()]);
    /// ```
    pub fn new(calendars: Vec<Calendar>) -> Self {
        UnionCal { calendars }
    }
}

impl DateRoll for UnionCal {
    fn is_weekday(&self, date: &NaiveDateTime) -> bool {
        self.calendars.iter().all(|cal| cal.is_weekday(date))
    }

    fn is_holiday(&self, date: &NaiveDateTime) -> bool {
        self.calendars.iter().any(|cal| cal.is_holiday(date))
    }
}
