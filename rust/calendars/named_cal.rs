use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calendars::named::Country;
use crate::calendars::DateRoll;
use crate::errors::CycleError;

/// A holiday calendar of one or more countries specified by a string representation.
///
/// This struct is designed for use when serialization of a calendar as part of an another
/// composite struct seeks to be related to named countries and not an inefficient list of dates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NamedCalDataModel")]
pub struct NamedCal {
    pub name: String,
    #[serde(skip)]
    pub countries: Vec<Country>,
}

#[derive(Deserialize)]
struct NamedCalDataModel {
    name: String,
}

impl std::convert::TryFrom<NamedCalDataModel> for NamedCal {
    type Error = CycleError;

    fn try_from(model: NamedCalDataModel) -> Result<Self, Self::Error> {
        Self::try_new(&model.name)
    }
}

impl NamedCal {
    /// Create a new [`NamedCal`].
    ///
    /// # Notes
    /// `name` must be a string of country codes or names separated by commas. A date is a
    /// holiday if it is a holiday in any of the countries.
    ///
    /// # Examples
    /// ```rust
    /// # use datecycles::calendars::{NamedCal};
    /// let named_cal = NamedCal::try_new("FI,se");
    /// # let named_cal = named_cal.unwrap();
    /// assert_eq!(named_cal.countries.len(), 2);
    /// assert_eq!(named_cal.name, "fi,se");
    /// ```
    pub fn try_new(name: &str) -> Result<Self, CycleError> {
        let countries: Vec<Country> = parse_countries(name)?;
        Ok(Self {
            name: countries.iter().map(|c| c.code()).collect::<Vec<&str>>().join(","),
            countries,
        })
    }
}

impl DateRoll for NamedCal {
    fn is_weekday(&self, date: &NaiveDateTime) -> bool {
        let day = u8::try_from(date.weekday().num_days_from_monday()).unwrap_or(u8::MAX);
        self.countries.iter().all(|c| !c.week_mask().contains(&day))
    }

    fn is_holiday(&self, date: &NaiveDateTime) -> bool {
        let date = date.date();
        self.countries.iter().any(|c| c.is_holiday(&date))
    }
}

fn parse_countries(name: &str) -> Result<Vec<Country>, CycleError> {
    let mut countries: Vec<Country> = Vec::new();
    for part in name.split(",") {
        let country = Country::try_from_name(part)?;
        if !countries.contains(&country) {
            countries.push(country)
        }
    }
    Ok(countries)
}
