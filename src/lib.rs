mod consts;
mod convert;
mod format;
mod prelude;
mod types;

pub use consts::*;
pub use convert::{
    add_days_ec, diff_days_ec, ec_to_gregorian, gregorian_to_ec, is_valid_ec_date, new_year_in,
};
#[cfg(feature = "clock")]
pub use convert::get_current_ec_date;
pub use format::{ParseError, compare_ec_dates, format_ec, parse_ec_date};
pub use types::{
    FormatStyle, Locale, days_in_month, is_ethiopian_leap_year, is_gregorian_leap_year,
    month_name, pagume_days,
};

use crate::prelude::*;
use chrono::NaiveDate;
use std::str::FromStr;

/// A date in the Ethiopian (Ge'ez) calendar.
///
/// The year has twelve 30-day months followed by Pagume, which has 5 days,
/// or 6 in a leap year. The value is a plain triple: fields are public and
/// construction through them is unchecked, use [`EcDate::new`] or
/// [`is_valid_ec_date`] when the range matters. Ordering is lexicographic on
/// `(year, month, day)`.
///
/// An `EcDate` is a view of a Gregorian day. Callers that persist dates
/// should store the Gregorian [`NaiveDate`] and re-derive this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month:02}-{day:02}")]
pub struct EcDate {
    pub year:  i32,
    pub month: u32,
    pub day:   u32,
}

/// Error raised when an Ethiopian date cannot be mapped onto the Gregorian
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ConversionError {
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MONTHS_IN_YEAR)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day: {} (must be 1-{})", "_0", DAYS_IN_MONTH)]
    InvalidDay(u32),
    #[display(fmt = "Invalid Pagume day {day} for year {year} (must be 1-{max})")]
    InvalidPagumeDay { year: i32, day: u32, max: u32 },
    #[display(fmt = "Ethiopian year {year} is outside the supported Gregorian range")]
    OutOfRange { year: i32 },
}

impl std::error::Error for ConversionError {}

impl EcDate {
    /// Creates a date after checking month and day ranges.
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidMonth` if the month is outside 1-13,
    /// `ConversionError::InvalidDay` if the day is outside 1-30, and
    /// `ConversionError::InvalidPagumeDay` if a Pagume day exceeds the
    /// length of Pagume in that year.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ConversionError> {
        let date = Self { year, month, day };
        date.check_ranges()?;
        Ok(date)
    }

    /// Checks month and day bounds, coarse bounds before the Pagume bound.
    pub(crate) fn check_ranges(self) -> Result<(), ConversionError> {
        if !(MESKEREM..=MONTHS_IN_YEAR).contains(&self.month) {
            return Err(ConversionError::InvalidMonth(self.month));
        }
        if !(MIN_DAY..=DAYS_IN_MONTH).contains(&self.day) {
            return Err(ConversionError::InvalidDay(self.day));
        }
        if self.month == PAGUME {
            let max = pagume_days(self.year);
            if self.day > max {
                return Err(ConversionError::InvalidPagumeDay {
                    year: self.year,
                    day: self.day,
                    max,
                });
            }
        }
        Ok(())
    }

    /// 1-based day of the Ethiopian year (1-366 for valid dates)
    pub const fn day_of_year(&self) -> u32 {
        self.month
            .saturating_sub(1)
            .saturating_mul(DAYS_IN_MONTH)
            .saturating_add(self.day)
    }

    /// Returns true if this is the last day of its year.
    pub const fn is_last_day_of_year(&self) -> bool {
        self.month == PAGUME && self.day == pagume_days(self.year)
    }
}

impl From<NaiveDate> for EcDate {
    fn from(date: NaiveDate) -> Self {
        gregorian_to_ec(date)
    }
}

impl TryFrom<EcDate> for NaiveDate {
    type Error = ConversionError;

    fn try_from(value: EcDate) -> Result<Self, Self::Error> {
        ec_to_gregorian(value)
    }
}

impl FromStr for EcDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ec_date(s)
    }
}

impl serde::Serialize for EcDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for EcDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let date: Self = s.parse().map_err(serde::de::Error::custom)?;
        // Stored dates must be real dates, unlike the permissive parser
        date.check_ranges()
            .map_err(ParseError::from)
            .map_err(serde::de::Error::custom)?;
        Ok(date)
    }
}
