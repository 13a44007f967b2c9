use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MONTH_NAMES_AM,
    MONTH_NAMES_EN, MONTHS_IN_YEAR, PAGUME, PAGUME_DAYS, PAGUME_DAYS_LEAP,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Language of the month-name table used by long formatting.
///
/// Only English (`"en"`) and Amharic (`"am"`) are recognized. Parsing any
/// other tag fails with [`ParseError::UnsupportedLocale`] rather than
/// silently falling back to English.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
pub enum Locale {
    #[default]
    #[display(fmt = "en")]
    #[serde(rename = "en")]
    English,
    #[display(fmt = "am")]
    #[serde(rename = "am")]
    Amharic,
}

impl Locale {
    /// Ordered month-name table for this locale
    pub const fn month_names(self) -> &'static [&'static str; 13] {
        match self {
            Self::English => &MONTH_NAMES_EN,
            Self::Amharic => &MONTH_NAMES_AM,
        }
    }
}

impl FromStr for Locale {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::English),
            "am" => Ok(Self::Amharic),
            _ => Err(ParseError::UnsupportedLocale(s.to_owned())),
        }
    }
}

/// Output shape for [`format_ec`](crate::format_ec).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FormatStyle {
    /// `<MonthName> D, YYYY`
    #[display(fmt = "long")]
    Long,
    /// `MM/DD/YYYY`
    #[display(fmt = "short")]
    Short,
    /// `YYYY-MM-DD`
    #[default]
    #[display(fmt = "iso")]
    Iso,
}

impl FromStr for FormatStyle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" => Ok(Self::Long),
            "short" => Ok(Self::Short),
            "iso" => Ok(Self::Iso),
            _ => Err(ParseError::UnsupportedStyle(s.to_owned())),
        }
    }
}

// Helper functions

/// Returns true when Pagume has 6 days in the given Ethiopian year,
/// i.e. when `ec_year + 1` is divisible by 4.
pub const fn is_ethiopian_leap_year(ec_year: i32) -> bool {
    ec_year.rem_euclid(LEAP_YEAR_CYCLE) == LEAP_YEAR_CYCLE - 1
}

/// Standard Gregorian leap-year rule.
pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in Pagume for the given Ethiopian year
pub const fn pagume_days(ec_year: i32) -> u32 {
    if is_ethiopian_leap_year(ec_year) {
        PAGUME_DAYS_LEAP
    } else {
        PAGUME_DAYS
    }
}

/// Number of days in an Ethiopian month. `month` must be in `1..=13`.
pub const fn days_in_month(ec_year: i32, month: u32) -> u32 {
    debug_assert!(month != 0 && month <= MONTHS_IN_YEAR);

    if month == PAGUME {
        pagume_days(ec_year)
    } else {
        DAYS_IN_MONTH
    }
}

/// Looks up the month name for `month` (1-based) in the given locale.
/// Returns `None` for months outside `1..=13`.
pub fn month_name(month: u32, locale: Locale) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    locale.month_names().get(index).copied()
}
