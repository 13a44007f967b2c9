//! Conversion between the Gregorian and Ethiopian calendars, plus the
//! validation and day arithmetic built on top of it.
//!
//! Both directions anchor on the Gregorian day of Meskerem 1 (the
//! Ethiopian new year) and count days from it. Anchors are kept as
//! `chrono` day numbers (1 January 1 CE is day 1) so the forward direction
//! stays total over every date `NaiveDate` can hold.

use chrono::{Datelike, Days, NaiveDate};

use crate::consts::{
    DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, EPOCH_DAYS_FROM_CE, LEAP_YEAR_CYCLE, PAGUME,
    REGULAR_MONTHS_DAYS, YEAR_OFFSET,
};
use crate::{ConversionError, EcDate};

/// Day number of Meskerem 1 of `ec_year`.
///
/// Every fourth year (the one before a year divisible by 4) has a sixth
/// Pagume day, which pushes the following new year back by one day.
fn new_year_day_number(ec_year: i32) -> i64 {
    let ec_year = i64::from(ec_year);
    EPOCH_DAYS_FROM_CE
        + DAYS_IN_COMMON_YEAR * (ec_year - 1)
        + ec_year.div_euclid(i64::from(LEAP_YEAR_CYCLE))
}

fn day_number(date: NaiveDate) -> i64 {
    i64::from(date.num_days_from_ce())
}

fn date_from_day_number(days: i64) -> Option<NaiveDate> {
    i32::try_from(days)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
}

/// Splits a 1-based Ethiopian day of year into `(month, day)`.
fn month_day_from_ordinal(day_of_year: u32) -> (u32, u32) {
    if day_of_year <= REGULAR_MONTHS_DAYS {
        let zero_based = day_of_year - 1;
        (zero_based / DAYS_IN_MONTH + 1, zero_based % DAYS_IN_MONTH + 1)
    } else {
        (PAGUME, day_of_year - REGULAR_MONTHS_DAYS)
    }
}

/// Returns the Gregorian date of the Ethiopian new year (Meskerem 1) that
/// falls in the given Gregorian year, or `None` if it is outside the range
/// of `NaiveDate`.
///
/// From 1900 through 2098 this is 12 September when the next Gregorian
/// year is a leap year and 11 September otherwise.
pub fn new_year_in(gregorian_year: i32) -> Option<NaiveDate> {
    let ec_year = gregorian_year.checked_sub(YEAR_OFFSET)?;
    date_from_day_number(new_year_day_number(ec_year))
}

/// Converts a Gregorian date to the Ethiopian calendar.
///
/// Dates before this Gregorian year's Meskerem 1 belong to the Ethiopian
/// year `gregorian_year - 8` and count from the previous Gregorian year's
/// new year; the rest belong to `gregorian_year - 7`.
pub fn gregorian_to_ec(date: NaiveDate) -> EcDate {
    let today = day_number(date);
    let mut ec_year = date.year() - YEAR_OFFSET;
    if today < new_year_day_number(ec_year) {
        ec_year -= 1;
    }
    // Only moves again tens of millennia away from the epoch, where the
    // 4-year leap cycle drifts whole years against the Gregorian one.
    while today < new_year_day_number(ec_year) {
        ec_year -= 1;
    }
    while today >= new_year_day_number(ec_year + 1) {
        ec_year += 1;
    }

    // Always in 1..=366 once the year brackets `today`
    let day_of_year = u32::try_from(today - new_year_day_number(ec_year) + 1).unwrap_or(1);
    let (month, day) = month_day_from_ordinal(day_of_year);

    EcDate {
        year: ec_year,
        month,
        day,
    }
}

/// Converts an Ethiopian date to the Gregorian calendar.
///
/// # Errors
/// Returns `ConversionError::InvalidMonth`, `ConversionError::InvalidDay` or
/// `ConversionError::InvalidPagumeDay` (checked in that order) for
/// out-of-range components, and `ConversionError::OutOfRange` if the result
/// cannot be represented as a `NaiveDate`.
pub fn ec_to_gregorian(ec: EcDate) -> Result<NaiveDate, ConversionError> {
    ec.check_ranges()?;

    let offset = if ec.month == PAGUME {
        REGULAR_MONTHS_DAYS + (ec.day - 1)
    } else {
        (ec.month - 1) * DAYS_IN_MONTH + (ec.day - 1)
    };

    date_from_day_number(new_year_day_number(ec.year) + i64::from(offset))
        .ok_or(ConversionError::OutOfRange { year: ec.year })
}

/// Returns true if `ec` names a real Ethiopian day that maps onto a
/// representable Gregorian date. Never fails.
pub fn is_valid_ec_date(ec: EcDate) -> bool {
    ec.check_ranges().is_ok() && ec_to_gregorian(ec).is_ok()
}

/// Moves `ec` by `days` calendar days (negative moves backwards).
///
/// # Errors
/// Returns the `ec_to_gregorian` error for an invalid `ec`, or
/// `ConversionError::OutOfRange` if the result leaves the `NaiveDate` range.
pub fn add_days_ec(ec: EcDate, days: i64) -> Result<EcDate, ConversionError> {
    let start = ec_to_gregorian(ec)?;
    let step = Days::new(days.unsigned_abs());
    let moved = if days >= 0 {
        start.checked_add_days(step)
    } else {
        start.checked_sub_days(step)
    };
    moved
        .map(gregorian_to_ec)
        .ok_or(ConversionError::OutOfRange { year: ec.year })
}

/// Number of days from `a` to `b`, positive when `b` is later.
///
/// # Errors
/// Returns the `ec_to_gregorian` error for whichever date is invalid.
pub fn diff_days_ec(a: EcDate, b: EcDate) -> Result<i64, ConversionError> {
    let from = ec_to_gregorian(a)?;
    let to = ec_to_gregorian(b)?;
    Ok(to.signed_duration_since(from).num_days())
}

/// Today's date in the Ethiopian calendar, using the local time zone.
#[cfg(feature = "clock")]
pub fn get_current_ec_date() -> EcDate {
    gregorian_to_ec(chrono::Local::now().date_naive())
}
