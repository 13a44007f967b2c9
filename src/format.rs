use std::cmp::Ordering;

use crate::{
    ConversionError, DATE_SEPARATOR, EcDate, FormatStyle, Locale, SHORT_SEPARATOR, month_name,
};

/// Error type for string-level operations: parsing dates, locales and
/// format styles.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input does not split into exactly three `-` separated segments.
    #[error("Invalid date format: {0:?} (expected YYYY-MM-DD)")]
    InvalidFormat(String),

    /// A segment is not an integer.
    #[error("Non-numeric date component: {0:?}")]
    NonNumericComponent(String),

    /// Locale tag other than `en` or `am`.
    #[error("Unsupported locale: {0:?} (expected \"en\" or \"am\")")]
    UnsupportedLocale(String),

    /// Format style other than `long`, `short` or `iso`.
    #[error("Unsupported format style: {0:?} (expected \"long\", \"short\" or \"iso\")")]
    UnsupportedStyle(String),

    /// Parsed components do not form a real date.
    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

/// Renders an Ethiopian date.
///
/// - `Iso`: `2017-01-15`
/// - `Short`: `01/15/2017`
/// - `Long`: `Meskerem 15, 2017` (month name from the locale's table)
///
/// Long formatting of a month outside 1-13 falls back to the month number.
pub fn format_ec(ec: EcDate, locale: Locale, style: FormatStyle) -> String {
    let EcDate { year, month, day } = ec;
    match style {
        FormatStyle::Iso => ec.to_string(),
        FormatStyle::Short => {
            format!("{month:02}{SHORT_SEPARATOR}{day:02}{SHORT_SEPARATOR}{year}")
        },
        FormatStyle::Long => match month_name(month, locale) {
            Some(name) => format!("{name} {day}, {year}"),
            None => format!("{month} {day}, {year}"),
        },
    }
}

/// Parses the ISO form `YYYY-MM-DD`.
///
/// Strict about shape, permissive about range: `2017-14-40` parses. Run
/// [`is_valid_ec_date`](crate::is_valid_ec_date) or [`EcDate::new`] when the
/// range matters.
///
/// # Errors
/// Returns `ParseError::InvalidFormat` unless the input has exactly three
/// `-` separated segments, and `ParseError::NonNumericComponent` if a
/// segment is not an integer.
pub fn parse_ec_date(s: &str) -> Result<EcDate, ParseError> {
    let parts: Vec<&str> = s.trim().split(DATE_SEPARATOR).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    };

    Ok(EcDate {
        year:  parse_component(year)?,
        month: parse_component(month)?,
        day:   parse_component(day)?,
    })
}

/// Helper to parse one segment with a useful error
fn parse_component<T: std::str::FromStr>(s: &str) -> Result<T, ParseError> {
    s.parse::<T>()
        .map_err(|_| ParseError::NonNumericComponent(s.to_owned()))
}

/// Lexicographic comparison on `(year, month, day)`.
///
/// `Ordering::Less`, `Equal` and `Greater` stand for -1, 0 and 1
/// (`compare_ec_dates(a, b) as i8`).
pub fn compare_ec_dates(a: EcDate, b: EcDate) -> Ordering {
    a.cmp(&b)
}
