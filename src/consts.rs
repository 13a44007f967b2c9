/// Number of months in an Ethiopian year (twelve 30-day months plus Pagume)
pub const MONTHS_IN_YEAR: u32 = 13;

/// Days in each of the twelve regular months
pub const DAYS_IN_MONTH: u32 = 30;

/// Days covered by the twelve regular months
pub const REGULAR_MONTHS_DAYS: u32 = 360;

/// First day of any month
pub const MIN_DAY: u32 = 1;

/// Month number for Meskerem, the first month
pub const MESKEREM: u32 = 1;
/// Month number for Pagume, the short thirteenth month
pub const PAGUME: u32 = 13;

/// Days in Pagume in a common year
pub const PAGUME_DAYS: u32 = 5;
/// Days in Pagume in a leap year
pub const PAGUME_DAYS_LEAP: u32 = 6;

/// Ethiopian leap years repeat every 4 years with no century correction
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Gregorian century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a common year (both calendars)
pub(crate) const DAYS_IN_COMMON_YEAR: i64 = 365;

/// Meskerem 1 of year 1 (27 August 8 CE, proleptic Gregorian), counted in
/// `chrono` days from the common era where 1 January 1 CE is day 1.
pub(crate) const EPOCH_DAYS_FROM_CE: i64 = 2796;

/// Offset between an Ethiopian year and the Gregorian year in which it starts
pub const YEAR_OFFSET: i32 = 7;

/// Date component separator (ISO-like format)
pub const DATE_SEPARATOR: char = '-';
/// Separator used by the short, month-first format
pub const SHORT_SEPARATOR: char = '/';

/// Month names in English transliteration, indexed by `month - 1`
pub const MONTH_NAMES_EN: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miazia", "Genbot",
    "Sene", "Hamle", "Nehase", "Pagumen",
];

/// Month names in Amharic (Ge'ez script), indexed by `month - 1`
pub const MONTH_NAMES_AM: [&str; 13] = [
    "መስከረም",
    "ጥቅምት",
    "ኅዳር",
    "ታኅሣሥ",
    "ጥር",
    "የካቲት",
    "መጋቢት",
    "ሚያዝያ",
    "ግንቦት",
    "ሰኔ",
    "ሐምሌ",
    "ነሐሴ",
    "ጳጉሜን",
];
