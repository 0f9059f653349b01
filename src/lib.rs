//! Conversion between the Gregorian and Ethiopian calendars.
//!
//! Both calendars are mapped onto Julian Day Numbers ([`jdn`]), validated
//! conversions sit on top of that ([`convert`]), and [`month_bounds`] derives
//! the first and last day of an Ethiopian month, optionally aligned to whole
//! ISO weeks for rendering calendar grids.
//!
//! Months are zero-based throughout the public API: 0 is Meskerem (or
//! January) and 12 is Pagumē, the short thirteenth month.

/// Emits a `log` record when the `log` feature is enabled and nothing otherwise.
macro_rules! calendar_log {
    ($level:ident, $($args:tt)+) => {
        #[cfg(feature = "log")]
        log::$level!($($args)+);
    };
}
pub(crate) use calendar_log;

mod bounds;
pub mod calendar;
mod consts;
pub mod convert;
pub mod jdn;
mod prelude;
#[cfg(test)]
mod test_utils;
mod types;

pub use bounds::{MonthBounds, end_of_iso_week, gregorian_month_bounds, month_bounds, start_of_iso_week};
pub use calendar::{CalendarSystem, EthiopianCalendar, GregorianCalendar, ViewRows};
pub use consts::*;
pub use convert::{ethiopian_to_gregorian, gregorian_to_ethiopian};
pub use jdn::JdnConverter;
pub use types::{
    Era, GregorianDate, Jdn, ethiopian_days_in_month, gregorian_days_in_month, is_ethiopian_leap_year,
    is_gregorian_leap_year,
};

use crate::prelude::*;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Error type for every fallible operation in the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Ethiopian components outside the accepted range (month is zero-based).
    #[error("Invalid Ethiopian date: year {year}, month {month}, day {day}")]
    InvalidEthiopianDate { year: i32, month: u32, day: u32 },

    /// Gregorian components outside the accepted range (month is zero-based).
    #[error("Invalid Gregorian date: year {year}, month {month}, day {day}")]
    InvalidGregorianDate { year: i32, month: u32, day: u32 },

    /// An era offset that is neither Amete Mihret nor Amete Alem.
    #[error("Unknown era offset: {0}")]
    UnknownEra(i64),

    /// A date string that does not have the `YYYY-M-D` shape.
    #[error("Invalid date format: {0}")]
    Parsing(String),

    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A date that cannot be represented by `chrono`.
    #[error("Date out of supported range: {0}")]
    OutOfRange(String),
}

/// The coarse category of a [`DateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    InvalidArgument,
    Parsing,
}

impl DateError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parsing(_) => ErrorKind::Parsing,
            Self::InvalidEthiopianDate { .. }
            | Self::InvalidGregorianDate { .. }
            | Self::UnknownEra(_)
            | Self::InvalidRange { .. }
            | Self::OutOfRange(_) => ErrorKind::InvalidArgument,
        }
    }
}

/// A day in the Ethiopian calendar together with the Gregorian day it denotes.
///
/// Equality, ordering and hashing follow the denoted day, so two values naming
/// the same day in different eras compare equal.
#[derive(Debug, Clone, Copy, Display)]
#[display(fmt = "{}-{}-{}", "year", "month + 1", "day")]
pub struct EthiopianDate {
    year:      i32,
    month:     u8,
    day:       u8,
    gregorian: GregorianDate,
}

impl EthiopianDate {
    /// Creates an Amete Mihret date from components, `month` being zero-based.
    ///
    /// A day of 0 or a day past the end of the month is carried into the
    /// neighbouring month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidEthiopianDate` if `day > 30` or `month > 12`,
    /// and `DateError::OutOfRange` if the Gregorian year does not fit an `i32`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let gregorian = convert::ethiopian_to_gregorian(year, month, day)?;
        Self::from_jdn_in(gregorian.jdn(), Some(Era::AmeteMihret))
    }

    /// The Ethiopian date of a Gregorian day, in whichever era the day falls.
    pub fn from_gregorian(gregorian: GregorianDate) -> Self {
        let (year, month, day) = jdn::gregorian_date_to_ethiopic(gregorian);
        Self {
            year,
            month: month - 1,
            day,
            gregorian,
        }
    }

    /// The current local date.
    #[cfg(feature = "clock")]
    pub fn today() -> Self {
        Self::from(chrono::Local::now().date_naive())
    }

    pub(crate) fn from_jdn(jdn: Jdn) -> Result<Self, DateError> {
        Ok(Self::from_gregorian(GregorianDate::from_jdn(jdn)?))
    }

    fn from_jdn_in(jdn: Jdn, era: Option<Era>) -> Result<Self, DateError> {
        let (year, month, day) = jdn::jdn_to_ethiopic(jdn, era)?;
        Ok(Self {
            year,
            month: month - 1,
            day,
            gregorian: GregorianDate::from_jdn(jdn)?,
        })
    }

    /// Same year and month on another day; `jdn` must be that day's number.
    pub(crate) fn at_day(self, day: u8, jdn: Jdn) -> Result<Self, DateError> {
        Ok(Self {
            day,
            gregorian: GregorianDate::from_jdn(jdn)?,
            ..self
        })
    }

    /// Parses the `YYYY-M-D` form produced by `Display`. The month in the
    /// string is one-based.
    ///
    /// Returns `Ok(None)` for an empty (or all-whitespace) string.
    ///
    /// # Errors
    /// Returns `DateError::Parsing` if the string does not hold exactly three
    /// numeric components, and `DateError::InvalidEthiopianDate` if they are
    /// out of range.
    pub fn parse(s: &str) -> Result<Option<Self>, DateError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        let (negative, body) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let parts: Vec<&str> = body.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::Parsing(format!(
                "expected 3 '{DATE_SEPARATOR}' separated components, found {}: {s}",
                parts.len()
            )));
        };

        let year: i32 = parse_component(year)?;
        let year = if negative { -year } else { year };
        let month = parse_component::<u32>(month)?
            .checked_sub(1)
            .ok_or_else(|| DateError::Parsing(format!("month must be at least 1: {s}")))?;
        let day = parse_component::<u32>(day)?;

        match (u8::try_from(month), u8::try_from(day)) {
            (Ok(month), Ok(day)) => Self::new(year, month, day).map(Some),
            _ => Err(DateError::InvalidEthiopianDate { year, month, day }),
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month (0 for Meskerem, 12 for Pagumē)
    pub const fn month(&self) -> u8 {
        self.month
    }

    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns `(year, month, day)` with a zero-based month
    pub const fn ymd(&self) -> (i32, u8, u8) {
        (self.year, self.month, self.day)
    }

    /// The Gregorian date this day falls on
    pub const fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    /// Day of the week, 0 for Sunday through 6 for Saturday
    pub fn weekday(&self) -> u8 {
        self.gregorian.weekday()
    }

    /// Amharic name of the weekday
    pub fn day_of_week_name(&self) -> &'static str {
        WEEK_NAMES[usize::from(self.weekday())]
    }

    /// Amharic name of the month
    pub fn month_name(&self) -> Option<&'static str> {
        MONTH_NAMES.get(usize::from(self.month)).copied()
    }

    /// Abbreviated Amharic name of the month
    pub fn short_month_name(&self) -> Option<&'static str> {
        SHORT_MONTH_NAMES.get(usize::from(self.month)).copied()
    }

    pub const fn is_leap_year(&self) -> bool {
        is_ethiopian_leap_year(self.year)
    }

    pub const fn days_in_month(&self) -> u8 {
        ethiopian_days_in_month(self.year, self.month)
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` if the year is beyond what `chrono` supports.
    pub fn to_naive_date(&self) -> Result<NaiveDate, DateError> {
        NaiveDate::try_from(self.gregorian)
    }

    /// The date at midnight; the time of day is always zero.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the year is beyond what `chrono` supports.
    pub fn to_naive_datetime(&self) -> Result<NaiveDateTime, DateError> {
        Ok(self.to_naive_date()?.and_time(NaiveTime::MIN))
    }

    /// Zero-padded `DD/MM/YYYY` rendering for display
    pub const fn slash_format(&self) -> SlashFormat {
        SlashFormat(*self)
    }
}

/// `DD/MM/YYYY` display adapter returned by [`EthiopianDate::slash_format`].
#[derive(Debug, Clone, Copy, Display)]
#[display(fmt = "{:02}/{:02}/{}", "_0.day", "_0.month + 1", "_0.year")]
pub struct SlashFormat(EthiopianDate);

fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
    s.parse::<T>()
        .map_err(|_| DateError::Parsing(format!("not a number: '{s}'")))
}

impl PartialEq for EthiopianDate {
    fn eq(&self, other: &Self) -> bool {
        self.gregorian == other.gregorian
    }
}

impl Eq for EthiopianDate {}

impl Hash for EthiopianDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.gregorian.hash(state);
    }
}

impl PartialOrd for EthiopianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EthiopianDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.gregorian.cmp(&other.gregorian)
    }
}

impl From<GregorianDate> for EthiopianDate {
    fn from(date: GregorianDate) -> Self {
        Self::from_gregorian(date)
    }
}

impl From<NaiveDate> for EthiopianDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_gregorian(GregorianDate::from(date))
    }
}

impl TryFrom<EthiopianDate> for NaiveDate {
    type Error = DateError;

    fn try_from(date: EthiopianDate) -> Result<Self, Self::Error> {
        date.to_naive_date()
    }
}

impl FromStr for EthiopianDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)?.ok_or_else(|| DateError::Parsing("Empty date string".to_owned()))
    }
}

impl Serialize for EthiopianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for EthiopianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ethiopian, gregorian, naive};

    #[test]
    fn test_new_converts_to_gregorian() {
        let date = ethiopian(2008, 0, 1);
        assert_eq!(date.ymd(), (2008, 0, 1));
        assert_eq!(date.gregorian(), gregorian(2015, 8, 12));
        assert_eq!(date.to_naive_date(), Ok(naive(2015, 9, 12)));
    }

    #[test]
    fn test_new_carries_overflow() {
        assert_eq!(ethiopian(2008, 0, 0).ymd(), (2007, 12, 6));
        assert_eq!(ethiopian(2008, 12, 30).ymd(), (2009, 0, 25));
        assert!(EthiopianDate::new(2008, 0, 31).is_err());
        assert!(EthiopianDate::new(2008, 13, 1).is_err());
    }

    #[test]
    fn test_from_naive_date() {
        let date = EthiopianDate::from(naive(2000, 1, 1));
        assert_eq!(date.ymd(), (1992, 3, 22));
        assert_eq!(date.weekday(), 6);
        assert_eq!(date.day_of_week_name(), "ቅዳሜ");
        assert_eq!(date.month_name(), Some("ታኅሣሥ"));
        assert_eq!(date.short_month_name(), Some("ታኅሣ"));
    }

    #[test]
    fn test_ancient_dates_use_amete_alem() {
        let date = EthiopianDate::from(gregorian(1, 0, 1));
        assert!(date.year() > 5000);
        assert_eq!(date.gregorian(), gregorian(1, 0, 1));
    }

    #[test]
    fn test_same_day_in_both_eras_is_equal() {
        let mihret = ethiopian(0, 12, 5);
        let alem = EthiopianDate::from(mihret.gregorian());
        assert_eq!(alem.year(), 5500);
        assert_eq!(mihret, alem);
        assert_eq!(mihret.cmp(&alem), Ordering::Equal);
    }

    #[test]
    fn test_ordering_follows_days() {
        let mut dates = vec![ethiopian(2016, 0, 1), ethiopian(2015, 12, 5), ethiopian(2015, 4, 10)];
        dates.sort();
        assert_eq!(
            dates.iter().map(EthiopianDate::ymd).collect::<Vec<_>>(),
            vec![(2015, 4, 10), (2015, 12, 5), (2016, 0, 1)]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ethiopian(2008, 0, 1).to_string(), "2008-1-1");
        assert_eq!(ethiopian(2016, 12, 5).to_string(), "2016-13-5");
        assert_eq!(ethiopian(2008, 0, 1).slash_format().to_string(), "01/01/2008");
        assert_eq!(ethiopian(2016, 11, 25).slash_format().to_string(), "25/12/2016");
    }

    #[test]
    fn test_parse_cases() {
        struct TestCase {
            input:       &'static str,
            expected:    Option<(i32, u8, u8)>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "2008-1-1",
                expected:    Some((2008, 0, 1)),
                description: "new year",
            },
            TestCase {
                input:       "2016-13-5",
                expected:    Some((2016, 12, 5)),
                description: "Pagumē",
            },
            TestCase {
                input:       " 2016-05-09 ",
                expected:    Some((2016, 4, 9)),
                description: "zero padded with whitespace",
            },
            TestCase {
                input:       "",
                expected:    None,
                description: "empty input",
            },
            TestCase {
                input:       "   ",
                expected:    None,
                description: "whitespace only",
            },
        ];

        for case in &cases {
            let parsed = EthiopianDate::parse(case.input).unwrap();
            assert_eq!(parsed.map(|d| d.ymd()), case.expected, "{}", case.description);
        }
    }

    #[test]
    fn test_parse_errors() {
        struct TestCase {
            input: &'static str,
            kind:  ErrorKind,
        }

        let cases = [
            TestCase {
                input: "2008-01",
                kind:  ErrorKind::Parsing,
            },
            TestCase {
                input: "2008-1-1-1",
                kind:  ErrorKind::Parsing,
            },
            TestCase {
                input: "not-a-date",
                kind:  ErrorKind::Parsing,
            },
            TestCase {
                input: "2008-0-1",
                kind:  ErrorKind::Parsing,
            },
            TestCase {
                input: "2008-1-300",
                kind:  ErrorKind::InvalidArgument,
            },
            TestCase {
                input: "2008-300-1",
                kind:  ErrorKind::InvalidArgument,
            },
            TestCase {
                input: "2008-1-99999999999",
                kind:  ErrorKind::Parsing,
            },
            TestCase {
                input: "2147483647-1-1",
                kind:  ErrorKind::InvalidArgument,
            },
            TestCase {
                input: "2008-14-1",
                kind:  ErrorKind::InvalidArgument,
            },
            TestCase {
                input: "2008-1-31",
                kind:  ErrorKind::InvalidArgument,
            },
        ];

        for case in &cases {
            let err = EthiopianDate::parse(case.input).unwrap_err();
            assert_eq!(err.kind(), case.kind, "input: {}", case.input);
        }
    }

    #[test]
    fn test_parse_reports_large_components_as_invalid() {
        assert_eq!(
            EthiopianDate::parse("2008-1-300"),
            Err(DateError::InvalidEthiopianDate { year: 2008, month: 0, day: 300 })
        );
        assert_eq!(
            EthiopianDate::parse("2008-300-1"),
            Err(DateError::InvalidEthiopianDate { year: 2008, month: 299, day: 1 })
        );
    }

    #[test]
    fn test_years_past_the_i32_gregorian_range() {
        assert!(matches!(EthiopianDate::new(i32::MAX, 0, 1), Err(DateError::OutOfRange(_))));
        assert!(matches!(EthiopianDate::new(i32::MIN, 0, 1), Err(DateError::OutOfRange(_))));
        assert!(matches!("2147483647-1-1".parse::<EthiopianDate>(), Err(DateError::OutOfRange(_))));

        let last = EthiopianDate::new(2_147_439_544, 2, 3).unwrap();
        assert_eq!(last.ymd(), (2_147_439_544, 2, 3));
        assert_eq!(last.gregorian(), gregorian(i32::MAX, 11, 31));
        assert_eq!(EthiopianDate::from(last.gregorian()), last);
    }

    #[test]
    fn test_parse_negative_year() {
        let date = ethiopian(-10, 3, 4);
        assert_eq!(date.to_string(), "-10-4-4");
        assert_eq!("-10-4-4".parse::<EthiopianDate>().unwrap().ymd(), (-10, 3, 4));
    }

    #[test]
    fn test_from_str_rejects_empty() {
        assert!(matches!("".parse::<EthiopianDate>(), Err(DateError::Parsing(_))));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for (year, month, day) in [(2008, 0, 1), (1992, 3, 22), (2011, 12, 6), (1, 5, 30)] {
            let date = ethiopian(year, month, day);
            assert_eq!(date.to_string().parse::<EthiopianDate>().unwrap().ymd(), (year, month, day));
        }
    }

    #[test]
    fn test_month_names_cover_all_months() {
        for month in 0..ETHIOPIAN_MONTHS {
            let date = ethiopian(2016, month, 1);
            assert_eq!(date.month_name(), Some(MONTH_NAMES[usize::from(month)]));
            assert!(date.short_month_name().is_some());
        }
    }

    #[test]
    fn test_leap_year_and_month_length() {
        assert!(ethiopian(2015, 0, 1).is_leap_year());
        assert!(!ethiopian(2016, 0, 1).is_leap_year());
        assert_eq!(ethiopian(2015, 12, 1).days_in_month(), 6);
        assert_eq!(ethiopian(2016, 12, 1).days_in_month(), 5);
        assert_eq!(ethiopian(2016, 3, 1).days_in_month(), 30);
    }

    #[test]
    fn test_naive_datetime_is_midnight() {
        let datetime = ethiopian(2008, 0, 1).to_naive_datetime().unwrap();
        assert_eq!(datetime, naive(2015, 9, 12).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn test_serde() {
        let date = ethiopian(2016, 4, 1);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2016-5-1\"");
        let back: EthiopianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ymd(), (2016, 4, 1));

        assert!(serde_json::from_str::<EthiopianDate>("\"2016-5\"").is_err());
        assert!(serde_json::from_str::<EthiopianDate>("\"\"").is_err());
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(DateError::UnknownEra(0).kind(), ErrorKind::InvalidArgument);
        assert_eq!(DateError::Parsing(String::new()).kind(), ErrorKind::Parsing);
        assert_eq!(ErrorKind::InvalidArgument.to_string(), "InvalidArgument");
    }

    #[cfg(feature = "clock")]
    #[test]
    fn test_today_matches_local_date() {
        let before = chrono::Local::now().date_naive();
        let today = EthiopianDate::today().to_naive_date().unwrap();
        let after = chrono::Local::now().date_naive();
        assert!(before <= today && today <= after);
    }
}
