use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_YEAR, ETHIOPIAN_LEAP_REMAINDER, ETHIOPIAN_MONTH_DAYS, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, GREGORIAN_MONTHS, JD_EPOCH_OFFSET_AMETE_ALEM,
    JD_EPOCH_OFFSET_AMETE_MIHRET, LEAP_YEAR_CYCLE, MIN_DAY, PAGUME, PAGUME_DAYS, PAGUME_DAYS_LEAP,
};
use crate::{DateError, jdn, prelude::*};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two eras of the Ethiopian calendar.
///
/// The era only changes which epoch offset the Ethiopian JDN arithmetic counts
/// from. It is always passed explicitly; nothing in this crate keeps an era as
/// shared state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Era {
    /// Amete Mihret (ዓ/ም), the era in everyday use
    #[default]
    AmeteMihret,
    /// Amete Alem (ዓ/ዓ), the world era, 5500 years earlier
    AmeteAlem,
}

impl Era {
    /// Returns the JDN epoch offset of the era
    pub const fn offset(self) -> i64 {
        match self {
            Self::AmeteMihret => JD_EPOCH_OFFSET_AMETE_MIHRET,
            Self::AmeteAlem => JD_EPOCH_OFFSET_AMETE_ALEM,
        }
    }

    /// Picks the era a bare JDN most likely belongs to: Amete Mihret from
    /// Meskerem 1 of year 1 onwards, Amete Alem before that.
    pub const fn guess_from_jdn(jdn: Jdn) -> Self {
        if jdn.get() >= JD_EPOCH_OFFSET_AMETE_MIHRET + DAYS_IN_YEAR {
            Self::AmeteMihret
        } else {
            Self::AmeteAlem
        }
    }
}

impl TryFrom<i64> for Era {
    type Error = DateError;

    fn try_from(offset: i64) -> Result<Self, Self::Error> {
        match offset {
            JD_EPOCH_OFFSET_AMETE_MIHRET => Ok(Self::AmeteMihret),
            JD_EPOCH_OFFSET_AMETE_ALEM => Ok(Self::AmeteAlem),
            other => Err(DateError::UnknownEra(other)),
        }
    }
}

impl From<Era> for i64 {
    fn from(era: Era) -> Self {
        era.offset()
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmeteMihret => f.write_str("ዓ/ም"),
            Self::AmeteAlem => f.write_str("ዓ/ዓ"),
        }
    }
}

/// A Julian Day Number, the calendar-neutral day counter both calendars
/// convert through.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Into,
    Deref,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct Jdn(i64);

impl Jdn {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the day number as i64
    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Day of the week, 0 for Sunday through 6 for Saturday
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn weekday(self) -> u8 {
        (self.0 + 1).rem_euclid(7) as u8
    }

    /// Returns the day number `days` later (earlier when negative)
    #[inline]
    pub const fn add_days(self, days: i64) -> Self {
        Self(self.0 + days)
    }
}

/// A valid proleptic Gregorian date with a zero-based month.
///
/// This is the interchange triple between the JDN arithmetic and
/// [`chrono::NaiveDate`]; conversions in both directions are provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "GregorianFields", into = "GregorianFields")]
pub struct GregorianDate {
    year:  i32,
    month: u8,
    day:   u8,
}

#[derive(Serialize, Deserialize)]
struct GregorianFields {
    year:  i32,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a new Gregorian date, validating the month (0-11) and the day
    /// against the length of that month.
    ///
    /// # Errors
    /// Returns `DateError::InvalidGregorianDate` if the month or day is out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if month >= GREGORIAN_MONTHS || day < MIN_DAY || day > gregorian_days_in_month(year, month) {
            return Err(DateError::InvalidGregorianDate {
                year,
                month: month.into(),
                day: day.into(),
            });
        }
        Ok(Self { year, month, day })
    }

    /// Builds the date a JDN falls on.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the year does not fit an `i32`.
    pub fn from_jdn(jdn: Jdn) -> Result<Self, DateError> {
        let (year, month, day) = jdn::jdn_to_gregorian(jdn)?;
        Ok(Self {
            year,
            month: month - 1,
            day,
        })
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    /// Zero-based month (0 for January)
    pub const fn month(self) -> u8 {
        self.month
    }

    pub const fn day(self) -> u8 {
        self.day
    }

    pub fn jdn(self) -> Jdn {
        jdn::gregorian_to_jdn(self.day, self.month + 1, self.year)
    }

    /// Day of the week, 0 for Sunday through 6 for Saturday
    pub fn weekday(self) -> u8 {
        self.jdn().weekday()
    }

    pub const fn is_leap_year(self) -> bool {
        is_gregorian_leap_year(self.year)
    }
}

impl TryFrom<GregorianFields> for GregorianDate {
    type Error = DateError;

    fn try_from(fields: GregorianFields) -> Result<Self, Self::Error> {
        Self::new(fields.year, fields.month, fields.day)
    }
}

impl From<GregorianDate> for GregorianFields {
    fn from(date: GregorianDate) -> Self {
        Self {
            year:  date.year,
            month: date.month,
            day:   date.day,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
impl From<NaiveDate> for GregorianDate {
    fn from(date: NaiveDate) -> Self {
        // month0 is 0..=11 and day is 1..=31, both fit a u8
        Self {
            year:  date.year(),
            month: date.month0() as u8,
            day:   date.day() as u8,
        }
    }
}

impl TryFrom<GregorianDate> for NaiveDate {
    type Error = DateError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        Self::from_ymd_opt(date.year, u32::from(date.month) + 1, u32::from(date.day))
            .ok_or_else(|| DateError::OutOfRange(date.to_string()))
    }
}

impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month + 1, self.day)
    }
}

// Helper functions

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a Gregorian month; `month` is zero-based.
pub const fn gregorian_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month < GREGORIAN_MONTHS);

    if month + 1 == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize + 1]
    }
}

/// An Ethiopian year is leap (Pagumē has six days) when `year mod 4 == 3`.
pub const fn is_ethiopian_leap_year(year: i32) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == ETHIOPIAN_LEAP_REMAINDER
}

/// Days in an Ethiopian month; `month` is zero-based, 12 being Pagumē.
pub const fn ethiopian_days_in_month(year: i32, month: u8) -> u8 {
    if month < PAGUME {
        ETHIOPIAN_MONTH_DAYS
    } else if is_ethiopian_leap_year(year) {
        PAGUME_DAYS_LEAP
    } else {
        PAGUME_DAYS
    }
}
