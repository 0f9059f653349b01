//! Julian Day Number arithmetic for the Gregorian and Ethiopian calendars.
//!
//! Both calendars are mapped onto a JDN and converted through it, so that the
//! Gregorian 400/100/4-year leap rule and the Ethiopian 4-year rule never have
//! to meet in one formula.
//!
//! Months are **one-based** at this layer (1-12 for Gregorian, 1-13 for
//! Ethiopian). Nothing here validates its input: out-of-range months or days
//! simply produce the JDN the arithmetic lands on. Validation belongs to
//! [`crate::convert`].
//!
//! Ethiopian arithmetic depends on an era. It is passed explicitly as an
//! `Option<Era>`: `None` means "Amete Mihret" when going to a JDN and "guess
//! from the JDN" when coming back. [`JdnConverter`] bundles an era with the two
//! operations for callers that want to fix one era for several calls.

use crate::consts::{
    DAYS_IN_MONTH, DAYS_IN_YEAR, ETHIOPIAN_MONTH_DAYS, FEBRUARY, FEBRUARY_DAYS_LEAP,
    FOUR_YEAR_CYCLE_DAYS, GREGORIAN_100_YEAR_DAYS, GREGORIAN_400_YEAR_DAYS, GREGORIAN_MONTHS,
    JD_EPOCH_OFFSET_GREGORIAN, THREE_COMMON_YEARS_DAYS,
};
use crate::types::{Era, GregorianDate, Jdn, is_gregorian_leap_year};
use crate::DateError;

/// Floor division, matching the quotient used throughout the JDN formulas.
#[inline]
const fn quotient(i: i64, j: i64) -> i64 {
    i.div_euclid(j)
}

/// JDN of a proleptic Gregorian date.
pub fn gregorian_to_jdn(day: u8, month: u8, year: i32) -> Jdn {
    let (day, month, year) = (i64::from(day), i64::from(month), i64::from(year));

    // 1 when `year` is a leap year
    let s = quotient(year, 4) - quotient(year - 1, 4) - quotient(year, 100)
        + quotient(year - 1, 100)
        + quotient(year, 400)
        - quotient(year - 1, 400);
    // 1 for January and February
    let t = quotient(14 - month, 12);
    let n = 31 * t * (month - 1)
        + (1 - t) * (59 + s + 30 * (month - 3) + quotient(3 * month - 7, 5))
        + day
        - 1;

    Jdn::new(
        JD_EPOCH_OFFSET_GREGORIAN
            + DAYS_IN_YEAR * (year - 1)
            + quotient(year - 1, 4)
            - quotient(year - 1, 100)
            + quotient(year - 1, 400)
            + n,
    )
}

/// Proleptic Gregorian `(year, month, day)` of a JDN.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the year does not fit an `i32`.
#[allow(clippy::cast_possible_truncation)]
pub fn jdn_to_gregorian(jdn: Jdn) -> Result<(i32, u8, u8), DateError> {
    let days = jdn.get() - JD_EPOCH_OFFSET_GREGORIAN;
    let r400 = days.rem_euclid(GREGORIAN_400_YEAR_DAYS);
    let r100 = r400 % GREGORIAN_100_YEAR_DAYS;
    let r4 = r100 % FOUR_YEAR_CYCLE_DAYS;

    let mut n = (r4 % DAYS_IN_YEAR) + DAYS_IN_YEAR * quotient(r4, THREE_COMMON_YEARS_DAYS);
    // The last day of a 400-year cycle is counted by the cycle, not the next year
    let cycle_end = i64::from(r400 == GREGORIAN_400_YEAR_DAYS - 1);
    let year = 400 * quotient(days, GREGORIAN_400_YEAR_DAYS)
        + 100 * quotient(r400, GREGORIAN_100_YEAR_DAYS)
        + 4 * quotient(r100, FOUR_YEAR_CYCLE_DAYS)
        + quotient(r4, DAYS_IN_YEAR)
        - quotient(r4, THREE_COMMON_YEARS_DAYS)
        - cycle_end
        + 1;
    n += 1 - cycle_end;

    let year = narrow_year(year, jdn)?;
    if r100 == 0 && n == 0 && r400 != 0 {
        return Ok((year, GREGORIAN_MONTHS, 31));
    }

    let leap = is_gregorian_leap_year(year);
    for (month, &length) in (1u8..).zip(&DAYS_IN_MONTH[1..]) {
        let length = if month == FEBRUARY && leap {
            i64::from(FEBRUARY_DAYS_LEAP)
        } else {
            i64::from(length)
        };
        if n <= length {
            return Ok((year, month, n as u8));
        }
        n -= length;
    }
    // n never exceeds the length of the year
    Ok((year, GREGORIAN_MONTHS, n as u8))
}

/// JDN of an Ethiopian date. `month` is one-based (13 is Pagumē).
///
/// With no era the date is taken to be Amete Mihret.
pub fn ethiopic_to_jdn(day: u8, month: u8, year: i32, era: Option<Era>) -> Jdn {
    let offset = era.unwrap_or_default().offset();
    let (day, month, year) = (i64::from(day), i64::from(month), i64::from(year));

    Jdn::new(
        offset + DAYS_IN_YEAR + DAYS_IN_YEAR * (year - 1) + quotient(year, 4)
            + i64::from(ETHIOPIAN_MONTH_DAYS) * month
            + day
            - 31,
    )
}

/// Ethiopian `(year, month, day)` of a JDN, with a one-based month.
///
/// With no era the era is guessed from the JDN (see [`Era::guess_from_jdn`]).
///
/// # Errors
/// Returns `DateError::OutOfRange` if the year does not fit an `i32`.
pub fn jdn_to_ethiopic(jdn: Jdn, era: Option<Era>) -> Result<(i32, u8, u8), DateError> {
    let era = era.unwrap_or_else(|| Era::guess_from_jdn(jdn));
    let (year, month, day) = ethiopic_parts(jdn, era);
    Ok((narrow_year(year, jdn)?, month, day))
}

/// Ethiopian `(year, month, day)` of a valid Gregorian date, in the era guessed
/// from its JDN. The month is one-based.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn gregorian_date_to_ethiopic(date: GregorianDate) -> (i32, u8, u8) {
    let jdn = date.jdn();
    let (year, month, day) = ethiopic_parts(jdn, Era::guess_from_jdn(jdn));
    // An Amete Mihret year lies in 1..=gregorian year and an Amete Alem year in
    // gregorian year..=5500, so the year fits an i32
    (year as i32, month, day)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ethiopic_parts(jdn: Jdn, era: Era) -> (i64, u8, u8) {
    let days = jdn.get() - era.offset();
    let month_days = i64::from(ETHIOPIAN_MONTH_DAYS);

    let r = days.rem_euclid(FOUR_YEAR_CYCLE_DAYS);
    let n = (r % DAYS_IN_YEAR) + DAYS_IN_YEAR * quotient(r, THREE_COMMON_YEARS_DAYS);
    let year = 4 * quotient(days, FOUR_YEAR_CYCLE_DAYS) + quotient(r, DAYS_IN_YEAR)
        - quotient(r, THREE_COMMON_YEARS_DAYS);
    // n is a day of the year (0..=365), so month is 1..=13 and day 1..=30
    let month = quotient(n, month_days) + 1;
    let day = (n % month_days) + 1;

    (year, month as u8, day as u8)
}

fn narrow_year(year: i64, jdn: Jdn) -> Result<i32, DateError> {
    i32::try_from(year).map_err(|_| DateError::OutOfRange(format!("year {year} of jdn {jdn}")))
}

/// Ethiopian `(year, month, day)` of a Gregorian date, both with one-based months.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the Ethiopian year does not fit an `i32`.
pub fn gregorian_to_ethiopic(day: u8, month: u8, year: i32) -> Result<(i32, u8, u8), DateError> {
    jdn_to_ethiopic(gregorian_to_jdn(day, month, year), None)
}

/// Gregorian `(year, month, day)` of an Ethiopian date in `era`, both with
/// one-based months.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the Gregorian year does not fit an `i32`.
pub fn ethiopic_to_gregorian(day: u8, month: u8, year: i32, era: Era) -> Result<(i32, u8, u8), DateError> {
    JdnConverter::with_era(era).ethiopic_to_gregorian(day, month, year)
}

/// Ethiopian JDN conversions bound to an optional era.
///
/// A converter is a plain value: setting its era affects only the conversions
/// made through it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct JdnConverter {
    era: Option<Era>,
}

impl JdnConverter {
    /// A converter with no era set
    pub const fn new() -> Self {
        Self { era: None }
    }

    pub const fn with_era(era: Era) -> Self {
        Self { era: Some(era) }
    }

    pub const fn era(&self) -> Option<Era> {
        self.era
    }

    pub const fn set_era(&mut self, era: Era) {
        self.era = Some(era);
    }

    /// Sets the era from its raw JDN epoch offset.
    ///
    /// # Errors
    /// Returns `DateError::UnknownEra` unless `offset` is one of the two era offsets.
    pub fn set_era_offset(&mut self, offset: i64) -> Result<(), DateError> {
        self.era = Some(Era::try_from(offset)?);
        Ok(())
    }

    pub const fn unset_era(&mut self) {
        self.era = None;
    }

    pub const fn is_era_set(&self) -> bool {
        self.era.is_some()
    }

    pub fn ethiopic_to_jdn(&self, day: u8, month: u8, year: i32) -> Jdn {
        ethiopic_to_jdn(day, month, year, self.era)
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` if the year does not fit an `i32`.
    pub fn jdn_to_ethiopic(&self, jdn: Jdn) -> Result<(i32, u8, u8), DateError> {
        jdn_to_ethiopic(jdn, self.era)
    }

    /// # Errors
    /// Returns `DateError::OutOfRange` if the Gregorian year does not fit an `i32`.
    pub fn ethiopic_to_gregorian(&self, day: u8, month: u8, year: i32) -> Result<(i32, u8, u8), DateError> {
        let jdn = self.ethiopic_to_jdn(day, month, year);
        crate::calendar_log!(trace, "ethiopic {year}-{month}-{day} ({:?}) -> jdn {jdn}", self.era);
        jdn_to_gregorian(jdn)
    }
}
