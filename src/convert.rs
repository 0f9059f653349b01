//! Validated conversions between Gregorian and Ethiopian dates.
//!
//! This is the boundary where month and day ranges are checked. Months are
//! zero-based here, as everywhere outside [`crate::jdn`]. The checks are
//! deliberately loose: a day of 0 or a day past the end of a short month is
//! accepted and lands on the neighbouring month, the way the JDN arithmetic
//! resolves it.

use crate::consts::{MAX_ETHIOPIAN_DAY, MAX_ETHIOPIAN_MONTH, MAX_GREGORIAN_DAY, MAX_GREGORIAN_MONTH};
use crate::jdn::{self, JdnConverter};
use crate::types::{Era, GregorianDate};
use crate::{DateError, EthiopianDate};

/// Converts an Ethiopian (Amete Mihret) date to the Gregorian calendar.
///
/// `month` is zero-based (0 for Meskerem, 12 for Pagumē).
///
/// # Errors
/// Returns `DateError::InvalidEthiopianDate` if `day > 30` or `month > 12`,
/// and `DateError::OutOfRange` if the Gregorian year does not fit an `i32`.
pub fn ethiopian_to_gregorian(year: i32, month: u8, day: u8) -> Result<GregorianDate, DateError> {
    let month = validate_ethiopian(year, month, day)?;
    let jdn = JdnConverter::with_era(Era::AmeteMihret).ethiopic_to_jdn(day, month, year);
    crate::calendar_log!(trace, "ethiopian {year}-{month}-{day} -> jdn {jdn}");
    GregorianDate::from_jdn(jdn)
}

/// Converts a Gregorian date to the Ethiopian calendar.
///
/// `month` is zero-based (0 for January). The era of the result is guessed
/// from the date, so anything before 8 AD comes out in Amete Alem.
///
/// # Errors
/// Returns `DateError::InvalidGregorianDate` if `day > 31` or `month > 11`,
/// and `DateError::OutOfRange` if a carried-over day leaves the `i32` years.
pub fn gregorian_to_ethiopian(year: i32, month: u8, day: u8) -> Result<EthiopianDate, DateError> {
    let month = validate_gregorian(year, month, day)?;
    let jdn = jdn::gregorian_to_jdn(day, month, year);
    crate::calendar_log!(trace, "gregorian {year}-{month}-{day} -> jdn {jdn}");
    EthiopianDate::from_jdn(jdn)
}

/// Checks an Ethiopian date at the conversion boundary and returns its
/// one-based month.
fn validate_ethiopian(year: i32, month: u8, day: u8) -> Result<u8, DateError> {
    match month.checked_add(1) {
        Some(one_based) if one_based <= MAX_ETHIOPIAN_MONTH && day <= MAX_ETHIOPIAN_DAY => Ok(one_based),
        _ => Err(DateError::InvalidEthiopianDate {
            year,
            month: month.into(),
            day: day.into(),
        }),
    }
}

fn validate_gregorian(year: i32, month: u8, day: u8) -> Result<u8, DateError> {
    match month.checked_add(1) {
        Some(one_based) if one_based <= MAX_GREGORIAN_MONTH && day <= MAX_GREGORIAN_DAY => Ok(one_based),
        _ => Err(DateError::InvalidGregorianDate {
            year,
            month: month.into(),
            day: day.into(),
        }),
    }
}
