//! Test-only constructors with fixed, known-good inputs.

use chrono::NaiveDate;

use crate::{EthiopianDate, GregorianDate};

/// Ethiopian date, zero-based month
pub fn ethiopian(year: i32, month: u8, day: u8) -> EthiopianDate {
    EthiopianDate::new(year, month, day).expect("valid Ethiopian date")
}

/// Gregorian date, zero-based month
pub fn gregorian(year: i32, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day).expect("valid Gregorian date")
}

/// chrono date, one-based month
pub fn naive(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid chrono date")
}
