use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::{DateError, EthiopianDate, PAGUME, RANGE_SEPARATOR, prelude::*};

/// First and last day (inclusive) of a month as Gregorian dates, either the
/// literal month or the whole ISO weeks a calendar grid shows for it.
/// The start date is never after the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct MonthBounds {
    start: NaiveDate,
    end:   NaiveDate,
}

impl MonthBounds {
    /// # Errors
    /// Returns `DateError::InvalidRange` if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateError> {
        if start > end {
            return Err(DateError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days covered, both ends included
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Every day from start to end
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}

impl FromStr for MonthBounds {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let Some((start, end)) = trimmed.split_once(RANGE_SEPARATOR) else {
            return Err(DateError::Parsing(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            )));
        };
        if end.contains(RANGE_SEPARATOR) {
            return Err(DateError::Parsing(format!("Too many '{RANGE_SEPARATOR}' separators: {s}")));
        }

        Self::new(parse_naive(start)?, parse_naive(end)?)
    }
}

fn parse_naive(s: &str) -> Result<NaiveDate, DateError> {
    let s = s.trim();
    s.parse::<NaiveDate>()
        .map_err(|err| DateError::Parsing(format!("{s}: {err}")))
}

impl Serialize for MonthBounds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for MonthBounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Monday of the ISO week containing `date`.
///
/// # Errors
/// Returns `DateError::OutOfRange` at the lower edge of `chrono`'s range.
pub fn start_of_iso_week(date: NaiveDate) -> Result<NaiveDate, DateError> {
    let offset = Days::new(u64::from(date.weekday().num_days_from_monday()));
    date.checked_sub_days(offset).ok_or_else(|| out_of_range(date))
}

/// Sunday of the ISO week containing `date`.
///
/// # Errors
/// Returns `DateError::OutOfRange` at the upper edge of `chrono`'s range.
pub fn end_of_iso_week(date: NaiveDate) -> Result<NaiveDate, DateError> {
    let offset = Days::new(u64::from(6 - date.weekday().num_days_from_monday()));
    date.checked_add_days(offset).ok_or_else(|| out_of_range(date))
}

const WEEK: Days = Days::new(7);

fn out_of_range(date: NaiveDate) -> DateError {
    DateError::OutOfRange(date.to_string())
}

/// Aligns a month to whole ISO weeks, keeping a boundary week only when most
/// of it (four days or more) lies inside the month.
pub(crate) fn align_to_weeks(start: NaiveDate, end: NaiveDate) -> Result<MonthBounds, DateError> {
    let start = if matches!(start.weekday(), Weekday::Sun | Weekday::Fri | Weekday::Sat) {
        crate::calendar_log!(debug, "first week of {start} is mostly the previous month");
        start.checked_add_days(WEEK).ok_or_else(|| out_of_range(start))?
    } else {
        start
    };
    let end = if matches!(end.weekday(), Weekday::Mon | Weekday::Tue | Weekday::Wed) {
        crate::calendar_log!(debug, "last week of {end} is mostly the next month");
        end.checked_sub_days(WEEK).ok_or_else(|| out_of_range(end))?
    } else {
        end
    };

    MonthBounds::new(start_of_iso_week(start)?, end_of_iso_week(end)?)
}

/// First and last day of the Ethiopian month containing `date`.
///
/// With `iso_mode` the range is widened or narrowed to whole Monday-Sunday
/// weeks for grid display. Pagumē is too short to hold a majority of any week,
/// so it simply expands to the weeks it touches; every other month keeps a
/// boundary week only when four or more of its days belong to the month,
/// which gives four or five full weeks.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the bounds fall outside `chrono`'s range.
pub fn month_bounds(date: NaiveDate, iso_mode: bool) -> Result<MonthBounds, DateError> {
    let (first, last) = EthiopianDate::from(date).month_bounds()?;
    let (start, end) = (first.to_naive_date()?, last.to_naive_date()?);

    if !iso_mode {
        return MonthBounds::new(start, end);
    }
    if first.month() == PAGUME {
        return MonthBounds::new(start_of_iso_week(start)?, end_of_iso_week(end)?);
    }
    align_to_weeks(start, end)
}

/// Gregorian counterpart of [`month_bounds`].
///
/// In ISO mode the week containing `date` decides the month: a date early in
/// its week (Monday to Wednesday) belongs to the month holding that week's
/// Sunday, a later one to the month holding its Monday.
///
/// # Errors
/// Returns `DateError::OutOfRange` if the bounds fall outside `chrono`'s range.
pub fn gregorian_month_bounds(date: NaiveDate, iso_mode: bool) -> Result<MonthBounds, DateError> {
    let anchor = if !iso_mode {
        date
    } else if date.weekday().number_from_monday() < 4 {
        end_of_iso_week(date)?
    } else {
        start_of_iso_week(date)?
    };

    let start = anchor.with_day(1).ok_or_else(|| out_of_range(anchor))?;
    let end = last_day_of_month(anchor)?;

    if iso_mode {
        align_to_weeks(start, end)
    } else {
        MonthBounds::new(start, end)
    }
}

fn last_day_of_month(date: NaiveDate) -> Result<NaiveDate, DateError> {
    let first = date.with_day(1).ok_or_else(|| out_of_range(date))?;
    let next = first
        .checked_add_months(Months::new(1))
        .ok_or_else(|| out_of_range(date))?;
    next.pred_opt().ok_or_else(|| out_of_range(date))
}

impl EthiopianDate {
    /// First and last day of this date's month, in the same era.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if either end leaves the `i32` Gregorian years.
    pub fn month_bounds(&self) -> Result<(Self, Self), DateError> {
        let jdn = self.gregorian().jdn();
        let first = jdn.add_days(1 - i64::from(self.day()));
        let last = first.add_days(i64::from(self.days_in_month()) - 1);
        Ok((self.at_day(1, first)?, self.at_day(self.days_in_month(), last)?))
    }
}
