//! Calendar-grid operations for a calendar system.
//!
//! [`CalendarSystem`] carries the Gregorian behaviour in its default methods;
//! [`EthiopianCalendar`] overrides each of them. Every date going in or out is
//! a Gregorian [`NaiveDate`], so a view layer can switch systems without
//! changing how it stores dates.

use chrono::{Datelike, Months, NaiveDate};

use crate::bounds::{self, MonthBounds};
use crate::consts::{
    DECADE_VIEW_YEARS, ETHIOPIAN_MONTH_DAYS, ETHIOPIAN_MONTHS, GREGORIAN_MONTHS, MESKEREM, VIEW_COLUMNS,
};
use crate::types::{Era, GregorianDate, Jdn};
use crate::{DateError, EthiopianDate, jdn};

/// Rows of view entries, [`VIEW_COLUMNS`] per row (the last row may be shorter).
pub type ViewRows = Vec<Vec<NaiveDate>>;

pub trait CalendarSystem {
    /// First and last day of the month containing `date`, optionally aligned
    /// to whole ISO weeks.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` if the bounds fall outside `chrono`'s range.
    fn month_bounds(&self, date: NaiveDate, iso_mode: bool) -> Result<MonthBounds, DateError> {
        bounds::gregorian_month_bounds(date, iso_mode)
    }

    /// First day of the month after the one containing `date`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` past the end of `chrono`'s range.
    fn next_month(&self, date: NaiveDate) -> Result<NaiveDate, DateError> {
        first_of_month(date)?
            .checked_add_months(Months::new(1))
            .ok_or_else(|| out_of_range(date))
    }

    /// First day of the month before the one containing `date`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` before the start of `chrono`'s range.
    fn previous_month(&self, date: NaiveDate) -> Result<NaiveDate, DateError> {
        first_of_month(date)?
            .checked_sub_months(Months::new(1))
            .ok_or_else(|| out_of_range(date))
    }

    /// First day of every month in the year containing `date`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` outside `chrono`'s range.
    fn year_view(&self, date: NaiveDate) -> Result<ViewRows, DateError> {
        let months = (1..=u32::from(GREGORIAN_MONTHS))
            .map(|month| NaiveDate::from_ymd_opt(date.year(), month, 1).ok_or_else(|| out_of_range(date)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(into_rows(&months))
    }

    /// January 1 of twelve consecutive years, starting with the first year of
    /// the decade containing `date`.
    ///
    /// # Errors
    /// Returns `DateError::OutOfRange` outside `chrono`'s range.
    fn decade_view(&self, date: NaiveDate) -> Result<ViewRows, DateError> {
        let first_year = date.year() - date.year().rem_euclid(10);
        let years = (first_year..first_year + DECADE_VIEW_YEARS)
            .map(|year| NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(|| out_of_range(date)))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(into_rows(&years))
    }
}

/// The proleptic Gregorian calendar.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GregorianCalendar;

impl CalendarSystem for GregorianCalendar {}

/// The Ethiopian calendar: thirteen months, Pagumē last.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EthiopianCalendar;

impl CalendarSystem for EthiopianCalendar {
    fn month_bounds(&self, date: NaiveDate, iso_mode: bool) -> Result<MonthBounds, DateError> {
        bounds::month_bounds(date, iso_mode)
    }

    /// Pagumē is followed by Meskerem of the next year.
    fn next_month(&self, date: NaiveDate) -> Result<NaiveDate, DateError> {
        let (_, last) = EthiopianDate::from(date).month_bounds()?;
        to_naive(last.gregorian().jdn().add_days(1))
    }

    /// Meskerem is preceded by Pagumē of the previous year.
    fn previous_month(&self, date: NaiveDate) -> Result<NaiveDate, DateError> {
        let (first, _) = EthiopianDate::from(date).month_bounds()?;
        let (previous, _) = EthiopianDate::from_jdn(first.gregorian().jdn().add_days(-1))?.month_bounds()?;
        previous.to_naive_date()
    }

    /// Meskerem 1 through Pagumē 1, thirteen entries in five rows.
    fn year_view(&self, date: NaiveDate) -> Result<ViewRows, DateError> {
        let ec = EthiopianDate::from(date);
        let (first, _) = ec.month_bounds()?;
        let new_year = first.gregorian().jdn().add_days(-month_offset(ec.month()));
        let months = (MESKEREM..ETHIOPIAN_MONTHS)
            .map(|month| to_naive(new_year.add_days(month_offset(month))))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(into_rows(&months))
    }

    /// Meskerem 1 of twelve consecutive Ethiopian years, from year 1 of the
    /// decade containing `date`.
    fn decade_view(&self, date: NaiveDate) -> Result<ViewRows, DateError> {
        let view_jdn = GregorianDate::from(date).jdn();
        let era = Era::guess_from_jdn(view_jdn);
        let year = EthiopianDate::from(date).year();
        let first_year = year - year.rem_euclid(10) + 1;

        let years = (first_year..first_year + DECADE_VIEW_YEARS)
            .map(|year| to_naive(jdn::ethiopic_to_jdn(1, MESKEREM + 1, year, Some(era))))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(into_rows(&years))
    }
}

/// Days from Meskerem 1 to the first of `month`
fn month_offset(month: u8) -> i64 {
    i64::from(month) * i64::from(ETHIOPIAN_MONTH_DAYS)
}

fn to_naive(jdn: Jdn) -> Result<NaiveDate, DateError> {
    NaiveDate::try_from(GregorianDate::from_jdn(jdn)?)
}

fn first_of_month(date: NaiveDate) -> Result<NaiveDate, DateError> {
    date.with_day(1).ok_or_else(|| out_of_range(date))
}

fn out_of_range(date: NaiveDate) -> DateError {
    DateError::OutOfRange(date.to_string())
}

fn into_rows(entries: &[NaiveDate]) -> ViewRows {
    entries.chunks(VIEW_COLUMNS).map(<[NaiveDate]>::to_vec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::naive;

    #[test]
    fn test_ethiopian_navigation() {
        struct TestCase {
            date:     (i32, u32, u32),
            next:     (i32, u32, u32),
            previous: (i32, u32, u32),
        }

        let cases = [
            // Tir 2016
            TestCase {
                date:     (2024, 1, 15),
                next:     (2024, 2, 9),
                previous: (2023, 12, 11),
            },
            // Pagumē 6, 2015
            TestCase {
                date:     (2023, 9, 11),
                next:     (2023, 9, 12),
                previous: (2023, 8, 7),
            },
            // Meskerem 1, 2016
            TestCase {
                date:     (2023, 9, 12),
                next:     (2023, 10, 12),
                previous: (2023, 9, 6),
            },
        ];

        for case in &cases {
            let date = naive(case.date.0, case.date.1, case.date.2);
            let next = EthiopianCalendar.next_month(date).unwrap();
            let previous = EthiopianCalendar.previous_month(date).unwrap();
            assert_eq!(next, naive(case.next.0, case.next.1, case.next.2), "next of {date}");
            assert_eq!(
                previous,
                naive(case.previous.0, case.previous.1, case.previous.2),
                "previous of {date}"
            );
        }
    }

    #[test]
    fn test_ethiopian_navigation_round_trip() {
        let mut date = naive(2023, 9, 12);
        for _ in 0..40 {
            let next = EthiopianCalendar.next_month(date).unwrap();
            assert_eq!(EthiopianDate::from(next).day(), 1);
            assert_eq!(EthiopianCalendar.previous_month(next).unwrap(), date);
            date = next;
        }
    }

    #[test]
    fn test_ethiopian_year_view() {
        let rows = EthiopianCalendar.year_view(naive(2024, 1, 15)).unwrap();
        assert_eq!(rows.iter().map(Vec::len).collect::<Vec<_>>(), vec![3, 3, 3, 3, 1]);

        let entries: Vec<NaiveDate> = rows.into_iter().flatten().collect();
        assert_eq!(entries[0], naive(2023, 9, 12));
        assert_eq!(entries[4], naive(2024, 1, 10));
        assert_eq!(entries[12], naive(2024, 9, 6));
        for (month, entry) in (MESKEREM..).zip(&entries) {
            assert_eq!(EthiopianDate::from(*entry).ymd(), (2016, month, 1));
        }
    }

    #[test]
    fn test_ethiopian_decade_view() {
        let rows = EthiopianCalendar.decade_view(naive(2024, 1, 15)).unwrap();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|row| row.len() == 3));

        let entries: Vec<NaiveDate> = rows.into_iter().flatten().collect();
        assert_eq!(entries[0], naive(2018, 9, 11));
        assert_eq!(entries[1], naive(2019, 9, 12));
        assert_eq!(entries[11], naive(2029, 9, 11));
        for (year, entry) in (2011..).zip(&entries) {
            assert_eq!(EthiopianDate::from(*entry).ymd(), (year, MESKEREM, 1));
        }
    }

    #[test]
    fn test_ethiopian_month_bounds_delegates() {
        let date = naive(2024, 1, 15);
        assert_eq!(EthiopianCalendar.month_bounds(date, true), bounds::month_bounds(date, true));
        assert_eq!(EthiopianCalendar.month_bounds(date, false), bounds::month_bounds(date, false));
    }

    #[test]
    fn test_gregorian_navigation() {
        assert_eq!(GregorianCalendar.next_month(naive(2024, 1, 31)), Ok(naive(2024, 2, 1)));
        assert_eq!(GregorianCalendar.next_month(naive(2023, 12, 15)), Ok(naive(2024, 1, 1)));
        assert_eq!(GregorianCalendar.previous_month(naive(2024, 3, 31)), Ok(naive(2024, 2, 1)));
        assert_eq!(GregorianCalendar.previous_month(naive(2024, 1, 1)), Ok(naive(2023, 12, 1)));
    }

    #[test]
    fn test_gregorian_views() {
        let rows = GregorianCalendar.year_view(naive(2024, 6, 15)).unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0], vec![naive(2024, 1, 1), naive(2024, 2, 1), naive(2024, 3, 1)]);
        assert_eq!(rows[3][2], naive(2024, 12, 1));

        let rows = GregorianCalendar.decade_view(naive(2024, 6, 15)).unwrap();
        let entries: Vec<NaiveDate> = rows.into_iter().flatten().collect();
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0], naive(2020, 1, 1));
        assert_eq!(entries[11], naive(2031, 1, 1));
    }

    #[test]
    fn test_systems_as_trait_objects() {
        let systems: [&dyn CalendarSystem; 2] = [&GregorianCalendar, &EthiopianCalendar];
        let date = naive(2024, 1, 15);
        let starts: Vec<NaiveDate> = systems
            .iter()
            .map(|system| system.month_bounds(date, false).unwrap().start())
            .collect();
        assert_eq!(starts, vec![naive(2024, 1, 1), naive(2024, 1, 10)]);
    }
}
