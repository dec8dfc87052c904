//! Date range parsing and the one-year default window.

use crate::domain::error::StockDataError;
use chrono::{Months, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Parse both bounds and reject `end < start`.
    pub fn parse(start: &str, end: &str) -> Result<Self, StockDataError> {
        let start_date = parse_date("start", start)?;
        let end_date = parse_date("end", end)?;

        if end_date < start_date {
            return Err(StockDataError::DateOrder {
                start: start.to_string(),
                end: end.to_string(),
            });
        }

        Ok(Self {
            start: start_date,
            end: end_date,
        })
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, StockDataError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| StockDataError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// One calendar year before `today`; 29 Feb falls back to 28 Feb.
pub fn one_year_before(today: NaiveDate) -> NaiveDate {
    today.checked_sub_months(Months::new(12)).unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_valid_range() {
        let range = DateRange::parse("2010-01-01", "2010-12-31").unwrap();
        assert_eq!(range.start, date(2010, 1, 1));
        assert_eq!(range.end, date(2010, 12, 31));
    }

    #[test]
    fn parse_accepts_equal_bounds() {
        let range = DateRange::parse("2023-06-15", "2023-06-15").unwrap();
        assert_eq!(range.start, range.end);
    }

    #[test]
    fn parse_rejects_reversed_range() {
        let err = DateRange::parse("2010-12-31", "2010-01-01").unwrap_err();
        assert!(matches!(err, StockDataError::DateOrder { .. }));
    }

    #[test]
    fn parse_rejects_malformed_start() {
        let err = DateRange::parse("", "2010-12-31").unwrap_err();
        assert!(matches!(err, StockDataError::InvalidDate { field, .. } if field == "start"));
    }

    #[test]
    fn parse_rejects_malformed_end() {
        let err = DateRange::parse("2010-01-01", "2010/12/31").unwrap_err();
        assert!(matches!(err, StockDataError::InvalidDate { field, .. } if field == "end"));
    }

    #[test]
    fn one_year_before_regular_day() {
        assert_eq!(one_year_before(date(2024, 3, 15)), date(2023, 3, 15));
    }

    #[test]
    fn one_year_before_leap_day_clamps() {
        assert_eq!(one_year_before(date(2024, 2, 29)), date(2023, 2, 28));
    }

    #[test]
    fn format_date_is_iso() {
        assert_eq!(format_date(date(2023, 1, 5)), "2023-01-05");
    }
}
