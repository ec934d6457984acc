use chrono::{Local, NaiveDate};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("date cannot be empty")]
    Empty,
    #[error("invalid date format: expected YYYY-MM-DD")]
    InvalidDateFormat,
}

/// Today's calendar date in the local timezone; time of day is dropped.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(input: &str) -> Result<NaiveDate, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| TimeParseError::InvalidDateFormat)
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_date, parse_date, TimeParseError};
    use chrono::NaiveDate;

    #[test]
    fn parse_date_accepts_iso_dates() {
        let date = parse_date(" 2026-10-16 ").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(format_date(date), "2026-10-16");
    }

    #[test]
    fn parse_date_rejects_other_shapes() {
        assert_eq!(parse_date(""), Err(TimeParseError::Empty));
        assert_eq!(
            parse_date("16/10/2026"),
            Err(TimeParseError::InvalidDateFormat)
        );
        assert_eq!(
            parse_date("2026-02-30"),
            Err(TimeParseError::InvalidDateFormat)
        );
    }
}
