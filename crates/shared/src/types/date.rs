use std::{fmt, ops::RangeInclusive};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// Format exercise dates are stored and returned in, e.g. `Sun Jan 01 2023`
pub const DISPLAY_FORMAT: &str = "%a %b %d %Y";

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", DISPLAY_FORMAT, "%b %d %Y", "%Y/%m/%d"];
/// Years with exactly four digits, so the ISO text of a date sorts in
/// calendar order
const YEARS: RangeInclusive<i32> = 0..=9999;

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date: {value:?}")]
pub struct InvalidDate {
    pub value: String,
}

/// A calendar date attached to an exercise
///
/// Ordering is calendar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseDate(NaiveDate);

impl ExerciseDate {
    pub fn today() -> Self {
        Self(Utc::now().date_naive())
    }

    /// Parses the date formats clients send. Any time component is dropped,
    /// date-times with an offset are converted to UTC first. Years outside
    /// 0000..=9999 are rejected
    pub fn parse(value: &str) -> Result<Self, InvalidDate> {
        let trimmed = value.trim();

        let date = DATE_FORMATS
            .iter()
            .find_map(|f| NaiveDate::parse_from_str(trimmed, f).ok())
            .or_else(|| {
                DateTime::parse_from_rfc3339(trimmed)
                    .or_else(|_| DateTime::parse_from_rfc2822(trimmed))
                    .ok()
                    .map(|d| d.with_timezone(&Utc).date_naive())
            })
            .or_else(|| {
                DATE_TIME_FORMATS
                    .iter()
                    .find_map(|f| NaiveDateTime::parse_from_str(trimmed, f).ok())
                    .map(|d| d.date())
            });

        date.filter(|d| YEARS.contains(&d.year()))
            .map(Self)
            .ok_or_else(|| InvalidDate { value: value.to_owned() })
    }

    /// Parses an optional date where empty strings count as not supplied
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, InvalidDate> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(v) => Self::parse(v).map(Some),
        }
    }

    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn display(&self) -> String {
        self.0.format(DISPLAY_FORMAT).to_string()
    }
}

impl From<NaiveDate> for ExerciseDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DISPLAY_FORMAT))
    }
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::ExerciseDate;

    fn ymd(y: i32, m: u32, d: u32) -> ExerciseDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().into()
    }

    #[test]
    fn test_display_form() {
        assert_eq!(ymd(2023, 1, 1).display(), "Sun Jan 01 2023");
        assert_eq!(ymd(2024, 1, 1).to_string(), "Mon Jan 01 2024");
    }

    #[test]
    fn test_parse_accepted_formats() {
        let expected = ymd(2023, 1, 1);
        for input in [
            "2023-01-01",
            " 2023-01-01 ",
            "Sun Jan 01 2023",
            "Jan 01 2023",
            "2023/01/01",
            "2023-01-01T10:30:00",
            "2023-01-01T10:30:00.250",
            "2023-01-01 23:59:59",
            "2023-01-01T08:00:00Z",
            "2023-01-01T08:00:00+02:00",
            "Sun, 01 Jan 2023 12:00:00 +0000",
        ] {
            assert_eq!(ExerciseDate::parse(input), Ok(expected), "input: {input:?}");
        }
    }

    #[test]
    fn test_offset_is_converted_to_utc() {
        assert_eq!(ExerciseDate::parse("2023-01-01T01:00:00+05:00"), Ok(ymd(2022, 12, 31)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = ExerciseDate::parse("yesterday").unwrap_err();
        assert_eq!(err.value, "yesterday");
        assert!(ExerciseDate::parse("2023-02-30").is_err());
        assert!(ExerciseDate::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_years_without_four_digits() {
        assert!(ExerciseDate::parse("+10000-01-01").is_err());
        assert!(ExerciseDate::parse("-0001-01-01").is_err());
        assert!(ExerciseDate::parse("+10000-01-01T00:00:00Z").is_err());
        assert_eq!(ExerciseDate::parse("9999-12-31"), Ok(ymd(9999, 12, 31)));
        assert_eq!(ExerciseDate::parse("0001-01-01"), Ok(ymd(1, 1, 1)));
    }

    #[test]
    fn test_parse_optional_treats_empty_as_absent() {
        assert_eq!(ExerciseDate::parse_optional(None), Ok(None));
        assert_eq!(ExerciseDate::parse_optional(Some("  ")), Ok(None));
        assert_eq!(ExerciseDate::parse_optional(Some("2023-01-02")), Ok(Some(ymd(2023, 1, 2))));
        assert!(ExerciseDate::parse_optional(Some("nope")).is_err());
    }

    #[test]
    fn test_calendar_order_differs_from_display_order() {
        let jan = ymd(2023, 1, 4);
        let feb = ymd(2023, 2, 5);
        assert!(jan < feb);
        // "Wed Jan 04 2023" sorts after "Sun Feb 05 2023" as text
        assert!(jan.display() > feb.display());
    }
}
