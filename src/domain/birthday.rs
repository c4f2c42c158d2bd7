//! Birthday value object and next-occurrence calendar math.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Boundary date format for birthdays.
const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A contact's birthday, parsed from a `DD.MM.YYYY` string.
///
/// Parsing is strict: non-numeric parts, out-of-range day/month, and
/// non-existent dates such as 31 April are rejected. The wrapper also owns
/// the "next occurrence" computation, including the February 29 case where
/// the anniversary only exists in leap years.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("24.08.1991").unwrap();
/// assert_eq!(birthday.to_string(), "24.08.1991");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the string does not
    /// describe a real calendar date in that format.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidBirthday(s.to_string()))
    }

    /// Validate birthday format without constructing.
    pub fn is_valid(s: &str) -> bool {
        NaiveDate::parse_from_str(s, BIRTHDAY_FORMAT).is_ok()
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The nearest date on or after `today` matching this birthday's
    /// month and day.
    ///
    /// Starting from `today`'s year, candidate dates are tried year by
    /// year. A candidate that does not exist in a given year (February 29
    /// outside leap years) is skipped, and a candidate earlier than `today`
    /// rolls over to the next year. Termination is guaranteed: every
    /// month/day held by a `Birthday` recurs at least every four years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let (month, day) = (self.0.month(), self.0.day());
        let mut year = today.year();
        loop {
            match NaiveDate::from_ymd_opt(year, month, day) {
                Some(candidate) if candidate >= today => return candidate,
                _ => year += 1,
            }
        }
    }

    /// Day count from `today` to the next occurrence; `0` when the
    /// birthday is today.
    pub fn days_until_next(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }
}

// Serde support - serialize in the boundary format
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

// Display support - renders back as DD.MM.YYYY
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_birthday_parse_valid() {
        let birthday = Birthday::parse("24.08.1991").unwrap();
        assert_eq!(birthday.date(), date(1991, 8, 24));
    }

    #[test]
    fn test_birthday_parse_rejects_malformed() {
        assert!(Birthday::parse("").is_err());
        assert!(Birthday::parse("1991-08-24").is_err());
        assert!(Birthday::parse("24.08").is_err());
        assert!(Birthday::parse("aa.bb.cccc").is_err());
    }

    #[test]
    fn test_birthday_parse_rejects_nonexistent_dates() {
        assert!(Birthday::parse("31.04.2000").is_err());
        assert!(Birthday::parse("29.02.2023").is_err());
        assert!(Birthday::parse("00.01.2000").is_err());
        assert!(Birthday::parse("01.13.2000").is_err());
        // Feb 29 in an actual leap year is fine
        assert!(Birthday::parse("29.02.2000").is_ok());
    }

    #[test]
    fn test_next_occurrence_later_this_year() {
        let birthday = Birthday::parse("24.08.1991").unwrap();
        let next = birthday.next_occurrence(date(2023, 6, 1));
        assert_eq!(next, date(2023, 8, 24));
    }

    #[test]
    fn test_next_occurrence_today_counts() {
        let birthday = Birthday::parse("24.08.1991").unwrap();
        let today = date(2023, 8, 24);
        assert_eq!(birthday.next_occurrence(today), today);
        assert_eq!(birthday.days_until_next(today), 0);
    }

    #[test]
    fn test_next_occurrence_rolls_over_year_boundary() {
        let birthday = Birthday::parse("25.12.1990").unwrap();
        let today = date(2023, 12, 26);
        assert_eq!(birthday.next_occurrence(today), date(2024, 12, 25));
        assert_eq!(birthday.days_until_next(today), 365);
    }

    #[test]
    fn test_next_occurrence_feb_29_skips_non_leap_years() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        let today = date(2023, 3, 1);
        // 2023 has no Feb 29; the next real occurrence is in 2024
        assert_eq!(birthday.next_occurrence(today), date(2024, 2, 29));
        assert_eq!(birthday.days_until_next(today), 365);
    }

    #[test]
    fn test_next_occurrence_feb_29_before_the_date_in_leap_year() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        let today = date(2024, 2, 1);
        assert_eq!(birthday.next_occurrence(today), date(2024, 2, 29));
        assert_eq!(birthday.days_until_next(today), 28);
    }

    #[test]
    fn test_next_occurrence_feb_29_just_missed_in_leap_year() {
        let birthday = Birthday::parse("29.02.2000").unwrap();
        let today = date(2024, 3, 1);
        // Missed this year's leap day; 2025-2027 lack the date entirely
        assert_eq!(birthday.next_occurrence(today), date(2028, 2, 29));
    }

    #[test]
    fn test_birthday_display_round_trip() {
        let birthday = Birthday::parse("05.01.1999").unwrap();
        assert_eq!(birthday.to_string(), "05.01.1999");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::parse("24.08.1991").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"24.08.1991\"");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"31.04.2000\"");
        assert!(result.is_err());
    }
}
