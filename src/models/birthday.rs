//! Birthday parsing
//!
//! Birthdays are stored as free text. Three shapes are recognised; anything
//! else is simply not a birthday for reminder purposes.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Year used to check `MM-DD` values; a leap year so 02-29 is accepted
const REFERENCE_LEAP_YEAR: i32 = 2000;

/// A calendar month and day without a year
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// Parse `YYYY-MM-DD`, `DD-MM-YYYY` or `MM-DD`, in that order
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(text, "%d-%m-%Y"))
            .ok()
            .map(Self::from_date)
            .or_else(|| parse_month_day(text))
    }

    /// Month and day of a full date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

fn parse_month_day(text: &str) -> Option<MonthDay> {
    let (month, day) = text.split_once('-')?;
    if month.len() != 2 || day.len() != 2 {
        return None;
    }
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(REFERENCE_LEAP_YEAR, month, day).map(MonthDay::from_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(month: u32, day: u32) -> Option<MonthDay> {
        Some(MonthDay { month, day })
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(MonthDay::parse("2024-03-05"), md(3, 5));
    }

    #[test]
    fn test_day_first_date() {
        assert_eq!(MonthDay::parse("05-03-1990"), md(3, 5));
    }

    #[test]
    fn test_month_day_only() {
        assert_eq!(MonthDay::parse("03-05"), md(3, 5));
        assert_eq!(MonthDay::parse("02-29"), md(2, 29));
    }

    #[test]
    fn test_unparseable_values() {
        assert_eq!(MonthDay::parse(""), None);
        assert_eq!(MonthDay::parse("   "), None);
        assert_eq!(MonthDay::parse("March 5th"), None);
        assert_eq!(MonthDay::parse("2023-02-30"), None);
        assert_eq!(MonthDay::parse("13-01"), None);
        assert_eq!(MonthDay::parse("3-5"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(MonthDay { month: 3, day: 5 }.to_string(), "03-05");
    }
}
