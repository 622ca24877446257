use crate::error::CoreError;
use crate::rules::dates::{days_until_next, validate_month_day};
use chrono::NaiveDate;
use std::fmt;

const BIRTHDAY_DIGITS: usize = 4;

/// Day and month of a birthday. The year is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday {
    month: u8,
    day: u8,
}

impl Birthday {
    /// Reads the first four digits of `raw` as `DDMM`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let digits: Vec<u8> = raw
            .chars()
            .filter_map(|ch| ch.to_digit(10))
            .take(BIRTHDAY_DIGITS)
            .map(|digit| digit as u8)
            .collect();

        let &[d1, d2, m1, m2] = digits.as_slice() else {
            return Err(CoreError::InvalidBirthday(raw.to_string()));
        };

        Self::from_month_day(m1 * 10 + m2, d1 * 10 + d2)
    }

    pub fn from_month_day(month: u8, day: u8) -> Result<Self, CoreError> {
        validate_month_day(month, day)?;
        Ok(Self { month, day })
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn days_until(&self, today: NaiveDate) -> i64 {
        days_until_next(self.month, self.day, today)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 2000 is a leap year, so every validated pair has a date in it.
        match NaiveDate::from_ymd_opt(2000, self.month.into(), self.day.into()) {
            Some(date) => write!(f, "{}", date.format("%d %B")),
            None => write!(f, "{:02}.{:02}", self.day, self.month),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Birthday;
    use crate::error::CoreError;
    use chrono::NaiveDate;

    #[test]
    fn parse_reads_day_then_month() {
        let birthday = Birthday::parse("0105").unwrap();
        assert_eq!(birthday.day(), 1);
        assert_eq!(birthday.month(), 5);
        assert_eq!(birthday.to_string(), "01 May");
    }

    #[test]
    fn parse_uses_first_four_digits_only() {
        let birthday = Birthday::parse("24.12.1990").unwrap();
        assert_eq!(birthday.day(), 24);
        assert_eq!(birthday.month(), 12);
    }

    #[test]
    fn parse_rejects_short_input() {
        assert!(matches!(
            Birthday::parse("1/5"),
            Err(CoreError::InvalidBirthday(_))
        ));
        assert!(Birthday::parse("").is_err());
    }

    #[test]
    fn parse_rejects_impossible_dates() {
        assert!(Birthday::parse("9999").is_err());
        assert!(Birthday::parse("3102").is_err());
        assert!(Birthday::parse("0013").is_err());
        assert!(Birthday::parse("0001").is_err());
    }

    #[test]
    fn parse_accepts_leap_day() {
        let birthday = Birthday::parse("29-02").unwrap();
        assert_eq!(birthday.to_string(), "29 February");
    }

    #[test]
    fn days_until_delegates_to_calendar_rule() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 30).unwrap();
        let birthday = Birthday::parse("0105").unwrap();
        assert_eq!(birthday.days_until(today), 1);
    }
}
