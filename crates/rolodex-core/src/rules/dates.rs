use crate::error::CoreError;
use chrono::{Datelike, NaiveDate};

/// Date a month/day falls on in `year`. Feb 29 maps to Feb 28 outside leap years.
pub fn birthday_in_year(month: u8, day: u8, year: i32) -> Option<NaiveDate> {
    if month == 2 && day == 29 && !is_leap_year(year) {
        return NaiveDate::from_ymd_opt(year, 2, 28);
    }
    NaiveDate::from_ymd_opt(year, month.into(), day.into())
}

/// Whole days from `today` to the next occurrence of month/day, 0 when it is today.
pub fn days_until_next(month: u8, day: u8, today: NaiveDate) -> i64 {
    let year = today.year();
    let next = match birthday_in_year(month, day, year) {
        Some(date) if date >= today => Some(date),
        _ => birthday_in_year(month, day, year + 1),
    };
    next.map(|date| (date - today).num_days()).unwrap_or(0)
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

pub(crate) fn validate_month_day(month: u8, day: u8) -> Result<(), CoreError> {
    if !(1..=12).contains(&month) || day == 0 {
        return Err(CoreError::InvalidBirthdayDate { month, day });
    }
    if NaiveDate::from_ymd_opt(2000, month.into(), day.into()).is_none() {
        return Err(CoreError::InvalidBirthdayDate { month, day });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{birthday_in_year, days_until_next, is_leap_year, validate_month_day};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn birthday_today_is_zero_days_away() {
        assert_eq!(days_until_next(6, 10, date(2024, 6, 10)), 0);
    }

    #[test]
    fn birthday_later_this_year() {
        assert_eq!(days_until_next(5, 1, date(2025, 1, 1)), 120);
    }

    #[test]
    fn birthday_yesterday_wraps_to_next_year() {
        // 2025-06-09 -> 2026-06-09 has no Feb 29 in between.
        assert_eq!(days_until_next(6, 9, date(2025, 6, 10)), 364);
        // 2023-06-09 -> 2024-06-09 spans 2024-02-29.
        assert_eq!(days_until_next(6, 9, date(2023, 6, 10)), 365);
    }

    #[test]
    fn new_year_wraps() {
        assert_eq!(days_until_next(1, 1, date(2025, 12, 31)), 1);
    }

    #[test]
    fn leap_day_falls_back_to_feb_28() {
        assert_eq!(birthday_in_year(2, 29, 2023), Some(date(2023, 2, 28)));
        assert_eq!(birthday_in_year(2, 29, 2024), Some(date(2024, 2, 29)));
        assert_eq!(days_until_next(2, 29, date(2023, 2, 28)), 0);
        assert_eq!(days_until_next(2, 29, date(2024, 2, 28)), 1);
        assert_eq!(days_until_next(2, 29, date(2023, 3, 1)), 365);
    }

    #[test]
    fn validate_month_day_bounds() {
        assert!(validate_month_day(2, 29).is_ok());
        assert!(validate_month_day(4, 31).is_err());
        assert!(validate_month_day(0, 1).is_err());
        assert!(validate_month_day(13, 1).is_err());
        assert!(validate_month_day(1, 0).is_err());
    }

    #[test]
    fn leap_year_logic() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2000));
    }
}
