//! Upcoming-birthday window computation.

use crate::domain::birthday::DATE_FORMAT;
use crate::domain::Birthday;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::Serialize;
use std::fmt;

/// Length of the upcoming-birthday window in days, counted after today.
pub const UPCOMING_WINDOW_DAYS: u64 = 7;

/// A contact to congratulate and the date to do it on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Congratulation date in `DD.MM.YYYY` form
    pub congratulation_date: String,
}

impl UpcomingBirthday {
    pub fn new(name: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            congratulation_date: date.format(DATE_FORMAT).to_string(),
        }
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.congratulation_date)
    }
}

/// Date on which to congratulate for `birthday`, if its next occurrence
/// falls within `[today, today + window_days]`.
///
/// The next occurrence is this year's anniversary, or next year's when this
/// year's has already passed. Occurrences on a weekend move to the following
/// Monday, which may lie past the end of the window.
pub fn congratulation_date(
    birthday: &Birthday,
    today: NaiveDate,
    window_days: u64,
) -> Option<NaiveDate> {
    let mut next = birthday.anniversary_in(today.year())?;
    if next < today {
        next = birthday.anniversary_in(today.year() + 1)?;
    }

    let window_end = today.checked_add_days(Days::new(window_days))?;
    if next > window_end {
        return None;
    }

    match next.weekday() {
        Weekday::Sat => next.checked_add_days(Days::new(2)),
        Weekday::Sun => next.checked_add_days(Days::new(1)),
        _ => Some(next),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn birthday(text: &str) -> Birthday {
        Birthday::new(text).unwrap()
    }

    // 10.06.2024 is a Monday.
    fn monday() -> NaiveDate {
        date(10, 6, 2024)
    }

    #[test]
    fn test_weekday_birthday_in_window() {
        assert_eq!(
            congratulation_date(&birthday("12.06.1990"), monday(), UPCOMING_WINDOW_DAYS),
            Some(date(12, 6, 2024))
        );
    }

    #[test]
    fn test_birthday_today_is_included() {
        assert_eq!(
            congratulation_date(&birthday("10.06.1985"), monday(), UPCOMING_WINDOW_DAYS),
            Some(date(10, 6, 2024))
        );
    }

    #[test]
    fn test_last_day_of_window_is_included() {
        assert_eq!(
            congratulation_date(&birthday("17.06.1985"), monday(), UPCOMING_WINDOW_DAYS),
            Some(date(17, 6, 2024))
        );
        assert_eq!(
            congratulation_date(&birthday("18.06.1985"), monday(), UPCOMING_WINDOW_DAYS),
            None
        );
    }

    #[test]
    fn test_saturday_moves_to_monday() {
        assert_eq!(
            congratulation_date(&birthday("15.06.2000"), monday(), UPCOMING_WINDOW_DAYS),
            Some(date(17, 6, 2024))
        );
    }

    #[test]
    fn test_sunday_moves_to_monday() {
        assert_eq!(
            congratulation_date(&birthday("16.06.2000"), monday(), UPCOMING_WINDOW_DAYS),
            Some(date(17, 6, 2024))
        );
    }

    #[test]
    fn test_weekend_shift_may_leave_window() {
        // Saturday 15.06.2024, window ends Saturday 22.06.2024.
        let saturday = date(15, 6, 2024);
        assert_eq!(
            congratulation_date(&birthday("22.06.1990"), saturday, UPCOMING_WINDOW_DAYS),
            Some(date(24, 6, 2024))
        );
    }

    #[test]
    fn test_passed_birthday_is_skipped() {
        assert_eq!(
            congratulation_date(&birthday("09.06.1990"), monday(), UPCOMING_WINDOW_DAYS),
            None
        );
    }

    #[test]
    fn test_window_spanning_new_year_rolls_forward() {
        // Monday 30.12.2024; 02.01.2025 is a Thursday.
        let today = date(30, 12, 2024);
        assert_eq!(
            congratulation_date(&birthday("02.01.1990"), today, UPCOMING_WINDOW_DAYS),
            Some(date(2, 1, 2025))
        );
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        // Monday 23.02.2026; 28.02.2026 is a Saturday.
        let today = date(23, 2, 2026);
        assert_eq!(
            congratulation_date(&birthday("29.02.2000"), today, UPCOMING_WINDOW_DAYS),
            Some(date(2, 3, 2026))
        );
    }

    #[test]
    fn test_custom_window_length() {
        assert_eq!(congratulation_date(&birthday("12.06.1990"), monday(), 1), None);
        assert_eq!(
            congratulation_date(&birthday("10.06.1990"), monday(), 0),
            Some(date(10, 6, 2024))
        );
    }

    #[test]
    fn test_upcoming_birthday_formatting() {
        let entry = UpcomingBirthday::new("Ann", date(7, 3, 2024));
        assert_eq!(entry.congratulation_date, "07.03.2024");
        assert_eq!(entry.to_string(), "Ann: 07.03.2024");
    }
}
