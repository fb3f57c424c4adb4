//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format of birthdays and congratulation dates.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono accepts single-digit days and months, so the field widths are
// checked separately.
static DATE_SHAPE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile date shape regex")
});

/// A birthday in strict `DD.MM.YYYY` form.
///
/// The original text is kept for display and persistence, alongside the
/// parsed calendar date. Dates in the future are accepted.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("29.02.2024").unwrap();
/// assert_eq!(birthday.as_str(), "29.02.2024");
/// assert!(Birthday::new("29.02.2023").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Birthday {
    value: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, parsing the date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` unless the input is exactly
    /// two day digits, two month digits and four year digits separated by
    /// dots, naming a date that exists.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if !DATE_SHAPE_REGEX.is_match(&value) {
            return Err(ValidationError::InvalidBirthday(value));
        }

        // Year 0000 is proleptic only, not a calendar year.
        match NaiveDate::parse_from_str(&value, DATE_FORMAT) {
            Ok(date) if date.year() >= 1 => Ok(Self { value, date }),
            _ => Err(ValidationError::InvalidBirthday(value)),
        }
    }

    /// Get the birthday text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The birthday's month and day stamped onto `year`.
    ///
    /// 29 February falls back to 28 February in common years.
    pub fn anniversary_in(&self, year: i32) -> Option<NaiveDate> {
        let (month, day) = (self.date.month(), self.date.day());
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, day - 1))
    }
}

impl Field for Birthday {
    fn value(&self) -> &str {
        &self.value
    }
}

// Serde support - serialize as the original text
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
