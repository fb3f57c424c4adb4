//! Phone value object.

use super::errors::ValidationError;
use super::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Optional `+` and country code, an area code (optionally in brackets),
/// a group of up to 4 digits and a trailing group of up to 9 digits.
/// Groups may be separated by `-`, `.` or a single space; the
/// trailing group may carry separators between its digits.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\+?(?:[0-9]{1,3}[-. ]?)?(?:\([0-9]{1,4}\)|[0-9]{1,4})[-. ]?[0-9]{1,4}(?:[-. ]?[0-9]){1,9}$",
    )
    .expect("Failed to compile phone regex")
});

/// Longest number allowed by E.164, in digits.
pub const MAX_PHONE_DIGITS: usize = 15;

/// A validated phone number.
///
/// The number is stored exactly as typed; two phones are equal only when
/// their text is identical.
///
/// # Example
///
/// ```
/// use address_book::domain::Phone;
///
/// let phone = Phone::new("+380501234567").unwrap();
/// assert_eq!(phone.as_str(), "+380501234567");
/// assert!(Phone::new("abc").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// The whole string must match the grammar and contain at most
    /// [`MAX_PHONE_DIGITS`] digits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
            && phone.chars().filter(|c| c.is_ascii_digit()).count() <= MAX_PHONE_DIGITS
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Phone {
    fn value(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
