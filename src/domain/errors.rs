//! Domain validation errors.

use std::fmt;

/// Phone grammar explanation shown whenever a phone number is rejected.
pub const PHONE_FORMAT_HINT: &str = "The phone should optionally contain country code (1-3 digits with/withount +) \
and mandatory contain a regional code (1-4 digits with/without brackets()) followed by up to 9 digits. \
Allowed separators are ' ', '-', '.'";

/// Errors raised by field constructors, record and directory operations,
/// and command argument checks.
///
/// Every variant renders to the exact message the interactive user sees
/// after the `Error: ` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The name is shorter than two characters.
    NameTooShort,

    /// The phone number does not match the accepted grammar.
    InvalidPhone(String),

    /// The birthday is not a `DD.MM.YYYY` calendar date.
    InvalidBirthday(String),

    /// The phone number is not present on the contact.
    PhoneNotFound(String),

    /// The contact already owns this exact phone number.
    PhoneAlreadyExists { phone: String, name: String },

    /// The contact already has a birthday.
    BirthdayAlreadySet,

    /// No contact is stored under this name.
    ContactNotFound(String),

    /// A command needed a contact name but none was given.
    NameMissing,

    /// A command was given fewer arguments than it needs. Carries the usage text.
    MissingArguments(String),

    /// The input line had no tokens at all.
    EmptyInput,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameTooShort => write!(f, "Name should contain at least 2 characters"),
            Self::InvalidPhone(_) => write!(f, "{}", PHONE_FORMAT_HINT),
            Self::InvalidBirthday(_) => write!(f, "Invalid date format. Use DD.MM.YYYY"),
            Self::PhoneNotFound(phone) => write!(f, "Phone {} not found", phone),
            Self::PhoneAlreadyExists { phone, name } => {
                write!(f, "The phone {} already exists in contact {}", phone, name)
            }
            Self::BirthdayAlreadySet => write!(f, "Birthday already exists"),
            Self::ContactNotFound(name) => write!(f, "User {} not found", name),
            Self::NameMissing => write!(f, "Contact name missing"),
            Self::MissingArguments(usage) => write!(f, "{}", usage),
            Self::EmptyInput => write!(f, "There are no arguments passed"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
