//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Name, Phone, ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a permanent name, an ordered list of phones and an
/// optional birthday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Contact name, also the directory key
    name: Name,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<Phone>,

    /// Birthday, set at most once
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a contact with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NameTooShort` if the name is invalid.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Duplicates are not rejected here; the directory checks for them.
    pub fn add_phone(&mut self, phone: &str) -> ValidationResult<()> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove the phone whose text equals `phone`.
    pub fn remove_phone(&mut self, phone: &str) -> ValidationResult<String> {
        let index = self.position_of(phone)?;
        self.phones.remove(index);
        tracing::debug!(contact = %self.name, phone, "Phone removed");
        Ok("Phone has been removed".to_string())
    }

    /// Replace `old` with `new`, keeping its position in the list.
    ///
    /// The old number is looked up before the new one is validated, so a
    /// missing number is reported even when `new` is also invalid.
    pub fn change_phone(&mut self, old: &str, new: &str) -> ValidationResult<String> {
        let index = self.position_of(old)?;
        self.phones[index] = Phone::new(new)?;
        tracing::debug!(contact = %self.name, old, new, "Phone changed");
        Ok("Contact changed.".to_string())
    }

    /// Look up a phone by exact text.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Set the birthday. A birthday that is already set cannot be replaced.
    pub fn add_birthday(&mut self, birthday: &str) -> ValidationResult<String> {
        if self.birthday.is_some() {
            return Err(ValidationError::BirthdayAlreadySet);
        }
        self.birthday = Some(Birthday::new(birthday)?);
        tracing::debug!(contact = %self.name, birthday, "Birthday added");
        Ok("Birthday added".to_string())
    }

    fn position_of(&self, phone: &str) -> ValidationResult<usize> {
        self.phones
            .iter()
            .position(|p| p.as_str() == phone)
            .ok_or_else(|| ValidationError::PhoneNotFound(phone.to_string()))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))?;
        if let Some(ref birthday) = self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
