//! Directory model: the name-keyed collection of contacts.

use super::birthdays::{congratulation_date, UpcomingBirthday, UPCOMING_WINDOW_DAYS};
use super::record::Record;
use crate::domain::{Phone, ValidationError, ValidationResult};
use chrono::{Local, NaiveDate};
use std::fmt;

/// Usage text reported when `add` is short of arguments.
pub const ADD_USAGE: &str = "\"add\" command should contain 2 arguments \"name\" and \"phone number\"";

/// The address book.
///
/// Records are keyed by their exact, case-sensitive name and iterate in
/// insertion order. Operations that take an argument list check the
/// argument count themselves and report a `ValidationError` when short.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: Vec<Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a directory from records, keeping their order.
    ///
    /// Returns the offending name as the error when two records share a name.
    pub fn try_from_records(records: Vec<Record>) -> Result<Self, String> {
        let mut directory = Self::new();
        for record in records {
            if directory.contains(record.name().as_str()) {
                return Err(record.name().as_str().to_string());
            }
            directory.records.push(record);
        }
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Add a contact (`args = [name, phone, ..]`), or a phone to an existing one.
    ///
    /// A new name creates a record holding that single phone. For an existing
    /// name the phone is appended unless the contact already has it.
    ///
    /// # Errors
    ///
    /// - `MissingArguments` when fewer than two arguments are given
    /// - `NameTooShort` / `InvalidPhone` from field validation
    /// - `PhoneAlreadyExists` when the contact already owns the phone
    pub fn add_record<S: AsRef<str>>(&mut self, args: &[S]) -> ValidationResult<String> {
        let (name, phone) = match args {
            [name, phone, ..] => (name.as_ref(), phone.as_ref()),
            _ => return Err(ValidationError::MissingArguments(ADD_USAGE.to_string())),
        };

        match self.get_mut(name) {
            None => {
                let mut record = Record::new(name)?;
                record.add_phone(phone)?;
                self.records.push(record);
                tracing::debug!(contact = name, "Contact added");
                Ok(format!("Contact {} added", name))
            }
            Some(record) => {
                let phone = Phone::new(phone)?;
                if record.find_phone(phone.as_str()).is_some() {
                    return Err(ValidationError::PhoneAlreadyExists {
                        phone: phone.into_inner(),
                        name: name.to_string(),
                    });
                }
                record.add_phone(phone.as_str())?;
                tracing::debug!(contact = name, "Phone appended to contact");
                Ok(format!("New phone for contact {} has been added", name))
            }
        }
    }

    /// Look up a contact by `args[0]` for reading or mutation.
    ///
    /// # Errors
    ///
    /// - `NameMissing` when `args` is empty
    /// - `ContactNotFound` when no contact has that name
    pub fn find<S: AsRef<str>>(&mut self, args: &[S]) -> ValidationResult<&mut Record> {
        let name = first_arg(args)?;
        self.get_mut(name)
            .ok_or_else(|| ValidationError::ContactNotFound(name.to_string()))
    }

    /// Delete the contact named by `args[0]`.
    ///
    /// Deleting a name that is not present still succeeds.
    ///
    /// # Errors
    ///
    /// Returns `NameMissing` when `args` is empty.
    pub fn delete<S: AsRef<str>>(&mut self, args: &[S]) -> ValidationResult<String> {
        let name = first_arg(args)?;
        let before = self.records.len();
        self.records.retain(|r| r.name().as_str() != name);
        if self.records.len() == before {
            tracing::debug!(contact = name, "Delete requested for unknown contact");
        } else {
            tracing::debug!(contact = name, "Contact deleted");
        }
        Ok(format!("Contact {} deleted", name))
    }

    /// Contacts to congratulate within the next seven days, counted from the
    /// local calendar date.
    pub fn get_upcoming_birthdays(&self) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(Local::now().date_naive(), UPCOMING_WINDOW_DAYS)
    }

    /// Contacts whose next birthday falls in `[today, today + window_days]`,
    /// in directory order, with weekend dates moved to Monday.
    pub fn upcoming_birthdays(&self, today: NaiveDate, window_days: u64) -> Vec<UpcomingBirthday> {
        self.records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = congratulation_date(birthday, today, window_days)?;
                Some(UpcomingBirthday::new(record.name().as_str(), date))
            })
            .collect()
    }
}

fn first_arg<S: AsRef<str>>(args: &[S]) -> ValidationResult<&str> {
    args.first()
        .map(AsRef::as_ref)
        .ok_or(ValidationError::NameMissing)
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.records.is_empty() {
            return write!(f, "No contacts available");
        }
        let lines: Vec<String> = self.records.iter().map(Record::to_string).collect();
        write!(f, "{}", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32, month: u32, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn phones_of<'a>(directory: &'a Directory, name: &str) -> Vec<&'a str> {
        directory
            .get(name)
            .unwrap()
            .phones()
            .iter()
            .map(Phone::as_str)
            .collect()
    }

    #[test]
    fn test_add_record_creates_contact() {
        let mut directory = Directory::new();
        assert_eq!(
            directory.add_record(&["Ann", "123-4567-890"]).unwrap(),
            "Contact Ann added"
        );
        assert_eq!(directory.len(), 1);
        assert_eq!(phones_of(&directory, "Ann"), vec!["123-4567-890"]);
    }

    #[test]
    fn test_add_record_requires_two_arguments() {
        let mut directory = Directory::new();
        let err = directory.add_record(&["Ann"]).unwrap_err();
        assert_eq!(err, ValidationError::MissingArguments(ADD_USAGE.to_string()));

        let empty: [&str; 0] = [];
        assert!(directory.add_record(&empty).is_err());
        assert!(directory.is_empty());
    }

    #[test]
    fn test_add_record_ignores_extra_arguments() {
        let mut directory = Directory::new();
        directory
            .add_record(&["Ann", "123-4567-890", "extra"])
            .unwrap();
        assert_eq!(phones_of(&directory, "Ann"), vec!["123-4567-890"]);
    }

    #[test]
    fn test_add_record_duplicate_phone_fails() {
        let mut directory = Directory::new();
        directory.add_record(&["Ann", "123-4567-890"]).unwrap();

        let err = directory.add_record(&["Ann", "123-4567-890"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The phone 123-4567-890 already exists in contact Ann"
        );
        assert_eq!(phones_of(&directory, "Ann"), vec!["123-4567-890"]);
    }

    #[test]
    fn test_add_record_appends_new_phone() {
        let mut directory = Directory::new();
        directory.add_record(&["Ann", "123-4567-890"]).unwrap();
        assert_eq!(
            directory.add_record(&["Ann", "050-123-4567"]).unwrap(),
            "New phone for contact Ann has been added"
        );
        assert_eq!(
            phones_of(&directory, "Ann"),
            vec!["123-4567-890", "050-123-4567"]
        );
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_add_record_validates_fields() {
        let mut directory = Directory::new();
        assert_eq!(
            directory.add_record(&["A", "123-4567-890"]),
            Err(ValidationError::NameTooShort)
        );
        assert!(matches!(
            directory.add_record(&["Ann", "abc"]),
            Err(ValidationError::InvalidPhone(_))
        ));
        assert!(directory.is_empty());

        directory.add_record(&["Ann", "123-4567-890"]).unwrap();
        assert!(directory.add_record(&["Ann", "abc"]).is_err());
        assert_eq!(phones_of(&directory, "Ann"), vec!["123-4567-890"]);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut directory = Directory::new();
        directory.add_record(&["Ann", "123-4567-890"]).unwrap();
        directory.add_record(&["ann", "123-4567-890"]).unwrap();
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_find_returns_mutable_record() {
        let mut directory = Directory::new();
        directory.add_record(&["Ann", "123-4567-890"]).unwrap();

        let record = directory.find(&["Ann"]).unwrap();
        record.add_birthday("12.06.1990").unwrap();

        assert!(directory.get("Ann").unwrap().birthday().is_some());
    }

    #[test]
    fn test_find_errors() {
        let mut directory = Directory::new();
        let empty: [&str; 0] = [];
        assert_eq!(
            directory.find(&empty).unwrap_err(),
            ValidationError::NameMissing
        );
        assert_eq!(
            directory.find(&["Ghost"]).unwrap_err().to_string(),
            "User Ghost not found"
        );
    }

    #[test]
    fn test_delete_existing_and_missing() {
        let mut directory = Directory::new();
        directory.add_record(&["Ann", "123-4567-890"]).unwrap();

        assert_eq!(directory.delete(&["Ann"]).unwrap(), "Contact Ann deleted");
        assert!(directory.is_empty());

        assert_eq!(
            directory.delete(&["Ghost"]).unwrap(),
            "Contact Ghost deleted"
        );

        let empty: [&str; 0] = [];
        assert_eq!(directory.delete(&empty), Err(ValidationError::NameMissing));
    }

    #[test]
    fn test_display() {
        let mut directory = Directory::new();
        assert_eq!(directory.to_string(), "No contacts available");

        directory.add_record(&["Ann", "123-4567-890"]).unwrap();
        directory.add_record(&["Bob", "050-123-4567"]).unwrap();
        directory.find(&["Bob"]).unwrap().add_birthday("01.01.1980").unwrap();

        assert_eq!(
            directory.to_string(),
            "Contact name: Ann, phones: 123-4567-890\n\
             Contact name: Bob, phones: 050-123-4567, birthday: 01.01.1980"
        );
    }

    #[test]
    fn test_upcoming_birthdays_in_insertion_order() {
        let mut directory = Directory::new();
        for (name, birthday) in [
            ("Zed", "15.06.1990"),
            ("Ann", "12.06.1990"),
            ("Bob", "01.01.1990"),
        ] {
            directory.add_record(&[name, "123-4567-890"]).unwrap();
            directory.find(&[name]).unwrap().add_birthday(birthday).unwrap();
        }
        directory.add_record(&["Nobday", "123-4567-890"]).unwrap();

        let upcoming = directory.upcoming_birthdays(date(10, 6, 2024), UPCOMING_WINDOW_DAYS);
        assert_eq!(
            upcoming,
            vec![
                UpcomingBirthday {
                    name: "Zed".to_string(),
                    congratulation_date: "17.06.2024".to_string(),
                },
                UpcomingBirthday {
                    name: "Ann".to_string(),
                    congratulation_date: "12.06.2024".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_upcoming_birthdays_empty_directory() {
        let directory = Directory::new();
        assert!(directory.get_upcoming_birthdays().is_empty());
    }

    #[test]
    fn test_try_from_records_rejects_duplicates() {
        let records = vec![
            Record::new("Ann").unwrap(),
            Record::new("Bob").unwrap(),
            Record::new("Ann").unwrap(),
        ];
        assert_eq!(Directory::try_from_records(records), Err("Ann".to_string()));
    }

    #[test]
    fn test_try_from_records_keeps_order() {
        let records = vec![Record::new("Zed").unwrap(), Record::new("Ann").unwrap()];
        let directory = Directory::try_from_records(records).unwrap();
        let names: Vec<&str> = directory
            .records()
            .iter()
            .map(|r| r.name().as_str())
            .collect();
        assert_eq!(names, vec!["Zed", "Ann"]);
    }
}
