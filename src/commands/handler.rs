//! Command dispatch against a directory.

use super::parser::{parse_input, Command, ParsedInput};
use crate::domain::{ValidationError, ValidationResult};
use crate::models::{Directory, UPCOMING_WINDOW_DAYS};
use chrono::NaiveDate;

/// Usage text reported when `change` is short of arguments.
pub const CHANGE_USAGE: &str =
    "'change' command should contain 3 arguments: name, old_phone, new_phone";

/// Usage text reported when `add-birthday` is short of arguments.
pub const ADD_BIRTHDAY_USAGE: &str = "\"add-birthday\" command should contain 2 arguments \"name\" and \"birthday\" in format DD.MM.YYYY";

/// Result of executing one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading commands.
    Message(String),
    /// Print the text, persist the directory and stop.
    Exit(String),
}

impl Outcome {
    pub fn text(&self) -> &str {
        match self {
            Outcome::Message(text) | Outcome::Exit(text) => text,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

/// Executes parsed commands against a directory.
#[derive(Debug, Clone)]
pub struct CommandHandler {
    birthday_window_days: u64,
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new(UPCOMING_WINDOW_DAYS)
    }
}

impl CommandHandler {
    pub fn new(birthday_window_days: u64) -> Self {
        Self {
            birthday_window_days,
        }
    }

    /// Parse and execute one line, rendering failures as `Error: <message>`.
    pub fn handle_line(&self, directory: &mut Directory, line: &str, today: NaiveDate) -> Outcome {
        let result = parse_input(line).and_then(|input| self.execute(directory, &input, today));
        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::debug!(error = ?e, "Command rejected");
                Outcome::Message(format!("Error: {}", e))
            }
        }
    }

    /// Execute one parsed command.
    ///
    /// `today` anchors the `birthdays` window.
    pub fn execute(
        &self,
        directory: &mut Directory,
        input: &ParsedInput,
        today: NaiveDate,
    ) -> ValidationResult<Outcome> {
        let args = input.args.as_slice();

        let message = match &input.command {
            Command::Exit => return Ok(Outcome::Exit("Good bye!".to_string())),
            Command::Hello => "How can I help you?".to_string(),
            Command::Add => directory.add_record(args)?,
            Command::All => directory.to_string(),
            Command::Phone => directory.find(args)?.to_string(),
            Command::Delete => directory.delete(args)?,
            Command::Change => {
                let [_, old, new, ..] = args else {
                    return Err(ValidationError::MissingArguments(CHANGE_USAGE.to_string()));
                };
                directory.find(args)?.change_phone(old, new)?
            }
            Command::AddBirthday => {
                let [_, birthday, ..] = args else {
                    return Err(ValidationError::MissingArguments(
                        ADD_BIRTHDAY_USAGE.to_string(),
                    ));
                };
                directory.find(args)?.add_birthday(birthday)?
            }
            Command::ShowBirthday => {
                let record = directory.find(args)?;
                match record.birthday() {
                    Some(birthday) => format!("Birthday: {}", birthday),
                    None => format!("Birthday for contact {} hasn't been set", record.name()),
                }
            }
            Command::Birthdays => {
                let upcoming = directory.upcoming_birthdays(today, self.birthday_window_days);
                if upcoming.is_empty() {
                    "No upcoming birthdays".to_string()
                } else {
                    upcoming
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("\n")
                }
            }
            Command::Unknown(name) => {
                tracing::debug!(command = %name, "Unknown command");
                "Invalid command.".to_string()
            }
        };

        Ok(Outcome::Message(message))
    }
}
