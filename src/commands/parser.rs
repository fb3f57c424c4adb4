//! Input line parsing.

use crate::domain::{ValidationError, ValidationResult};

/// A command name recognised by the assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    All,
    Phone,
    Delete,
    Change,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    /// `close` or `exit`
    Exit,
    /// Anything else, kept lower-cased
    Unknown(String),
}

impl Command {
    /// Map a lower-cased command token to a command.
    pub fn from_name(name: &str) -> Self {
        match name {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "all" => Command::All,
            "phone" => Command::Phone,
            "delete" => Command::Delete,
            "change" => Command::Change,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "close" | "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }
}

/// A parsed line: the command and its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a line on whitespace into a command and its arguments.
///
/// Only the command token is lower-cased; arguments are kept verbatim.
///
/// # Errors
///
/// Returns `ValidationError::EmptyInput` for a blank line.
pub fn parse_input(line: &str) -> ValidationResult<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let name = tokens.next().ok_or(ValidationError::EmptyInput)?;

    Ok(ParsedInput {
        command: Command::from_name(&name.to_lowercase()),
        args: tokens.map(str::to_string).collect(),
    })
}
