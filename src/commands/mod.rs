//! Interactive commands.
//!
//! A line of input is split into a [`Command`] and raw arguments by
//! [`parse_input`], then executed against a directory by [`CommandHandler`].
//! Argument counts are checked here or in the directory, never assumed.

mod handler;
mod parser;

pub use handler::{CommandHandler, Outcome, ADD_BIRTHDAY_USAGE, CHANGE_USAGE};
pub use parser::{parse_input, Command, ParsedInput};
