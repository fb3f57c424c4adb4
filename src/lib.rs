//! Address Book - an interactive local contact directory.
//!
//! Contacts have a name, any number of validated phone numbers and an
//! optional birthday. The directory answers which birthdays fall in the
//! coming week and is persisted to a JSON snapshot between runs.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday) and `ValidationError`
//! - **models**: Record, Directory and the upcoming-birthday window
//! - **commands**: Line parsing and command dispatch
//! - **repositories**: Snapshot format and file-backed persistence
//! - **session**: The prompt/read/execute loop
//! - **config**: Configuration from environment variables
//! - **error**: Storage and configuration error types

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;

pub use commands::{parse_input, Command, CommandHandler, Outcome};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{ConfigError, StorageError};
pub use models::{Directory, Record, UpcomingBirthday};
pub use repositories::{DirectoryRepository, FileDirectoryRepository};
pub use session::Session;
