//! Data models for the address book.
//!
//! A [`Directory`] owns [`Record`]s keyed by name; each record aggregates the
//! validated value objects from [`crate::domain`].

pub mod birthdays;
pub mod directory;
pub mod record;

pub use birthdays::{UpcomingBirthday, UPCOMING_WINDOW_DAYS};
pub use directory::Directory;
pub use record::Record;
