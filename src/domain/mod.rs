//! Domain value objects and types.
//!
//! Names, phone numbers and birthdays are validated at construction time,
//! so an invalid value can never be stored on a contact. Each type renders
//! to its raw text through the shared [`Field`] trait.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::{ValidationError, ValidationResult, PHONE_FORMAT_HINT};
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
