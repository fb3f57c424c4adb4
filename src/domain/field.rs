//! Shared capability of validated single-value fields.

use std::fmt;

/// A validated, immutable value that renders to its raw text.
///
/// Implementors validate in their constructor and never expose a way to
/// mutate the stored value afterwards.
pub trait Field: fmt::Display {
    /// The raw text exactly as it was accepted.
    fn value(&self) -> &str;
}
