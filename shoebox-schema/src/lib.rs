//! Declarative validation of untrusted tax-record input.
//!
//! Everything entering the system — a network body, an import, a stored
//! blob being migrated — passes through [`validate`] before it is
//! encrypted or persisted. The shape is expressed as data (a tree of
//! [`FieldRule`] values) rather than hand-written conditionals, which
//! keeps the collect-all error behavior uniform across every field.
//!
//! Records already inside the store are trusted and not re-validated on
//! read: the cipher's authentication tag guards against tampering past
//! the write boundary.

mod error;
mod rule;
mod validator;

pub use error::{ValidationErrors, Violation};
pub use rule::FieldRule;
pub use validator::{record_shape, validate};
