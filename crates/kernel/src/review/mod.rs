//! Review acceptance: validating user submissions before they are stored.

mod form;

pub use form::{ReviewForm, ValidationError};
