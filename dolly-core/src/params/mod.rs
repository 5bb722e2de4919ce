//! Run parameters and their digit-entry editors

pub mod digits;
pub mod store;

pub use digits::{digits_from_int, int_from_digits, DigitEditor, MAX_FIELD_DIGITS};
pub use store::{Direction, Field, RunParameters};
