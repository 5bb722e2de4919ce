//! Two-line display presenter
//!
//! Turns menu state, run progress and run outcomes into text on a
//! [`CharDisplay`](dolly_hal::CharDisplay).

pub mod presenter;

#[cfg(test)]
pub(crate) mod mock;

pub use presenter::{Presenter, SPLASH_TITLE};
