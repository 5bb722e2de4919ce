//! Configuration types
//!
//! Every tunable is a compile-time value. The firmware builds a
//! [`SliderConfig`] from constants generated out of `slider.toml`; host
//! tests use [`SliderConfig::default`].

pub mod types;

pub use types::*;
