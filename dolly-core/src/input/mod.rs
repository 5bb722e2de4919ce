//! Button pad input
//!
//! Five keys share one analog channel through a resistor ladder. The
//! [`ButtonLadder`] maps a raw sample to a key, the [`Debouncer`] turns a
//! stream of samples into clean press-and-release clicks, and [`Keypad`]
//! ties both to an [`AnalogInput`](dolly_hal::AnalogInput).

pub mod debounce;
pub mod keypad;
pub mod ladder;

pub use debounce::{DebounceState, Debouncer};
pub use keypad::Keypad;
pub use ladder::{ButtonId, ButtonLadder};
