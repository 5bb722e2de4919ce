//! Menu state machine
//!
//! Two levels: a linear top-level list of items, and a per-item editing
//! level entered with Select. Transitions are a pure function of the
//! current state and a debounced key click.

pub mod events;
pub mod machine;

pub use events::MenuAction;
pub use machine::{Menu, MenuItem, MenuState};
