//! Results of a menu transition

use crate::params::Field;

/// What the rest of the system must do after a key click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuAction {
    /// Nothing changed
    None,
    /// State changed; redraw label and value lines
    Refresh,
    /// One digit changed while editing
    DigitChanged { cursor: u8, digit: u8 },
    /// Editing cursor moved
    CursorMoved { cursor: u8 },
    /// A numeric field was committed; `value` is what was stored
    Committed { field: Field, value: u32 },
    /// Go was entered: start a run with the current parameters
    StartRun,
}
