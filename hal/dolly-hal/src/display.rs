//! Character display abstraction
//!
//! Two-line character LCD addressed by (column, row). Writes are treated
//! as infallible; a glitched character is repainted on the next refresh.

/// Character display
pub trait CharDisplay {
    /// Clear the display and home the cursor
    fn clear(&mut self);

    /// Move the cursor to `col`, `row` (both 0-based)
    fn set_cursor(&mut self, col: u8, row: u8);

    /// Print ASCII text at the cursor, advancing it
    fn print(&mut self, text: &str);

    /// Show a blinking block at the cursor position
    fn blink_on(&mut self);

    /// Hide the blinking block
    fn blink_off(&mut self);
}
