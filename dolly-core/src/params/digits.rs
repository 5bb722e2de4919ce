//! Fixed-width decimal digit editor
//!
//! Numeric fields are edited one digit at a time: the cursor selects a
//! digit, Up/Down change it, Left/Right move the cursor. Nothing wraps.

use crate::config::max_for_digits;

/// Widest field the editor supports; keeps every value inside `u32`
pub const MAX_FIELD_DIGITS: usize = 6;

/// Decode digits, most significant first, into an integer
///
/// Digits outside 0-9 are clamped to 9.
pub fn int_from_digits(digits: &[u8]) -> u32 {
    digits
        .iter()
        .fold(0u32, |acc, &d| acc.saturating_mul(10).saturating_add(d.min(9) as u32))
}

/// Encode `value` as zero-padded digits filling `out`
///
/// A value that does not fit is clamped to all nines.
pub fn digits_from_int(value: u32, out: &mut [u8]) {
    let mut rest = value.min(max_for_digits(out.len() as u8));
    for slot in out.iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }
}

/// Digit-array editing state for one numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitEditor {
    digits: [u8; MAX_FIELD_DIGITS],
    len: u8,
    cursor: u8,
}

impl DigitEditor {
    /// Start editing `value` as a `len`-digit field, cursor on the leading digit
    pub fn new(value: u32, len: u8) -> Self {
        let len = len.clamp(1, MAX_FIELD_DIGITS as u8);
        let mut digits = [0u8; MAX_FIELD_DIGITS];
        digits_from_int(value, &mut digits[..len as usize]);
        Self {
            digits,
            len,
            cursor: 0,
        }
    }

    /// Digits in display order
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len as usize]
    }

    /// Number of digits in the field
    pub fn width(&self) -> u8 {
        self.len
    }

    /// Cursor position (0 = most significant digit)
    pub fn cursor(&self) -> u8 {
        self.cursor
    }

    /// Digit under the cursor
    pub fn current(&self) -> u8 {
        self.digits[self.cursor as usize]
    }

    /// Increase the digit under the cursor; returns false at 9
    pub fn increment(&mut self) -> bool {
        let digit = &mut self.digits[self.cursor as usize];
        if *digit >= 9 {
            return false;
        }
        *digit += 1;
        true
    }

    /// Decrease the digit under the cursor; returns false at 0
    pub fn decrement(&mut self) -> bool {
        let digit = &mut self.digits[self.cursor as usize];
        if *digit == 0 {
            return false;
        }
        *digit -= 1;
        true
    }

    /// Move the cursor towards the most significant digit
    pub fn cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor towards the least significant digit
    pub fn cursor_right(&mut self) -> bool {
        if self.cursor + 1 >= self.len {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Current field value
    pub fn value(&self) -> u32 {
        int_from_digits(self.digits())
    }
}
