//! Analog ladder decoding

/// Buttons on the pad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    Right,
    Up,
    Down,
    Left,
    Select,
    /// No key pressed
    None,
}

impl ButtonId {
    /// True for any real key
    pub fn is_pressed(self) -> bool {
        self != ButtonId::None
    }
}

/// Upper-bound thresholds for each key, in ascending ADC order
///
/// A sample below `thresholds[0]` is Right, below `thresholds[1]` Up, and
/// so on; anything at or above the last threshold is no key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLadder {
    thresholds: [u16; 5],
}

/// Ladder order, matching `thresholds`
const LADDER_ORDER: [ButtonId; 5] = [
    ButtonId::Right,
    ButtonId::Up,
    ButtonId::Down,
    ButtonId::Left,
    ButtonId::Select,
];

impl Default for ButtonLadder {
    /// Classic LCD keypad shield divider, sampled by a 12-bit ADC
    fn default() -> Self {
        Self::new([200, 1000, 1800, 2600, 3400])
    }
}

impl ButtonLadder {
    /// Create a ladder from Right, Up, Down, Left, Select upper bounds
    pub const fn new(thresholds: [u16; 5]) -> Self {
        Self { thresholds }
    }

    /// Threshold table
    pub fn thresholds(&self) -> [u16; 5] {
        self.thresholds
    }

    /// Map a raw sample to a key
    pub fn classify(&self, raw: u16) -> ButtonId {
        self.thresholds
            .iter()
            .zip(LADDER_ORDER)
            .find(|(limit, _)| raw < **limit)
            .map(|(_, button)| button)
            .unwrap_or(ButtonId::None)
    }

    /// True when every threshold is above the previous one
    pub fn is_ascending(&self) -> bool {
        self.thresholds.windows(2).all(|w| w[0] < w[1])
    }
}
