//! HD44780 character LCD driver
//!
//! Write-only 4-bit parallel interface (RW tied low), as on the common
//! 16x2 LCD keypad shields. Timing comes from busy-waits since the bus
//! has no busy flag without RW.

use dolly_hal::CharDisplay;
use embassy_rp::gpio::{Level, Output};
use embassy_time::{block_for, Duration};

/// HD44780 commands
#[allow(dead_code)]
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const HOME: u8 = 0x02;
    pub const ENTRY_MODE: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    // Entry mode flags
    pub const ENTRY_INCREMENT: u8 = 0x02;

    // Display control flags
    pub const DISPLAY_ON: u8 = 0x04;
    pub const CURSOR_ON: u8 = 0x02;
    pub const BLINK_ON: u8 = 0x01;

    // Function set flags
    pub const TWO_LINES: u8 = 0x08;
}

/// DDRAM start address of each row
const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Execution time of ordinary commands and data writes
const EXEC_US: u64 = 50;

/// Execution time of clear and home
const SLOW_EXEC_US: u64 = 2000;

/// HD44780 on a 4-bit bus
pub struct Hd44780<'d> {
    rs: Output<'d>,
    en: Output<'d>,
    /// D4..D7
    data: [Output<'d>; 4],
    rows: u8,
    control: u8,
}

impl<'d> Hd44780<'d> {
    /// Create and initialize the display
    ///
    /// Blocks for roughly 50 ms while the controller powers up.
    pub fn new(rs: Output<'d>, en: Output<'d>, data: [Output<'d>; 4], rows: u8) -> Self {
        let mut lcd = Self {
            rs,
            en,
            data,
            rows: rows.clamp(1, ROW_OFFSETS.len() as u8),
            control: cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON,
        };
        lcd.init();
        lcd
    }

    fn init(&mut self) {
        block_for(Duration::from_millis(50));
        self.rs.set_low();
        self.en.set_low();

        // Reset into 8-bit mode three times, then switch to 4-bit
        self.write_nibble(0x03);
        block_for(Duration::from_micros(4500));
        self.write_nibble(0x03);
        block_for(Duration::from_micros(150));
        self.write_nibble(0x03);
        block_for(Duration::from_micros(150));
        self.write_nibble(0x02);
        block_for(Duration::from_micros(EXEC_US));

        let lines = if self.rows > 1 { cmd::TWO_LINES } else { 0 };
        self.command(cmd::FUNCTION_SET | lines);
        self.command(cmd::DISPLAY_CONTROL);
        self.command(cmd::CLEAR);
        block_for(Duration::from_micros(SLOW_EXEC_US));
        self.command(cmd::ENTRY_MODE | cmd::ENTRY_INCREMENT);
        self.command(self.control);
    }

    fn command(&mut self, value: u8) {
        self.rs.set_low();
        self.write_byte(value);
    }

    fn write_data(&mut self, value: u8) {
        self.rs.set_high();
        self.write_byte(value);
    }

    fn write_byte(&mut self, value: u8) {
        self.write_nibble(value >> 4);
        self.write_nibble(value & 0x0F);
        block_for(Duration::from_micros(EXEC_US));
    }

    fn write_nibble(&mut self, nibble: u8) {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_level(Level::from(nibble & (1 << bit) != 0));
        }
        // Enable pulse must be at least 450 ns wide
        self.en.set_high();
        block_for(Duration::from_micros(1));
        self.en.set_low();
        block_for(Duration::from_micros(1));
    }
}

impl CharDisplay for Hd44780<'_> {
    fn clear(&mut self) {
        self.command(cmd::CLEAR);
        block_for(Duration::from_micros(SLOW_EXEC_US));
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        let row = row.min(self.rows - 1) as usize;
        let addr = ROW_OFFSETS[row].wrapping_add(col) & 0x7F;
        self.command(cmd::SET_DDRAM_ADDR | addr);
    }

    fn print(&mut self, text: &str) {
        for byte in text.bytes() {
            // Outside printable ASCII the ROM glyphs differ per variant
            let byte = if byte.is_ascii_graphic() || byte == b' ' {
                byte
            } else {
                b'?'
            };
            self.write_data(byte);
        }
    }

    fn blink_on(&mut self) {
        self.control |= cmd::BLINK_ON;
        self.command(self.control);
    }

    fn blink_off(&mut self) {
        self.control &= !(cmd::BLINK_ON | cmd::CURSOR_ON);
        self.command(self.control);
    }
}
