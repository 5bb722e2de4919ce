//! In-memory character display for tests

use dolly_hal::CharDisplay;

pub(crate) const COLS: usize = 16;
pub(crate) const ROWS: usize = 2;

/// Frame buffer that records what a real LCD would show
pub(crate) struct MockLcd {
    cells: [[u8; COLS]; ROWS],
    col: usize,
    row: usize,
    pub blinking: bool,
    pub clears: u32,
    /// Progress marks printed, including any drawn off screen
    pub marks: u32,
}

impl MockLcd {
    pub fn new() -> Self {
        Self {
            cells: [[b' '; COLS]; ROWS],
            col: 0,
            row: 0,
            blinking: false,
            clears: 0,
            marks: 0,
        }
    }

    /// Row text with trailing blanks removed
    pub fn line(&self, row: usize) -> &str {
        let cells = &self.cells[row];
        let end = cells.iter().rposition(|&c| c != b' ').map_or(0, |i| i + 1);
        core::str::from_utf8(&cells[..end]).unwrap()
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.col, self.row)
    }
}

impl CharDisplay for MockLcd {
    fn clear(&mut self) {
        self.cells = [[b' '; COLS]; ROWS];
        self.col = 0;
        self.row = 0;
        self.clears += 1;
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.col = col as usize;
        self.row = row as usize;
    }

    fn print(&mut self, text: &str) {
        for byte in text.bytes() {
            if byte == b'#' {
                self.marks += 1;
            }
            if self.col < COLS && self.row < ROWS {
                self.cells[self.row][self.col] = byte;
            }
            self.col += 1;
        }
    }

    fn blink_on(&mut self) {
        self.blinking = true;
    }

    fn blink_off(&mut self) {
        self.blinking = false;
    }
}
