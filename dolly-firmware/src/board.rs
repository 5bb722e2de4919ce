//! Board wiring
//!
//! Raspberry Pi Pico driving a STEP/DIR stepper driver, an optocoupled
//! camera remote and a 16x2 LCD keypad shield:
//!
//! | Signal        | GPIO       |
//! |---------------|------------|
//! | STEP          | GP2        |
//! | DIR           | GP3        |
//! | Shutter       | GP4        |
//! | LCD RS / EN   | GP8 / GP9  |
//! | LCD D4..D7    | GP10..GP13 |
//! | Keypad ladder | GP26 (ADC0)|

use defmt::*;
use dolly_hal::OutputPin;
use dolly_hal_rp2040::GpioOutput;

/// Camera shutter line that logs every trigger
pub struct ShutterLine {
    pin: GpioOutput<'static>,
    shots: u32,
}

impl ShutterLine {
    /// Wrap the shutter output
    pub fn new(pin: GpioOutput<'static>) -> Self {
        Self { pin, shots: 0 }
    }
}

impl OutputPin for ShutterLine {
    fn set_high(&mut self) {
        if self.pin.is_set_low() {
            self.shots += 1;
            debug!("Shutter trigger #{}", self.shots);
        }
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
