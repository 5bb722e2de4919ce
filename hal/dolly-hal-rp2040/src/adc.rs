//! Button ladder ADC input
//!
//! The ladder sits on one of the four external channels (GPIO26..=29);
//! the board passes the already-bound `Channel`.

use dolly_hal::AnalogInput;
use embassy_rp::adc::{Adc, Blocking, Channel};

/// One ADC channel sampled in blocking mode
///
/// A conversion takes about 2 µs, short enough to call from the
/// supervisory loop without yielding.
pub struct LadderAdc<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> LadderAdc<'d> {
    /// Create a ladder input on `channel`
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for LadderAdc<'_> {
    fn read(&mut self) -> Option<u16> {
        self.adc.blocking_read(&mut self.channel).ok()
    }
}
