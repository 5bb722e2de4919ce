//! Camera shutter trigger

use dolly_hal::OutputPin;
use embedded_hal_async::delay::DelayNs;

use crate::config::ShutterConfig;

/// Shutter trigger line
pub struct Shutter<P> {
    pin: P,
    config: ShutterConfig,
}

impl<P: OutputPin> Shutter<P> {
    /// Create a shutter trigger, driving the line low
    pub fn new(mut pin: P, config: ShutterConfig) -> Self {
        pin.set_low();
        Self { pin, config }
    }

    /// Run one trigger window
    ///
    /// Blocks the caller for `open_ms`: settle low, pulse high, then hold
    /// low for the remainder. Not interruptible.
    pub async fn fire<D: DelayNs>(&mut self, delay: &mut D) {
        delay.delay_ms(self.config.settle_ms).await;
        self.pin.set_high();
        delay.delay_ms(self.config.pulse_ms).await;
        self.pin.set_low();
        delay.delay_ms(self.config.hold_ms()).await;
    }

    /// Trigger timing
    pub fn config(&self) -> &ShutterConfig {
        &self.config
    }

    /// Trigger line
    pub fn pin(&self) -> &P {
        &self.pin
    }
}
