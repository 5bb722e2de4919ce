//! Keypad: analog channel + ladder + debouncer

use dolly_hal::AnalogInput;
use embedded_hal_async::delay::DelayNs;

use super::{ButtonId, ButtonLadder, Debouncer};
use crate::config::DebounceConfig;

/// Button pad on one analog channel
pub struct Keypad<A> {
    input: A,
    ladder: ButtonLadder,
    debouncer: Debouncer,
    poll_ms: u32,
    /// Time accumulated from our own poll delays
    elapsed_ms: u32,
}

impl<A: AnalogInput> Keypad<A> {
    /// Create a keypad
    pub fn new(input: A, ladder: ButtonLadder, debounce: DebounceConfig) -> Self {
        Self {
            input,
            ladder,
            debouncer: Debouncer::new(debounce.settle_ms),
            poll_ms: debounce.poll_ms.max(1),
            elapsed_ms: 0,
        }
    }

    /// Raw, undebounced key reading
    pub fn poll_button(&mut self) -> ButtonId {
        match self.input.read() {
            Some(raw) => self.ladder.classify(raw),
            None => ButtonId::None,
        }
    }

    /// True if `button` is down right now
    pub fn is_held(&mut self, button: ButtonId) -> bool {
        self.poll_button() == button
    }

    /// Wait for a debounced click and return its key
    pub async fn await_key_click<D: DelayNs>(&mut self, delay: &mut D) -> ButtonId {
        self.debouncer.reset();
        loop {
            let raw = self.poll_button();
            if let Some(button) = self.debouncer.update(raw, self.elapsed_ms) {
                return button;
            }
            self.sleep(delay).await;
        }
    }

    /// Wait until no key is down
    pub async fn await_release<D: DelayNs>(&mut self, delay: &mut D) {
        while self.poll_button().is_pressed() {
            self.sleep(delay).await;
        }
        self.debouncer.reset();
    }

    /// Underlying analog input
    pub fn input(&self) -> &A {
        &self.input
    }

    async fn sleep<D: DelayNs>(&mut self, delay: &mut D) {
        delay.delay_ms(self.poll_ms).await;
        self.elapsed_ms = self.elapsed_ms.wrapping_add(self.poll_ms);
    }
}
