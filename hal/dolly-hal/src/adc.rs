//! Analog input abstraction
//!
//! The button pad is a resistor ladder on a single ADC channel; each key
//! pulls the voltage to a different level.

/// A single analog channel that can be sampled on demand
pub trait AnalogInput {
    /// Take one blocking sample
    ///
    /// Returns `None` if the conversion failed; callers treat that the same
    /// as "no key pressed".
    fn read(&mut self) -> Option<u16>;
}
