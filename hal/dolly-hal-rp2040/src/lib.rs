//! RP2040-specific HAL for the camera slider firmware
//!
//! This crate provides RP2040 implementations of the shared `dolly-hal`
//! traits:
//!
//! - GPIO outputs for the direction and shutter lines
//! - ADC channel reading the button ladder
//! - HD44780 character LCD over a 4-bit parallel bus
//! - Pulse timer front end that commands the step pulse task

#![no_std]

pub mod adc;
pub mod gpio;
pub mod lcd;
pub mod pulse;

pub use adc::LadderAdc;
pub use gpio::GpioOutput;
pub use lcd::Hd44780;
pub use pulse::{PulseCommand, PulseSignal, SignalPulseTimer};
