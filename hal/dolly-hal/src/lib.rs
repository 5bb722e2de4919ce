//! Dolly Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the slider logic is written
//! against. Chip-specific HALs implement them; the core crate and its
//! host tests only ever see these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  dolly-core (menu, motion engine, ui)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  dolly-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  dolly-hal-   │       │  host mocks   │
//! │    rp2040     │       │  (unit tests) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs
//! - [`adc::AnalogInput`] - Single analog channel (button ladder)
//! - [`pulse::PulseTimer`] - Periodic step pulse generator
//! - [`display::CharDisplay`] - Character LCD

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod display;
pub mod gpio;
pub mod pulse;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use display::CharDisplay;
pub use gpio::OutputPin;
pub use pulse::PulseTimer;
