//! Board-agnostic core logic for the camera slider firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Configuration types and compile-time defaults
//! - Run parameters and the digit-entry editor
//! - Menu state machine
//! - Motion planning, the step counter shared with the pulse timer,
//!   and the supervisory run loop
//! - Button ladder decoding and debouncing
//! - Two-line display presenter

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod controller;
pub mod display;
pub mod input;
pub mod motion;
pub mod params;
pub mod state;
