//! Embassy tasks

pub mod controller;
pub mod pulse;

pub use controller::controller_task;
pub use pulse::pulse_task;
