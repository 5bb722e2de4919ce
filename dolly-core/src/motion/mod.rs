//! Motion control
//!
//! Turns run parameters into a pulse cadence, shares the step count
//! with the pulse timer, and supervises a run to completion or
//! cancellation.

pub mod counter;
pub mod engine;
pub mod plan;
pub mod shutter;

pub use counter::StepCounter;
pub use engine::{MotionEngine, RunOutcome};
pub use plan::{MotionPlan, PlanError};
pub use shutter::Shutter;
