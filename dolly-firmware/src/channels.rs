//! State shared between the two executors
//!
//! The pulse task runs on the high-priority interrupt executor; the
//! controller runs in thread mode. They share nothing but these statics.

use dolly_core::motion::StepCounter;
use dolly_hal_rp2040::PulseSignal;

/// Commands from the motion engine to the pulse task
pub static PULSE_CMD: PulseSignal = PulseSignal::new();

/// Steps taken in the current run; written only by the pulse task
pub static STEP_COUNTER: StepCounter = StepCounter::new();
