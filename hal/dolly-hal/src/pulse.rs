//! Step pulse timer abstraction
//!
//! The pulse timer is the only context that issues step pulses. Each
//! period it pulses the step line once and advances the shared step
//! counter, unless the counter has reached its limit.

/// Periodic step generator
///
/// Implementations run the tick in a preemptive context (hardware timer
/// interrupt, or a high-priority interrupt executor). Calls on this trait
/// come from the supervisory loop and must return without blocking.
pub trait PulseTimer {
    /// Arm the timer with the given period and start ticking
    ///
    /// The first tick happens one full period after this call.
    fn start(&mut self, period_us: u32);

    /// Stop ticking without forgetting the period
    fn pause(&mut self);

    /// Resume ticking after [`PulseTimer::pause`]
    ///
    /// The next tick happens one full period after this call.
    fn resume(&mut self);

    /// Stop ticking and disarm
    fn stop(&mut self);
}
