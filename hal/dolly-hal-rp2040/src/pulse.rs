//! Pulse timer front end
//!
//! The step pulses themselves come from a task on a high-priority
//! interrupt executor. The supervisory loop talks to it through a
//! [`Signal`]: the latest command wins, which is all a
//! start/pause/resume/stop protocol needs.

use dolly_hal::PulseTimer;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

/// Command for the step pulse task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseCommand {
    /// Tick every `period_us`, first tick one period from now
    Run { period_us: u32 },
    /// Stop ticking
    Halt,
}

/// Signal the pulse task waits on
pub type PulseSignal = Signal<CriticalSectionRawMutex, PulseCommand>;

/// [`PulseTimer`] implemented by signalling the pulse task
pub struct SignalPulseTimer {
    signal: &'static PulseSignal,
    period_us: u32,
}

impl SignalPulseTimer {
    /// Create a timer front end for the task listening on `signal`
    pub fn new(signal: &'static PulseSignal) -> Self {
        Self {
            signal,
            period_us: 0,
        }
    }
}

impl PulseTimer for SignalPulseTimer {
    fn start(&mut self, period_us: u32) {
        self.period_us = period_us;
        self.signal.signal(PulseCommand::Run { period_us });
    }

    fn pause(&mut self) {
        self.signal.signal(PulseCommand::Halt);
    }

    fn resume(&mut self) {
        self.signal.signal(PulseCommand::Run {
            period_us: self.period_us,
        });
    }

    fn stop(&mut self) {
        self.period_us = 0;
        self.signal.signal(PulseCommand::Halt);
    }
}
