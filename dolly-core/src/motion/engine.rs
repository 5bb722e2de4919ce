//! Supervisory run loop
//!
//! The pulse timer steps the motor on its own; this loop only watches the
//! step counter. It draws progress markers, pauses the timer at each
//! shutter boundary to fire the camera, and polls the Select key to
//! cancel. The counter limit keeps the timer from overshooting a boundary
//! however late the loop gets to it.

use dolly_hal::{AnalogInput, CharDisplay, OutputPin, PulseTimer};
use embedded_hal_async::delay::DelayNs;

use super::{MotionPlan, Shutter, StepCounter};
use crate::display::Presenter;
use crate::input::{ButtonId, Keypad};
use crate::params::Direction;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunOutcome {
    /// Full travel reached
    Completed,
    /// Select was held during the run
    UserCancelled,
}

/// Drives one run at a time from a [`MotionPlan`]
pub struct MotionEngine<'a, T, Dir, Sh> {
    timer: T,
    counter: &'a StepCounter,
    direction: Dir,
    shutter: Shutter<Sh>,
    poll_interval_us: u32,
}

impl<'a, T, Dir, Sh> MotionEngine<'a, T, Dir, Sh>
where
    T: PulseTimer,
    Dir: OutputPin,
    Sh: OutputPin,
{
    /// Create an engine
    ///
    /// `counter` must be the same counter the pulse timer advances.
    pub fn new(
        timer: T,
        counter: &'a StepCounter,
        direction: Dir,
        shutter: Shutter<Sh>,
        poll_interval_us: u32,
    ) -> Self {
        Self {
            timer,
            counter,
            direction,
            shutter,
            poll_interval_us: poll_interval_us.max(1),
        }
    }

    /// Execute `plan` until travel completes or the operator cancels
    ///
    /// The timer is always stopped on return.
    pub async fn run<A, L, D>(
        &mut self,
        plan: &MotionPlan,
        keypad: &mut Keypad<A>,
        presenter: &mut Presenter<L>,
        delay: &mut D,
    ) -> RunOutcome
    where
        A: AnalogInput,
        L: CharDisplay,
        D: DelayNs,
    {
        self.counter.reset(plan.next_boundary(0));
        self.direction.set_state(plan.direction() == Direction::Reverse);
        presenter.show_running(plan);

        let mut fired = 0u32;
        let mut markers = 0u8;

        self.timer.start(plan.pulse_period_us());

        let outcome = loop {
            if keypad.is_held(ButtonId::Select) {
                break RunOutcome::UserCancelled;
            }

            let position = self.counter.count();

            // Catch up on any markers crossed since the last poll
            while markers < plan.progress_markers()
                && position >= (markers as u32 + 1) * plan.progress_interval_steps()
            {
                presenter.progress_marker(markers);
                markers += 1;
            }

            if fired < plan.shutter_count() && position >= plan.next_boundary(fired) {
                self.timer.pause();
                self.shutter.fire(delay).await;
                fired += 1;
                self.counter.set_limit(plan.next_boundary(fired));
                self.timer.resume();
                continue;
            }

            if position >= plan.total_steps() {
                break RunOutcome::Completed;
            }

            delay.delay_us(self.poll_interval_us).await;
        };

        self.timer.stop();
        outcome
    }

    /// Shutter trigger
    pub fn shutter(&self) -> &Shutter<Sh> {
        &self.shutter
    }

    /// Direction line
    pub fn direction_pin(&self) -> &Dir {
        &self.direction
    }

    /// Pulse timer
    pub fn timer(&self) -> &T {
        &self.timer
    }
}
