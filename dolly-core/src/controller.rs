//! Application controller
//!
//! Owns the menu, the keypad, the presenter and the motion engine, and
//! runs the main interaction loop one key click at a time:
//!
//! - Boot: splash screen, then the first menu item
//! - Idle: wait for a click, feed it to the menu, update the display
//! - Go: build a plan, hand control to the motion engine, show the outcome

use dolly_hal::{AnalogInput, CharDisplay, OutputPin, PulseTimer};
use embedded_hal_async::delay::DelayNs;

use crate::config::SliderConfig;
use crate::display::Presenter;
use crate::input::{ButtonId, Keypad};
use crate::motion::{MotionEngine, MotionPlan, PlanError, RunOutcome};
use crate::params::RunParameters;
use crate::state::{Menu, MenuAction};

/// How long the boot splash stays up
pub const SPLASH_MS: u32 = 1000;

/// How long a run outcome or plan error stays up
pub const OUTCOME_HOLD_MS: u32 = 1500;

/// What one controller step did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// A key click was handled by the menu
    Key { button: ButtonId, action: MenuAction },
    /// A run was executed
    Run { plan: MotionPlan, outcome: RunOutcome },
    /// Go was selected but the parameters cannot be run
    Refused(PlanError),
}

/// Top-level application state
pub struct Controller<'a, T, Dir, Sh, A, L, D> {
    config: SliderConfig,
    menu: Menu,
    engine: MotionEngine<'a, T, Dir, Sh>,
    keypad: Keypad<A>,
    presenter: Presenter<L>,
    delay: D,
}

impl<'a, T, Dir, Sh, A, L, D> Controller<'a, T, Dir, Sh, A, L, D>
where
    T: PulseTimer,
    Dir: OutputPin,
    Sh: OutputPin,
    A: AnalogInput,
    L: CharDisplay,
    D: DelayNs,
{
    /// Create a controller starting from `params`
    pub fn new(
        config: SliderConfig,
        params: RunParameters,
        engine: MotionEngine<'a, T, Dir, Sh>,
        keypad: Keypad<A>,
        presenter: Presenter<L>,
        delay: D,
    ) -> Self {
        Self {
            config,
            menu: Menu::new(params),
            engine,
            keypad,
            presenter,
            delay,
        }
    }

    /// Show the splash screen, then the first menu item
    pub async fn boot(&mut self) {
        self.presenter.show_splash();
        self.delay.delay_ms(SPLASH_MS).await;
        self.presenter.render(&self.menu);
    }

    /// Handle one key click, running the slider if Go was selected
    pub async fn step(&mut self) -> Activity {
        let button = self.keypad.await_key_click(&mut self.delay).await;
        let action = self.menu.handle(button, &self.config);

        if action != MenuAction::StartRun {
            self.presenter.apply(&self.menu, action);
            return Activity::Key { button, action };
        }

        let activity = match MotionPlan::new(self.menu.params(), &self.config) {
            Ok(plan) => {
                let outcome = self
                    .engine
                    .run(&plan, &mut self.keypad, &mut self.presenter, &mut self.delay)
                    .await;
                self.presenter.show_outcome(outcome);
                Activity::Run { plan, outcome }
            }
            Err(error) => {
                self.presenter.show_plan_error(error);
                Activity::Refused(error)
            }
        };

        // A Select still held from cancelling must not count as a new click
        self.keypad.await_release(&mut self.delay).await;
        self.delay.delay_ms(OUTCOME_HOLD_MS).await;

        self.menu.run_finished();
        self.presenter.render(&self.menu);
        activity
    }

    /// Run forever
    pub async fn run(&mut self) -> ! {
        self.boot().await;
        loop {
            self.step().await;
        }
    }

    /// Current menu
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Active configuration
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Display presenter
    pub fn presenter(&self) -> &Presenter<L> {
        &self.presenter
    }

    /// Motion engine
    pub fn engine(&self) -> &MotionEngine<'a, T, Dir, Sh> {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DebounceConfig;
    use crate::display::mock::MockLcd;
    use crate::input::ButtonLadder;
    use crate::motion::engine::sim::{EdgePin, Sim, SimDelay, SimTimer, IDLE_RAW, SELECT_RAW};
    use crate::motion::{Shutter, StepCounter};
    use crate::params::Direction;
    use crate::state::{MenuItem, MenuState};
    use embassy_futures::block_on;

    const RIGHT_RAW: u16 = 100;

    /// Key presses as (start_us, end_us, raw) windows on the sim clock
    struct Timeline<'s, 'a> {
        sim: &'s Sim<'a>,
        presses: &'static [(u64, u64, u16)],
    }

    impl AnalogInput for Timeline<'_, '_> {
        fn read(&mut self) -> Option<u16> {
            let now = self.sim.now_us.get();
            let raw = self
                .presses
                .iter()
                .find(|&&(start, end, _)| now >= start && now < end)
                .map_or(IDLE_RAW, |&(_, _, raw)| raw);
            Some(raw)
        }
    }

    type TestController<'s, 'a> = Controller<
        'a,
        SimTimer<'s, 'a>,
        EdgePin<'s, 'a>,
        EdgePin<'s, 'a>,
        Timeline<'s, 'a>,
        MockLcd,
        SimDelay<'s, 'a>,
    >;

    fn controller<'s, 'a>(
        sim: &'s Sim<'a>,
        params: RunParameters,
        presses: &'static [(u64, u64, u16)],
    ) -> TestController<'s, 'a> {
        let config = SliderConfig::default();
        let engine = MotionEngine::new(
            SimTimer(sim),
            sim.counter,
            EdgePin::new(sim),
            Shutter::new(EdgePin::new(sim), config.shutter),
            config.poll_interval_us,
        );
        let keypad = Keypad::new(
            Timeline { sim, presses },
            ButtonLadder::default(),
            DebounceConfig::default(),
        );
        let presenter = Presenter::new(MockLcd::new(), config.display_cols);
        Controller::new(config, params, engine, keypad, presenter, SimDelay(sim))
    }

    fn short_video() -> RunParameters {
        RunParameters {
            distance_mm: 10,
            duration_s: 2,
            steps: 0,
            direction: Direction::Forward,
        }
    }

    const MS: u64 = 1000;

    /// Four Right clicks then Select
    const TO_GO_AND_START: [(u64, u64, u16); 5] = [
        (0, 100 * MS, RIGHT_RAW),
        (200 * MS, 300 * MS, RIGHT_RAW),
        (400 * MS, 500 * MS, RIGHT_RAW),
        (600 * MS, 700 * MS, RIGHT_RAW),
        (800 * MS, 900 * MS, SELECT_RAW),
    ];

    #[test]
    fn test_boot_shows_splash_then_menu() {
        let counter = StepCounter::new();
        let sim = Sim::new(&counter);
        let mut c = controller(&sim, RunParameters::default(), &[]);

        block_on(c.boot());

        assert_eq!(sim.now_us.get(), SPLASH_MS as u64 * MS);
        assert_eq!(c.presenter().lcd().line(0), "Distance");
        assert_eq!(c.presenter().lcd().line(1), "500 mm");
        assert_eq!(c.presenter().lcd().clears, 2);
    }

    #[test]
    fn test_navigate_and_run_to_completion() {
        static PRESSES: [(u64, u64, u16); 5] = TO_GO_AND_START;
        let counter = StepCounter::new();
        let sim = Sim::new(&counter);
        let mut c = controller(&sim, short_video(), &PRESSES);

        for _ in 0..4 {
            let activity = block_on(c.step());
            assert_eq!(
                activity,
                Activity::Key {
                    button: ButtonId::Right,
                    action: MenuAction::Refresh
                }
            );
        }
        assert_eq!(*c.menu().state(), MenuState::Top(MenuItem::Go));

        let activity = block_on(c.step());
        let Activity::Run { plan, outcome } = activity else {
            panic!("expected a run, got {activity:?}");
        };
        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(plan.total_steps(), 50);
        assert_eq!(counter.count(), 50);

        // Back on Go after the outcome screen
        assert_eq!(*c.menu().state(), MenuState::Top(MenuItem::Go));
        assert_eq!(c.presenter().lcd().line(0), "Go");
        assert_eq!(c.presenter().lcd().line(1), "Stopped");
        assert!(!c.engine().timer().0.armed.get());
    }

    #[test]
    fn test_held_select_cancels_and_is_not_a_click() {
        static PRESSES: [(u64, u64, u16); 6] = {
            let mut p = [(0, 0, 0); 6];
            let mut i = 0;
            while i < 5 {
                p[i] = TO_GO_AND_START[i];
                i += 1;
            }
            // Held across the end of the run's first second
            p[5] = (1_500 * MS, 1_700 * MS, SELECT_RAW);
            p
        };
        let counter = StepCounter::new();
        let sim = Sim::new(&counter);
        let mut c = controller(&sim, short_video(), &PRESSES);

        for _ in 0..4 {
            block_on(c.step());
        }
        let activity = block_on(c.step());
        assert!(matches!(
            activity,
            Activity::Run {
                outcome: RunOutcome::UserCancelled,
                ..
            }
        ));
        assert!(counter.count() < 50);

        // Released at 1.7 s, then the outcome hold
        assert!(sim.now_us.get() >= 1_700 * MS + OUTCOME_HOLD_MS as u64 * MS);
        assert_eq!(*c.menu().state(), MenuState::Top(MenuItem::Go));
    }

    #[test]
    fn test_degenerate_plan_is_refused() {
        static PRESSES: [(u64, u64, u16); 5] = TO_GO_AND_START;
        let counter = StepCounter::new();
        let sim = Sim::new(&counter);
        let params = RunParameters {
            distance_mm: 0,
            ..short_video()
        };
        let mut c = controller(&sim, params, &PRESSES);

        for _ in 0..4 {
            block_on(c.step());
        }
        assert_eq!(block_on(c.step()), Activity::Refused(PlanError::ZeroTravel));
        assert_eq!(counter.count(), 0);
        assert_eq!(*c.menu().state(), MenuState::Top(MenuItem::Go));
        assert_eq!(c.presenter().lcd().line(1), "Stopped");
    }
}
