//! Controller task
//!
//! Runs the menu and, on Go, the motion engine's supervisory loop.

use defmt::*;
use embassy_time::Delay;

use dolly_core::controller::{Activity, Controller};
use dolly_core::motion::RunOutcome;
use dolly_hal_rp2040::{GpioOutput, Hd44780, LadderAdc, SignalPulseTimer};

use crate::board::ShutterLine;

/// Controller wired to the board
pub type SliderController = Controller<
    'static,
    SignalPulseTimer,
    GpioOutput<'static>,
    ShutterLine,
    LadderAdc<'static>,
    Hd44780<'static>,
    Delay,
>;

/// Main interaction loop
#[embassy_executor::task]
pub async fn controller_task(mut controller: SliderController) {
    info!("Controller task started");

    controller.boot().await;
    info!("Boot complete");

    loop {
        match controller.step().await {
            Activity::Key { button, action } => {
                debug!("Key {:?} -> {:?}", button, action);
            }
            Activity::Run { plan, outcome } => {
                let config = controller.config();
                match outcome {
                    RunOutcome::Completed => info!(
                        "Run complete: {} steps, {} shots, {} ms planned",
                        plan.total_steps(),
                        plan.shutter_count(),
                        plan.run_time_ms(config)
                    ),
                    RunOutcome::UserCancelled => warn!(
                        "Run cancelled after {} of {} steps",
                        crate::channels::STEP_COUNTER.count(),
                        plan.total_steps()
                    ),
                }
            }
            Activity::Refused(error) => {
                warn!("Run refused: {:?}", error);
            }
        }
    }
}
