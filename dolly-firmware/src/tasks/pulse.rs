//! Step pulse task
//!
//! Runs on the high-priority interrupt executor so it preempts the
//! controller. Each tick does bounded work: one gate check, one step
//! pulse and one counter store. It never touches the display.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Output;
use embassy_time::{block_for, Duration, Ticker};

use dolly_core::motion::StepCounter;
use dolly_hal_rp2040::PulseCommand;

use crate::channels::PULSE_CMD;

/// Step pulse generator
///
/// Waits for [`PulseCommand::Run`], then ticks every period until the
/// next command arrives.
#[embassy_executor::task]
pub async fn pulse_task(mut step: Output<'static>, counter: &'static StepCounter, pulse_us: u32) {
    info!("Pulse task started");

    step.set_low();
    let pulse_width = Duration::from_micros(pulse_us as u64);
    let mut command = PULSE_CMD.wait().await;

    loop {
        command = match command {
            PulseCommand::Halt => {
                trace!("Pulse halt at step {}", counter.count());
                PULSE_CMD.wait().await
            }
            PulseCommand::Run { period_us } => {
                trace!("Pulse run every {} us", period_us);
                let mut ticker = Ticker::every(Duration::from_micros(period_us as u64));
                loop {
                    match select(ticker.next(), PULSE_CMD.wait()).await {
                        Either::First(()) => {
                            counter.tick(|| {
                                step.set_high();
                                block_for(pulse_width);
                                step.set_low();
                            });
                        }
                        Either::Second(next) => break next,
                    }
                }
            }
        };
    }
}
