//! Dolly - Motorized Camera Slider Firmware
//!
//! Main firmware binary for RP2040-based camera sliders. The operator
//! sets distance, duration, camera steps and direction on a two-line LCD
//! with a five-key pad, then runs either a continuous video move or a
//! stop-and-shoot time-lapse.
//!
//! Two executors:
//! - an interrupt executor on SWI_IRQ_1 running the step pulse task,
//!   which preempts everything else
//! - the thread-mode executor running the menu and the supervisory loop

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use dolly_core::controller::Controller;
use dolly_core::display::Presenter;
use dolly_core::input::Keypad;
use dolly_core::motion::{MotionEngine, Shutter};
use dolly_core::params::RunParameters;
use dolly_hal_rp2040::{GpioOutput, Hd44780, LadderAdc, SignalPulseTimer};

use crate::board::ShutterLine;
use crate::channels::{PULSE_CMD, STEP_COUNTER};

mod board;
mod channels;
mod config;
mod tasks;

/// Executor for the step pulse task
static EXECUTOR_PULSE: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_PULSE.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Dolly firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::slider_config();
    info!(
        "Config: {} steps/mm, {} mm travel, {}x{} display",
        config.steps_per_mm, config.max_travel_mm, config.display_cols, config.display_rows
    );

    // Step pulses on the high-priority executor
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let pulse_spawner = EXECUTOR_PULSE.start(interrupt::SWI_IRQ_1);
    let step_pin = Output::new(p.PIN_2, Level::Low);
    unwrap!(pulse_spawner.spawn(tasks::pulse_task(
        step_pin,
        &STEP_COUNTER,
        config.step_pulse_us
    )));

    // Motion engine
    let direction = GpioOutput::new(Output::new(p.PIN_3, Level::Low));
    let shutter = ShutterLine::new(GpioOutput::new(Output::new(p.PIN_4, Level::Low)));
    let engine = MotionEngine::new(
        SignalPulseTimer::new(&PULSE_CMD),
        &STEP_COUNTER,
        direction,
        Shutter::new(shutter, config.shutter),
        config.poll_interval_us,
    );

    // Keypad on ADC0
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let ladder_channel = Channel::new_pin(p.PIN_26, Pull::None);
    let keypad = Keypad::new(
        LadderAdc::new(adc, ladder_channel),
        config.ladder,
        config.debounce,
    );

    // LCD
    let lcd = Hd44780::new(
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
        [
            Output::new(p.PIN_10, Level::Low),
            Output::new(p.PIN_11, Level::Low),
            Output::new(p.PIN_12, Level::Low),
            Output::new(p.PIN_13, Level::Low),
        ],
        config.display_rows,
    );
    let presenter = Presenter::new(lcd, config.display_cols);
    info!("LCD initialized");

    let controller = Controller::new(
        config,
        RunParameters::default(),
        engine,
        keypad,
        presenter,
        Delay,
    );

    unwrap!(spawner.spawn(tasks::controller_task(controller)));
    info!("All tasks spawned");
}
