//! Compile-time configuration
//!
//! `build.rs` validates `slider.toml` and emits its values as constants;
//! this module assembles them into a [`SliderConfig`].

use defmt::*;
use dolly_core::config::{DebounceConfig, DigitCounts, ShutterConfig, SliderConfig};
use dolly_core::input::ButtonLadder;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/slider_config.rs"));
}

use generated::*;

/// Configuration built from slider.toml
pub const SLIDER_CONFIG: SliderConfig = SliderConfig {
    steps_per_mm: MOTION_STEPS_PER_MM,
    max_travel_mm: MOTION_MAX_TRAVEL_MM,
    display_cols: DISPLAY_COLS,
    display_rows: DISPLAY_ROWS,
    min_pulse_period_us: MOTION_MIN_PULSE_PERIOD_US,
    poll_interval_us: MOTION_POLL_INTERVAL_US,
    step_pulse_us: MOTION_STEP_PULSE_US,
    shutter: ShutterConfig {
        settle_ms: SHUTTER_SETTLE_MS,
        pulse_ms: SHUTTER_PULSE_MS,
        open_ms: SHUTTER_OPEN_MS,
    },
    debounce: DebounceConfig {
        settle_ms: KEYPAD_SETTLE_MS,
        poll_ms: KEYPAD_POLL_MS,
    },
    ladder: ButtonLadder::new(KEYPAD_THRESHOLDS),
    digits: DigitCounts {
        distance: DIGITS_DISTANCE,
        duration: DIGITS_DURATION,
        steps: DIGITS_STEPS,
    },
};

/// Configuration to run with
///
/// The build already rejects bad files; a value that still fails the
/// runtime check falls back to the defaults.
pub fn slider_config() -> SliderConfig {
    match SLIDER_CONFIG.validate() {
        Ok(()) => SLIDER_CONFIG,
        Err(e) => {
            warn!("slider.toml rejected ({:?}), using defaults", e);
            SliderConfig::default()
        }
    }
}
