//! Configuration type definitions

use crate::input::ButtonLadder;
use crate::params::MAX_FIELD_DIGITS;

/// Mechanical travel limit of the track in millimetres
pub const MAX_TRAVEL_DISTANCE_MM: u32 = 1300;

/// Motor steps per millimetre of carriage travel
pub const DEFAULT_STEPS_PER_MM: u32 = 5;

/// Character columns on the display
pub const DEFAULT_DISPLAY_COLS: u8 = 16;

/// Character rows on the display
pub const DEFAULT_DISPLAY_ROWS: u8 = 2;

/// Shortest allowed time between step pulses (5 kHz)
pub const DEFAULT_MIN_PULSE_PERIOD_US: u32 = 200;

/// Supervisory loop polling period
pub const DEFAULT_POLL_INTERVAL_US: u32 = 1000;

/// Width of the active step pulse
pub const DEFAULT_STEP_PULSE_US: u32 = 2;

/// Shutter trigger timing
///
/// The whole window (`open_ms`) runs with the pulse timer stopped:
/// `settle_ms` low, `pulse_ms` high, then low for the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShutterConfig {
    /// Delay after the carriage stops, before the trigger goes high
    pub settle_ms: u32,
    /// Trigger pulse width
    pub pulse_ms: u32,
    /// Total shutter window, including settle and pulse
    pub open_ms: u32,
}

impl ShutterConfig {
    /// Time the line is held low after the pulse
    pub fn hold_ms(&self) -> u32 {
        self.open_ms
            .saturating_sub(self.settle_ms)
            .saturating_sub(self.pulse_ms)
    }
}

impl Default for ShutterConfig {
    fn default() -> Self {
        Self {
            settle_ms: 100,
            pulse_ms: 100,
            open_ms: 1000,
        }
    }
}

/// Button debounce timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// A reading must hold this long before it becomes a candidate press
    pub settle_ms: u32,
    /// Sampling period while waiting for a click
    pub poll_ms: u32,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            settle_ms: 50,
            poll_ms: 5,
        }
    }
}

/// Number of digits in each editable field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitCounts {
    /// Distance in millimetres
    pub distance: u8,
    /// Duration in seconds
    pub duration: u8,
    /// Camera steps
    pub steps: u8,
}

impl Default for DigitCounts {
    fn default() -> Self {
        Self {
            distance: 4,
            duration: 5,
            steps: 4,
        }
    }
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `steps_per_mm` is zero
    ZeroStepsPerMm,
    /// Travel limit is zero or does not fit in the distance field
    TravelLimit,
    /// Settle plus pulse time exceeds the shutter window
    ShutterTiming,
    /// Ladder thresholds are not strictly ascending
    LadderOrder,
    /// A digit count is zero or larger than the editor supports
    DigitCount,
    /// Display is too small for the menu
    DisplaySize,
    /// Polling or pulse timing is zero
    Timing,
}

/// Complete slider configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SliderConfig {
    /// Motor steps per millimetre of travel
    pub steps_per_mm: u32,
    /// Mechanical travel limit in millimetres
    pub max_travel_mm: u32,
    /// Display columns
    pub display_cols: u8,
    /// Display rows
    pub display_rows: u8,
    /// Fastest step rate the driver and mechanics accept
    pub min_pulse_period_us: u32,
    /// Supervisory loop polling period
    pub poll_interval_us: u32,
    /// Active width of one step pulse
    pub step_pulse_us: u32,
    /// Shutter trigger timing
    pub shutter: ShutterConfig,
    /// Button debounce timing
    pub debounce: DebounceConfig,
    /// Analog button ladder thresholds
    pub ladder: ButtonLadder,
    /// Editable field widths
    pub digits: DigitCounts,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            steps_per_mm: DEFAULT_STEPS_PER_MM,
            max_travel_mm: MAX_TRAVEL_DISTANCE_MM,
            display_cols: DEFAULT_DISPLAY_COLS,
            display_rows: DEFAULT_DISPLAY_ROWS,
            min_pulse_period_us: DEFAULT_MIN_PULSE_PERIOD_US,
            poll_interval_us: DEFAULT_POLL_INTERVAL_US,
            step_pulse_us: DEFAULT_STEP_PULSE_US,
            shutter: ShutterConfig::default(),
            debounce: DebounceConfig::default(),
            ladder: ButtonLadder::default(),
            digits: DigitCounts::default(),
        }
    }
}

impl SliderConfig {
    /// Check the configuration for values the firmware cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps_per_mm == 0 {
            return Err(ConfigError::ZeroStepsPerMm);
        }

        for count in [self.digits.distance, self.digits.duration, self.digits.steps] {
            if count == 0 || count as usize > MAX_FIELD_DIGITS {
                return Err(ConfigError::DigitCount);
            }
        }

        if self.max_travel_mm == 0 || self.max_travel_mm > max_for_digits(self.digits.distance) {
            return Err(ConfigError::TravelLimit);
        }

        if self.shutter.settle_ms + self.shutter.pulse_ms > self.shutter.open_ms {
            return Err(ConfigError::ShutterTiming);
        }

        if !self.ladder.is_ascending() {
            return Err(ConfigError::LadderOrder);
        }

        // Widest value line: digits, a space and the longest unit
        let widest = self.digits.distance.max(self.digits.duration).max(self.digits.steps) + 6;
        if self.display_rows < 2 || self.display_cols < widest {
            return Err(ConfigError::DisplaySize);
        }

        if self.poll_interval_us == 0
            || self.min_pulse_period_us == 0
            || self.step_pulse_us == 0
            || self.step_pulse_us >= self.min_pulse_period_us
            || self.debounce.poll_ms == 0
        {
            return Err(ConfigError::Timing);
        }

        Ok(())
    }
}

/// Largest value representable in `count` decimal digits
pub fn max_for_digits(count: u8) -> u32 {
    10u32.saturating_pow(count as u32).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(SliderConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_shutter_hold_time() {
        let shutter = ShutterConfig::default();
        assert_eq!(shutter.hold_ms(), 800);

        let tight = ShutterConfig {
            settle_ms: 600,
            pulse_ms: 600,
            open_ms: 1000,
        };
        assert_eq!(tight.hold_ms(), 0);
    }

    #[test]
    fn test_rejects_bad_shutter_timing() {
        let mut config = SliderConfig::default();
        config.shutter.pulse_ms = 2000;
        assert_eq!(config.validate(), Err(ConfigError::ShutterTiming));
    }

    #[test]
    fn test_rejects_travel_that_does_not_fit_field() {
        let mut config = SliderConfig::default();
        config.digits.distance = 3;
        assert_eq!(config.validate(), Err(ConfigError::TravelLimit));
    }

    #[test]
    fn test_rejects_zero_steps_per_mm() {
        let config = SliderConfig {
            steps_per_mm: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroStepsPerMm));
    }

    #[test]
    fn test_rejects_unordered_ladder() {
        let config = SliderConfig {
            ladder: ButtonLadder::new([200, 1000, 900, 2600, 3400]),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::LadderOrder));
    }

    #[test]
    fn test_max_for_digits() {
        assert_eq!(max_for_digits(1), 9);
        assert_eq!(max_for_digits(4), 9999);
        assert_eq!(max_for_digits(6), 999_999);
    }
}
