//! Motion plan derivation
//!
//! A plan is rebuilt from the run parameters every time a run starts and
//! dropped when it ends.

use crate::config::SliderConfig;
use crate::params::{Direction, RunParameters};

/// Reasons a run cannot start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlanError {
    /// Distance resolves to zero motor steps
    ZeroTravel,
    /// Duration is zero, which would need an infinite step rate
    ZeroDuration,
    /// More camera steps than motor steps; intervals would be empty
    TooManyIntervals,
    /// Step period is shorter than the configured minimum
    PulseRateTooHigh,
    /// Step period does not fit the timer
    PulseRateTooLow,
}

impl PlanError {
    /// Short message for the display
    pub fn message(self) -> &'static str {
        match self {
            PlanError::ZeroTravel => "Err: no travel",
            PlanError::ZeroDuration => "Err: no time",
            PlanError::TooManyIntervals => "Err: too many",
            PlanError::PulseRateTooHigh => "Err: too fast",
            PlanError::PulseRateTooLow => "Err: too slow",
        }
    }
}

/// Derived step geometry and cadence for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionPlan {
    total_steps: u32,
    pulse_period_us: u32,
    /// Motor steps between shutter triggers; 0 in video mode
    interval_steps: u32,
    shutter_count: u32,
    progress_interval_steps: u32,
    progress_markers: u8,
    direction: Direction,
    duration_s: u32,
}

impl MotionPlan {
    /// Derive a plan, refusing degenerate parameters
    pub fn new(params: &RunParameters, config: &SliderConfig) -> Result<Self, PlanError> {
        let total_steps = params
            .distance_mm
            .min(config.max_travel_mm)
            .saturating_mul(config.steps_per_mm);

        if total_steps == 0 {
            return Err(PlanError::ZeroTravel);
        }
        if params.duration_s == 0 {
            return Err(PlanError::ZeroDuration);
        }
        if params.steps > total_steps {
            return Err(PlanError::TooManyIntervals);
        }

        let period_us = params.duration_s as u64 * 1_000_000 / total_steps as u64;
        let pulse_period_us = u32::try_from(period_us).map_err(|_| PlanError::PulseRateTooLow)?;
        if pulse_period_us < config.min_pulse_period_us {
            return Err(PlanError::PulseRateTooHigh);
        }

        let interval_steps = if params.steps > 0 {
            total_steps / params.steps
        } else {
            0
        };

        let cols = config.display_cols.max(1) as u32;
        let progress_interval_steps = (total_steps / cols).max(1);
        let progress_markers = total_steps.min(cols) as u8;

        Ok(Self {
            total_steps,
            pulse_period_us,
            interval_steps,
            shutter_count: params.steps,
            progress_interval_steps,
            progress_markers,
            direction: params.direction,
            duration_s: params.duration_s,
        })
    }

    /// Motor steps for the whole travel
    pub fn total_steps(&self) -> u32 {
        self.total_steps
    }

    /// Time between step pulses in microseconds
    pub fn pulse_period_us(&self) -> u32 {
        self.pulse_period_us
    }

    /// Time between step pulses in milliseconds
    pub fn pulse_delay_ms(&self) -> f32 {
        self.pulse_period_us as f32 / 1000.0
    }

    /// Motor steps between shutter triggers, `None` in video mode
    pub fn interval_steps(&self) -> Option<u32> {
        (self.interval_steps > 0).then_some(self.interval_steps)
    }

    /// Number of shutter triggers in the run
    pub fn shutter_count(&self) -> u32 {
        self.shutter_count
    }

    /// True when the run pauses for camera triggers
    pub fn is_time_lapse(&self) -> bool {
        self.shutter_count > 0
    }

    /// Motor steps per progress marker
    pub fn progress_interval_steps(&self) -> u32 {
        self.progress_interval_steps
    }

    /// Progress markers drawn over a full run
    ///
    /// One per display column, except on travels shorter than the display
    /// is wide: then there is one marker per motor step and the bar stops
    /// short of the right edge.
    pub fn progress_markers(&self) -> u8 {
        self.progress_markers
    }

    /// Travel direction
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Step count the pulse timer may run up to once `fired` triggers are done
    ///
    /// This is the next trigger position while triggers remain, otherwise
    /// the end of travel.
    pub fn next_boundary(&self, fired: u32) -> u32 {
        if fired < self.shutter_count {
            (fired + 1)
                .saturating_mul(self.interval_steps)
                .min(self.total_steps)
        } else {
            self.total_steps
        }
    }

    /// Expected wall time of the run, including shutter windows
    pub fn run_time_ms(&self, config: &SliderConfig) -> u64 {
        self.duration_s as u64 * 1000 + self.shutter_count as u64 * config.shutter.open_ms as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(distance_mm: u32, duration_s: u32, steps: u32) -> RunParameters {
        RunParameters {
            distance_mm,
            duration_s,
            steps,
            direction: Direction::Forward,
        }
    }

    #[test]
    fn test_video_plan() {
        let plan = MotionPlan::new(&params(100, 10, 0), &SliderConfig::default()).unwrap();
        assert_eq!(plan.total_steps(), 500);
        assert_eq!(plan.pulse_period_us(), 20_000);
        assert_eq!(plan.pulse_delay_ms(), 20.0);
        assert_eq!(plan.interval_steps(), None);
        assert!(!plan.is_time_lapse());
        assert_eq!(plan.next_boundary(0), 500);
    }

    #[test]
    fn test_time_lapse_plan() {
        let plan = MotionPlan::new(&params(100, 60, 5), &SliderConfig::default()).unwrap();
        assert_eq!(plan.interval_steps(), Some(100));
        assert_eq!(plan.shutter_count(), 5);
        assert_eq!(plan.pulse_period_us(), 120_000);
        assert_eq!(plan.next_boundary(0), 100);
        assert_eq!(plan.next_boundary(4), 500);
        assert_eq!(plan.next_boundary(5), 500);
    }

    #[test]
    fn test_progress_geometry() {
        let config = SliderConfig::default();
        let plan = MotionPlan::new(&params(100, 10, 0), &config).unwrap();
        assert_eq!(plan.progress_interval_steps(), 31);
        assert_eq!(plan.progress_markers(), 16);

        // Fewer motor steps than columns: one marker per step
        let short = MotionPlan::new(&params(2, 10, 0), &config).unwrap();
        assert_eq!(short.progress_interval_steps(), 1);
        assert_eq!(short.progress_markers(), 10);
    }

    #[test]
    fn test_degenerate_plans_are_rejected() {
        let config = SliderConfig::default();
        assert_eq!(
            MotionPlan::new(&params(0, 10, 0), &config),
            Err(PlanError::ZeroTravel)
        );
        assert_eq!(
            MotionPlan::new(&params(100, 0, 0), &config),
            Err(PlanError::ZeroDuration)
        );
        assert_eq!(
            MotionPlan::new(&params(100, 10, 501), &config),
            Err(PlanError::TooManyIntervals)
        );
        // 6500 steps in 1 s is above the 5 kHz ceiling
        assert_eq!(
            MotionPlan::new(&params(1300, 1, 0), &config),
            Err(PlanError::PulseRateTooHigh)
        );
    }

    #[test]
    fn test_period_too_long_for_timer() {
        let config = SliderConfig::default();
        // 99999 s over 5 steps is 20000 s per step
        assert_eq!(
            MotionPlan::new(&params(1, 99_999, 0), &config),
            Err(PlanError::PulseRateTooLow)
        );
    }

    #[test]
    fn test_zero_steps_zero_duration_reports_error() {
        let result = MotionPlan::new(&params(100, 0, 0), &SliderConfig::default());
        assert_eq!(result, Err(PlanError::ZeroDuration));
    }

    #[test]
    fn test_run_time_includes_shutter() {
        let config = SliderConfig::default();
        let plan = MotionPlan::new(&params(100, 60, 5), &config).unwrap();
        assert_eq!(plan.run_time_ms(&config), 65_000);
    }
}
