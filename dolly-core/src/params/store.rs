//! Parameter store
//!
//! Holds the validated values the operator configures before a run.

use crate::config::{max_for_digits, SliderConfig};

/// Carriage travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Away from the motor end
    #[default]
    Forward,
    /// Towards the motor end
    Reverse,
}

impl Direction {
    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "Forward",
            Direction::Reverse => "Reverse",
        }
    }
}

/// Numeric fields edited through the digit editor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    /// Travel distance in millimetres
    Distance,
    /// Run duration in seconds
    Duration,
    /// Camera steps (0 = video mode)
    Steps,
}

impl Field {
    /// Digit count for this field
    pub fn digits(self, config: &SliderConfig) -> u8 {
        match self {
            Field::Distance => config.digits.distance,
            Field::Duration => config.digits.duration,
            Field::Steps => config.digits.steps,
        }
    }

    /// Unit suffix shown after the value
    pub fn unit(self) -> &'static str {
        match self {
            Field::Distance => "mm",
            Field::Duration => "s",
            Field::Steps => "shots",
        }
    }
}

/// Operator-configured run settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RunParameters {
    /// Travel distance, never above the travel limit
    pub distance_mm: u32,
    /// Run duration in seconds
    pub duration_s: u32,
    /// Camera steps; 0 runs continuously (video mode)
    pub steps: u32,
    /// Travel direction
    pub direction: Direction,
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            distance_mm: 500,
            duration_s: 60,
            steps: 0,
            direction: Direction::Forward,
        }
    }
}

impl RunParameters {
    /// Read a numeric field
    pub fn get(&self, field: Field) -> u32 {
        match field {
            Field::Distance => self.distance_mm,
            Field::Duration => self.duration_s,
            Field::Steps => self.steps,
        }
    }

    /// Store a committed field value
    ///
    /// Distance is clamped to the travel limit; every field is clamped to
    /// what its digit count can show. Returns the value actually stored.
    pub fn commit(&mut self, field: Field, value: u32, config: &SliderConfig) -> u32 {
        let value = value.min(max_for_digits(field.digits(config)));
        match field {
            Field::Distance => self.set_distance(value, config.max_travel_mm),
            Field::Duration => {
                self.duration_s = value;
                value
            }
            Field::Steps => {
                self.steps = value;
                value
            }
        }
    }

    /// Set the distance, clamping to `max_travel_mm`
    pub fn set_distance(&mut self, distance_mm: u32, max_travel_mm: u32) -> u32 {
        self.distance_mm = distance_mm.min(max_travel_mm);
        self.distance_mm
    }

    /// True when the run pauses for camera triggers
    pub fn is_time_lapse(&self) -> bool {
        self.steps > 0
    }
}
