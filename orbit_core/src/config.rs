//! Engine constants chosen once at construction

use crate::error::{ensure_positive, Result, SimError};

/// Gravitational constant of the sandbox (scaled units)
pub const DEFAULT_G: f64 = 1.0;

/// One display refresh at 60 Hz
pub const DEFAULT_TIME_STEP: f64 = 1.0 / 60.0;

/// Positions kept per trail
pub const DEFAULT_TRAIL_CAPACITY: usize = 1000;

/// Fixed parameters of a [`SimulationEngine`](crate::SimulationEngine)
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Simulated time advanced by one `step()`
    pub time_step: f64,
    pub gravitational_constant: f64,
    /// Capacity of the trail created with each body
    pub trail_capacity: usize,
    /// When false, `step()` leaves trails untouched
    pub record_trails: bool,
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self {
            time_step: DEFAULT_TIME_STEP,
            gravitational_constant: DEFAULT_G,
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            record_trails: true,
        }
    }

    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    pub fn with_gravitational_constant(mut self, g: f64) -> Self {
        self.gravitational_constant = g;
        self
    }

    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail_capacity = capacity;
        self
    }

    pub fn with_record_trails(mut self, record: bool) -> Self {
        self.record_trails = record;
        self
    }

    /// Rejects non-positive or non-finite constants
    pub fn validate(&self) -> Result<()> {
        ensure_positive("time step", self.time_step)?;
        ensure_positive("gravitational constant", self.gravitational_constant)?;
        if self.trail_capacity == 0 {
            return Err(SimError::InvalidParameter {
                parameter: "trail capacity",
                value: 0.0,
            });
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
