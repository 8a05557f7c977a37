//! Simulation configuration.
//!
//! Parameters consumed by the step driver: step and sub-step counts,
//! sub-step duration, external force and damping. Values are checked
//! once by [`SimulationConfig::validate`] so solvers never see an
//! invalid `dt`.

use std::path::Path;

use pbd2d_math::Vec2;
use pbd2d_types::constants::{
    DEFAULT_DELTA_TIME, DEFAULT_EXTERNAL_FORCE, DEFAULT_STEPS_COUNT, DEFAULT_SUBSTEPS_COUNT,
};
use pbd2d_types::{Pbd2dError, Pbd2dResult};
use serde::{Deserialize, Serialize};

/// Configuration for the step driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of steps per `World::step` call.
    pub steps_count: u32,

    /// Number of sub-steps per step.
    pub substeps_count: u32,

    /// Duration of one sub-step (seconds).
    pub delta_time: f32,

    /// Acceleration applied to every movable point [fx, fy].
    pub global_external_force: [f32; 2],

    /// Velocity damping rate (1/s). Velocities are scaled by
    /// `1 − damping·dt` each sub-step.
    pub global_damping: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps_count: DEFAULT_STEPS_COUNT,
            substeps_count: DEFAULT_SUBSTEPS_COUNT,
            delta_time: DEFAULT_DELTA_TIME,
            global_external_force: DEFAULT_EXTERNAL_FORCE,
            global_damping: 0.0,
        }
    }
}

impl SimulationConfig {
    /// Creates a config for quick previews (one step, few sub-steps).
    pub fn preview() -> Self {
        Self {
            steps_count: 1,
            substeps_count: 4,
            delta_time: 0.004,
            ..Default::default()
        }
    }

    /// Creates a high-quality config (more sub-steps, shorter `dt`).
    pub fn high_quality() -> Self {
        Self {
            substeps_count: 32,
            delta_time: 0.00025,
            ..Default::default()
        }
    }

    /// External force as a vector.
    #[inline]
    pub fn external_force(&self) -> Vec2 {
        Vec2::from(self.global_external_force)
    }

    /// Simulated time covered by one `World::step` call.
    pub fn step_duration(&self) -> f32 {
        self.steps_count as f32 * self.substeps_count as f32 * self.delta_time
    }

    /// Rejects values the solvers cannot run with.
    pub fn validate(&self) -> Pbd2dResult<()> {
        if self.steps_count == 0 {
            return Err(Pbd2dError::InvalidConfig("steps_count must be at least 1".into()));
        }
        if self.substeps_count == 0 {
            return Err(Pbd2dError::InvalidConfig(
                "substeps_count must be at least 1".into(),
            ));
        }
        if !(self.delta_time > 0.0 && self.delta_time.is_finite()) {
            return Err(Pbd2dError::InvalidConfig(format!(
                "delta_time must be positive and finite, got {}",
                self.delta_time
            )));
        }
        if !self.external_force().is_finite() {
            return Err(Pbd2dError::InvalidConfig(
                "global_external_force must be finite".into(),
            ));
        }
        if !(self.global_damping >= 0.0 && self.global_damping.is_finite()) {
            return Err(Pbd2dError::InvalidConfig(format!(
                "global_damping must be non-negative, got {}",
                self.global_damping
            )));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json_str(json: &str) -> Pbd2dResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Pbd2dError::Serialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Pbd2dResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
