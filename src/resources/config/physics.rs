use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::systems::physics::AttitudeKinematics;

/// Integration and reporting cadence for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Fixed integration step (s)
    pub time_step: f64,
    /// Simulated time to run for (s)
    pub duration: f64,
    /// Time between reported samples (s)
    pub report_interval: f64,
    #[serde(default)]
    pub attitude_kinematics: AttitudeKinematics,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            time_step: 0.1,
            duration: 10.0,
            report_interval: 1.0,
            attitude_kinematics: AttitudeKinematics::default(),
        }
    }
}

impl PhysicsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.time_step > 0.0) || !self.time_step.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "time_step must be positive and finite, got {}",
                self.time_step
            )));
        }
        if !(self.duration >= 0.0) || !self.duration.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "duration must be non-negative and finite, got {}",
                self.duration
            )));
        }
        if !(self.report_interval > 0.0) || !self.report_interval.is_finite() {
            return Err(ConfigError::ValidationError(format!(
                "report_interval must be positive and finite, got {}",
                self.report_interval
            )));
        }
        Ok(())
    }
}
