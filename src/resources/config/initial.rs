use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::StateVector;
use crate::resources::transformations::EulerAngles;

/// Initial condition as written in a scenario file.
///
/// Everything is SI except the attitude, which is given in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialStateConfig {
    /// North, East, Down (m)
    pub position: Vector3<f64>,
    /// Body-frame u, v, w (m/s)
    pub velocity: Vector3<f64>,
    /// Roll, pitch, yaw (deg)
    pub attitude_deg: Vector3<f64>,
    /// Body rates p, q, r (rad/s)
    pub angular_rate: Vector3<f64>,
}

impl Default for InitialStateConfig {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, -1000.0),
            velocity: Vector3::new(50.0, 0.0, 0.0),
            attitude_deg: Vector3::zeros(),
            angular_rate: Vector3::zeros(),
        }
    }
}

impl InitialStateConfig {
    pub fn to_state(&self) -> StateVector {
        StateVector {
            position: self.position,
            velocity: self.velocity,
            attitude: EulerAngles::from_degrees(
                self.attitude_deg.x,
                self.attitude_deg.y,
                self.attitude_deg.z,
            ),
            angular_rate: self.angular_rate,
        }
    }
}

impl From<&StateVector> for InitialStateConfig {
    fn from(state: &StateVector) -> Self {
        let [roll, pitch, yaw] = state.attitude.to_degrees();
        Self {
            position: state.position,
            velocity: state.velocity,
            attitude_deg: Vector3::new(roll, pitch, yaw),
            angular_rate: state.angular_rate,
        }
    }
}
