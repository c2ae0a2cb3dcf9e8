use nalgebra::{Rotation3, SVector, Vector3};
use serde::{Deserialize, Serialize};

use crate::resources::transformations::{EulerAngles, FrameTransform};

/// The 12-element rigid-body state.
///
/// No consistency is enforced between the groups and Euler angles are left
/// unwrapped. The integrator produces a new value every step instead of
/// mutating the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StateVector {
    /// North, East, Down (m). Down is negative above the datum.
    pub position: Vector3<f64>,
    /// Body-frame velocity u, v, w (m/s)
    pub velocity: Vector3<f64>,
    /// Roll, pitch, yaw (rad)
    pub attitude: EulerAngles,
    /// Body angular rates p, q, r (rad/s)
    pub angular_rate: Vector3<f64>,
}

/// Rates of change of every [`StateVector`] component, in the same layout.
pub type StateDerivative = StateVector;

impl StateVector {
    pub const DIMENSION: usize = 12;

    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: EulerAngles,
        angular_rate: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_rate,
        }
    }

    /// Wings level, heading North at `altitude` (m) with forward speed `airspeed` (m/s).
    pub fn level_flight(altitude: f64, airspeed: f64) -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, -altitude),
            velocity: Vector3::new(airspeed, 0.0, 0.0),
            ..Default::default()
        }
    }

    /// Height above the datum (m)
    pub fn altitude(&self) -> f64 {
        -self.position.z
    }

    /// Rotation from the body frame into NED for the current attitude
    pub fn body_to_ned(&self) -> Rotation3<f64> {
        self.attitude.body_to_ned()
    }

    /// Body velocity resolved into NED (m/s)
    pub fn ned_velocity(&self) -> Vector3<f64> {
        self.body_to_ned().transform_from_body(&self.velocity)
    }

    /// `self + rate · dt`, component-wise.
    pub fn advanced_by(&self, rate: &StateDerivative, dt: f64) -> Self {
        Self {
            position: self.position + rate.position * dt,
            velocity: self.velocity + rate.velocity * dt,
            attitude: EulerAngles::from_vector(
                &(self.attitude.as_vector() + rate.attitude.as_vector() * dt),
            ),
            angular_rate: self.angular_rate + rate.angular_rate * dt,
        }
    }

    /// Flattened as `[N, E, D, u, v, w, φ, θ, ψ, p, q, r]`
    pub fn to_vector(&self) -> SVector<f64, 12> {
        let mut v = SVector::<f64, 12>::zeros();
        v.fixed_rows_mut::<3>(0).copy_from(&self.position);
        v.fixed_rows_mut::<3>(3).copy_from(&self.velocity);
        v.fixed_rows_mut::<3>(6).copy_from(&self.attitude.as_vector());
        v.fixed_rows_mut::<3>(9).copy_from(&self.angular_rate);
        v
    }

    pub fn from_vector(v: &SVector<f64, 12>) -> Self {
        Self {
            position: v.fixed_rows::<3>(0).into_owned(),
            velocity: v.fixed_rows::<3>(3).into_owned(),
            attitude: EulerAngles::from_vector(&v.fixed_rows::<3>(6).into_owned()),
            angular_rate: v.fixed_rows::<3>(9).into_owned(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.to_vector().iter().all(|x| x.is_finite())
    }
}
