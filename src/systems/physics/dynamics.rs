use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::traits::EquationsOfMotion;
use crate::components::{AircraftProperties, StateDerivative, StateVector};
use crate::resources::environment::Environment;
use crate::resources::transformations::{EulerAngles, FrameTransform};

/// How Euler-angle rates are derived from body angular rates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttitudeKinematics {
    /// `φ̇ = p, θ̇ = q, ψ̇ = r`. Only exact with zero roll and pitch.
    #[default]
    BodyRates,
    /// Full transformation `[φ̇, θ̇, ψ̇]ᵗ = T(φ, θ)·[p, q, r]ᵗ`.
    /// Singular at θ = ±90°.
    EulerKinematic,
}

impl AttitudeKinematics {
    pub fn euler_rates(&self, attitude: &EulerAngles, body_rates: &Vector3<f64>) -> Vector3<f64> {
        match self {
            Self::BodyRates => *body_rates,
            Self::EulerKinematic => {
                let (p, q, r) = (body_rates.x, body_rates.y, body_rates.z);
                let (sin_phi, cos_phi) = attitude.roll.sin_cos();
                let cos_theta = attitude.pitch.cos();
                let tan_theta = attitude.pitch.tan();

                let coupled = q * sin_phi + r * cos_phi;
                Vector3::new(
                    p + coupled * tan_theta,
                    q * cos_phi - r * sin_phi,
                    coupled / cos_theta,
                )
            }
        }
    }
}

/// Body-frame force and moment acting on the airframe.
///
/// Aerodynamic and propulsive contributions are not modelled, so the
/// dynamics always sees zero loads.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExternalLoads {
    /// Force (N)
    pub force: Vector3<f64>,
    /// Moment about the centre of gravity (N·m)
    pub moment: Vector3<f64>,
}

impl ExternalLoads {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Rigid-body equations of motion for one aircraft in one environment.
#[derive(Debug, Clone)]
pub struct DynamicsModel {
    aircraft: Arc<AircraftProperties>,
    environment: Arc<Environment>,
    kinematics: AttitudeKinematics,
}

impl DynamicsModel {
    pub fn new(aircraft: Arc<AircraftProperties>, environment: Arc<Environment>) -> Self {
        Self {
            aircraft,
            environment,
            kinematics: AttitudeKinematics::default(),
        }
    }

    pub fn with_kinematics(mut self, kinematics: AttitudeKinematics) -> Self {
        self.kinematics = kinematics;
        self
    }

    pub fn aircraft(&self) -> &AircraftProperties {
        &self.aircraft
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn kinematics(&self) -> AttitudeKinematics {
        self.kinematics
    }

    /// Loads applied to the airframe in `state`.
    pub fn external_loads(&self, _state: &StateVector) -> ExternalLoads {
        ExternalLoads::zero()
    }

    /// Gravitational acceleration resolved into the body frame (m/s²).
    ///
    /// `[−g·sθ, g·sφ·cθ, g·cφ·cθ]`, independent of heading.
    pub fn body_gravity(&self, state: &StateVector) -> Vector3<f64> {
        let g = self.environment.gravity_at_altitude(state.altitude());
        state
            .body_to_ned()
            .transform_to_body(&Vector3::new(0.0, 0.0, g))
    }
}

impl EquationsOfMotion for DynamicsModel {
    fn derivative(&self, state: &StateVector, _time: f64) -> StateDerivative {
        let rotation = state.body_to_ned();
        let gravity = self.body_gravity(state);
        let loads = self.external_loads(state);

        let velocity = state.velocity;
        let omega = state.angular_rate;

        // u̇ = Fx/m + gx + r·v − q·w, and so on for v̇ and ẇ
        let acceleration = loads.force / self.aircraft.mass() + gravity - omega.cross(&velocity);

        // Moment equations are not modelled
        let angular_acceleration = Vector3::zeros();

        StateDerivative {
            position: rotation.transform_from_body(&velocity),
            velocity: acceleration,
            attitude: EulerAngles::from_vector(
                &self.kinematics.euler_rates(&state.attitude, &omega),
            ),
            angular_rate: angular_acceleration,
        }
    }
}
