//! Six degree-of-freedom flight dynamics for a fixed-wing aircraft.
//!
//! A [`Simulation`] advances a [`StateVector`] with forward Euler steps of the
//! rigid-body equations of motion, under gravity, a layered standard
//! atmosphere and an altitude-keyed wind field.

pub mod components;
pub mod resources;
pub mod simulation;
pub mod systems;
pub mod utils;

pub use components::{AircraftProperties, StateDerivative, StateVector};
pub use resources::{
    BodyNedDcm, Environment, EulerAngles, FrameTransform, GravityModel, SimulationConfig, Wind,
    WindField,
};
pub use simulation::{
    RecordingReporter, Simulation, SimulationBuilder, SimulationSummary, StateReporter,
    TracingReporter,
};
pub use systems::{AttitudeKinematics, DynamicsModel, EquationsOfMotion, EulerIntegrator};
pub use utils::{Result, SimError};
