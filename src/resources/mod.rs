pub mod config;
pub mod environment;
pub mod transformations;

pub use config::{ConfigError, InitialStateConfig, PhysicsConfig, SimulationConfig};
pub use environment::{
    AtmosphereConfig, AtmosphereLayer, AtmosphereModel, AtmosphereType, AtmosphericConditions,
    Environment, EnvironmentConfig, EnvironmentSample, GravityModel, Wind, WindConfig, WindField,
    WindSampleConfig, STANDARD_ATMOSPHERE_1976,
};
pub use transformations::{BodyNedDcm, EulerAngles, Frame, FrameTransform};
