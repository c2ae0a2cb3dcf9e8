mod atmosphere;
pub mod config;
mod environment;
mod gravity;
mod wind;

pub use atmosphere::{
    AtmosphereLayer, AtmosphereModel, AtmosphericConditions, STANDARD_ATMOSPHERE_1976,
};
pub use config::{
    AtmosphereConfig, AtmosphereType, EnvironmentConfig, WindConfig, WindSampleConfig,
};
pub use environment::{Environment, EnvironmentSample};
pub use gravity::GravityModel;
pub use wind::{Wind, WindField};
