use thiserror::Error;

use crate::resources::config::ConfigError;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("altitude {altitude} m is outside the standard atmosphere range")]
    AltitudeOutOfRange { altitude: f64 },

    #[error("Invalid aircraft: {0}")]
    InvalidAircraft(String),

    #[error("Invalid time step: {0}")]
    InvalidTimeStep(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, SimError>;
