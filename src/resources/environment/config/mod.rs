mod atmosphere;
mod wind;

pub use atmosphere::{AtmosphereConfig, AtmosphereType};
pub use wind::{WindConfig, WindSampleConfig};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::{Environment, GravityModel};
use crate::resources::config::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub gravity: GravityModel,
    #[serde(default)]
    pub atmosphere: AtmosphereConfig,
    #[serde(default)]
    pub wind: WindConfig,
}

impl EnvironmentConfig {
    pub fn new(gravity: GravityModel, atmosphere: AtmosphereConfig, wind: WindConfig) -> Self {
        Self {
            gravity,
            atmosphere,
            wind,
        }
    }

    pub fn with_wind_samples(mut self, samples: Vec<WindSampleConfig>) -> Self {
        self.wind = WindConfig { samples };
        self
    }

    pub fn build(&self) -> Result<Environment, ConfigError> {
        let gravity = self.gravity;
        let atmosphere = self.atmosphere.build(gravity);
        let wind = self.wind.build()?;

        info!(
            wind_samples = wind.len(),
            atmosphere = ?self.atmosphere.model_type,
            "environment built"
        );

        Ok(Environment::new(gravity, atmosphere, wind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_builds_standard_environment() {
        let env = EnvironmentConfig::default().build().unwrap();
        assert_eq!(env, Environment::standard());
    }

    #[test]
    fn test_wind_samples_are_converted_to_si() {
        let config = EnvironmentConfig::default().with_wind_samples(vec![WindSampleConfig {
            altitude_ft: 1000.0,
            speed_kt: 10.0,
            direction_deg: 260.0,
        }]);
        let env = config.build().unwrap();

        let (altitude, wind) = env.wind_field().samples()[0];
        assert_relative_eq!(altitude, 304.8, epsilon = 1e-9);
        assert_relative_eq!(wind.speed, 5.14444, epsilon = 1e-5);
        assert_relative_eq!(wind.direction_degrees(), 260.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_wind_speed_is_rejected() {
        let config = EnvironmentConfig::default().with_wind_samples(vec![WindSampleConfig {
            altitude_ft: 1000.0,
            speed_kt: -1.0,
            direction_deg: 0.0,
        }]);
        assert!(matches!(
            config.build(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn test_constant_atmosphere_and_inverse_square_gravity() {
        let config = EnvironmentConfig::new(
            GravityModel::inverse_square(),
            AtmosphereConfig {
                model_type: AtmosphereType::Constant,
                ..Default::default()
            },
            WindConfig::default(),
        );
        let env = config.build().unwrap();

        assert!(env.gravity_at_altitude(10_000.0) < 9.80665);
        let high = env.atmosphere_at_altitude(30_000.0).unwrap();
        assert_eq!(high.density, 1.225);
    }
}
