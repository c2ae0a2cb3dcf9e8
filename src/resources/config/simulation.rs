use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use super::{ConfigError, InitialStateConfig, PhysicsConfig};
use crate::components::AircraftConfig;
use crate::resources::environment::EnvironmentConfig;

/// A complete scenario: who flies, where, starting how, for how long.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub aircraft: AircraftConfig,
    #[serde(default)]
    pub environment: EnvironmentConfig,
    #[serde(default)]
    pub initial_state: InitialStateConfig,
    #[serde(default)]
    pub physics: PhysicsConfig,
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        info!(path = %path.display(), "loaded simulation config");
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.physics.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::environment::WindSampleConfig;
    use crate::systems::physics::AttitudeKinematics;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.aircraft, AircraftConfig::LightFixedWing);
        assert_eq!(config.physics.time_step, 0.1);
        assert_eq!(config.physics.duration, 10.0);
        assert_eq!(config.physics.report_interval, 1.0);
        assert_eq!(config.initial_state.position.z, -1000.0);
        assert!(config.environment.wind.samples.is_empty());
    }

    #[test]
    fn test_config_save_load() -> Result<(), ConfigError> {
        let mut config = SimulationConfig::default();
        config.physics.attitude_kinematics = AttitudeKinematics::EulerKinematic;
        config.environment.wind.samples.push(WindSampleConfig {
            altitude_ft: 5000.0,
            speed_kt: 20.0,
            direction_deg: 270.0,
        });

        let temp_file = NamedTempFile::new()?;
        config.save(temp_file.path())?;

        let loaded = SimulationConfig::load(temp_file.path())?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_partial_yaml_uses_defaults() -> Result<(), ConfigError> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(
            temp_file,
            "physics:\n  time_step: 1.0\n  duration: 10.0\n  report_interval: 1.0\n"
        )?;

        let loaded = SimulationConfig::load(temp_file.path())?;
        assert_eq!(loaded.physics.time_step, 1.0);
        assert_eq!(loaded.physics.attitude_kinematics, AttitudeKinematics::BodyRates);
        assert_eq!(loaded.aircraft, AircraftConfig::LightFixedWing);
        Ok(())
    }

    #[test]
    fn test_invalid_physics_is_rejected_on_load() -> Result<(), ConfigError> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(
            temp_file,
            "physics:\n  time_step: -0.1\n  duration: 10.0\n  report_interval: 1.0\n"
        )?;

        assert!(matches!(
            SimulationConfig::load(temp_file.path()),
            Err(ConfigError::ValidationError(_))
        ));
        Ok(())
    }

    #[test]
    fn test_invalid_config_load() {
        let result = SimulationConfig::load("nonexistent_file.yaml");
        assert!(matches!(result, Err(ConfigError::FileError(_))));
    }
}
