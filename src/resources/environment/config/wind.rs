use serde::{Deserialize, Serialize};

use crate::resources::config::ConfigError;
use crate::resources::environment::{Wind, WindField};
use crate::utils::feet_to_meters;

/// One wind keyframe in the units forecasts are published in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindSampleConfig {
    pub altitude_ft: f64,
    pub speed_kt: f64,
    pub direction_deg: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WindConfig {
    #[serde(default)]
    pub samples: Vec<WindSampleConfig>,
}

impl WindConfig {
    pub fn build(&self) -> Result<WindField, ConfigError> {
        let mut field = WindField::new();

        for sample in &self.samples {
            if !sample.altitude_ft.is_finite() {
                return Err(ConfigError::ValidationError(format!(
                    "wind sample altitude must be finite, got {}",
                    sample.altitude_ft
                )));
            }
            if !(sample.speed_kt >= 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "wind speed must be non-negative, got {} kt at {} ft",
                    sample.speed_kt, sample.altitude_ft
                )));
            }

            field.add_sample(
                feet_to_meters(sample.altitude_ft),
                Wind::from_knots_degrees(sample.speed_kt, sample.direction_deg),
            );
        }

        Ok(field)
    }
}
