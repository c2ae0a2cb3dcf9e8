use serde::{Deserialize, Serialize};

use crate::resources::environment::{AtmosphereModel, AtmosphericConditions, GravityModel};
use crate::utils::{ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_PRESSURE, ISA_SEA_LEVEL_TEMP};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtmosphereConfig {
    pub model_type: AtmosphereType,
    /// Only used by [`AtmosphereType::Constant`]
    pub sea_level_density: f64,
    pub sea_level_temperature: f64,
    pub sea_level_pressure: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AtmosphereType {
    Constant,
    Standard,
}

impl Default for AtmosphereConfig {
    fn default() -> Self {
        Self {
            model_type: AtmosphereType::Standard,
            sea_level_density: ISA_SEA_LEVEL_DENSITY,
            sea_level_temperature: ISA_SEA_LEVEL_TEMP,
            sea_level_pressure: ISA_SEA_LEVEL_PRESSURE,
        }
    }
}

impl AtmosphereConfig {
    pub fn build(&self, gravity: GravityModel) -> AtmosphereModel {
        match self.model_type {
            AtmosphereType::Standard => AtmosphereModel::standard(gravity),
            AtmosphereType::Constant => AtmosphereModel::Constant(AtmosphericConditions {
                temperature: self.sea_level_temperature,
                pressure: self.sea_level_pressure,
                density: self.sea_level_density,
            }),
        }
    }
}
