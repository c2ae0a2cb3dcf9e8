mod geometry;
mod mass;

pub use geometry::AircraftGeometry;
pub use mass::MassModel;

use serde::{Deserialize, Serialize};

use super::AircraftProperties;
use crate::utils::Result;

/// Aircraft selection in a scenario file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AircraftConfig {
    #[default]
    LightFixedWing,
    LightAircraft,
    Custom {
        name: String,
        mass: f64,
        ixx: f64,
        iyy: f64,
        izz: f64,
        #[serde(default)]
        ixz: f64,
        wing_area: f64,
        wing_span: f64,
        #[serde(default)]
        mac: f64,
    },
}

impl AircraftConfig {
    pub fn build(&self) -> Result<AircraftProperties> {
        match self {
            Self::LightFixedWing => Ok(AircraftProperties::light_fixed_wing()),
            Self::LightAircraft => Ok(AircraftProperties::light_aircraft()),
            Self::Custom {
                name,
                mass,
                ixx,
                iyy,
                izz,
                ixz,
                wing_area,
                wing_span,
                mac,
            } => Ok(AircraftProperties::new(
                name.clone(),
                MassModel::new(*mass, *ixx, *iyy, *izz, *ixz)?,
                AircraftGeometry::new(*wing_area, *wing_span, *mac)?,
            )),
        }
    }
}
