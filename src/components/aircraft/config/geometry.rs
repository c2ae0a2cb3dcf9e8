use serde::{Deserialize, Serialize};

use crate::utils::{Result, SimError};

/// Reference geometry of an aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "GeometryDimensions", into = "GeometryDimensions")]
pub struct AircraftGeometry {
    /// The total wing area of the aircraft (m²).
    wing_area: f64,
    /// The wingspan of the aircraft (m).
    wing_span: f64,
    /// The mean aerodynamic chord of the aircraft (m).
    mac: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct GeometryDimensions {
    wing_area: f64,
    wing_span: f64,
    #[serde(default)]
    mac: f64,
}

impl TryFrom<GeometryDimensions> for AircraftGeometry {
    type Error = SimError;

    fn try_from(raw: GeometryDimensions) -> Result<Self> {
        AircraftGeometry::new(raw.wing_area, raw.wing_span, raw.mac)
    }
}

impl From<AircraftGeometry> for GeometryDimensions {
    fn from(geometry: AircraftGeometry) -> Self {
        GeometryDimensions {
            wing_area: geometry.wing_area,
            wing_span: geometry.wing_span,
            mac: geometry.mac,
        }
    }
}

impl AircraftGeometry {
    pub fn new(wing_area: f64, wing_span: f64, mac: f64) -> Result<Self> {
        for (name, value) in [("wing_area", wing_area), ("wing_span", wing_span), ("mac", mac)] {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(SimError::InvalidAircraft(format!(
                    "{} must be non-negative and finite, got {}",
                    name, value
                )));
            }
        }
        Ok(AircraftGeometry {
            wing_area,
            wing_span,
            mac,
        })
    }

    pub fn light_fixed_wing() -> Self {
        AircraftGeometry {
            wing_area: 27.87,
            wing_span: 9.14,
            mac: 3.45,
        }
    }

    pub fn light_aircraft() -> Self {
        AircraftGeometry {
            wing_area: 16.2,
            wing_span: 11.0,
            mac: 1.6,
        }
    }

    pub fn wing_area(&self) -> f64 {
        self.wing_area
    }

    pub fn wing_span(&self) -> f64 {
        self.wing_span
    }

    pub fn mac(&self) -> f64 {
        self.mac
    }
}
