use serde::{Deserialize, Serialize};

use crate::utils::{EARTH_MEAN_RADIUS, GRAVITY};

fn default_gravity() -> f64 {
    GRAVITY
}

fn default_earth_radius() -> f64 {
    EARTH_MEAN_RADIUS
}

/// Gravitational acceleration models.
///
/// Every variant returns a magnitude in m/s² acting along NED Down. Omitted
/// fields take standard values when loaded from a file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GravityModel {
    /// Same acceleration at every altitude
    Constant {
        #[serde(default = "default_gravity")]
        acceleration: f64,
    },
    /// Newtonian fall-off with distance from the Earth's centre:
    /// `g0 · (Re / (Re + h))²`
    InverseSquare {
        #[serde(default = "default_gravity")]
        sea_level_acceleration: f64,
        #[serde(default = "default_earth_radius")]
        earth_radius: f64,
    },
}

impl Default for GravityModel {
    fn default() -> Self {
        Self::standard()
    }
}

impl GravityModel {
    /// Constant standard gravity (9.80665 m/s²)
    pub fn standard() -> Self {
        Self::Constant {
            acceleration: GRAVITY,
        }
    }

    pub fn inverse_square() -> Self {
        Self::InverseSquare {
            sea_level_acceleration: GRAVITY,
            earth_radius: EARTH_MEAN_RADIUS,
        }
    }

    /// Gravitational acceleration magnitude at a geometric altitude (m).
    pub fn gravity_at_altitude(&self, altitude: f64) -> f64 {
        match *self {
            Self::Constant { acceleration } => acceleration,
            Self::InverseSquare {
                sea_level_acceleration,
                earth_radius,
            } => {
                let ratio = earth_radius / (earth_radius + altitude);
                sea_level_acceleration * ratio * ratio
            }
        }
    }

    pub fn gravity_at_sea_level(&self) -> f64 {
        self.gravity_at_altitude(0.0)
    }
}
