use serde::{Deserialize, Serialize};
use tracing::debug;

use super::gravity::GravityModel;
use crate::utils::{
    kelvin_to_celsius, Result, SimError, ISA_SEA_LEVEL_DENSITY, ISA_SEA_LEVEL_PRESSURE,
    ISA_SEA_LEVEL_TEMP, SPECIFIC_GAS_CONSTANT_AIR,
};

/// One layer of the stratified reference atmosphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphereLayer {
    /// Base altitude of the layer (m)
    pub start: f64,
    /// Top of the layer (m), exclusive
    pub end: f64,
    /// Static pressure at `start` (Pa)
    pub base_pressure: f64,
    /// Static temperature at `start` (K)
    pub base_temperature: f64,
    /// Density at `start` (kg/m³)
    pub base_density: f64,
    /// Temperature gradient (K/m)
    pub lapse_rate: f64,
    pub isothermal: bool,
}

/// U.S. Standard Atmosphere 1976 layer table, contiguous from the ground up.
/// The top entry (layer 7) is isothermal to infinity.
pub const STANDARD_ATMOSPHERE_1976: [AtmosphereLayer; 8] = [
    // Troposphere
    AtmosphereLayer {
        start: 0.0,
        end: 11_000.0,
        base_pressure: ISA_SEA_LEVEL_PRESSURE,
        base_temperature: ISA_SEA_LEVEL_TEMP,
        base_density: ISA_SEA_LEVEL_DENSITY,
        lapse_rate: -0.0065,
        isothermal: false,
    },
    // Tropopause
    AtmosphereLayer {
        start: 11_000.0,
        end: 20_000.0,
        base_pressure: 22_632.1,
        base_temperature: 216.65,
        base_density: 0.363918,
        lapse_rate: 0.0,
        isothermal: true,
    },
    // Lower stratosphere
    AtmosphereLayer {
        start: 20_000.0,
        end: 32_000.0,
        base_pressure: 5_474.89,
        base_temperature: 216.65,
        base_density: 0.0880349,
        lapse_rate: 0.001,
        isothermal: false,
    },
    // Upper stratosphere
    AtmosphereLayer {
        start: 32_000.0,
        end: 47_000.0,
        base_pressure: 868.019,
        base_temperature: 228.65,
        base_density: 0.013225,
        lapse_rate: 0.0028,
        isothermal: false,
    },
    // Stratopause
    AtmosphereLayer {
        start: 47_000.0,
        end: 51_000.0,
        base_pressure: 110.906,
        base_temperature: 270.65,
        base_density: 0.00142753,
        lapse_rate: 0.0,
        isothermal: true,
    },
    // Lower mesosphere
    AtmosphereLayer {
        start: 51_000.0,
        end: 71_000.0,
        base_pressure: 66.9389,
        base_temperature: 270.65,
        base_density: 0.000861606,
        lapse_rate: -0.0028,
        isothermal: false,
    },
    // Upper mesosphere
    AtmosphereLayer {
        start: 71_000.0,
        end: 84_852.0,
        base_pressure: 3.95642,
        base_temperature: 214.65,
        base_density: 0.000064211,
        lapse_rate: -0.002,
        isothermal: false,
    },
    // Thermosphere and above
    AtmosphereLayer {
        start: 84_852.0,
        end: f64::INFINITY,
        base_pressure: 0.435981,
        base_temperature: 186.946,
        base_density: 0.00000805098,
        lapse_rate: 0.0,
        isothermal: true,
    },
];

/// Temperature, static pressure and density at one altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AtmosphericConditions {
    /// Static temperature (K)
    pub temperature: f64,
    /// Static pressure (Pa)
    pub pressure: f64,
    /// Air density (kg/m³)
    pub density: f64,
}

impl AtmosphericConditions {
    pub fn temperature_celsius(&self) -> f64 {
        kelvin_to_celsius(self.temperature)
    }
}

/// Atmosphere models available to an [`Environment`](super::Environment).
#[derive(Debug, Clone, PartialEq)]
pub enum AtmosphereModel {
    /// Piecewise-stratified reference atmosphere
    Standard1976 { gravity: GravityModel },
    /// The same conditions at every altitude
    Constant(AtmosphericConditions),
}

impl AtmosphereModel {
    pub fn standard(gravity: GravityModel) -> Self {
        Self::Standard1976 { gravity }
    }

    /// The same model with its hydrostatic gravity replaced. `Constant` has none.
    pub fn with_gravity(self, gravity: GravityModel) -> Self {
        match self {
            Self::Standard1976 { .. } => Self::Standard1976 { gravity },
            constant @ Self::Constant(_) => constant,
        }
    }

    pub fn temperature_at(&self, altitude: f64) -> Result<f64> {
        Ok(self.conditions_at(altitude)?.temperature)
    }

    pub fn pressure_at(&self, altitude: f64) -> Result<f64> {
        Ok(self.conditions_at(altitude)?.pressure)
    }

    pub fn density_at(&self, altitude: f64) -> Result<f64> {
        Ok(self.conditions_at(altitude)?.density)
    }

    /// Atmospheric state at a geometric altitude (m).
    ///
    /// Altitudes below the first layer are a domain error; they are never
    /// clamped.
    pub fn conditions_at(&self, altitude: f64) -> Result<AtmosphericConditions> {
        match self {
            Self::Constant(conditions) => Ok(*conditions),
            Self::Standard1976 { gravity } => {
                let layer = find_layer(&STANDARD_ATMOSPHERE_1976, altitude)?;
                let g = gravity.gravity_at_altitude(altitude);
                Ok(layer_conditions(layer, altitude, g))
            }
        }
    }
}

/// Binary search for the layer with `start <= altitude < end`.
fn find_layer(layers: &[AtmosphereLayer], altitude: f64) -> Result<&AtmosphereLayer> {
    if altitude.is_nan() {
        return Err(SimError::AltitudeOutOfRange { altitude });
    }

    let mut left = 0usize;
    let mut right = layers.len();

    while left < right {
        let mid = left + (right - left) / 2;
        let layer = &layers[mid];

        if altitude < layer.start {
            right = mid;
        } else if altitude >= layer.end {
            left = mid + 1;
        } else {
            return Ok(layer);
        }
    }

    debug!(altitude, "altitude outside atmosphere layers");
    Err(SimError::AltitudeOutOfRange { altitude })
}

fn layer_conditions(layer: &AtmosphereLayer, altitude: f64, g: f64) -> AtmosphericConditions {
    let r = SPECIFIC_GAS_CONSTANT_AIR;
    let delta_h = altitude - layer.start;

    if layer.isothermal {
        let temperature = layer.base_temperature;
        let decay = (-g * delta_h / (r * temperature)).exp();
        AtmosphericConditions {
            temperature,
            pressure: layer.base_pressure * decay,
            density: layer.base_density * decay,
        }
    } else {
        let temperature = layer.base_temperature + layer.lapse_rate * delta_h;
        let ratio = temperature / layer.base_temperature;
        let exponent = g / (r * layer.lapse_rate);
        AtmosphericConditions {
            temperature,
            pressure: layer.base_pressure * ratio.powf(-exponent),
            density: layer.base_density * ratio.powf(-(exponent + 1.0)),
        }
    }
}
