use serde::{Deserialize, Serialize};

use super::atmosphere::{AtmosphereModel, AtmosphericConditions};
use super::gravity::GravityModel;
use super::wind::{Wind, WindField};
use crate::utils::Result;

/// Everything the environment can say about one altitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSample {
    pub altitude: f64,
    pub gravity: f64,
    pub atmosphere: AtmosphericConditions,
    pub wind: Wind,
}

/// Gravity, atmosphere and wind composed into one read-only model.
///
/// Built once before a run and shared between every derivative evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    gravity: GravityModel,
    atmosphere: AtmosphereModel,
    wind: WindField,
}

impl Default for Environment {
    fn default() -> Self {
        Self::standard()
    }
}

impl Environment {
    /// The standard atmosphere integrates pressure with `gravity`, whatever
    /// gravity model `atmosphere` was created with.
    pub fn new(gravity: GravityModel, atmosphere: AtmosphereModel, wind: WindField) -> Self {
        Self {
            gravity,
            atmosphere: atmosphere.with_gravity(gravity),
            wind,
        }
    }

    /// Constant gravity, 1976 standard atmosphere and no wind.
    pub fn standard() -> Self {
        let gravity = GravityModel::standard();
        Self::new(gravity, AtmosphereModel::standard(gravity), WindField::new())
    }

    pub fn with_wind(mut self, wind: WindField) -> Self {
        self.wind = wind;
        self
    }

    pub fn gravity_model(&self) -> &GravityModel {
        &self.gravity
    }

    pub fn atmosphere_model(&self) -> &AtmosphereModel {
        &self.atmosphere
    }

    pub fn wind_field(&self) -> &WindField {
        &self.wind
    }

    pub fn gravity_at_altitude(&self, altitude: f64) -> f64 {
        self.gravity.gravity_at_altitude(altitude)
    }

    pub fn atmosphere_at_altitude(&self, altitude: f64) -> Result<AtmosphericConditions> {
        self.atmosphere.conditions_at(altitude)
    }

    pub fn wind_at_altitude(&self, altitude: f64) -> Wind {
        self.wind.wind_at_altitude(altitude)
    }

    pub fn conditions_at(&self, altitude: f64) -> Result<EnvironmentSample> {
        Ok(EnvironmentSample {
            altitude,
            gravity: self.gravity_at_altitude(altitude),
            atmosphere: self.atmosphere_at_altitude(altitude)?,
            wind: self.wind_at_altitude(altitude),
        })
    }
}
