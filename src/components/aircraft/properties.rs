use serde::{Deserialize, Serialize};

use super::config::{AircraftGeometry, MassModel};

/// Static mass, inertia and reference geometry of one airframe.
///
/// Constructed once per run and shared read-only by every derivative
/// evaluation. Every [`MassModel`] has a positive mass, whether it was built
/// with [`MassModel::new`] or deserialised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProperties {
    name: String,
    mass: MassModel,
    geometry: AircraftGeometry,
}

impl AircraftProperties {
    pub fn new(name: impl Into<String>, mass: MassModel, geometry: AircraftGeometry) -> Self {
        Self {
            name: name.into(),
            mass,
            geometry,
        }
    }

    pub fn light_fixed_wing() -> Self {
        Self::new(
            "LightFixedWing",
            MassModel::light_fixed_wing(),
            AircraftGeometry::light_fixed_wing(),
        )
    }

    pub fn light_aircraft() -> Self {
        Self::new(
            "LightAircraft",
            MassModel::light_aircraft(),
            AircraftGeometry::light_aircraft(),
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass_model(&self) -> &MassModel {
        &self.mass
    }

    pub fn geometry(&self) -> &AircraftGeometry {
        &self.geometry
    }

    /// Total mass (kg)
    pub fn mass(&self) -> f64 {
        self.mass.mass()
    }

    pub fn jxx(&self) -> f64 {
        self.mass.ixx()
    }

    pub fn jyy(&self) -> f64 {
        self.mass.iyy()
    }

    pub fn jzz(&self) -> f64 {
        self.mass.izz()
    }

    pub fn jxz(&self) -> f64 {
        self.mass.ixz()
    }

    pub fn wing_span(&self) -> f64 {
        self.geometry.wing_span()
    }

    pub fn wing_area(&self) -> f64 {
        self.geometry.wing_area()
    }
}
