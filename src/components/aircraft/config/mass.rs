use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::utils::{Result, SimError};

/// Validated mass and inertia of a rigid airframe.
///
/// Deserialisation goes through [`MassModel::new`], so a zero mass cannot be
/// loaded from a file either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MassProperties", into = "MassProperties")]
pub struct MassModel {
    /// Total mass of the aircraft (Kg).
    mass: f64,
    /// The inertia matrix (3x3) representing the moments and products of inertia.
    inertia: Matrix3<f64>,
}

/// Serialised form of [`MassModel`]
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MassProperties {
    mass: f64,
    ixx: f64,
    iyy: f64,
    izz: f64,
    #[serde(default)]
    ixz: f64,
}

impl TryFrom<MassProperties> for MassModel {
    type Error = SimError;

    fn try_from(raw: MassProperties) -> Result<Self> {
        MassModel::new(raw.mass, raw.ixx, raw.iyy, raw.izz, raw.ixz)
    }
}

impl From<MassModel> for MassProperties {
    fn from(model: MassModel) -> Self {
        MassProperties {
            mass: model.mass(),
            ixx: model.ixx(),
            iyy: model.iyy(),
            izz: model.izz(),
            ixz: model.ixz(),
        }
    }
}

impl MassModel {
    /// Creates a new `MassModel` instance with specified mass and inertia components.
    ///
    /// # Arguments
    /// * `mass` - Total mass of the aircraft (kg), must be positive.
    /// * `ixx` - Moment of inertia about the x-axis (kg·m²).
    /// * `iyy` - Moment of inertia about the y-axis (kg·m²).
    /// * `izz` - Moment of inertia about the z-axis (kg·m²).
    /// * `ixz` - Product of inertia between the x and z axes (kg·m²).
    ///
    /// # Errors
    /// [`SimError::InvalidAircraft`] when the mass is not positive, a moment of
    /// inertia is negative, or any value is not finite.
    pub fn new(mass: f64, ixx: f64, iyy: f64, izz: f64, ixz: f64) -> Result<Self> {
        if !(mass > 0.0) || !mass.is_finite() {
            return Err(SimError::InvalidAircraft(format!(
                "mass must be positive and finite, got {} kg",
                mass
            )));
        }
        for (name, value) in [("ixx", ixx), ("iyy", iyy), ("izz", izz)] {
            if !(value >= 0.0) || !value.is_finite() {
                return Err(SimError::InvalidAircraft(format!(
                    "{} must be non-negative and finite, got {}",
                    name, value
                )));
            }
        }
        if !ixz.is_finite() {
            return Err(SimError::InvalidAircraft(format!(
                "ixz must be finite, got {}",
                ixz
            )));
        }

        Ok(Self::from_inertia(mass, ixx, iyy, izz, ixz))
    }

    fn from_inertia(mass: f64, ixx: f64, iyy: f64, izz: f64, ixz: f64) -> Self {
        let inertia = Matrix3::from_columns(&[
            Vector3::new(ixx, 0.0, -ixz),
            Vector3::new(0.0, iyy, 0.0),
            Vector3::new(-ixz, 0.0, izz),
        ]);
        Self { mass, inertia }
    }

    /// F-16 class fighter
    pub fn light_fixed_wing() -> Self {
        Self::from_inertia(9300.0, 12821.0, 75674.0, 85552.0, 1331.0)
    }

    /// Cessna 172 class single
    pub fn light_aircraft() -> Self {
        Self::from_inertia(1111.0, 1285.31, 1824.93, 2666.89, 0.0)
    }

    /// Total mass (kg), always positive
    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn inertia(&self) -> &Matrix3<f64> {
        &self.inertia
    }

    pub fn ixx(&self) -> f64 {
        self.inertia[(0, 0)]
    }

    pub fn iyy(&self) -> f64 {
        self.inertia[(1, 1)]
    }

    pub fn izz(&self) -> f64 {
        self.inertia[(2, 2)]
    }

    pub fn ixz(&self) -> f64 {
        -self.inertia[(0, 2)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inertia_layout() {
        let mass = MassModel::light_fixed_wing();
        assert_eq!(mass.mass(), 9300.0);
        assert_eq!(mass.ixx(), 12821.0);
        assert_eq!(mass.iyy(), 75674.0);
        assert_eq!(mass.izz(), 85552.0);
        assert_eq!(mass.ixz(), 1331.0);
        assert_eq!(mass.inertia()[(2, 0)], -1331.0);
        assert_eq!(mass.inertia(), &mass.inertia().transpose());
    }

    #[test]
    fn test_rejects_non_positive_mass() {
        for mass in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                MassModel::new(mass, 1.0, 1.0, 1.0, 0.0),
                Err(SimError::InvalidAircraft(_))
            ));
        }
    }

    #[test]
    fn test_rejects_negative_inertia() {
        assert!(MassModel::new(100.0, -1.0, 1.0, 1.0, 0.0).is_err());
        assert!(MassModel::new(100.0, 1.0, 1.0, 1.0, f64::NAN).is_err());
        assert!(MassModel::new(100.0, 1.0, 2.0, 3.0, 0.5).is_ok());
    }

    #[test]
    fn test_deserialize_validates_mass() {
        let zero = "mass: 0.0\nixx: 1.0\niyy: 1.0\nizz: 1.0\n";
        let err = serde_yaml::from_str::<MassModel>(zero).unwrap_err();
        assert!(err.to_string().contains("mass must be positive"));

        let negative = "mass: 10.0\nixx: -1.0\niyy: 1.0\nizz: 1.0\n";
        assert!(serde_yaml::from_str::<MassModel>(negative).is_err());
    }

    #[test]
    fn test_serialized_form_uses_inertia_components() {
        let model = MassModel::light_aircraft();
        let yaml = serde_yaml::to_string(&model).unwrap();
        assert!(yaml.contains("ixx: 1285.31"));

        let loaded: MassModel = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(loaded, model);
    }
}
