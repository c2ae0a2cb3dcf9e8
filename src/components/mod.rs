pub mod aircraft;
pub mod state;

pub use aircraft::{AircraftConfig, AircraftGeometry, AircraftProperties, MassModel};
pub use state::{StateDerivative, StateVector};
