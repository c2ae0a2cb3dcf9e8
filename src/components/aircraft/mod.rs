pub mod config;
mod properties;

pub use config::{AircraftConfig, AircraftGeometry, MassModel};
pub use properties::AircraftProperties;
