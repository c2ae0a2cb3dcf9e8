mod errors;
mod initial;
mod physics;
mod simulation;

pub use errors::ConfigError;
pub use initial::InitialStateConfig;
pub use physics::PhysicsConfig;
pub use simulation::SimulationConfig;
