mod dynamics;
mod integrator;
mod traits;

pub use dynamics::{AttitudeKinematics, DynamicsModel, ExternalLoads};
pub use integrator::{EulerIntegrator, Trajectory, TrajectoryIter};
pub use traits::EquationsOfMotion;
