pub mod physics;

pub use physics::{
    AttitudeKinematics, DynamicsModel, EquationsOfMotion, EulerIntegrator, ExternalLoads,
    Trajectory, TrajectoryIter,
};
