use crate::components::{StateDerivative, StateVector};

/// A model that can evaluate the rate of change of the rigid-body state.
///
/// Implementations must be pure: the same state and time give the same
/// derivative, and nothing is mutated.
pub trait EquationsOfMotion {
    fn derivative(&self, state: &StateVector, time: f64) -> StateDerivative;
}

impl<M: EquationsOfMotion + ?Sized> EquationsOfMotion for &M {
    fn derivative(&self, state: &StateVector, time: f64) -> StateDerivative {
        (**self).derivative(state, time)
    }
}
