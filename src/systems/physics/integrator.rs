use std::iter::FusedIterator;
use tracing::trace;

use super::traits::EquationsOfMotion;
use crate::components::StateVector;
use crate::utils::{Result, SimError};

/// Absorbs rounding in `(end - start) / dt` so exact multiples do not gain a sample.
const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Fixed-step explicit (forward) Euler integrator.
///
/// `x(t + dt) = x(t) + f(x(t), t) · dt` over all twelve state components.
/// No error estimate is made and the step is never adapted.
#[derive(Debug, Clone)]
pub struct EulerIntegrator<M> {
    model: M,
}

impl<M: EquationsOfMotion> EulerIntegrator<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Advance `state` by one step of `dt` seconds starting at `time`.
    ///
    /// A zero step returns the input unchanged without evaluating the model.
    pub fn integrate(&self, state: &StateVector, time: f64, dt: f64) -> StateVector {
        if dt == 0.0 {
            return *state;
        }

        let rate = self.model.derivative(state, time);
        let next = state.advanced_by(&rate, dt);
        trace!(time, dt, altitude = next.altitude(), "integrated step");
        next
    }

    /// The sequence of `(time, state)` samples from `start` to `end`.
    ///
    /// Nothing is computed until the returned trajectory is iterated, and every
    /// iteration starts again from `initial`.
    ///
    /// # Errors
    /// [`SimError::InvalidTimeStep`] if `dt` is not positive, `end` precedes
    /// `start`, any argument is not finite, or the sample count does not fit
    /// in a `usize`.
    pub fn integrate_over_time(
        &self,
        initial: StateVector,
        start: f64,
        end: f64,
        dt: f64,
    ) -> Result<Trajectory<'_, M>> {
        if !(dt > 0.0) || !dt.is_finite() {
            return Err(SimError::InvalidTimeStep(format!(
                "step must be positive and finite, got {}",
                dt
            )));
        }
        if !start.is_finite() || !end.is_finite() || end < start {
            return Err(SimError::InvalidTimeStep(format!(
                "cannot integrate from {} to {}",
                start, end
            )));
        }

        let too_many = || {
            SimError::InvalidTimeStep(format!(
                "too many steps of {} between {} and {}",
                dt, start, end
            ))
        };

        let steps = ((end - start) / dt - STEP_COUNT_TOLERANCE).ceil().max(0.0);
        if !steps.is_finite() || steps >= usize::MAX as f64 {
            return Err(too_many());
        }
        let len = (steps as usize).checked_add(1).ok_or_else(too_many)?;

        Ok(Trajectory {
            integrator: self,
            initial,
            start,
            end,
            dt,
            len,
        })
    }
}

/// A lazily evaluated, restartable integration run.
#[derive(Debug)]
pub struct Trajectory<'a, M> {
    integrator: &'a EulerIntegrator<M>,
    initial: StateVector,
    start: f64,
    end: f64,
    dt: f64,
    len: usize,
}

impl<M> Clone for Trajectory<'_, M> {
    fn clone(&self) -> Self {
        Self {
            integrator: self.integrator,
            initial: self.initial,
            start: self.start,
            end: self.end,
            dt: self.dt,
            len: self.len,
        }
    }
}

impl<'a, M: EquationsOfMotion> Trajectory<'a, M> {
    /// Number of samples, the initial state included
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    /// Time of sample `index`; the last sample lands exactly on `end`.
    pub fn time_at(&self, index: usize) -> f64 {
        if index + 1 >= self.len {
            self.end
        } else {
            self.start + index as f64 * self.dt
        }
    }

    pub fn iter(&self) -> TrajectoryIter<'a, M> {
        TrajectoryIter {
            trajectory: self.clone(),
            index: 0,
            state: self.initial,
        }
    }

    /// The last sample, computed by running the whole trajectory.
    pub fn final_sample(&self) -> (f64, StateVector) {
        self.iter().last().unwrap_or((self.start, self.initial))
    }
}

impl<'a, M: EquationsOfMotion> IntoIterator for &Trajectory<'a, M> {
    type Item = (f64, StateVector);
    type IntoIter = TrajectoryIter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, M: EquationsOfMotion> IntoIterator for Trajectory<'a, M> {
    type Item = (f64, StateVector);
    type IntoIter = TrajectoryIter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Debug)]
pub struct TrajectoryIter<'a, M> {
    trajectory: Trajectory<'a, M>,
    index: usize,
    state: StateVector,
}

impl<M> Clone for TrajectoryIter<'_, M> {
    fn clone(&self) -> Self {
        Self {
            trajectory: self.trajectory.clone(),
            index: self.index,
            state: self.state,
        }
    }
}

impl<M: EquationsOfMotion> Iterator for TrajectoryIter<'_, M> {
    type Item = (f64, StateVector);

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.trajectory.len {
            return None;
        }

        let time = self.trajectory.time_at(self.index);
        if self.index > 0 {
            let previous = self.trajectory.time_at(self.index - 1);
            self.state = self
                .trajectory
                .integrator
                .integrate(&self.state, previous, time - previous);
        }

        self.index += 1;
        Some((time, self.state))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.trajectory.len - self.index;
        (remaining, Some(remaining))
    }
}

impl<M: EquationsOfMotion> ExactSizeIterator for TrajectoryIter<'_, M> {}

impl<M: EquationsOfMotion> FusedIterator for TrajectoryIter<'_, M> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::StateDerivative;
    use crate::resources::transformations::EulerAngles;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::cell::Cell;

    /// Constant unit rate on every component, counting evaluations.
    struct UnitRate {
        calls: Cell<usize>,
    }

    impl UnitRate {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl EquationsOfMotion for UnitRate {
        fn derivative(&self, _state: &StateVector, _time: f64) -> StateDerivative {
            self.calls.set(self.calls.get() + 1);
            StateDerivative::new(
                Vector3::repeat(1.0),
                Vector3::repeat(1.0),
                EulerAngles::new(1.0, 1.0, 1.0),
                Vector3::repeat(1.0),
            )
        }
    }

    #[test]
    fn test_zero_step_returns_input() {
        let integrator = EulerIntegrator::new(UnitRate::new());
        let state = StateVector::level_flight(1000.0, 50.0);

        assert_eq!(integrator.integrate(&state, 3.0, 0.0), state);
        assert_eq!(integrator.model().calls.get(), 0);
    }

    #[test]
    fn test_single_step_is_forward_euler() {
        let integrator = EulerIntegrator::new(UnitRate::new());
        let state = StateVector::default();
        let next = integrator.integrate(&state, 0.0, 0.5);

        for x in next.to_vector().iter() {
            assert_eq!(*x, 0.5);
        }
        assert_eq!(state, StateVector::default());
    }

    #[test]
    fn test_trajectory_length_and_times() {
        let integrator = EulerIntegrator::new(UnitRate::new());
        let trajectory = integrator
            .integrate_over_time(StateVector::default(), 0.0, 1.0, 0.1)
            .unwrap();

        assert_eq!(trajectory.len(), 11);
        let times: Vec<f64> = trajectory.iter().map(|(t, _)| t).collect();
        assert_eq!(times.len(), 11);
        assert_eq!(times[0], 0.0);
        assert_eq!(times[10], 1.0);
        assert_relative_eq!(times[3], 0.3, epsilon = 1e-12);
    }

    #[test]
    fn test_partial_final_step_is_pinned_to_end() {
        let integrator = EulerIntegrator::new(UnitRate::new());
        let trajectory = integrator
            .integrate_over_time(StateVector::default(), 0.0, 1.0, 0.3)
            .unwrap();

        assert_eq!(trajectory.len(), 5);
        let (time, state) = trajectory.final_sample();
        assert_eq!(time, 1.0);
        assert_relative_eq!(state.position.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_trajectory_is_restartable() {
        let integrator = EulerIntegrator::new(UnitRate::new());
        let trajectory = integrator
            .integrate_over_time(StateVector::default(), 2.0, 4.0, 0.5)
            .unwrap();

        let first: Vec<_> = trajectory.iter().collect();
        let second: Vec<_> = trajectory.iter().collect();
        assert_eq!(first, second);
        assert_eq!(first[0], (2.0, StateVector::default()));
        assert_eq!(first.last().map(|(t, _)| *t), Some(4.0));

        let mut iter = trajectory.iter();
        assert_eq!(iter.len(), 5);
        iter.next();
        assert_eq!(iter.len(), 4);
    }

    #[test]
    fn test_empty_interval_yields_initial_state() {
        let integrator = EulerIntegrator::new(UnitRate::new());
        let state = StateVector::level_flight(500.0, 20.0);
        let samples: Vec<_> = integrator
            .integrate_over_time(state, 1.0, 1.0, 0.1)
            .unwrap()
            .into_iter()
            .collect();

        assert_eq!(samples, vec![(1.0, state)]);
        assert_eq!(integrator.model().calls.get(), 0);
    }

    #[test]
    fn test_rejects_invalid_steps() {
        let integrator = EulerIntegrator::new(UnitRate::new());
        let state = StateVector::default();

        for (start, end, dt) in [
            (0.0, 1.0, 0.0),
            (0.0, 1.0, -0.1),
            (1.0, 0.0, 0.1),
            (0.0, f64::NAN, 0.1),
        ] {
            assert!(matches!(
                integrator.integrate_over_time(state, start, end, dt),
                Err(SimError::InvalidTimeStep(_))
            ));
        }
    }

    #[test]
    fn test_rejects_unrepresentable_step_counts() {
        let integrator = EulerIntegrator::new(UnitRate::new());
        let state = StateVector::default();

        for (start, end, dt) in [
            (0.0, 1e300, 1e-10),
            (0.0, 1.0, f64::MIN_POSITIVE),
            (-1e308, 1e308, 1.0),
        ] {
            assert!(matches!(
                integrator.integrate_over_time(state, start, end, dt),
                Err(SimError::InvalidTimeStep(_))
            ));
        }
        assert_eq!(integrator.model().calls.get(), 0);
    }
}
