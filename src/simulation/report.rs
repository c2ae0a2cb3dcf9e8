use tracing::info;

use crate::components::StateVector;

/// Receives the state at every reporting boundary of a run.
pub trait StateReporter {
    fn report(&mut self, time: f64, state: &StateVector);
}

impl<F> StateReporter for F
where
    F: FnMut(f64, &StateVector),
{
    fn report(&mut self, time: f64, state: &StateVector) {
        self(time, state)
    }
}

/// Keeps every reported sample in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    samples: Vec<(f64, StateVector)>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn samples(&self) -> &[(f64, StateVector)] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<(f64, StateVector)> {
        self.samples
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|(time, _)| *time).collect()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl StateReporter for RecordingReporter {
    fn report(&mut self, time: f64, state: &StateVector) {
        self.samples.push((time, *state));
    }
}

/// Emits one structured `info` event per sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl StateReporter for TracingReporter {
    fn report(&mut self, time: f64, state: &StateVector) {
        let [roll, pitch, yaw] = state.attitude.to_degrees();
        info!(
            time,
            north = state.position.x,
            east = state.position.y,
            altitude = state.altitude(),
            u = state.velocity.x,
            v = state.velocity.y,
            w = state.velocity.z,
            roll,
            pitch,
            yaw,
            p = state.angular_rate.x,
            q = state.angular_rate.y,
            r = state.angular_rate.z,
            "state"
        );
    }
}
