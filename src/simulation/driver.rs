use std::sync::Arc;
use tracing::{info, trace, warn};

use super::report::StateReporter;
use crate::components::{AircraftProperties, StateVector};
use crate::resources::config::{PhysicsConfig, SimulationConfig};
use crate::resources::environment::Environment;
use crate::systems::physics::{AttitudeKinematics, DynamicsModel, EulerIntegrator, Trajectory};
use crate::utils::{Result, SimError};

/// Absorbs rounding when counting steps and matching report boundaries.
const TIME_TOLERANCE: f64 = 1e-9;

/// True when `time` lies within half a step of a multiple of `interval`.
pub fn is_report_time(time: f64, interval: f64, dt: f64) -> bool {
    let half_step = dt / 2.0;
    let remainder = time % interval;
    remainder.abs() <= half_step || (remainder - interval).abs() <= half_step
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    pub final_time: f64,
    pub final_state: StateVector,
    /// Integration steps taken
    pub steps: usize,
    pub samples_reported: usize,
}

/// A fixed-step run of one aircraft from an initial state.
#[derive(Debug, Clone)]
pub struct Simulation {
    integrator: EulerIntegrator<DynamicsModel>,
    initial_state: StateVector,
    duration: f64,
    time_step: f64,
    report_interval: f64,
}

impl Simulation {
    pub fn builder() -> SimulationBuilder {
        SimulationBuilder::new()
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        SimulationBuilder::from_config(config)?.build()
    }

    pub fn integrator(&self) -> &EulerIntegrator<DynamicsModel> {
        &self.integrator
    }

    pub fn initial_state(&self) -> &StateVector {
        &self.initial_state
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn report_interval(&self) -> f64 {
        self.report_interval
    }

    /// Number of integration steps between time 0 and the duration.
    pub fn step_count(&self) -> usize {
        (self.duration / self.time_step + TIME_TOLERANCE).floor() as usize
    }

    /// Every intermediate state of the run, without reporting.
    pub fn trajectory(&self) -> Result<Trajectory<'_, DynamicsModel>> {
        self.integrator
            .integrate_over_time(self.initial_state, 0.0, self.duration, self.time_step)
    }

    /// Run from time zero to the configured duration.
    ///
    /// At each step the state is reported if the current time is on a
    /// reporting boundary, then integrated if the run is not yet over.
    pub fn run<R: StateReporter + ?Sized>(&self, reporter: &mut R) -> SimulationSummary {
        let dt = self.time_step;
        let steps = self.step_count();

        info!(
            aircraft = self.integrator.model().aircraft().name(),
            duration = self.duration,
            dt,
            report_interval = self.report_interval,
            "starting simulation"
        );

        let mut state = self.initial_state;
        let mut samples_reported = 0;
        let mut time = 0.0;

        for step in 0..=steps {
            time = step as f64 * dt;

            if is_report_time(time, self.report_interval, dt) {
                reporter.report(time, &state);
                samples_reported += 1;
            }

            if step < steps {
                state = self.integrator.integrate(&state, time, dt);
                trace!(step, time, "step complete");

                if !state.is_finite() {
                    warn!(step, time, "state is no longer finite");
                }
            }
        }

        info!(
            final_time = time,
            steps,
            samples_reported,
            altitude = state.altitude(),
            "simulation complete"
        );

        SimulationSummary {
            final_time: time,
            final_state: state,
            steps,
            samples_reported,
        }
    }
}

/// Assembles a [`Simulation`], defaulting to a light fixed-wing in level
/// flight at 1000 m through the standard environment.
#[derive(Debug, Clone, Default)]
pub struct SimulationBuilder {
    aircraft: Option<Arc<AircraftProperties>>,
    environment: Option<Arc<Environment>>,
    initial_state: Option<StateVector>,
    physics: PhysicsConfig,
}

impl SimulationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &SimulationConfig) -> Result<Self> {
        Ok(Self::new()
            .aircraft(config.aircraft.build()?)
            .environment(config.environment.build()?)
            .initial_state(config.initial_state.to_state())
            .physics(config.physics.clone()))
    }

    pub fn aircraft(mut self, aircraft: AircraftProperties) -> Self {
        self.aircraft = Some(Arc::new(aircraft));
        self
    }

    pub fn shared_aircraft(mut self, aircraft: Arc<AircraftProperties>) -> Self {
        self.aircraft = Some(aircraft);
        self
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = Some(Arc::new(environment));
        self
    }

    pub fn shared_environment(mut self, environment: Arc<Environment>) -> Self {
        self.environment = Some(environment);
        self
    }

    pub fn initial_state(mut self, state: StateVector) -> Self {
        self.initial_state = Some(state);
        self
    }

    pub fn physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    pub fn time_step(mut self, dt: f64) -> Self {
        self.physics.time_step = dt;
        self
    }

    pub fn duration(mut self, duration: f64) -> Self {
        self.physics.duration = duration;
        self
    }

    pub fn report_interval(mut self, interval: f64) -> Self {
        self.physics.report_interval = interval;
        self
    }

    pub fn attitude_kinematics(mut self, kinematics: AttitudeKinematics) -> Self {
        self.physics.attitude_kinematics = kinematics;
        self
    }

    pub fn build(self) -> Result<Simulation> {
        let dt = self.physics.time_step;
        if !(dt > 0.0) || !dt.is_finite() {
            return Err(SimError::InvalidTimeStep(format!(
                "step must be positive and finite, got {}",
                dt
            )));
        }
        self.physics.validate()?;

        let aircraft = self
            .aircraft
            .unwrap_or_else(|| Arc::new(AircraftProperties::light_fixed_wing()));
        let environment = self
            .environment
            .unwrap_or_else(|| Arc::new(Environment::standard()));
        let initial_state = self
            .initial_state
            .unwrap_or_else(|| StateVector::level_flight(1000.0, 50.0));

        let model = DynamicsModel::new(aircraft, environment)
            .with_kinematics(self.physics.attitude_kinematics);

        Ok(Simulation {
            integrator: EulerIntegrator::new(model),
            initial_state,
            duration: self.physics.duration,
            time_step: dt,
            report_interval: self.physics.report_interval,
        })
    }
}
