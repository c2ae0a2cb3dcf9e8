use sixdof::{
    AircraftProperties, Environment, Simulation, SimulationBuilder, StateVector, Wind, WindField,
};

pub const TEST_ALTITUDE: f64 = 1000.0;
pub const TEST_AIRSPEED: f64 = 50.0;

pub fn level_state() -> StateVector {
    StateVector::level_flight(TEST_ALTITUDE, TEST_AIRSPEED)
}

/// Wind keyed in feet, knots and degrees
pub fn wind_field(samples: &[(f64, f64, f64)]) -> WindField {
    let mut field = WindField::new();
    for &(feet, knots, degrees) in samples {
        field.add_sample(
            sixdof::utils::feet_to_meters(feet),
            Wind::from_knots_degrees(knots, degrees),
        );
    }
    field
}

pub fn level_flight_builder() -> SimulationBuilder {
    Simulation::builder()
        .aircraft(AircraftProperties::light_aircraft())
        .environment(Environment::standard())
        .initial_state(level_state())
}
