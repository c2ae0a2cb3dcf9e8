use approx::assert_relative_eq;
use nalgebra::Vector3;
use sixdof::{StateVector, Wind};

/// Assert that every component of a state is finite
#[track_caller]
pub fn assert_state_finite(state: &StateVector) {
    for (i, x) in state.to_vector().iter().enumerate() {
        assert!(x.is_finite(), "state component {} is not finite: {}", i, x);
    }
}

/// Assert that two vectors are approximately equal component by component
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}

/// Assert a wind in knots and degrees
#[track_caller]
pub fn assert_wind_eq(wind: &Wind, knots: f64, degrees: f64, epsilon: f64) {
    assert_relative_eq!(wind.speed_knots(), knots, epsilon = epsilon);
    assert_relative_eq!(wind.direction_degrees(), degrees, epsilon = epsilon);
}
