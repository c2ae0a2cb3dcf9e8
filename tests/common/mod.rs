#![allow(dead_code)]

mod assertions;
mod fixtures;

pub use assertions::{assert_state_finite, assert_vector_eq, assert_wind_eq};
pub use fixtures::*;
