use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::utils::{
    deg_to_rad, feet_to_meters, knots_to_mps, lerp, mps_to_knots, rad_to_deg, wrap_pi,
    wrap_two_pi, SURFACE_WIND_FRACTION,
};

/// Horizontal wind at one altitude.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Wind {
    /// Wind speed (m/s), never negative
    pub speed: f64,
    /// Direction the wind blows from (rad, clockwise from North, in `[0, 2π)`)
    pub direction: f64,
}

impl Wind {
    pub fn new(speed: f64, direction: f64) -> Self {
        Self {
            speed,
            direction: wrap_two_pi(direction),
        }
    }

    /// No wind, reference (North) direction
    pub fn calm() -> Self {
        Self::default()
    }

    pub fn from_knots_degrees(speed_knots: f64, direction_degrees: f64) -> Self {
        Self::new(knots_to_mps(speed_knots), deg_to_rad(direction_degrees))
    }

    pub fn speed_knots(&self) -> f64 {
        mps_to_knots(self.speed)
    }

    pub fn direction_degrees(&self) -> f64 {
        rad_to_deg(self.direction)
    }

    /// Velocity of the air mass in NED (m/s).
    ///
    /// A wind *from* the west moves air towards the east.
    pub fn ned_velocity(&self) -> Vector3<f64> {
        let (sin_dir, cos_dir) = self.direction.sin_cos();
        Vector3::new(-self.speed * cos_dir, -self.speed * sin_dir, 0.0)
    }
}

/// Altitude-keyed wind profile.
///
/// Samples are kept sorted by ascending altitude with unique keys, so every
/// lookup can binary search. The table is meant to be filled before a run and
/// only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindField {
    samples: Vec<(f64, Wind)>,
}

impl WindField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wind profile used by the reference scenario, keyed in feet and knots.
    pub fn sample_profile() -> Self {
        let mut field = Self::new();
        for (feet, knots, degrees) in [
            (0.0, 5.0, 260.0),
            (1000.0, 10.0, 260.0),
            (5000.0, 20.0, 310.0),
            (10000.0, 50.0, 340.0),
        ] {
            field.add_sample(feet_to_meters(feet), Wind::from_knots_degrees(knots, degrees));
        }
        field
    }

    /// Insert a sample at `altitude` (m), replacing any existing sample there.
    pub fn add_sample(&mut self, altitude: f64, wind: Wind) {
        if !altitude.is_finite() {
            warn!(altitude, "ignoring wind sample at non-finite altitude");
            return;
        }

        match self
            .samples
            .binary_search_by(|(key, _)| key.total_cmp(&altitude))
        {
            Ok(index) => self.samples[index].1 = wind,
            Err(index) => self.samples.insert(index, (altitude, wind)),
        }
    }

    pub fn samples(&self) -> &[(f64, Wind)] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn has_wind_data(&self) -> bool {
        !self.samples.is_empty()
    }

    /// Lowest sampled altitude (m), 0 when empty
    pub fn min_altitude(&self) -> f64 {
        self.samples.first().map_or(0.0, |(altitude, _)| *altitude)
    }

    /// Highest sampled altitude (m), 0 when empty
    pub fn max_altitude(&self) -> f64 {
        self.samples.last().map_or(0.0, |(altitude, _)| *altitude)
    }

    /// Wind at `altitude` (m). Negative altitudes are treated as ground level.
    pub fn wind_at_altitude(&self, altitude: f64) -> Wind {
        let altitude = altitude.max(0.0);

        let (lowest, highest) = match (self.samples.first(), self.samples.last()) {
            (Some(lowest), Some(highest)) => (*lowest, *highest),
            _ => return Wind::calm(),
        };

        if self.samples.len() == 1 {
            return Self::decayed(altitude, lowest);
        }

        if altitude >= highest.0 {
            return highest.1;
        }

        if altitude <= lowest.0 {
            return Self::decayed(altitude, lowest);
        }

        // lowest < altitude < highest, so 1 <= upper < len
        let upper = self.samples.partition_point(|(key, _)| *key <= altitude);
        let (alt_low, wind_low) = self.samples[upper - 1];
        let (alt_high, wind_high) = self.samples[upper];
        let ratio = (altitude - alt_low) / (alt_high - alt_low);

        Self::interpolate(&wind_low, &wind_high, ratio)
    }

    fn interpolate(low: &Wind, high: &Wind, ratio: f64) -> Wind {
        let speed = lerp(low.speed, high.speed, ratio);
        // Shortest way round, so 350° -> 10° passes through North
        let delta = wrap_pi(high.direction - low.direction);
        Wind::new(speed, low.direction + delta * ratio)
    }

    /// Linear decay from a known sample down to a fraction of its speed at
    /// ground level, keeping the sample's direction.
    fn decayed(altitude: f64, (known_altitude, known): (f64, Wind)) -> Wind {
        if known_altitude <= 0.0 {
            return known;
        }

        let surface_speed = known.speed * SURFACE_WIND_FRACTION;
        let decay_rate = (known.speed - surface_speed) / known_altitude;
        let speed = (surface_speed + decay_rate * altitude).max(0.0);

        Wind {
            speed,
            direction: known.direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn field(samples: &[(f64, f64, f64)]) -> WindField {
        let mut field = WindField::new();
        for &(altitude, knots, degrees) in samples {
            field.add_sample(altitude, Wind::from_knots_degrees(knots, degrees));
        }
        field
    }

    #[test]
    fn test_empty_field_is_calm() {
        let wind = WindField::new().wind_at_altitude(1000.0);
        assert_eq!(wind, Wind::calm());
        assert_eq!(wind.speed, 0.0);
    }

    #[test]
    fn test_samples_stay_sorted_and_unique() {
        let mut field = field(&[(3000.0, 20.0, 280.0), (1000.0, 10.0, 260.0)]);
        field.add_sample(2000.0, Wind::from_knots_degrees(15.0, 270.0));
        field.add_sample(1000.0, Wind::from_knots_degrees(12.0, 250.0));

        let altitudes: Vec<f64> = field.samples().iter().map(|(a, _)| *a).collect();
        assert_eq!(altitudes, vec![1000.0, 2000.0, 3000.0]);
        assert_relative_eq!(field.samples()[0].1.speed_knots(), 12.0, epsilon = 1e-12);
        assert_eq!(field.min_altitude(), 1000.0);
        assert_eq!(field.max_altitude(), 3000.0);
        assert_eq!(field.len(), 3);
    }

    #[test]
    fn test_single_sample_decays_to_surface() {
        let field = field(&[(5000.0, 20.0, 270.0)]);

        let wind = field.wind_at_altitude(1000.0);
        assert_relative_eq!(wind.speed_knots(), 5.6, epsilon = 1e-9);
        assert_relative_eq!(wind.direction_degrees(), 270.0, epsilon = 1e-9);

        let wind = field.wind_at_altitude(2500.0);
        assert_relative_eq!(wind.speed_knots(), 11.0, epsilon = 1e-9);
    }

    #[test]
    fn test_above_highest_returns_highest() {
        let field = field(&[(1000.0, 10.0, 260.0), (5000.0, 15.0, 270.0)]);
        for altitude in [5000.0, 10_000.0] {
            let wind = field.wind_at_altitude(altitude);
            assert_relative_eq!(wind.speed_knots(), 15.0, epsilon = 1e-12);
            assert_relative_eq!(wind.direction_degrees(), 270.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_below_lowest_decays_from_lowest() {
        let field = field(&[(1000.0, 10.0, 260.0), (5000.0, 15.0, 270.0)]);
        let wind = field.wind_at_altitude(500.0);
        assert_relative_eq!(wind.speed_knots(), 5.5, epsilon = 1e-9);
        assert_relative_eq!(wind.direction_degrees(), 260.0, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_altitude_clamps_to_ground() {
        let field = field(&[(1000.0, 20.0, 270.0)]);
        let wind = field.wind_at_altitude(-100.0);
        assert_relative_eq!(wind.speed_knots(), 2.0, epsilon = 1e-9);
        assert_relative_eq!(wind.direction_degrees(), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_linear_interpolation() {
        let field = field(&[(1000.0, 10.0, 260.0), (3000.0, 20.0, 280.0)]);
        let wind = field.wind_at_altitude(2000.0);
        assert_relative_eq!(wind.speed_knots(), 15.0, epsilon = 1e-9);
        assert_relative_eq!(wind.direction_degrees(), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn test_interpolation_picks_bracketing_pair() {
        let field = field(&[
            (1000.0, 5.0, 260.0),
            (3000.0, 10.0, 270.0),
            (5000.0, 15.0, 280.0),
        ]);

        let wind = field.wind_at_altitude(2000.0);
        assert_relative_eq!(wind.speed_knots(), 7.5, epsilon = 1e-9);
        assert_relative_eq!(wind.direction_degrees(), 265.0, epsilon = 1e-9);

        let wind = field.wind_at_altitude(4000.0);
        assert_relative_eq!(wind.speed_knots(), 12.5, epsilon = 1e-9);
        assert_relative_eq!(wind.direction_degrees(), 275.0, epsilon = 1e-9);
    }

    #[test]
    fn test_direction_wraps_through_north() {
        for (first, second) in [(350.0, 10.0), (10.0, 350.0)] {
            let field = field(&[(1000.0, 10.0, first), (3000.0, 20.0, second)]);
            let wind = field.wind_at_altitude(2000.0);

            assert_relative_eq!(wind.speed_knots(), 15.0, epsilon = 1e-9);
            // 0° and 360° are the same heading, 180° would be the long way round
            let from_north = wrap_pi(wind.direction).abs();
            assert!(from_north < 1e-9, "direction {}", wind.direction_degrees());
        }
    }

    #[test]
    fn test_small_altitude_gap() {
        let field = field(&[(1000.0, 10.0, 260.0), (1001.0, 11.0, 261.0)]);
        let wind = field.wind_at_altitude(1000.5);
        assert_relative_eq!(wind.speed_knots(), 10.5, epsilon = 1e-9);
        assert_relative_eq!(wind.direction_degrees(), 260.5, epsilon = 1e-6);
    }

    #[test]
    fn test_ground_level_sample_is_not_decayed() {
        let field = WindField::sample_profile();
        let wind = field.wind_at_altitude(0.0);
        assert_relative_eq!(wind.speed_knots(), 5.0, epsilon = 1e-9);
        assert!(wind.speed.is_finite());
    }

    #[test]
    fn test_ned_velocity_blows_away_from_source() {
        let westerly = Wind::from_knots_degrees(10.0, 270.0);
        let velocity = westerly.ned_velocity();
        assert_relative_eq!(velocity.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(velocity.y, westerly.speed, epsilon = 1e-9);
        assert_eq!(velocity.z, 0.0);
    }
}
