pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const SPECIFIC_GAS_CONSTANT_AIR: f64 = 287.0; // J/(kg·K)
pub const EARTH_MEAN_RADIUS: f64 = 6_371_000.0; // m

pub const ISA_SEA_LEVEL_TEMP: f64 = 288.15; // K
pub const ISA_SEA_LEVEL_PRESSURE: f64 = 101_325.0; // Pa
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3

// Boundary unit conversions
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const MPS_PER_KNOT: f64 = 1852.0 / 3600.0;
pub const KELVIN_OFFSET: f64 = 273.15;

/// Fraction of the lowest known wind speed that remains at ground level.
pub const SURFACE_WIND_FRACTION: f64 = 0.1;
