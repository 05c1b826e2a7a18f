//! Conversion of raw sl2 field values into geodetic coordinates and meters.
//!
//! The sl2 container stores positions as unsigned 32-bit spherical-Mercator
//! northing/easting values scaled by the Earth's polar radius, and depth as a
//! 32-bit float in feet. These functions are pure and closed-form; exact at
//! double precision.

use std::f64::consts::PI;

/// Polar radius of the Earth in meters, the Mercator scale constant.
pub const POLAR_RADIUS: f64 = 6356752.3142;

/// Maximum value of an unsigned 4-byte integer, the easting origin offset.
pub const MAX_UINT4: f64 = 4294967295.0;

/// Feet-to-meter conversion factor.
pub const FEET_TO_M: f64 = 1.0 / 3.2808399;

/// Convert a raw depth (feet, f32) to meters.
///
/// The stored convention is the negation of the feet value converted to
/// meters; consumers read depth below surface as the magnitude. The sign is
/// preserved as-is.
pub fn depth_to_meters(depth_raw: f32) -> f64 {
    -(depth_raw as f64 * FEET_TO_M)
}

/// Convert a raw easting to longitude in decimal degrees.
pub fn longitude_degrees(lon_raw: u32) -> f64 {
    (lon_raw as f64 - MAX_UINT4) / POLAR_RADIUS * (180.0 / PI)
}

/// Convert a raw northing to latitude in decimal degrees (inverse Mercator).
pub fn latitude_degrees(lat_raw: u32) -> f64 {
    (2.0 * (lat_raw as f64 / POLAR_RADIUS).exp().atan() - PI / 2.0) * (180.0 / PI)
}
