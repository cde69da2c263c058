//! Great-circle distance oracle.
//!
//! Straight-line distance over the Earth's surface. Ignores roads, but is
//! deterministic and needs no external service, which the solver relies on.

use crate::stop::Coordinate;

/// Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine great-circle distance between two coordinates, in meters.
///
/// Symmetric, and exactly zero for identical inputs. The haversine term is
/// clamped to [0, 1] so floating error near antipodal points can never push
/// `asin` out of its domain.
pub fn distance_meters(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lon = (to.lon - from.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();

    EARTH_RADIUS_M * c
}
