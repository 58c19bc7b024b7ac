//! Helper function for computing great-circle distance between two
//! locations.

use crate::location::Location;

/// Mean Earth radius in meters.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Returns the great-circle distance between two locations in meters,
/// computed with the haversine formula.
///
/// The `atan2` form is numerically stable for both short (meters) and
/// long (thousands of kilometers) separations.
///
/// # Arguments
/// * `from` - One end of the arc.
/// * `to` - The other end of the arc.
///
/// # Returns
/// The distance in meters. Symmetric in its arguments and zero when
/// both locations are equal.
pub fn distance(from: &Location, to: &Location) -> f64 {
    let from_lat = from.latitude.into_inner().to_radians();
    let to_lat = to.latitude.into_inner().to_radians();
    let delta_lat = (to.latitude - from.latitude).into_inner().to_radians();
    let delta_lon = (to.longitude - from.longitude).into_inner().to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + from_lat.cos() * to_lat.cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * h.sqrt().atan2((1.0 - h).sqrt())
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
