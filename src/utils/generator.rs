//! Helper functions for generating random positions.
//!
//! Mainly used to generate realistic device positions for tests and
//! demos.

use ordered_float::OrderedFloat;
use rand::Rng;

use crate::location::Location;

/// Arc length of one degree on the mean-radius sphere, in meters.
const METERS_PER_DEGREE: f64 = 111_194.9;

/// Generates random positions within `radius_meters` of `center`.
///
/// Offsets use a local flat-earth approximation, which is accurate to
/// well under a percent at geofence scale. The center must not sit on
/// a pole.
///
/// # Arguments
/// * `center` - The location to generate positions around.
/// * `radius_meters` - The radius of the disc, in meters.
/// * `capacity` - How many positions to generate.
///
/// # Returns
/// A vector of `capacity` random positions.
pub fn generate_positions_near(
    center: &Location,
    radius_meters: f64,
    capacity: i32,
) -> Vec<Location> {
    let mut rng = rand::thread_rng();
    let mut positions = Vec::new();

    let meters_per_degree_lon =
        METERS_PER_DEGREE * center.latitude.into_inner().to_radians().cos();
    for _ in 0..capacity {
        let bearing = rng.gen_range(0.0..(2.0 * std::f64::consts::PI));
        let distance = rng.gen_range(0.0..radius_meters);
        positions.push(Location {
            latitude: OrderedFloat(
                center.latitude.into_inner() + distance * bearing.cos() / METERS_PER_DEGREE,
            ),
            longitude: OrderedFloat(
                center.longitude.into_inner() + distance * bearing.sin() / meters_per_degree_lon,
            ),
        });
    }
    positions
}

#[cfg(test)]
mod generator_tests {
    use super::*;
    use crate::utils::haversine;

    const SAN_FRANCISCO: Location = Location {
        latitude: OrderedFloat(37.7749),
        longitude: OrderedFloat(-122.4194),
    };

    #[test]
    fn test_generates_requested_capacity() {
        let positions = generate_positions_near(&SAN_FRANCISCO, 500.0, 100);
        assert_eq!(positions.len(), 100);
    }

    #[test]
    fn test_positions_land_inside_the_disc() {
        let positions = generate_positions_near(&SAN_FRANCISCO, 400.0, 100);
        for position in positions {
            assert!(position.is_valid());
            // small slack for the flat-earth offset approximation
            assert!(haversine::distance(&SAN_FRANCISCO, &position) <= 410.0);
        }
    }
}
