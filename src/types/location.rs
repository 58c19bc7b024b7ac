//! Struct definitions and implementations for [`Location`].
//!
//! A `Location` may be sampled from a device or registered for a work
//! site; both sides of a geofence check share this type.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// A [`Location`] is a geographic position expressed in signed decimal
/// degrees.
///
/// Components are 64-bit because that is what device geolocation
/// capabilities deliver. Five decimals would already narrow the error
/// margin to a meter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub latitude: OrderedFloat<f64>,
    pub longitude: OrderedFloat<f64>,
}

impl Location {
    /// Returns true when both components are inside the valid
    /// coordinate ranges (±90 latitude, ±180 longitude).
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude.into_inner())
            && (-180.0..=180.0).contains(&self.longitude.into_inner())
    }
}
