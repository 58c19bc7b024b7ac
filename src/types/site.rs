//! Struct definitions and implementations for [`Site`].
//!
//! A `Site` is an employer location that sampled device positions are
//! checked against. Sites are registered at configuration time and
//! read-only for the rest of the process lifetime; see
//! [`registry`](`crate::registry`).

use serde::{Deserialize, Serialize};

use super::location::Location;

/// One registered work location with its allowed check-in perimeter.
///
/// The serialized form flattens the coordinate into the site record, so
/// a configured site reads as one flat object:
///
/// ```json
/// {
///   "name": "Main Office",
///   "address": "123 Business Street, Tech City",
///   "latitude": 40.7128,
///   "longitude": -74.0060,
///   "radius_meters": 500.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Human-readable identifier, unique within the registry.
    pub name: String,

    /// Street address, shown to employees in range messages.
    pub address: String,

    /// Denotes the geographical position of the site.
    ///
    /// See also [`Location`].
    #[serde(flatten)]
    pub location: Location,

    /// Radius of the allowed perimeter around the site, in meters.
    /// Must be positive.
    pub radius_meters: f64,
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
