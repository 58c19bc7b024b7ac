//! Helper functions for deciding whether a sampled position authorizes
//! an attendance action.
//!
//! Every function here is pure; the decision is recomputed from its
//! inputs on each attempt, so repeated or concurrent checks need no
//! coordination.

use crate::eligibility::Eligibility;
use crate::location::Location;
use crate::mode::WorkMode;
use crate::sampler::SampleError;
use crate::site::Site;
use crate::utils::haversine;

/// Returns true when `position` falls inside the site's allowed
/// perimeter. A position exactly on the boundary counts as in range.
pub fn is_within_range(position: &Location, site: &Site) -> bool {
    haversine::distance(position, &site.location) <= site.radius_meters
}

/// Decides eligibility for a single check-in or check-out attempt.
///
/// Remote work modes are never geofenced, so neither the sample nor the
/// site list is consulted for them. A failed sample blocks the decision
/// with [`Eligibility::Unresolvable`]. Otherwise the position is
/// eligible when it is within range of any registered site; the first
/// match short-circuits.
///
/// # Arguments
/// * `mode` - The employee's work mode.
/// * `position` - The sampled device position, or why sampling failed.
/// * `sites` - The registered sites to check against.
///
/// # Returns
/// The eligibility decision for this attempt.
pub fn resolve_eligibility(
    mode: WorkMode,
    position: Result<Location, SampleError>,
    sites: &[Site],
) -> Eligibility {
    if mode == WorkMode::Remote {
        return Eligibility::Remote;
    }
    match position {
        Err(_) => Eligibility::Unresolvable,
        Ok(position) => {
            if sites.iter().any(|site| is_within_range(&position, site)) {
                Eligibility::InRange
            } else {
                Eligibility::OutOfRange
            }
        }
    }
}

/// Returns the registered site closest to `position` together with its
/// distance in meters, or [`None`] when no sites are registered.
///
/// Lets the calling workflow render an actionable range message such as
/// "840 m from Main Office" when it blocks an attempt.
pub fn nearest_site<'a>(position: &Location, sites: &'a [Site]) -> Option<(&'a Site, f64)> {
    let mut nearest = sites.first()?;
    let mut nearest_distance = haversine::distance(position, &nearest.location);
    for site in sites {
        let site_distance = haversine::distance(position, &site.location);
        if site_distance < nearest_distance {
            nearest_distance = site_distance;
            nearest = site;
        }
    }
    Some((nearest, nearest_distance))
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
