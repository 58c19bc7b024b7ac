//! Definition for the [`Eligibility`] type, implemented by an enum.

use serde::{Deserialize, Serialize};

/// Outcome of a geofence check for a single attendance attempt.
///
/// Computed fresh per check-in or check-out attempt and never stored by
/// this crate; the calling workflow decides whether to submit the
/// action or block it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Eligibility {
    /// The sampled position falls inside at least one site perimeter.
    InRange,
    /// The sampled position is outside every registered perimeter.
    OutOfRange,
    /// Work-mode override; location was never consulted.
    Remote,
    /// The position sample failed, so no range decision can be made.
    /// Blocking for non-remote work modes.
    Unresolvable,
}
