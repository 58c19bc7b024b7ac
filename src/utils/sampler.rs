//! The position sampling capability boundary.
//!
//! Sampling is a single-shot request to the host platform for the
//! device's current position. This crate does not poll, stream, or keep
//! a location subscription open; a caller that loses interest simply
//! drops the future, and retrying means invoking the sampler again.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::eligibility::Eligibility;
use crate::location::Location;
use crate::mode::WorkMode;
use crate::site::Site;
use crate::utils::geofence;

/// Why a position sample could not be produced.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// The user denied the location permission prompt.
    #[error("location permission denied")]
    PermissionDenied,
    /// The platform did not produce a fix within the allowed time.
    #[error("timed out waiting for a position fix")]
    Timeout,
    /// The host has no geolocation capability at all.
    #[error("geolocation is not supported on this device")]
    Unsupported,
}

/// Tuning knobs forwarded to the platform when requesting a fix.
#[derive(Debug, Copy, Clone)]
pub struct SampleOptions {
    /// Ask the platform for its most precise source, e.g. GPS over
    /// network positioning.
    pub enable_high_accuracy: bool,

    /// How long the platform may take before the request fails with
    /// [`SampleError::Timeout`].
    pub timeout: Duration,

    /// A cached fix no older than this may be returned instead of a
    /// fresh one.
    pub maximum_age: Duration,
}

impl Default for SampleOptions {
    fn default() -> Self {
        SampleOptions {
            enable_high_accuracy: true,
            timeout: Duration::from_secs(10),
            maximum_age: Duration::from_secs(60),
        }
    }
}

/// Single-shot source of device positions.
///
/// Implemented by the hosting application on top of whatever location
/// capability its platform offers; tests substitute fixed fakes.
#[async_trait]
pub trait PositionSampler {
    /// Requests one position fix. Resolves with the sampled location,
    /// or with the reason no fix could be produced.
    async fn sample(&self, options: SampleOptions) -> Result<Location, SampleError>;
}

/// Samples the device position once and resolves eligibility for the
/// given work mode and sites.
///
/// Remote employees are never geofenced, so the sampler is not invoked
/// at all for [`WorkMode::Remote`]. A sampling failure is reported as
/// [`Eligibility::Unresolvable`] and never retried here; retrying is a
/// user-initiated re-invocation.
pub async fn check_eligibility(
    mode: WorkMode,
    sampler: &dyn PositionSampler,
    options: SampleOptions,
    sites: &[Site],
) -> Eligibility {
    if mode == WorkMode::Remote {
        debug!("Work mode is remote, skipping position sampling");
        return Eligibility::Remote;
    }

    let position = sampler.sample(options).await;
    debug!("position: {:?}", position);
    if let Err(reason) = &position {
        error!("Position sample failed: {}", reason);
    }
    geofence::resolve_eligibility(mode, position, sites)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
