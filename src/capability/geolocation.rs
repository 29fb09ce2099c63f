//! Platform geolocation capability.
//!
//! Mirrors the W3C geolocation contract: a one-shot position request with a
//! timeout and a cache tolerance, failing with one of three error codes.

use std::time::Duration;

use thiserror::Error;

use super::CapabilityFuture;

/// A (latitude, longitude) pair in floating-point degrees.
///
/// Transient: exists only inside one probe attempt, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude in degrees, -90.0 to 90.0
    pub latitude: f64,
    /// Longitude in degrees, -180.0 to 180.0
    pub longitude: f64,
}

/// Options for a one-shot position request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionOptions {
    /// How long the platform may spend acquiring a position.
    pub timeout: Duration,

    /// A cached position fresher than this may be reused by the platform.
    pub maximum_age: Duration,
}

/// Errors the platform can report for a position request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeolocationError {
    /// The user or platform denied the location request.
    #[error("location permission denied")]
    PermissionDenied,

    /// The platform could not determine a position.
    #[error("position unavailable: {0}")]
    PositionUnavailable(String),

    /// The platform gave up within its own timeout.
    #[error("position request timed out")]
    Timeout,
}

/// Capability wrapping the host platform's location API.
pub trait Geolocation: Send + Sync {
    /// Requests a single position fix.
    fn current_position(
        &self,
        options: PositionOptions,
    ) -> CapabilityFuture<Result<Position, GeolocationError>>;
}
