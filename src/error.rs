//! Error types for location resolution.
//!
//! Every probe and strategy delivers failures through the same channel as
//! success: a [`ResolveResult`]. Probes never panic past their own boundary,
//! and no failure kind is ever upgraded to success by a strategy.

use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while resolving a geohash.
///
/// Capability-level errors (geolocation, SDK, HTTP) are mapped into this
/// taxonomy at the probe boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// A required capability (native bridge, platform geolocation,
    /// third-party SDK) is not present in this host environment.
    #[error("{0} not available in this environment")]
    Unavailable(&'static str),

    /// The user or platform denied access to location data.
    #[error("location permission denied")]
    PermissionDenied,

    /// A probe or chain exhausted its time budget.
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// A network request or SDK call failed.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// Resolution was cancelled externally.
    #[error("resolution cancelled")]
    Cancelled,

    /// Anything not classified above.
    #[error("{0}")]
    Unknown(String),
}

/// Result alias used by every probe, strategy, and the resolver.
pub type ResolveResult = Result<crate::hash::Geohash, ResolveError>;
