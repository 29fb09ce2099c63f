//! Third-party super-app SDK capability.
//!
//! Super-app hosts expose their own location operation to embedded pages.
//! Older SDK builds only offer a legacy `getLocation` call; newer ones offer
//! a unified `getCurrentLocation` call with extra request parameters. The
//! probe picks the shape from the SDK's reported version.

use thiserror::Error;

use super::geolocation::Position;
use super::CapabilityFuture;

/// Parameters for the unified location call.
///
/// `timeout` and `cache_timeout` are SDK-internal units (seconds-scale);
/// they are not `Duration`s on purpose.
#[derive(Debug, Clone, PartialEq)]
pub struct SdkLocationRequest {
    /// SDK-internal timeout.
    pub timeout: u32,

    /// SDK-internal location-cache tolerance.
    pub cache_timeout: u32,

    /// SDK request type discriminator (0 = coordinates only).
    pub request_type: u32,

    /// Platform-tagged business identifier (iOS-style vs Android-style).
    pub biz_type: String,
}

/// Error reported by the SDK for a location call.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("sdk error: {0}")]
pub struct SdkError(pub String);

/// Capability wrapping a third-party super-app SDK.
pub trait ThirdPartySdk: Send + Sync {
    /// The SDK's reported version string.
    fn version(&self) -> String;

    /// Legacy location call, available on all SDK versions.
    fn get_location(
        &self,
        timeout: u32,
        cache_timeout: u32,
    ) -> CapabilityFuture<Result<Position, SdkError>>;

    /// Unified location call, available from SDK 10.0.18 onward.
    fn get_current_location(
        &self,
        request: SdkLocationRequest,
    ) -> CapabilityFuture<Result<Position, SdkError>>;
}
