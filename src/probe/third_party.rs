//! Third-party super-app SDK probe.

use semver::Version;
use tracing::{debug, warn};

use crate::capability::{SdkLocationRequest, ThirdPartySdk};
use crate::environment::Platform;
use crate::error::{ResolveError, ResolveResult};
use crate::hash;

/// First SDK version that supports the unified `getCurrentLocation` call.
fn unified_call_min_version() -> Version {
    Version::new(10, 0, 18)
}

/// Requests a position from the host SDK and encodes it.
///
/// The call shape follows the SDK's reported version: below 10.0.18 (or
/// unparseable - versions that predate semver-clean reporting also predate
/// the unified call) the legacy `get_location` is used, otherwise the
/// unified call with a platform-tagged request. Timeouts are SDK-internal
/// units; the SDK enforces them itself.
///
/// # Arguments
///
/// * `sdk` - The SDK capability, if the host injected one
/// * `platform` - Platform family for the request's `biz_type` tag
/// * `timeout` - SDK-internal timeout
/// * `cache_timeout` - SDK-internal location-cache tolerance
pub async fn locate(
    sdk: Option<&dyn ThirdPartySdk>,
    platform: Platform,
    timeout: u32,
    cache_timeout: u32,
) -> ResolveResult {
    let Some(sdk) = sdk else {
        return Err(ResolveError::Unavailable("third-party sdk"));
    };

    let reported = sdk.version();
    let legacy = match Version::parse(&reported) {
        Ok(version) => version < unified_call_min_version(),
        Err(_) => true,
    };
    debug!(version = %reported, legacy, "requesting third-party sdk location");

    let result = if legacy {
        sdk.get_location(timeout, cache_timeout).await
    } else {
        sdk.get_current_location(SdkLocationRequest {
            timeout,
            cache_timeout,
            request_type: 0,
            biz_type: platform.biz_type().to_string(),
        })
        .await
    };

    let position = result.map_err(|err| {
        warn!(error = %err, "third-party sdk location failed");
        ResolveError::RequestFailed(err.to_string())
    })?;

    hash::encode(position.latitude, position.longitude)
}
