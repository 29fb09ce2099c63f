//! Platform geolocation probe.

use std::time::Duration;

use tracing::{debug, warn};

use crate::capability::{Geolocation, GeolocationError, PositionOptions};
use crate::error::{ResolveError, ResolveResult};
use crate::hash;

/// Requests a one-shot position from the platform and encodes it.
///
/// The timeout is handed to the platform, which is expected to honor it; an
/// outer timeout of the same duration guarantees settlement even against a
/// capability that never calls back.
///
/// # Arguments
///
/// * `geolocation` - The platform capability, if present
/// * `timeout` - Budget for the position request
/// * `maximum_age` - Cache tolerance passed through to the platform
pub async fn locate(
    geolocation: Option<&dyn Geolocation>,
    timeout: Duration,
    maximum_age: Duration,
) -> ResolveResult {
    let Some(geolocation) = geolocation else {
        return Err(ResolveError::Unavailable("platform geolocation"));
    };

    debug!(?timeout, ?maximum_age, "requesting platform position");

    let options = PositionOptions {
        timeout,
        maximum_age,
    };

    let position = match tokio::time::timeout(timeout, geolocation.current_position(options)).await
    {
        Err(_) => return Err(ResolveError::Timeout(timeout)),
        Ok(Err(GeolocationError::PermissionDenied)) => {
            debug!("platform denied location permission");
            return Err(ResolveError::PermissionDenied);
        }
        Ok(Err(GeolocationError::Timeout)) => return Err(ResolveError::Timeout(timeout)),
        Ok(Err(GeolocationError::PositionUnavailable(msg))) => {
            warn!(error = %msg, "platform position unavailable");
            return Err(ResolveError::RequestFailed(msg));
        }
        Ok(Ok(position)) => position,
    };

    if position.latitude == 0.0 {
        // Webview platforms that deny permission without raising an error
        // report an all-zero position. A genuine 0.0 latitude (the equator)
        // is indistinguishable here; see DESIGN.md.
        debug!("zero latitude treated as permission failure");
        return Err(ResolveError::PermissionDenied);
    }

    hash::encode(position.latitude, position.longitude)
}
