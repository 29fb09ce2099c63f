//! Network-based location guess probe.
//!
//! Asks a remote endpoint to guess the caller's city from its network
//! address, racing the request against a timer. The loser of the race is
//! ignored, not cancelled: the request is detached, and a response arriving
//! after the timer fired is silently discarded.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::capability::HttpClient;
use crate::error::{ResolveError, ResolveResult};
use crate::hash;

/// Path of the city-guess endpoint, relative to the configured API host.
pub const GUESS_PATH: &str = "/shopping/v1/cities/guess";

#[derive(Debug, Deserialize)]
struct CityGuess {
    latitude: f64,
    longitude: f64,
}

/// Requests a city guess and encodes the returned coordinates.
///
/// # Arguments
///
/// * `http` - HTTP transport capability
/// * `api_host` - Origin of the guess endpoint, e.g. `https://restapi.example.com`
/// * `timeout` - Race budget; whichever of request and timer settles first wins
pub async fn guess(http: &dyn HttpClient, api_host: &str, timeout: Duration) -> ResolveResult {
    let url = format!("{}{}", api_host.trim_end_matches('/'), GUESS_PATH);
    debug!(url = %url, ?timeout, "requesting city guess");

    // Detached so that losing the race abandons the wait, not the request.
    let request = tokio::spawn(http.get(&url));

    match tokio::time::timeout(timeout, request).await {
        Err(_) => {
            debug!(?timeout, "city guess timed out");
            Err(ResolveError::Timeout(timeout))
        }
        Ok(Err(join_err)) => Err(ResolveError::Unknown(format!(
            "guess request task failed: {}",
            join_err
        ))),
        Ok(Ok(Err(err))) => {
            warn!(error = %err, "city guess request failed");
            Err(ResolveError::RequestFailed(err.to_string()))
        }
        Ok(Ok(Ok(body))) => {
            let city: CityGuess = serde_json::from_slice(&body).map_err(|err| {
                ResolveError::RequestFailed(format!("invalid guess response: {}", err))
            })?;
            debug!(
                latitude = city.latitude,
                longitude = city.longitude,
                "city guess resolved"
            );
            hash::encode(city.latitude, city.longitude)
        }
    }
}
