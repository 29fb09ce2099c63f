//! HTTP client abstraction for testability
//!
//! The network guess probe only needs a credential-less GET returning raw
//! bytes. Keeping the transport behind a trait allows dependency injection
//! and mock clients in tests.

use thiserror::Error;
use tracing::{debug, trace, warn};

use super::CapabilityFuture;

/// Errors that can occur during HTTP operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HttpError {
    /// The request could not be sent or the connection failed.
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },
}

/// Capability for asynchronous HTTP GET requests.
///
/// The returned future is `'static`: implementations move everything they
/// need into it, so the caller may detach the request (the guess probe
/// abandons the wait on timeout without cancelling the request).
pub trait HttpClient: Send + Sync {
    /// Performs an HTTP GET request, credentials omitted.
    ///
    /// # Arguments
    ///
    /// * `url` - The URL to request
    ///
    /// # Returns
    ///
    /// The response body as bytes or an error.
    fn get(&self, url: &str) -> CapabilityFuture<Result<Vec<u8>, HttpError>>;
}

/// Real HTTP client implementation using reqwest.
///
/// reqwest sends no cookies unless a cookie store is configured, which
/// matches the "credentials omitted" contract of the guess endpoint.
#[derive(Clone)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    /// Creates a new ReqwestClient with default configuration.
    pub fn new() -> Result<Self, HttpError> {
        Self::with_timeout(30)
    }

    /// Creates a new ReqwestClient with a custom request timeout.
    ///
    /// This is a transport-level safety net; the guess probe applies its own
    /// shorter race timeout on top.
    pub fn with_timeout(timeout_secs: u64) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| HttpError::RequestFailed(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> CapabilityFuture<Result<Vec<u8>, HttpError>> {
        let client = self.client.clone();
        let url = url.to_string();

        Box::pin(async move {
            trace!(url = %url, "HTTP GET request starting");

            let response = match client.get(&url).send().await {
                Ok(resp) => {
                    debug!(
                        url = %url,
                        status = resp.status().as_u16(),
                        "HTTP response received"
                    );
                    resp
                }
                Err(e) => {
                    warn!(
                        url = %url,
                        error = %e,
                        is_connect = e.is_connect(),
                        is_timeout = e.is_timeout(),
                        "HTTP request failed"
                    );
                    return Err(HttpError::RequestFailed(e.to_string()));
                }
            };

            if !response.status().is_success() {
                warn!(
                    url = %url,
                    status = response.status().as_u16(),
                    "HTTP error status"
                );
                return Err(HttpError::Status {
                    status: response.status().as_u16(),
                    url,
                });
            }

            match response.bytes().await {
                Ok(bytes) => {
                    trace!(url = %url, bytes = bytes.len(), "HTTP response body read");
                    Ok(bytes.to_vec())
                }
                Err(e) => {
                    warn!(url = %url, error = %e, "failed to read response body");
                    Err(HttpError::RequestFailed(format!(
                        "failed to read response: {}",
                        e
                    )))
                }
            }
        })
    }
}
