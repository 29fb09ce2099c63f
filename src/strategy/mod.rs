//! Composition strategies
//!
//! A strategy sequences probes with fallback-on-failure semantics and
//! subdivides the caller's time budget among them. Each fallback is invoked
//! at most once; the last observed failure surfaces as the strategy's own
//! failure, and no failure kind is ever upgraded to success.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::capability::{Geolocation, HttpClient, NativeBridge, ThirdPartySdk};
use crate::config::ResolveConfig;
use crate::environment::Platform;
use crate::error::{ResolveError, ResolveResult};
use crate::probe;

/// Capabilities and settings a strategy may draw on.
///
/// Borrowed from the resolver for the duration of one call; probes own no
/// shared mutable state, so the context is freely reusable across the
/// fallback chain.
pub struct ProbeContext<'a> {
    /// Native bridge, present inside the hybrid app.
    pub bridge: Option<&'a dyn NativeBridge>,

    /// Platform geolocation API, present in browsers that grant it.
    pub geolocation: Option<&'a dyn Geolocation>,

    /// Third-party SDK, present inside the super-app webview.
    pub sdk: Option<&'a dyn ThirdPartySdk>,

    /// HTTP transport for the network guess.
    pub http: &'a dyn HttpClient,

    /// Origin of the guess endpoint.
    pub api_host: &'a str,

    /// Platform family for SDK request tagging.
    pub platform: Platform,

    /// Resolution settings.
    pub config: &'a ResolveConfig,

    /// External cancellation signal, shared across the chain.
    pub cancel: &'a CancellationToken,
}

/// Native-app mode: poll the bridge with two thirds of the budget.
///
/// On failure, fails immediately when browser fallback is disabled (the
/// default); otherwise runs [`plain_browser`] with the remaining third.
pub async fn native_app(
    ctx: &ProbeContext<'_>,
    budget: Duration,
    browser_fallback_disabled: bool,
) -> ResolveResult {
    let native_budget = budget * 2 / 3;

    match probe::native_bridge::poll(ctx.bridge, native_budget, ctx.config.poll_interval, ctx.cancel)
        .await
    {
        Ok(hash) => Ok(hash),
        // cancellation is terminal, never a fallback trigger
        Err(ResolveError::Cancelled) => Err(ResolveError::Cancelled),
        Err(err) if browser_fallback_disabled => {
            debug!(error = %err, "native bridge failed, browser fallback disabled");
            Err(err)
        }
        Err(err) => {
            debug!(error = %err, "native bridge failed, falling back to browser mode");
            plain_browser(ctx, budget / 3).await
        }
    }
}

/// Plain-browser mode: platform geolocation with the full budget, then the
/// network guess on any failure.
///
/// The guess probe keeps its own fixed budget, independent of `budget`.
pub async fn plain_browser(ctx: &ProbeContext<'_>, budget: Duration) -> ResolveResult {
    match probe::geolocation::locate(ctx.geolocation, budget, ctx.config.position_max_age).await {
        Ok(hash) => Ok(hash),
        Err(err) => {
            debug!(error = %err, "platform geolocation failed, falling back to network guess");
            probe::network_guess::guess(ctx.http, ctx.api_host, ctx.config.guess_timeout).await
        }
    }
}

/// Third-party-app mode: the host SDK, then the network guess on failure.
pub async fn third_party_app(ctx: &ProbeContext<'_>) -> ResolveResult {
    match probe::third_party::locate(
        ctx.sdk,
        ctx.platform,
        ctx.config.sdk_timeout,
        ctx.config.sdk_cache_timeout,
    )
    .await
    {
        Ok(hash) => Ok(hash),
        Err(err) => {
            debug!(error = %err, "third-party sdk failed, falling back to network guess");
            probe::network_guess::guess(ctx.http, ctx.api_host, ctx.config.guess_timeout).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::{
        CapabilityFuture, GeolocationError, HttpError, MockHttpClient, Position, PositionOptions,
        SdkError, SdkLocationRequest,
    };
    use crate::error::ResolveError;
    use crate::hash;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Geolocation that always fails, counting invocations.
    struct FailingGeolocation {
        calls: Arc<AtomicUsize>,
    }

    impl Geolocation for FailingGeolocation {
        fn current_position(
            &self,
            _options: PositionOptions,
        ) -> CapabilityFuture<Result<Position, GeolocationError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Box::pin(async { Err(GeolocationError::PermissionDenied) })
        }
    }

    /// SDK that always fails.
    struct FailingSdk;

    impl ThirdPartySdk for FailingSdk {
        fn version(&self) -> String {
            "10.3.80".to_string()
        }

        fn get_location(
            &self,
            _timeout: u32,
            _cache_timeout: u32,
        ) -> CapabilityFuture<Result<Position, SdkError>> {
            Box::pin(async { Err(SdkError("denied".to_string())) })
        }

        fn get_current_location(
            &self,
            _request: SdkLocationRequest,
        ) -> CapabilityFuture<Result<Position, SdkError>> {
            Box::pin(async { Err(SdkError("denied".to_string())) })
        }
    }

    /// HTTP client counting the guess invocations.
    struct CountingHttpClient {
        calls: Arc<AtomicUsize>,
        response: Result<Vec<u8>, HttpError>,
    }

    impl HttpClient for CountingHttpClient {
        fn get(&self, _url: &str) -> CapabilityFuture<Result<Vec<u8>, HttpError>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let response = self.response.clone();
            Box::pin(async move { response })
        }
    }

    fn test_config() -> ResolveConfig {
        ResolveConfig {
            poll_interval: Duration::from_millis(10),
            guess_timeout: Duration::from_millis(200),
            ..ResolveConfig::default()
        }
    }

    fn guess_body() -> Vec<u8> {
        br#"{"latitude": 57.64911, "longitude": 10.40744}"#.to_vec()
    }

    #[tokio::test]
    async fn test_plain_browser_falls_back_to_guess_exactly_once() {
        let geo_calls = Arc::new(AtomicUsize::new(0));
        let geo = FailingGeolocation {
            calls: geo_calls.clone(),
        };
        let http_calls = Arc::new(AtomicUsize::new(0));
        let http = CountingHttpClient {
            calls: http_calls.clone(),
            response: Ok(guess_body()),
        };
        let config = test_config();
        let cancel = CancellationToken::new();
        let ctx = ProbeContext {
            bridge: None,
            geolocation: Some(&geo),
            sdk: None,
            http: &http,
            api_host: "https://restapi.example.com",
            platform: Platform::Android,
            config: &config,
            cancel: &cancel,
        };

        let result = plain_browser(&ctx, Duration::from_millis(100)).await;

        assert_eq!(result, hash::encode(57.64911, 10.40744));
        assert_eq!(geo_calls.load(Ordering::SeqCst), 1);
        assert_eq!(http_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_plain_browser_surfaces_guess_failure() {
        let geo = FailingGeolocation {
            calls: Arc::new(AtomicUsize::new(0)),
        };
        let http = CountingHttpClient {
            calls: Arc::new(AtomicUsize::new(0)),
            response: Err(HttpError::RequestFailed("offline".to_string())),
        };
        let config = test_config();
        let cancel = CancellationToken::new();
        let ctx = ProbeContext {
            bridge: None,
            geolocation: Some(&geo),
            sdk: None,
            http: &http,
            api_host: "https://restapi.example.com",
            platform: Platform::Android,
            config: &config,
            cancel: &cancel,
        };

        let result = plain_browser(&ctx, Duration::from_millis(100)).await;
        assert!(matches!(result, Err(ResolveError::RequestFailed(_))));
    }

    #[tokio::test]
    async fn test_native_app_fallback_disabled_fails_immediately() {
        let geo_calls = Arc::new(AtomicUsize::new(0));
        let geo = FailingGeolocation {
            calls: geo_calls.clone(),
        };
        let http_calls = Arc::new(AtomicUsize::new(0));
        let http = CountingHttpClient {
            calls: http_calls.clone(),
            response: Ok(guess_body()),
        };
        let config = test_config();
        let cancel = CancellationToken::new();
        let ctx = ProbeContext {
            bridge: None,
            geolocation: Some(&geo),
            sdk: None,
            http: &http,
            api_host: "https://restapi.example.com",
            platform: Platform::Android,
            config: &config,
            cancel: &cancel,
        };

        let result = native_app(&ctx, Duration::from_millis(300), true).await;

        assert_eq!(result, Err(ResolveError::Unavailable("native bridge")));
        assert_eq!(geo_calls.load(Ordering::SeqCst), 0);
        assert_eq!(http_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_native_app_fallback_enabled_runs_browser_mode() {
        let geo_calls = Arc::new(AtomicUsize::new(0));
        let geo = FailingGeolocation {
            calls: geo_calls.clone(),
        };
        let http = CountingHttpClient {
            calls: Arc::new(AtomicUsize::new(0)),
            response: Ok(guess_body()),
        };
        let config = test_config();
        let cancel = CancellationToken::new();
        let ctx = ProbeContext {
            bridge: None,
            geolocation: Some(&geo),
            sdk: None,
            http: &http,
            api_host: "https://restapi.example.com",
            platform: Platform::Android,
            config: &config,
            cancel: &cancel,
        };

        let result = native_app(&ctx, Duration::from_millis(300), false).await;

        assert_eq!(result, hash::encode(57.64911, 10.40744));
        assert_eq!(geo_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_native_app_cancellation_skips_fallback() {
        struct SilentBridge;

        impl crate::capability::NativeBridge for SilentBridge {
            fn global_geohash(&self) -> CapabilityFuture<Option<String>> {
                Box::pin(async { Some(String::new()) })
            }
        }

        let bridge = SilentBridge;
        let geo_calls = Arc::new(AtomicUsize::new(0));
        let geo = FailingGeolocation {
            calls: geo_calls.clone(),
        };
        let http = CountingHttpClient {
            calls: Arc::new(AtomicUsize::new(0)),
            response: Ok(guess_body()),
        };
        let config = test_config();
        let cancel = CancellationToken::new();
        let ctx = ProbeContext {
            bridge: Some(&bridge),
            geolocation: Some(&geo),
            sdk: None,
            http: &http,
            api_host: "https://restapi.example.com",
            platform: Platform::Android,
            config: &config,
            cancel: &cancel,
        };

        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(30)).await;
            canceller.cancel();
        });

        // fallback enabled, but cancellation must not trigger it
        let result = native_app(&ctx, Duration::from_secs(9), false).await;

        assert_eq!(result, Err(ResolveError::Cancelled));
        assert_eq!(geo_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_third_party_app_falls_back_to_guess() {
        let sdk = FailingSdk;
        let http_calls = Arc::new(AtomicUsize::new(0));
        let http = CountingHttpClient {
            calls: http_calls.clone(),
            response: Ok(guess_body()),
        };
        let config = test_config();
        let cancel = CancellationToken::new();
        let ctx = ProbeContext {
            bridge: None,
            geolocation: None,
            sdk: Some(&sdk),
            http: &http,
            api_host: "https://restapi.example.com",
            platform: Platform::Ios,
            config: &config,
            cancel: &cancel,
        };

        let result = third_party_app(&ctx).await;

        assert_eq!(result, hash::encode(57.64911, 10.40744));
        assert_eq!(http_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_third_party_app_surfaces_guess_failure() {
        let http = MockHttpClient {
            response: Err(HttpError::RequestFailed("offline".to_string())),
        };
        let config = test_config();
        let cancel = CancellationToken::new();
        let ctx = ProbeContext {
            bridge: None,
            geolocation: None,
            sdk: None,
            http: &http,
            api_host: "https://restapi.example.com",
            platform: Platform::Ios,
            config: &config,
            cancel: &cancel,
        };

        // absent SDK, then failing guess: the guess failure surfaces
        let result = third_party_app(&ctx).await;
        assert!(matches!(result, Err(ResolveError::RequestFailed(_))));
    }
}
