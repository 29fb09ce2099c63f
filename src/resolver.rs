//! Top-level geohash resolver.
//!
//! The resolver owns the injected capabilities and the resolution settings,
//! and runs the priority chain: URL override first, then the strategy
//! matching the classified host environment. It also exposes each probe
//! individually for callers that want to bypass environment detection.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::capability::{Geolocation, HttpClient, NativeBridge, QueryParams, ThirdPartySdk};
use crate::config::ResolveConfig;
use crate::environment::{classify, EnvironmentSignals, Mode, Platform};
use crate::error::ResolveResult;
use crate::hash::Geohash;
use crate::probe;
use crate::strategy::{self, ProbeContext};

/// Environment-aware geohash resolver.
///
/// Built from the signals and capabilities the host provides; absent
/// capabilities simply make their probes fail with `Unavailable`.
///
/// # Example
///
/// ```ignore
/// let resolver = Resolver::new(user_agent, api_host, http)
///     .with_native_bridge(bridge)
///     .with_query_params(query);
///
/// let geohash = resolver.resolve().await?;
/// ```
pub struct Resolver {
    user_agent: String,
    api_host: String,
    http: Arc<dyn HttpClient>,
    query: Option<Arc<dyn QueryParams>>,
    bridge: Option<Arc<dyn NativeBridge>>,
    geolocation: Option<Arc<dyn Geolocation>>,
    sdk: Option<Arc<dyn ThirdPartySdk>>,
    config: ResolveConfig,
}

impl Resolver {
    /// Creates a resolver with the mandatory signals and transport.
    ///
    /// # Arguments
    ///
    /// * `user_agent` - The host's user-agent string
    /// * `api_host` - Origin of the city-guess endpoint
    /// * `http` - HTTP transport for the network guess probe
    pub fn new(
        user_agent: impl Into<String>,
        api_host: impl Into<String>,
        http: Arc<dyn HttpClient>,
    ) -> Self {
        Self {
            user_agent: user_agent.into(),
            api_host: api_host.into(),
            http,
            query: None,
            bridge: None,
            geolocation: None,
            sdk: None,
            config: ResolveConfig::default(),
        }
    }

    /// Attaches the URL query parameter accessor.
    pub fn with_query_params(mut self, query: Arc<dyn QueryParams>) -> Self {
        self.query = Some(query);
        self
    }

    /// Attaches the native bridge capability.
    pub fn with_native_bridge(mut self, bridge: Arc<dyn NativeBridge>) -> Self {
        self.bridge = Some(bridge);
        self
    }

    /// Attaches the platform geolocation capability.
    pub fn with_geolocation(mut self, geolocation: Arc<dyn Geolocation>) -> Self {
        self.geolocation = Some(geolocation);
        self
    }

    /// Attaches the third-party SDK capability.
    pub fn with_third_party_sdk(mut self, sdk: Arc<dyn ThirdPartySdk>) -> Self {
        self.sdk = Some(sdk);
        self
    }

    /// Replaces the default resolution settings.
    pub fn with_config(mut self, config: ResolveConfig) -> Self {
        self.config = config;
        self
    }

    /// Snapshots the environment signals for one resolution call.
    ///
    /// Computed fresh per call - the runtime can change between calls.
    pub fn signals(&self) -> EnvironmentSignals {
        EnvironmentSignals {
            user_agent: self.user_agent.clone(),
            has_native_bridge: self.bridge.is_some(),
            has_third_party_sdk: self.sdk.is_some(),
            override_geohash: self.override_geohash(),
        }
    }

    /// Override check: the non-empty `geohash` URL parameter, if present.
    ///
    /// This is the highest-priority location source; `resolve` returns it
    /// without invoking any probe. Synchronous and side-effect free.
    pub fn override_geohash(&self) -> Option<Geohash> {
        self.query
            .as_ref()
            .and_then(|query| query.geohash())
            .filter(|hash| !hash.is_empty())
            .map(Geohash::new)
    }

    /// Resolves a geohash with the configured defaults
    /// (9 s total budget, browser fallback disabled).
    pub async fn resolve(&self) -> ResolveResult {
        self.resolve_with(
            self.config.total_timeout,
            self.config.browser_fallback_disabled,
        )
        .await
    }

    /// Resolves a geohash with an explicit budget and fallback setting.
    pub async fn resolve_with(
        &self,
        timeout: Duration,
        browser_fallback_disabled: bool,
    ) -> ResolveResult {
        self.resolve_with_cancellation(timeout, browser_fallback_disabled, CancellationToken::new())
            .await
    }

    /// Resolves a geohash under a shared cancellation token.
    ///
    /// Cancelling the token settles the call with
    /// [`crate::ResolveError::Cancelled`]; all probe timers stop with it.
    pub async fn resolve_with_cancellation(
        &self,
        timeout: Duration,
        browser_fallback_disabled: bool,
        cancel: CancellationToken,
    ) -> ResolveResult {
        let signals = self.signals();

        if let Some(hash) = signals.override_geohash.clone() {
            debug!(%hash, "using override geohash from query parameters");
            return Ok(hash);
        }

        let mode = classify(&signals);
        debug!(%mode, user_agent = %signals.user_agent, ?timeout, "classified host environment");

        let ctx = self.probe_context(&cancel);
        match mode {
            Mode::NativeApp => strategy::native_app(&ctx, timeout, browser_fallback_disabled).await,
            Mode::ThirdPartyApp => strategy::third_party_app(&ctx).await,
            Mode::PlainBrowser => strategy::plain_browser(&ctx, timeout).await,
        }
    }

    /// Runs the native-bridge poll probe directly, with the configured
    /// poll budget.
    pub async fn native_bridge_geohash(&self) -> ResolveResult {
        probe::native_bridge::poll(
            self.bridge.as_deref(),
            self.config.poll_budget,
            self.config.poll_interval,
            &CancellationToken::new(),
        )
        .await
    }

    /// Runs the platform geolocation probe directly, with the configured
    /// geolocation timeout.
    pub async fn platform_geohash(&self) -> ResolveResult {
        probe::geolocation::locate(
            self.geolocation.as_deref(),
            self.config.geolocation_timeout,
            self.config.position_max_age,
        )
        .await
    }

    /// Runs the network guess probe directly.
    pub async fn network_guess_geohash(&self) -> ResolveResult {
        probe::network_guess::guess(&*self.http, &self.api_host, self.config.guess_timeout).await
    }

    /// Runs the third-party SDK probe directly.
    pub async fn third_party_geohash(&self) -> ResolveResult {
        probe::third_party::locate(
            self.sdk.as_deref(),
            Platform::from_user_agent(&self.user_agent),
            self.config.sdk_timeout,
            self.config.sdk_cache_timeout,
        )
        .await
    }

    fn probe_context<'a>(&'a self, cancel: &'a CancellationToken) -> ProbeContext<'a> {
        ProbeContext {
            bridge: self.bridge.as_deref(),
            geolocation: self.geolocation.as_deref(),
            sdk: self.sdk.as_deref(),
            http: &*self.http,
            api_host: &self.api_host,
            platform: Platform::from_user_agent(&self.user_agent),
            config: &self.config,
            cancel,
        }
    }
}
