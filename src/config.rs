//! Default values and constants for resolution settings.
//!
//! Timeouts come from the production defaults of the fallback chain: a 9 s
//! overall budget, 5 s per location source, 3 s for the network guess, and a
//! 100 ms native-bridge polling interval.

use std::time::Duration;

/// Default overall budget for one `resolve` call.
pub const DEFAULT_TOTAL_TIMEOUT: Duration = Duration::from_millis(9000);

/// Whether native-app mode falls back to browser mode on failure.
/// Disabled by default: inside the hybrid app the bridge is the only
/// source trusted to match the user's delivery address.
pub const DEFAULT_BROWSER_FALLBACK_DISABLED: bool = true;

/// Interval between native-bridge polls.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Budget for the native-bridge poll probe when invoked directly.
pub const DEFAULT_POLL_BUDGET: Duration = Duration::from_millis(5000);

/// Timeout handed to the platform geolocation capability when invoked
/// directly.
pub const DEFAULT_GEOLOCATION_TIMEOUT: Duration = Duration::from_millis(5000);

/// Maximum age of a cached platform position the capability may reuse.
pub const DEFAULT_POSITION_MAX_AGE: Duration = Duration::from_millis(10_000);

/// Budget for the network guess probe, independent of the chain budget.
pub const DEFAULT_GUESS_TIMEOUT: Duration = Duration::from_millis(3000);

/// Timeout passed to the third-party SDK, in SDK-internal units (~seconds).
pub const DEFAULT_SDK_TIMEOUT: u32 = 10;

/// Location-cache tolerance passed to the third-party SDK, in SDK-internal
/// units (1800 ≈ 30 minutes).
pub const DEFAULT_SDK_CACHE_TIMEOUT: u32 = 1800;

/// Tunable settings for a [`crate::Resolver`].
///
/// `Default` reproduces the production values above; tests shrink the
/// durations to keep timing assertions fast.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveConfig {
    /// Overall budget for one `resolve` call.
    pub total_timeout: Duration,

    /// Whether native-app mode fails immediately instead of falling back to
    /// browser mode.
    pub browser_fallback_disabled: bool,

    /// Interval between native-bridge polls.
    pub poll_interval: Duration,

    /// Budget for the native-bridge poll probe when invoked directly
    /// (strategies derive their own budget from `total_timeout`).
    pub poll_budget: Duration,

    /// Timeout for the platform geolocation capability when invoked
    /// directly.
    pub geolocation_timeout: Duration,

    /// Maximum age of a cached platform position.
    pub position_max_age: Duration,

    /// Budget for the network guess probe.
    pub guess_timeout: Duration,

    /// SDK-internal timeout for the third-party probe.
    pub sdk_timeout: u32,

    /// SDK-internal cache tolerance for the third-party probe.
    pub sdk_cache_timeout: u32,
}

impl Default for ResolveConfig {
    fn default() -> Self {
        Self {
            total_timeout: DEFAULT_TOTAL_TIMEOUT,
            browser_fallback_disabled: DEFAULT_BROWSER_FALLBACK_DISABLED,
            poll_interval: DEFAULT_POLL_INTERVAL,
            poll_budget: DEFAULT_POLL_BUDGET,
            geolocation_timeout: DEFAULT_GEOLOCATION_TIMEOUT,
            position_max_age: DEFAULT_POSITION_MAX_AGE,
            guess_timeout: DEFAULT_GUESS_TIMEOUT,
            sdk_timeout: DEFAULT_SDK_TIMEOUT,
            sdk_cache_timeout: DEFAULT_SDK_CACHE_TIMEOUT,
        }
    }
}
