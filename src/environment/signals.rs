//! Environment signal snapshot and platform detection.

use std::sync::OnceLock;

use regex::Regex;

use crate::hash::Geohash;

/// Read-only snapshot of the runtime's identifying signals.
///
/// Computed once at the start of each resolution call and never cached
/// across calls - the runtime can change between calls (the SDK may finish
/// injecting, the bridge may be torn down).
#[derive(Debug, Clone, PartialEq)]
pub struct EnvironmentSignals {
    /// The host's user-agent string.
    pub user_agent: String,

    /// Whether a native bridge capability is present.
    pub has_native_bridge: bool,

    /// Whether a third-party SDK capability is present.
    pub has_third_party_sdk: bool,

    /// Non-empty `geohash` URL parameter, if supplied out-of-band.
    pub override_geohash: Option<Geohash>,
}

/// Mobile platform family, derived from the user-agent string.
///
/// Only used to tag third-party SDK requests; anything that does not look
/// like iOS is treated as Android.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
}

/// Matches iOS-family user agents.
fn ios_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)iPhone|iPad|iPod|iOS").unwrap())
}

impl Platform {
    /// Detects the platform family from a user-agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        if ios_pattern().is_match(user_agent) {
            Platform::Ios
        } else {
            Platform::Android
        }
    }

    /// Platform-tagged business identifier for SDK location requests.
    pub fn biz_type(self) -> &'static str {
        match self {
            Platform::Ios => "iOS-position",
            Platform::Android => "Android-position",
        }
    }
}
