//! Environment classifier.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::signals::EnvironmentSignals;

/// The composition strategy selected for a host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Hybrid-app webview: poll the native bridge first.
    NativeApp,

    /// Third-party super-app webview: ask the host SDK first.
    ThirdPartyApp,

    /// Plain browser: platform geolocation, then the network guess.
    PlainBrowser,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::NativeApp => write!(f, "native-app"),
            Mode::ThirdPartyApp => write!(f, "third-party-app"),
            Mode::PlainBrowser => write!(f, "plain-browser"),
        }
    }
}

/// Matches the hybrid app's user-agent signature.
fn native_app_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)Eleme").unwrap())
}

/// Matches the super-app webview's user-agent signature.
fn third_party_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"AlipayClient").unwrap())
}

/// Picks the composition strategy for a signal snapshot.
///
/// Pure and total: a string-pattern test on the user agent, checked in
/// priority order. The native-app signature wins over the third-party one,
/// and anything unrecognized is a plain browser.
pub fn classify(signals: &EnvironmentSignals) -> Mode {
    if native_app_pattern().is_match(&signals.user_agent) {
        Mode::NativeApp
    } else if third_party_pattern().is_match(&signals.user_agent) {
        Mode::ThirdPartyApp
    } else {
        Mode::PlainBrowser
    }
}
