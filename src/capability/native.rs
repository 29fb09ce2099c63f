//! Native bridge capability.

use super::CapabilityFuture;

/// Capability exposed by a wrapping native application to its webview.
///
/// The bridge resolves location on its own schedule; the poll probe asks it
/// repeatedly until a hash shows up.
pub trait NativeBridge: Send + Sync {
    /// Asks the native side for the globally cached geohash.
    ///
    /// `None` (or an empty string) means "not yet available" - not an
    /// error. The native side keeps working on it between polls.
    fn global_geohash(&self) -> CapabilityFuture<Option<String>>;
}
