//! URL query parameter accessor.

/// Host-provided accessor for the page's URL query parameters.
///
/// Parameter parsing itself is the host's concern; the resolver only reads
/// the `geohash` parameter through this trait for the override check.
pub trait QueryParams: Send + Sync {
    /// Returns the raw `geohash` query parameter, if the URL carries one.
    fn geohash(&self) -> Option<String>;
}
