//! Geohash value type and encoder wrapper.
//!
//! The encoding math itself lives in the external `geohash` crate; this
//! module pins the precision and wraps the result in an opaque value type.
//! Sources that already return an encoded hash (the native bridge, the URL
//! override) pass through [`Geohash::new`] verbatim.

use std::fmt;

use geohash::Coord;

use crate::error::ResolveError;

/// Fixed precision (number of characters) for encoded geohashes.
pub const GEOHASH_PRECISION: usize = 12;

/// An encoded (latitude, longitude) pair.
///
/// Opaque: no internal structure is inspected by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Geohash(String);

impl Geohash {
    /// Wraps a hash string that was already encoded by a source.
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Returns the hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the geohash, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Geohash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Encodes a coordinate pair at [`GEOHASH_PRECISION`].
///
/// # Arguments
///
/// * `latitude` - Degrees, -90.0 to 90.0
/// * `longitude` - Degrees, -180.0 to 180.0
pub fn encode(latitude: f64, longitude: f64) -> Result<Geohash, ResolveError> {
    geohash::encode(
        Coord {
            x: longitude,
            y: latitude,
        },
        GEOHASH_PRECISION,
    )
    .map(Geohash)
    .map_err(|e| ResolveError::Unknown(format!("geohash encoding failed: {}", e)))
}
