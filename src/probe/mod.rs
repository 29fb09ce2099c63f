//! Location source probes
//!
//! Each probe is one asynchronous attempt to obtain a geohash from a single
//! source. Probes never block indefinitely: every probe that can hang (the
//! bridge poll loop, the network guess, platform geolocation) is wrapped by
//! an explicit timeout that guarantees settlement. Failures are delivered
//! through the same [`crate::ResolveResult`] channel as success; nothing
//! escapes a probe's boundary as a panic.
//!
//! Probes take their capability as an `Option` and fail immediately with
//! [`crate::ResolveError::Unavailable`] when the host did not provide it.

pub mod geolocation;
pub mod native_bridge;
pub mod network_guess;
pub mod third_party;
