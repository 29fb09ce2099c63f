//! Geofix - environment-aware geohash location resolution
//!
//! This library resolves a caller's approximate geographic location into a
//! compact geohash string. The caller's code runs inside one of several host
//! environments (a plain browser, a hybrid-app webview with a native bridge,
//! or a third-party super-app webview), and each environment offers different
//! location sources with different reliability. Geofix detects the
//! environment and runs a priority-ordered fallback chain of asynchronous
//! probes under per-source and per-chain time budgets until one source
//! produces a geohash or all of them fail.
//!
//! # High-Level API
//!
//! For most use cases, build a [`Resolver`] with the capabilities the host
//! provides and call [`Resolver::resolve`]:
//!
//! ```ignore
//! use std::sync::Arc;
//! use geofix::capability::ReqwestClient;
//! use geofix::Resolver;
//!
//! let resolver = Resolver::new(user_agent, "https://restapi.example.com", Arc::new(ReqwestClient::new()?))
//!     .with_native_bridge(bridge)
//!     .with_query_params(query);
//!
//! let geohash = resolver.resolve().await?;
//! ```
//!
//! Advanced callers that want to bypass environment detection can invoke the
//! individual probe accessors (`native_bridge_geohash`, `platform_geohash`,
//! `network_guess_geohash`, `third_party_geohash`) directly.

pub mod capability;
pub mod config;
pub mod environment;
pub mod error;
pub mod hash;
pub mod probe;
pub mod resolver;
pub mod strategy;

/// Version of the geofix library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{ResolveError, ResolveResult};
pub use hash::Geohash;
pub use resolver::Resolver;
