//! Host capability abstractions
//!
//! The host environment injects what it has: a native bridge, the platform
//! geolocation API, a third-party super-app SDK, an HTTP transport, and an
//! accessor for URL query parameters. Each capability is an object-safe
//! trait so probes are polymorphic over "present / absent" rather than
//! relying on ambient globals, and so tests can substitute mocks.
//!
//! Capability methods that suspend return a [`CapabilityFuture`]; the
//! `'static` bound lets the network guess probe detach its request from the
//! race that times it.

mod geolocation;
mod http;
mod native;
mod query;
mod sdk;

use std::future::Future;
use std::pin::Pin;

pub use geolocation::{Geolocation, GeolocationError, Position, PositionOptions};
pub use http::{HttpClient, HttpError, ReqwestClient};
pub use native::NativeBridge;
pub use query::QueryParams;
pub use sdk::{SdkError, SdkLocationRequest, ThirdPartySdk};

#[cfg(test)]
pub use http::tests::MockHttpClient;

/// Boxed future returned by capability methods.
pub type CapabilityFuture<T> = Pin<Box<dyn Future<Output = T> + Send + 'static>>;
