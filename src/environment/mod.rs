//! Host environment detection
//!
//! The runtime identifies itself through a handful of signals: the
//! user-agent string, the presence of a native bridge or third-party SDK,
//! and an optional URL override parameter. [`EnvironmentSignals`] snapshots
//! them once per resolution call, and [`classify`] turns a snapshot into the
//! composition strategy to run. Detection is pure string-pattern matching
//! with no side effects.

mod classify;
mod signals;

pub use classify::{classify, Mode};
pub use signals::{EnvironmentSignals, Platform};
