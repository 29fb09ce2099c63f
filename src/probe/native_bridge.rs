//! Native-bridge polling probe.
//!
//! The bridge resolves location on its own schedule and exposes a "global
//! geohash" that starts out empty. This probe asks for it on a fixed
//! interval until it turns non-empty or the budget runs out.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::capability::NativeBridge;
use crate::error::{ResolveError, ResolveResult};
use crate::hash::Geohash;

/// Polls the native bridge until it yields a non-empty geohash.
///
/// The interval timer is owned by the polling future, so it is dropped - and
/// polling stops - on every exit path: success, timeout, and cancellation.
/// The first poll fires immediately. The budget bounds the whole loop,
/// including a bridge call that is still in flight when it expires.
///
/// # Arguments
///
/// * `bridge` - The bridge capability, if the host provides one
/// * `budget` - Overall timeout for the poll loop
/// * `interval` - Delay between polls
/// * `cancel` - External cancellation signal
pub async fn poll(
    bridge: Option<&dyn NativeBridge>,
    budget: Duration,
    interval: Duration,
    cancel: &CancellationToken,
) -> ResolveResult {
    let Some(bridge) = bridge else {
        return Err(ResolveError::Unavailable("native bridge"));
    };

    debug!(?budget, ?interval, "starting native bridge poll");

    let poll_loop = async {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            match bridge.global_geohash().await {
                Some(hash) if !hash.is_empty() => return Geohash::new(hash),
                _ => trace!("bridge geohash not yet available"),
            }
        }
    };

    tokio::select! {
        outcome = tokio::time::timeout(budget, poll_loop) => match outcome {
            Ok(hash) => {
                debug!(%hash, "native bridge returned geohash");
                Ok(hash)
            }
            Err(_) => {
                debug!(?budget, "native bridge poll timed out");
                Err(ResolveError::Timeout(budget))
            }
        },
        _ = cancel.cancelled() => {
            debug!("native bridge poll cancelled");
            Err(ResolveError::Cancelled)
        }
    }
}
