//! Animation completion as a cancellable, timed future.
//!
//! Hosts report the end of a CSS transition (or an equivalent) through a
//! future. That signal is unreliable: the event can be skipped when the
//! element is hidden or the tab is throttled. Every wait is therefore
//! raced against a fallback timer and a cancellation token, and whichever
//! resolves first settles the animation.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Identifies one animation. A settle report carrying any other token is
/// stale and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TransitionToken(pub u64);

impl TransitionToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl std::fmt::Display for TransitionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How an awaited animation came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionEnd {
    /// The host reported completion.
    Finished,
    /// The fallback timer fired first.
    TimedOut,
    /// The wait was abandoned (carousel reset or driver shutdown).
    Cancelled,
}

/// An in-flight animation and its deadlines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTransition {
    pub token: TransitionToken,
    pub duration: Duration,
    pub fallback: Duration,
}

impl PendingTransition {
    pub fn new(token: TransitionToken, duration: Duration, slack: Duration) -> Self {
        Self {
            token,
            duration,
            fallback: duration + slack,
        }
    }
}

/// Wait for `end`, giving up after `fallback` or when `cancel` fires.
pub async fn await_transition<F>(
    token: TransitionToken,
    end: F,
    fallback: Duration,
    cancel: CancellationToken,
) -> TransitionEnd
where
    F: Future<Output = ()>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            debug!(%token, "transition wait cancelled");
            TransitionEnd::Cancelled
        }
        _ = end => TransitionEnd::Finished,
        _ = tokio::time::sleep(fallback) => {
            warn!(%token, ?fallback, "transition end not reported, forcing completion");
            TransitionEnd::TimedOut
        }
    }
}
