//! The one-shot "application restored" barrier.
//!
//! The shell resolves a [`RestoredBarrier`] exactly once, after persisted
//! layout and state have been restored at startup. Plugins that need to
//! sequence first-time work behind restoration (most notably the settings
//! synchronization flow) await the barrier, typically joined with a settings
//! load:
//!
//! ```
//! # async fn demo() {
//! use std::sync::Arc;
//! use quantlab_core::RestoredBarrier;
//!
//! let restored = Arc::new(RestoredBarrier::new());
//!
//! // Elsewhere, the shell latches the barrier once startup completes:
//! restored.resolve();
//!
//! // Waiting after resolution completes immediately.
//! restored.wait().await;
//! # }
//! ```
//!
//! Resolution is idempotent: calling [`resolve`](RestoredBarrier::resolve)
//! more than once has no further effect, and every waiter past or future
//! observes the same latched state.

use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::Notify;

use crate::logging::targets;

/// A one-shot async barrier that latches permanently once resolved.
pub struct RestoredBarrier {
    resolved: AtomicBool,
    notify: Notify,
}

impl Default for RestoredBarrier {
    fn default() -> Self {
        Self::new()
    }
}

impl RestoredBarrier {
    /// Create a new, unresolved barrier.
    pub fn new() -> Self {
        Self {
            resolved: AtomicBool::new(false),
            notify: Notify::new(),
        }
    }

    /// Latch the barrier, waking all current and future waiters.
    pub fn resolve(&self) {
        if self.resolved.swap(true, Ordering::SeqCst) {
            return;
        }
        tracing::debug!(target: targets::RESTORED, "application restored");
        self.notify.notify_waiters();
    }

    /// Whether the barrier has been resolved.
    pub fn is_resolved(&self) -> bool {
        self.resolved.load(Ordering::SeqCst)
    }

    /// Suspend until the barrier resolves.
    ///
    /// Completes immediately if the barrier has already been resolved.
    pub async fn wait(&self) {
        loop {
            if self.is_resolved() {
                return;
            }
            let notified = self.notify.notified();
            // Re-check after registering interest so a resolve() racing
            // between the check and the await is not missed.
            if self.is_resolved() {
                return;
            }
            notified.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_wait_after_resolve_completes_immediately() {
        let barrier = RestoredBarrier::new();
        barrier.resolve();
        assert!(barrier.is_resolved());
        barrier.wait().await;
    }

    #[tokio::test]
    async fn test_wait_before_resolve() {
        let barrier = Arc::new(RestoredBarrier::new());

        let barrier_clone = barrier.clone();
        let waiter = tokio::spawn(async move {
            barrier_clone.wait().await;
        });

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(!waiter.is_finished());

        barrier.resolve();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should wake after resolve")
            .expect("waiter task should not panic");
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent() {
        let barrier = RestoredBarrier::new();
        barrier.resolve();
        barrier.resolve();
        assert!(barrier.is_resolved());
        barrier.wait().await;
    }
}
