//! Process-wide cancellation scope.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio_util::sync::{CancellationToken, WaitForCancellationFuture};

/// Cancellable "the process should keep running" state.
///
/// Clones share the same token. The first [`trigger`](Self::trigger) cancels it;
/// later calls are no-ops.
#[derive(Debug, Clone, Default)]
pub struct ExecutionScope {
    token: CancellationToken,
    triggered: Arc<AtomicBool>,
}

impl ExecutionScope {
    /// Create a new, live scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the scope. Returns `true` only for the call that cancelled it.
    pub fn trigger(&self) -> bool {
        let first = self
            .triggered
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();
        if first {
            self.token.cancel();
        }
        first
    }

    /// Whether the scope has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Completes once the scope is cancelled (immediately if it already is).
    pub fn cancelled(&self) -> WaitForCancellationFuture<'_> {
        self.token.cancelled()
    }
}
