//! Deferred actions run once no call is outstanding.

// ============================================================================
// Imports
// ============================================================================

use std::collections::VecDeque;
use std::mem;
use std::sync::atomic::Ordering;

use tracing::trace;

use super::{DeferredAction, InspectorBackend};

// ============================================================================
// Deferred Drain
// ============================================================================

impl InspectorBackend {
    /// Runs `action` once no call is outstanding.
    ///
    /// Runs synchronously when the call table is already empty. Otherwise
    /// the action is queued and runs exactly once, in FIFO order with other
    /// queued actions, after the response that empties the table.
    pub fn run_when_idle<F>(&self, action: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.deferred.lock().push_back(Box::new(action));
        self.run_deferred_if_idle();
    }

    /// Returns the number of queued actions.
    #[inline]
    #[must_use]
    pub fn deferred_count(&self) -> usize {
        self.inner.deferred.lock().len()
    }

    /// Drains the deferred queue if no call is outstanding.
    ///
    /// A call whose completion is still running counts as outstanding.
    /// Lock order is calls then deferred; both are released before any
    /// action runs. Actions queued while draining are run by the same loop.
    pub(crate) fn run_deferred_if_idle(&self) {
        loop {
            let batch = {
                let calls = self.inner.calls.lock();
                if calls.outstanding() > 0 || self.inner.dispatching.load(Ordering::Acquire) > 0 {
                    return;
                }
                let mut deferred = self.inner.deferred.lock();
                if deferred.is_empty() {
                    return;
                }
                mem::take(&mut *deferred)
            };

            trace!(actions = batch.len(), "Running deferred actions");
            run_batch(batch);
        }
    }
}

fn run_batch(batch: VecDeque<DeferredAction>) {
    for action in batch {
        action();
    }
}

// ============================================================================
// Tests
// ============================================================================
