//! Pending call bookkeeping.
//!
//! Maps call ids to the completion waiting for their response. The number
//! of entries is the outstanding call count.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::time::Instant;

use rustc_hash::FxHashMap;

use crate::identifiers::CallId;
use crate::protocol::{Arguments, ProtocolError};

// ============================================================================
// Types
// ============================================================================

/// Completion callback for a command.
///
/// Invoked exactly once with the remote error (if any) first, followed by
/// the result fields in declared reply order.
pub type Completion = Box<dyn FnOnce(Option<ProtocolError>, Arguments) + Send>;

// ============================================================================
// PendingCall
// ============================================================================

/// A request waiting for its response.
pub struct PendingCall {
    /// Correlation id.
    pub id: CallId,
    /// Method the request was issued for.
    pub method: String,
    /// Callback to run on response.
    pub completion: Completion,
    /// Send time, recorded when time stats are enabled.
    pub issued_at: Option<Instant>,
}

impl fmt::Debug for PendingCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingCall")
            .field("id", &self.id)
            .field("method", &self.method)
            .field("issued_at", &self.issued_at)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// CallTable
// ============================================================================

/// Table of outstanding calls keyed by id.
///
/// Ids start at [`CallId::FIRST`] and are never reused.
pub struct CallTable {
    /// Next id to hand out.
    next_id: CallId,
    /// Outstanding calls.
    pending: FxHashMap<CallId, PendingCall>,
}

impl CallTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: CallId::FIRST,
            pending: FxHashMap::default(),
        }
    }

    /// Records a new pending call and returns its id.
    ///
    /// A missing completion is replaced with a no-op.
    pub fn allocate(
        &mut self,
        method: impl Into<String>,
        completion: Option<Completion>,
        issued_at: Option<Instant>,
    ) -> CallId {
        let id = self.next_id;
        self.next_id = id.next();

        let completion =
            completion.unwrap_or_else(|| Box::new(|_: Option<ProtocolError>, _: Arguments| {}));
        self.pending.insert(
            id,
            PendingCall {
                id,
                method: method.into(),
                completion,
                issued_at,
            },
        );

        id
    }

    /// Removes and returns the call for `id`.
    ///
    /// Unknown ids return `None` and leave the table untouched.
    pub fn take(&mut self, id: CallId) -> Option<PendingCall> {
        self.pending.remove(&id)
    }

    /// Returns the number of outstanding calls.
    #[inline]
    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if `id` is still pending.
    #[inline]
    #[must_use]
    pub fn contains(&self, id: CallId) -> bool {
        self.pending.contains_key(&id)
    }

    /// Returns the method of a pending call.
    #[inline]
    #[must_use]
    pub fn method_of(&self, id: CallId) -> Option<&str> {
        self.pending.get(&id).map(|call| call.method.as_str())
    }
}

impl Default for CallTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CallTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallTable")
            .field("next_id", &self.next_id)
            .field("outstanding", &self.pending.len())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut table = CallTable::new();
        let first = table.allocate("Page.enable", None, None);
        let second = table.allocate("Page.disable", None, None);

        assert_eq!(first, CallId::FIRST);
        assert!(second > first);
        assert_eq!(table.outstanding(), 2);
    }

    #[test]
    fn test_take_removes_once() {
        let mut table = CallTable::new();
        let id = table.allocate("DOM.getDocument", None, None);

        let call = table.take(id).expect("pending");
        assert_eq!(call.method, "DOM.getDocument");
        assert_eq!(table.outstanding(), 0);

        assert!(table.take(id).is_none());
        assert_eq!(table.outstanding(), 0);
    }

    #[test]
    fn test_take_unknown_id_has_no_effect() {
        let mut table = CallTable::new();
        table.allocate("Page.enable", None, None);

        assert!(table.take(CallId::new(99)).is_none());
        assert_eq!(table.outstanding(), 1);
    }

    #[test]
    fn test_ids_never_reused() {
        let mut table = CallTable::new();
        let id = table.allocate("Page.enable", None, None);
        table.take(id);

        let next = table.allocate("Page.enable", None, None);
        assert_ne!(id, next);
    }

    #[test]
    fn test_completion_stored() {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);

        let mut table = CallTable::new();
        let id = table.allocate(
            "Runtime.evaluate",
            Some(Box::new(move |_: Option<ProtocolError>, _: Arguments| {
                counter.fetch_add(1, Ordering::SeqCst);
            })),
            Some(Instant::now()),
        );
        assert_eq!(table.method_of(id), Some("Runtime.evaluate"));

        let call = table.take(id).expect("pending");
        assert!(call.issued_at.is_some());
        (call.completion)(None, Arguments::new());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_default_completion_is_noop() {
        let mut table = CallTable::new();
        let id = table.allocate("Page.enable", None, None);
        let call = table.take(id).expect("pending");
        (call.completion)(Some(ProtocolError::new(-32603, "boom")), Arguments::new());
    }
}
