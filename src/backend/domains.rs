//! Domain dispatcher registry.
//!
//! Event handlers are registered per domain (`Network`, `DOM`, ...). An
//! event `Domain.operation` is routed to the handler for `Domain`, which
//! must implement `operation`.
//!
//! # Example
//!
//! ```ignore
//! let network = EventDispatcher::new()
//!     .on("loadingFinished", |args| {
//!         println!("request {} finished", args.str(0).unwrap_or_default());
//!     });
//! backend.register_domain_dispatcher("Network", network);
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::protocol::Arguments;

// ============================================================================
// DomainHandler
// ============================================================================

/// Receives the events of one domain.
pub trait DomainHandler: Send + Sync {
    /// Returns `true` if the handler implements `operation`.
    fn has_operation(&self, operation: &str) -> bool;

    /// Handles one event.
    ///
    /// `args` holds the event fields in declared order. Only called for
    /// operations where [`has_operation`](Self::has_operation) is `true`.
    fn handle(&self, operation: &str, args: Arguments);
}

impl<T: DomainHandler + ?Sized> DomainHandler for Arc<T> {
    fn has_operation(&self, operation: &str) -> bool {
        (**self).has_operation(operation)
    }

    fn handle(&self, operation: &str, args: Arguments) {
        (**self).handle(operation, args);
    }
}

// ============================================================================
// EventDispatcher
// ============================================================================

/// Event callback for one operation.
type EventCallback = Box<dyn Fn(Arguments) + Send + Sync>;

/// Closure-based [`DomainHandler`].
#[derive(Default)]
pub struct EventDispatcher {
    /// Callbacks by operation name.
    callbacks: FxHashMap<String, EventCallback>,
}

impl EventDispatcher {
    /// Creates a dispatcher with no operations.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a callback for `operation`, replacing any earlier one.
    #[must_use]
    pub fn on<F>(mut self, operation: impl Into<String>, callback: F) -> Self
    where
        F: Fn(Arguments) + Send + Sync + 'static,
    {
        self.callbacks.insert(operation.into(), Box::new(callback));
        self
    }

    /// Returns the number of operations.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    /// Returns `true` if no operations are registered.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl DomainHandler for EventDispatcher {
    fn has_operation(&self, operation: &str) -> bool {
        self.callbacks.contains_key(operation)
    }

    fn handle(&self, operation: &str, args: Arguments) {
        if let Some(callback) = self.callbacks.get(operation) {
            callback(args);
        }
    }
}

impl fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("operations", &self.callbacks.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// DomainRegistry
// ============================================================================

/// Handlers by domain name.
///
/// Registering a domain twice silently replaces the earlier handler.
#[derive(Default)]
pub struct DomainRegistry {
    handlers: FxHashMap<String, Arc<dyn DomainHandler>>,
}

impl DomainRegistry {
    /// Creates an empty registry.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `domain`.
    pub fn register(&mut self, domain: impl Into<String>, handler: Arc<dyn DomainHandler>) {
        self.handlers.insert(domain.into(), handler);
    }

    /// Returns the handler for `domain`.
    #[inline]
    #[must_use]
    pub fn resolve(&self, domain: &str) -> Option<Arc<dyn DomainHandler>> {
        self.handlers.get(domain).cloned()
    }

    /// Returns `true` if a handler is registered for `domain`.
    #[inline]
    #[must_use]
    pub fn contains(&self, domain: &str) -> bool {
        self.handlers.contains_key(domain)
    }
}

impl fmt::Debug for DomainRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DomainRegistry")
            .field("domains", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
