//! Protocol dispatch engine.
//!
//! [`InspectorBackend`] is the context object that owns the schema, the
//! call table, the domain dispatchers and the deferred-action queue. It is
//! constructed once with [`InspectorBackend::builder`] and shared by cheap
//! clones.
//!
//! # Data Flow
//!
//! ```text
//! call() ──► encoder ──► Transport::send_message()
//!               │
//!               └── CallTable::allocate()
//!
//! dispatch_text() ──► router ──┬── response ──► CallTable::take() ──► completion
//!                              │                                   └─► run deferred when idle
//!                              └── event ─────► DomainHandler::handle()
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `builder` | Backend construction and validation |
//! | `call_table` | Pending call bookkeeping |
//! | `commands` | Async and typed call wrappers |
//! | `domains` | Domain dispatcher registry |
//! | `encoder` | Request validation and encoding |
//! | `idle` | Deferred actions run once no call is pending |
//! | `options` | Diagnostic switches |
//! | `router` | Response and event routing |

// ============================================================================
// Submodules
// ============================================================================

/// Backend builder.
pub mod builder;

/// Pending call bookkeeping.
pub mod call_table;

/// Async and typed wrappers over the callback API.
mod commands;

/// Domain dispatcher registry.
pub mod domains;

/// Request validation and encoding.
mod encoder;

/// Deferred actions.
mod idle;

/// Diagnostic options.
pub mod options;

/// Response and event routing.
mod router;

// ============================================================================
// Imports
// ============================================================================

use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::{Mutex, RwLock};
use tracing::{debug, error};

use crate::identifiers::CallId;
use crate::protocol::ProtocolError;
use crate::schema::SchemaRegistry;
use crate::transport::Transport;

// ============================================================================
// Re-exports
// ============================================================================

pub use builder::InspectorBackendBuilder;
pub use call_table::{CallTable, Completion, PendingCall};
pub use domains::{DomainHandler, DomainRegistry, EventDispatcher};
pub use options::BackendOptions;

// ============================================================================
// Types
// ============================================================================

/// Action queued until no call is outstanding.
pub type DeferredAction = Box<dyn FnOnce() + Send>;

/// Hook receiving every non-soft remote error.
pub type ErrorReporter = Arc<dyn Fn(CallId, &ProtocolError) + Send + Sync>;

// ============================================================================
// InspectorBackend
// ============================================================================

/// Dispatch engine for one inspector connection.
///
/// Cloning is cheap; clones share all state.
///
/// # Thread Safety
///
/// Shared state sits behind `parking_lot` locks and no lock is held while a
/// completion, event handler or deferred action runs, so callbacks may call
/// back into the backend.
///
/// # Example
///
/// ```ignore
/// let (transport, outbound) = ChannelTransport::new();
/// let backend = InspectorBackend::builder().transport(transport).build()?;
///
/// backend.call(
///     "Runtime.evaluate",
///     vec![Some(json!("1 + 1"))],
///     |error, values| println!("{error:?} {:?}", values.get(0)),
/// )?;
/// ```
#[derive(Clone)]
pub struct InspectorBackend {
    inner: Arc<BackendInner>,
}

/// Shared backend state.
struct BackendInner {
    /// Command, reply and event declarations.
    schema: SchemaRegistry,
    /// Outstanding calls.
    calls: Mutex<CallTable>,
    /// Calls taken from the table whose completion is still running.
    dispatching: AtomicUsize,
    /// Event handlers by domain.
    domains: RwLock<DomainRegistry>,
    /// Actions waiting for the call table to drain.
    deferred: Mutex<VecDeque<DeferredAction>>,
    /// Outbound channel.
    transport: Arc<dyn Transport>,
    /// Remote error hook.
    reporter: RwLock<ErrorReporter>,
    /// Diagnostic switches.
    options: BackendOptions,
}

impl InspectorBackend {
    /// Creates a builder.
    #[inline]
    #[must_use]
    pub fn builder() -> InspectorBackendBuilder {
        InspectorBackendBuilder::new()
    }

    /// Assembles a backend from validated parts.
    pub(crate) fn from_parts(
        schema: SchemaRegistry,
        transport: Arc<dyn Transport>,
        options: BackendOptions,
        reporter: ErrorReporter,
    ) -> Self {
        debug!(
            commands = schema.command_count(),
            events = schema.event_count(),
            "Inspector backend created"
        );

        Self {
            inner: Arc::new(BackendInner {
                schema,
                calls: Mutex::new(CallTable::new()),
                dispatching: AtomicUsize::new(0),
                domains: RwLock::new(DomainRegistry::new()),
                deferred: Mutex::new(VecDeque::new()),
                transport,
                reporter: RwLock::new(reporter),
                options,
            }),
        }
    }

    /// Returns the schema registry.
    #[inline]
    #[must_use]
    pub fn schema(&self) -> &SchemaRegistry {
        &self.inner.schema
    }

    /// Returns the diagnostic options.
    #[inline]
    #[must_use]
    pub fn options(&self) -> BackendOptions {
        self.inner.options
    }

    /// Returns the number of calls waiting for a response.
    ///
    /// A call stays counted until its completion has returned.
    #[inline]
    #[must_use]
    pub fn outstanding(&self) -> usize {
        let calls = self.inner.calls.lock();
        calls.outstanding() + self.inner.dispatching.load(Ordering::Acquire)
    }

    /// Returns `true` if `id` is still waiting for a response.
    #[inline]
    #[must_use]
    pub fn is_pending(&self, id: CallId) -> bool {
        self.inner.calls.lock().contains(id)
    }

    /// Registers the event handler for `domain`.
    ///
    /// Replaces any handler registered earlier for the same domain.
    pub fn register_domain_dispatcher<H>(&self, domain: impl Into<String>, handler: H)
    where
        H: DomainHandler + 'static,
    {
        let domain = domain.into();
        debug!(%domain, "Domain dispatcher registered");
        self.inner.domains.write().register(domain, Arc::new(handler));
    }

    /// Returns `true` if a handler is registered for `domain`.
    #[inline]
    #[must_use]
    pub fn has_domain_dispatcher(&self, domain: &str) -> bool {
        self.inner.domains.read().contains(domain)
    }

    /// Replaces the protocol-error reporting hook.
    pub fn set_error_reporter<F>(&self, reporter: F)
    where
        F: Fn(CallId, &ProtocolError) + Send + Sync + 'static,
    {
        *self.inner.reporter.write() = Arc::new(reporter);
    }

    /// Sends a remote error to the reporting hook.
    fn report_protocol_error(&self, id: CallId, error: &ProtocolError) {
        let reporter = Arc::clone(&*self.inner.reporter.read());
        reporter(id, error);
    }
}

impl fmt::Debug for InspectorBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectorBackend")
            .field("commands", &self.inner.schema.command_count())
            .field("outstanding", &self.outstanding())
            .field("options", &self.inner.options)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Default Reporter
// ============================================================================

/// Returns the hook that logs remote errors through `tracing`.
pub(crate) fn default_error_reporter() -> ErrorReporter {
    Arc::new(|id: CallId, error: &ProtocolError| {
        error!(call_id = %id, code = error.code(), "Request with id = {id} failed. {error}");
    })
}
