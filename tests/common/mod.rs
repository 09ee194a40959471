//! Shared utilities for integration tests.
//!
//! Provides common functionality used across all test files:
//! - Logging initialization
//! - A backend wired to an in-process channel
//! - Recorders for completions, events and reported errors

#![allow(dead_code)]

// ============================================================================
// Imports
// ============================================================================

use std::sync::{Arc, Once};

use inspector_backend::transport::ChannelTransport;
use inspector_backend::{Arguments, CallId, InspectorBackend, ProtocolError};
use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::EnvFilter;

// ============================================================================
// Logging
// ============================================================================

static INIT: Once = Once::new();

/// Initialize tracing/logging once per test binary.
///
/// Honours `RUST_LOG`; defaults to `inspector_backend=debug`.
pub fn init_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("inspector_backend=debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_test_writer()
            .try_init();
    });
}

// ============================================================================
// Harness
// ============================================================================

/// Backend plus the receiving end of its outbound channel.
pub struct Harness {
    pub backend: InspectorBackend,
    pub outbound: UnboundedReceiver<String>,
    pub reported: Arc<Mutex<Vec<(CallId, i64)>>>,
}

impl Harness {
    /// Builds a backend over the built-in declarations.
    pub fn new() -> Self {
        init_logging();

        let (transport, outbound) = ChannelTransport::new();
        let reported: Arc<Mutex<Vec<(CallId, i64)>>> = Arc::default();
        let sink = Arc::clone(&reported);

        let backend = InspectorBackend::builder()
            .transport(transport)
            .protocol_dump()
            .time_stats()
            .error_reporter(move |id, error| sink.lock().push((id, error.code())))
            .build()
            .expect("backend");

        Self {
            backend,
            outbound,
            reported,
        }
    }

    /// Pops the next outbound frame as JSON.
    pub fn next_request(&mut self) -> Option<Value> {
        let text = self.outbound.try_recv().ok()?;
        Some(serde_json::from_str(&text).expect("outbound frame is JSON"))
    }

    /// Number of outbound frames not yet read.
    pub fn pending_frames(&mut self) -> usize {
        let mut count = 0;
        while self.outbound.try_recv().is_ok() {
            count += 1;
        }
        count
    }
}

// ============================================================================
// Recorders
// ============================================================================

/// Shared list of completion invocations.
pub type Completions = Arc<Mutex<Vec<(Option<ProtocolError>, Arguments)>>>;

/// Returns a recorder and a completion that appends to it.
pub fn completion_recorder() -> (
    Completions,
    impl FnOnce(Option<ProtocolError>, Arguments) + Send + 'static,
) {
    let seen: Completions = Arc::default();
    let sink = Arc::clone(&seen);
    (seen, move |error, values| sink.lock().push((error, values)))
}

/// Shared list of event payloads.
pub type Events = Arc<Mutex<Vec<Arguments>>>;

/// Returns a recorder and an event callback that appends to it.
pub fn event_recorder() -> (Events, impl Fn(Arguments) + Send + Sync + 'static) {
    let seen: Events = Arc::default();
    let sink = Arc::clone(&seen);
    (seen, move |args| sink.lock().push(args))
}
