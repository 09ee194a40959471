//! Response and event routing.
//!
//! Every inbound message goes through [`InspectorBackend::dispatch_text`] or
//! [`InspectorBackend::dispatch_value`]. A malformed or unroutable message
//! is logged and dropped; the router stays usable for the next one.

// ============================================================================
// Imports
// ============================================================================

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, error, trace};

use crate::error::{Error, Result};
use crate::protocol::{Event, Message, Response};

use super::InspectorBackend;

// ============================================================================
// Inbound Entry Points
// ============================================================================

impl InspectorBackend {
    /// Routes one inbound text message.
    ///
    /// # Errors
    ///
    /// - [`Error::Json`] or [`Error::MalformedMessage`] if the text is not a
    ///   protocol message
    /// - [`Error::UnknownDomain`], [`Error::UnknownOperation`] or
    ///   [`Error::UndeclaredEvent`] if an event cannot be delivered
    ///
    /// Every error has already been logged and the message dropped;
    /// callers may ignore the result.
    pub fn dispatch_text(&self, text: &str) -> Result<()> {
        if self.inner.options.dump_protocol_messages {
            debug!("backend: {text}");
        }

        let message = Message::parse(text)
            .inspect_err(|e| error!(error = %e, "Dropping unparsable message"))?;
        self.route(message)
    }

    /// Routes one already-decoded inbound message.
    ///
    /// # Errors
    ///
    /// Same as [`dispatch_text`](Self::dispatch_text).
    pub fn dispatch_value(&self, value: Value) -> Result<()> {
        if self.inner.options.dump_protocol_messages {
            debug!("backend: {value}");
        }

        let message = Message::from_value(value)
            .inspect_err(|e| error!(error = %e, "Dropping unparsable message"))?;
        self.route(message)
    }

    fn route(&self, message: Message) -> Result<()> {
        match message {
            Message::Response(response) => {
                self.route_response(response);
                Ok(())
            }
            Message::Event(event) => self.route_event(&event),
        }
    }

    // ========================================================================
    // Responses
    // ========================================================================

    fn route_response(&self, response: Response) {
        let received_at = Instant::now();
        let id = response.id;

        if let Some(error) = &response.error {
            if !error.is_soft() {
                self.report_protocol_error(id, error);
            }
        }

        let taken = {
            let mut calls = self.inner.calls.lock();
            calls.take(id).map(|call| (call, DispatchGuard::enter(&self.inner.dispatching)))
        };
        let Some((call, guard)) = taken else {
            debug!(%id, "Dropping response for unknown call");
            self.run_deferred_if_idle();
            return;
        };

        let values = self
            .inner
            .schema
            .reply_fields_for(&call.method)
            .map(|fields| response.extract(fields))
            .unwrap_or_default();

        trace!(%id, method = %call.method, values = values.len(), "Response routed");
        (call.completion)(response.error, values);
        drop(guard);

        if let Some(issued_at) = call.issued_at {
            debug!(
                %id,
                method = %call.method,
                round_trip_ms = received_at.duration_since(issued_at).as_millis() as u64,
                processing_ms = received_at.elapsed().as_millis() as u64,
                "Response time stats"
            );
        }

        self.run_deferred_if_idle();
    }

    // ========================================================================
    // Events
    // ========================================================================

    fn route_event(&self, event: &Event) -> Result<()> {
        let started_at = Instant::now();
        let domain = event.domain();
        let operation = event.operation();

        let handler = self
            .inner
            .domains
            .read()
            .resolve(domain)
            .ok_or_else(|| Error::unknown_domain(domain));

        let delivered = handler.and_then(|handler| {
            if !handler.has_operation(operation) {
                return Err(Error::unknown_operation(&event.method));
            }

            let fields = self
                .inner
                .schema
                .event_fields_for(&event.method)
                .ok_or_else(|| Error::undeclared_event(&event.method))?;

            handler.handle(operation, event.extract(fields));
            Ok(())
        });

        if let Err(e) = &delivered {
            error!(method = %event.method, error = %e, "Dropping event");
            return delivered;
        }

        trace!(method = %event.method, "Event routed");
        if self.inner.options.dump_time_stats {
            debug!(
                method = %event.method,
                processing_ms = started_at.elapsed().as_millis() as u64,
                "Event time stats"
            );
        }

        Ok(())
    }
}

// ============================================================================
// DispatchGuard
// ============================================================================

/// Keeps a taken call counted as outstanding while its completion runs.
///
/// Released on drop, so a panicking completion does not leave the backend
/// permanently busy.
struct DispatchGuard<'a> {
    counter: &'a AtomicUsize,
}

impl<'a> DispatchGuard<'a> {
    /// Increments `counter`; call with the call table lock held.
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::AcqRel);
        Self { counter }
    }
}

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::AcqRel);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use serde_json::json;
    use tokio::sync::mpsc::UnboundedReceiver;

    use crate::backend::{EventDispatcher, InspectorBackend};
    use crate::error::Error;
    use crate::identifiers::CallId;
    use crate::protocol::{Arguments, ProtocolError};
    use crate::transport::ChannelTransport;

    fn backend() -> (InspectorBackend, UnboundedReceiver<String>) {
        let (transport, rx) = ChannelTransport::new();
        let backend = InspectorBackend::builder()
            .transport(transport)
            .build()
            .expect("build");
        (backend, rx)
    }

    type Seen = Arc<Mutex<Vec<(Option<ProtocolError>, Arguments)>>>;

    fn recorder() -> (Seen, impl FnOnce(Option<ProtocolError>, Arguments) + Send + 'static) {
        let seen: Seen = Arc::default();
        let sink = Arc::clone(&seen);
        (seen, move |error, values| sink.lock().push((error, values)))
    }

    #[test]
    fn test_reply_fields_in_declared_order() {
        let (backend, _rx) = backend();
        let (seen, completion) = recorder();
        let id = backend
            .call("Runtime.evaluate", vec![Some(json!("2 + 3"))], completion)
            .expect("call");

        backend
            .dispatch_value(json!({
                "id": id.as_u64(),
                "result": {"wasThrown": false, "result": 5, "extra": "dropped"}
            }))
            .expect("dispatch");

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        let (error, values) = &seen[0];
        assert!(error.is_none());
        assert_eq!(values.len(), 2);
        assert_eq!(values.get(0), Some(&json!(5)));
        assert_eq!(values.bool(1), Some(false));
        assert_eq!(backend.outstanding(), 0);
    }

    #[test]
    fn test_duplicate_response_is_dropped() {
        let (backend, _rx) = backend();
        let (seen, completion) = recorder();
        let id = backend
            .call("Page.reload", vec![], completion)
            .expect("call");

        let text = format!(r#"{{"id":{id},"result":{{}}}}"#);
        backend.dispatch_text(&text).expect("first");
        backend.dispatch_text(&text).expect("duplicate");

        assert_eq!(seen.lock().len(), 1);
        assert_eq!(backend.outstanding(), 0);
    }

    #[test]
    fn test_response_without_reply_shape_has_no_values() {
        let (backend, _rx) = backend();
        let (seen, completion) = recorder();
        let id = backend
            .call("Page.enable", vec![], completion)
            .expect("call");

        backend
            .dispatch_value(json!({"id": id.as_u64(), "result": {"ignored": 1}}))
            .expect("dispatch");

        assert!(seen.lock()[0].1.is_empty());
    }

    #[test]
    fn test_soft_error_skips_reporter() {
        let (backend, _rx) = backend();
        let reported: Arc<Mutex<Vec<CallId>>> = Arc::default();
        let sink = Arc::clone(&reported);
        backend.set_error_reporter(move |id, _| sink.lock().push(id));

        let (seen, completion) = recorder();
        let soft = backend.call("Page.enable", vec![], completion).expect("call");
        backend
            .dispatch_value(json!({"id": soft.as_u64(), "error": {"code": -32000, "message": "busy"}}))
            .expect("dispatch");

        let (_, completion) = recorder();
        let hard = backend.call("Page.enable", vec![], completion).expect("call");
        backend
            .dispatch_value(json!({"id": hard.as_u64(), "error": {"code": -32601, "message": "nope"}}))
            .expect("dispatch");

        assert_eq!(*reported.lock(), vec![hard]);
        let seen = seen.lock();
        assert_eq!(seen[0].0.as_ref().map(ProtocolError::code), Some(-32000));
    }

    #[test]
    fn test_event_fan_out() {
        let (backend, _rx) = backend();
        let seen: Arc<Mutex<Vec<Arguments>>> = Arc::default();
        let sink = Arc::clone(&seen);
        backend.register_domain_dispatcher(
            "Network",
            EventDispatcher::new().on("loadingFinished", move |args| sink.lock().push(args)),
        );

        backend
            .dispatch_text(
                r#"{"method":"Network.loadingFinished","params":{"requestId":"17","timestamp":1.23}}"#,
            )
            .expect("dispatch");

        let seen = seen.lock();
        assert_eq!(seen[0].str(0), Some("17"));
        assert_eq!(seen[0].f64(1), Some(1.23));
    }

    #[test]
    fn test_event_without_params_has_no_values() {
        let (backend, _rx) = backend();
        let seen: Arc<Mutex<Vec<Arguments>>> = Arc::default();
        let sink = Arc::clone(&seen);
        backend.register_domain_dispatcher(
            "DOM",
            EventDispatcher::new().on("documentUpdated", move |args| sink.lock().push(args)),
        );

        backend
            .dispatch_value(json!({"method": "DOM.documentUpdated"}))
            .expect("dispatch");
        assert!(seen.lock()[0].is_empty());
    }

    #[test]
    fn test_event_routing_errors() {
        let (backend, _rx) = backend();
        backend.register_domain_dispatcher("Page", EventDispatcher::new().on("bogus", |_| {}));

        let err = backend
            .dispatch_value(json!({"method": "CSS.mediaQueryResultChanged"}))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownDomain { .. }));

        let err = backend
            .dispatch_value(json!({"method": "Page.loadEventFired", "params": {"timestamp": 1}}))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownOperation { .. }));

        let err = backend
            .dispatch_value(json!({"method": "Page.bogus"}))
            .unwrap_err();
        assert!(matches!(err, Error::UndeclaredEvent { .. }));
    }

    #[test]
    fn test_malformed_input() {
        let (backend, _rx) = backend();
        assert!(backend.dispatch_text("not json").unwrap_err().is_routing_error());
        assert!(matches!(
            backend.dispatch_value(json!({"params": {}})).unwrap_err(),
            Error::MalformedMessage { .. }
        ));
    }
}
