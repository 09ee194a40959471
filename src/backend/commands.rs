//! Async and typed wrappers over the callback API.
//!
//! Both wrappers go through the same encoder and router as
//! [`InspectorBackend::call`]; they only change how the completion is
//! delivered.

// ============================================================================
// Imports
// ============================================================================

use serde_json::Value;
use tokio::sync::oneshot;

use crate::error::{Error, Result};
use crate::identifiers::CallId;
use crate::protocol::{Arguments, Command, ProtocolError};

use super::InspectorBackend;

// ============================================================================
// Async Calls
// ============================================================================

impl InspectorBackend {
    /// Calls `method` and waits for the response.
    ///
    /// Resolves to the declared reply fields in order.
    ///
    /// # Errors
    ///
    /// - Any encoding error from [`call`](Self::call), before anything is sent
    /// - [`Error::Remote`] if the response carries an error object
    /// - [`Error::ChannelClosed`] if the backend is dropped with the call
    ///   still pending
    pub async fn request(&self, method: &str, args: Vec<Option<Value>>) -> Result<Arguments> {
        let (tx, rx) = oneshot::channel();

        self.call(method, args, move |error, values| {
            let _ = tx.send(into_result(error, values));
        })?;

        rx.await?
    }

    // ========================================================================
    // Typed Commands
    // ========================================================================

    /// Sends a typed command and delivers the decoded returns to `on_reply`.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be serialized, is not
    /// declared, or the transport rejects it. Decoding and remote errors
    /// are delivered to `on_reply` instead.
    pub fn send_command<C, F>(&self, command: &C, on_reply: F) -> Result<CallId>
    where
        C: Command,
        F: FnOnce(Result<C::Returns>) + Send + 'static,
    {
        let params = serde_json::to_value(command)?;
        let fields = self
            .inner
            .schema
            .reply_fields_for(C::METHOD)
            .map(<[String]>::to_vec)
            .unwrap_or_default();

        self.invoke_with(
            C::METHOD,
            params,
            Some(Box::new(move |error: Option<ProtocolError>, values: Arguments| {
                let returns = into_result(error, values).and_then(|values| {
                    let object = Value::Object(values.to_object(&fields));
                    Ok(serde_json::from_value(object)?)
                });
                on_reply(returns);
            })),
        )
    }

    /// Sends a typed command and waits for the decoded returns.
    ///
    /// # Errors
    ///
    /// Same as [`send_command`](Self::send_command), plus remote and decoding
    /// errors.
    pub async fn execute<C: Command>(&self, command: &C) -> Result<C::Returns> {
        let (tx, rx) = oneshot::channel();

        self.send_command(command, move |returns| {
            let _ = tx.send(returns);
        })?;

        rx.await?
    }
}

/// Folds the completion's error-first arguments into a `Result`.
fn into_result(error: Option<ProtocolError>, values: Arguments) -> Result<Arguments> {
    match error {
        Some(error) => Err(Error::Remote(error)),
        None => Ok(values),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tokio::sync::mpsc::UnboundedReceiver;

    use crate::backend::InspectorBackend;
    use crate::error::Error;
    use crate::protocol::command::{DomQuerySelector, PageEnable, RuntimeEvaluate};
    use crate::protocol::Request;
    use crate::transport::ChannelTransport;

    fn backend() -> (InspectorBackend, UnboundedReceiver<String>) {
        let (transport, rx) = ChannelTransport::new();
        let backend = InspectorBackend::builder()
            .transport(transport)
            .build()
            .expect("build");
        (backend, rx)
    }

    /// Answers every outbound request with `reply(request)`.
    fn spawn_responder<F>(backend: &InspectorBackend, mut rx: UnboundedReceiver<String>, reply: F)
    where
        F: Fn(&Request) -> serde_json::Value + Send + 'static,
    {
        let backend = backend.clone();
        tokio::spawn(async move {
            while let Some(text) = rx.recv().await {
                let request: Request = serde_json::from_str(&text).expect("request");
                let _ = backend.dispatch_value(reply(&request));
            }
        });
    }

    #[tokio::test]
    async fn test_request_resolves_reply_fields() {
        let (backend, rx) = backend();
        spawn_responder(&backend, rx, |request| {
            json!({"id": request.id, "result": {"result": {"type": "number"}, "wasThrown": true}})
        });

        let values = backend
            .request("Runtime.evaluate", vec![Some(json!("1"))])
            .await
            .expect("request");

        assert_eq!(values.len(), 2);
        assert_eq!(values.bool(1), Some(true));
        assert_eq!(backend.outstanding(), 0);
    }

    #[tokio::test]
    async fn test_request_remote_error() {
        let (backend, rx) = backend();
        spawn_responder(&backend, rx, |request| {
            json!({"id": request.id, "error": {"code": -32000, "message": "No node"}})
        });

        let err = backend
            .request("DOM.querySelector", vec![Some(json!(1)), Some(json!("div"))])
            .await
            .unwrap_err();

        assert!(err.is_remote());
        assert_eq!(err.as_remote().map(|e| e.code()), Some(-32000));
    }

    #[tokio::test]
    async fn test_request_encoding_error_sends_nothing() {
        let (backend, mut rx) = backend();

        let err = backend
            .request("DOM.querySelector", vec![Some(json!(1))])
            .await
            .unwrap_err();

        assert!(matches!(err, Error::MissingArgument { .. }));
        assert!(rx.try_recv().is_err());
        assert_eq!(backend.outstanding(), 0);
    }

    #[tokio::test]
    async fn test_execute_decodes_returns() {
        let (backend, rx) = backend();
        spawn_responder(&backend, rx, |request| match request.method.as_str() {
            "DOM.querySelector" => json!({"id": request.id, "result": {"nodeId": 42}}),
            _ => json!({"id": request.id, "result": {}}),
        });

        backend.execute(&PageEnable).await.expect("enable");

        let found = backend
            .execute(&DomQuerySelector {
                node_id: 1,
                selector: "body".into(),
            })
            .await
            .expect("query");
        assert_eq!(found.node_id, 42);
    }

    #[tokio::test]
    async fn test_execute_sends_typed_params() {
        let (backend, mut rx) = backend();

        let id = backend
            .send_command(&RuntimeEvaluate::new("document.title"), |_| {})
            .expect("send");

        let request: Request = serde_json::from_str(&rx.recv().await.expect("frame")).expect("json");
        assert_eq!(request.id, id);
        assert_eq!(request.param("expression"), Some(&json!("document.title")));
        assert!(request.param("objectGroup").is_none());
    }

    #[tokio::test]
    async fn test_unit_command_omits_params() {
        let (backend, mut rx) = backend();
        backend.send_command(&PageEnable, |_| {}).expect("send");

        let text = rx.recv().await.expect("frame");
        assert_eq!(text, r#"{"method":"Page.enable","id":1}"#);
    }
}
