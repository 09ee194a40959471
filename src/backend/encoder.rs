//! Request validation and encoding.
//!
//! Positional arguments are checked against the declared parameters before
//! anything is recorded or sent; a rejected call leaves no trace in the
//! call table.

// ============================================================================
// Imports
// ============================================================================

use std::time::Instant;

use serde_json::{Map, Value};
use tracing::{debug, error, trace, warn};

use crate::error::{Error, Result};
use crate::identifiers::CallId;
use crate::protocol::{Arguments, ProtocolError, Request};
use crate::schema::{CommandSpec, ValueType};

use super::{Completion, InspectorBackend};

// ============================================================================
// Call Entry Points
// ============================================================================

impl InspectorBackend {
    /// Calls `method` with positional arguments.
    ///
    /// `None` in `args` is the absent sentinel for optional parameters.
    /// `completion` runs exactly once when the response arrives, with the
    /// remote error first and the declared reply fields after it.
    ///
    /// # Errors
    ///
    /// - [`Error::Schema`] if `method` is not declared
    /// - [`Error::MissingArgument`] if the arguments run out before a
    ///   required parameter
    /// - [`Error::TypeMismatch`] if an argument has the wrong type, including
    ///   `None` in a required slot
    /// - [`Error::ConnectionClosed`] if the transport rejected the message
    pub fn call<F>(&self, method: &str, args: Vec<Option<Value>>, completion: F) -> Result<CallId>
    where
        F: FnOnce(Option<ProtocolError>, Arguments) + Send + 'static,
    {
        self.encode(method, args, Some(Box::new(completion)))
    }

    /// Calls `method` without a completion.
    ///
    /// # Errors
    ///
    /// Same as [`call`](Self::call), plus [`Error::Signature`] if exactly one
    /// argument is left over and it is not the absent sentinel.
    pub fn call_detached(&self, method: &str, args: Vec<Option<Value>>) -> Result<CallId> {
        self.encode(method, args, None)
    }

    /// Sends a pre-built params object without positional validation.
    ///
    /// `Value::Null` or an empty object sends no `params` member.
    ///
    /// # Errors
    ///
    /// - [`Error::Schema`] if `method` is not declared
    /// - [`Error::InvalidParams`] if `params` is neither an object nor null
    pub fn invoke<F>(&self, method: &str, params: Value, completion: F) -> Result<CallId>
    where
        F: FnOnce(Option<ProtocolError>, Arguments) + Send + 'static,
    {
        self.invoke_with(method, params, Some(Box::new(completion)))
    }

    fn encode(
        &self,
        method: &str,
        args: Vec<Option<Value>>,
        completion: Option<Completion>,
    ) -> Result<CallId> {
        let params = self
            .inner
            .schema
            .param_spec_for(method)
            .ok_or_else(|| Error::schema(method))
            .and_then(|spec| encode_params(spec, args, completion.is_some()))
            .inspect_err(|e| error!(method, error = %e, "Call abandoned"))?;

        self.send_request(method, params, completion)
    }

    pub(crate) fn invoke_with(
        &self,
        method: &str,
        params: Value,
        completion: Option<Completion>,
    ) -> Result<CallId> {
        if !self.inner.schema.has_command(method) {
            let err = Error::schema(method);
            error!(method, error = %err, "Invoke abandoned");
            return Err(err);
        }

        let params = match params {
            Value::Null => None,
            Value::Object(map) => (!map.is_empty()).then_some(map),
            other => {
                let err = Error::invalid_params(method, ValueType::of(&other));
                error!(method, error = %err, "Invoke abandoned");
                return Err(err);
            }
        };

        self.send_request(method, params, completion)
    }

    /// Records the pending call and hands the encoded request to the transport.
    fn send_request(
        &self,
        method: &str,
        params: Option<Map<String, Value>>,
        completion: Option<Completion>,
    ) -> Result<CallId> {
        let issued_at = self.inner.options.dump_time_stats.then(Instant::now);
        let id = self
            .inner
            .calls
            .lock()
            .allocate(method, completion, issued_at);

        let request = Request::new(id, method, params);
        let message = match serde_json::to_string(&request) {
            Ok(message) => message,
            Err(e) => {
                self.inner.calls.lock().take(id);
                return Err(Error::Json(e));
            }
        };

        if self.inner.options.dump_protocol_messages {
            debug!("frontend: {message}");
        }

        if let Err(e) = self.inner.transport.send_message(message) {
            // Nothing went out, so nothing will answer.
            self.inner.calls.lock().take(id);
            error!(%id, method, error = %e, "Failed to send request");
            return Err(e);
        }

        trace!(%id, method, "Request sent");
        Ok(id)
    }
}

// ============================================================================
// Parameter Validation
// ============================================================================

/// Validates positional `args` against `spec` and builds the params object.
///
/// Returns `None` when no field was populated so the request omits
/// `params` entirely.
pub(crate) fn encode_params(
    spec: &CommandSpec,
    args: Vec<Option<Value>>,
    has_completion: bool,
) -> Result<Option<Map<String, Value>>> {
    let method = spec.name.as_str();
    let mut args = args.into_iter();
    let mut params = Map::new();

    for param in &spec.params {
        if args.len() == 0 && !param.optional {
            return Err(Error::missing_argument(method, spec.describe_params()));
        }

        let Some(value) = args.next().flatten() else {
            if param.optional {
                continue;
            }
            // Absent sentinel in a required slot.
            return Err(Error::type_mismatch(
                method,
                &param.name,
                param.value_type,
                ValueType::Undefined,
            ));
        };

        let actual = ValueType::of(&value);
        if actual != param.value_type {
            return Err(Error::type_mismatch(
                method,
                &param.name,
                param.value_type,
                actual,
            ));
        }

        params.insert(param.name.clone(), value);
    }

    let rest: Vec<Option<Value>> = args.collect();
    match rest.as_slice() {
        [Some(value)] if !has_completion => {
            return Err(Error::signature(method, ValueType::of(value)));
        }
        [] | [_] => {}
        _ => warn!(method, extra = rest.len(), "Ignoring extra arguments"),
    }

    Ok((!params.is_empty()).then_some(params))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    use crate::schema::ParamSpec;

    fn page_open() -> CommandSpec {
        CommandSpec {
            name: "Page.open".into(),
            params: vec![
                ParamSpec::required("url", ValueType::String),
                ParamSpec::optional("newWindow", ValueType::Boolean),
            ],
        }
    }

    fn page_reload() -> CommandSpec {
        CommandSpec {
            name: "Page.reload".into(),
            params: vec![
                ParamSpec::optional("ignoreCache", ValueType::Boolean),
                ParamSpec::optional("scriptToEvaluateOnLoad", ValueType::String),
            ],
        }
    }

    #[test]
    fn test_required_only() {
        let params = encode_params(&page_open(), vec![Some(json!("about:blank"))], true)
            .expect("valid")
            .expect("populated");

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("url"), Some(&json!("about:blank")));
    }

    #[test]
    fn test_optional_absent_is_omitted() {
        let params = encode_params(
            &page_open(),
            vec![Some(json!("about:blank")), None],
            true,
        )
        .expect("valid")
        .expect("populated");

        assert!(!params.contains_key("newWindow"));
    }

    #[test]
    fn test_all_optional_absent_omits_params() {
        let params = encode_params(&page_reload(), vec![None, None], true).expect("valid");
        assert!(params.is_none());

        let params = encode_params(&page_reload(), vec![], true).expect("valid");
        assert!(params.is_none());
    }

    #[test]
    fn test_optional_after_absent_is_still_read() {
        let params = encode_params(&page_reload(), vec![None, Some(json!("init()"))], true)
            .expect("valid")
            .expect("populated");

        assert_eq!(params.len(), 1);
        assert_eq!(params.get("scriptToEvaluateOnLoad"), Some(&json!("init()")));
    }

    #[test]
    fn test_missing_required() {
        let err = encode_params(&page_open(), vec![], true).unwrap_err();
        match err {
            Error::MissingArgument { method, expected } => {
                assert_eq!(method, "Page.open");
                assert_eq!(expected, "url: string, newWindow?: boolean");
            }
            other => panic!("Expected MissingArgument, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_sentinel_in_required_slot() {
        let err = encode_params(&page_open(), vec![None], true).unwrap_err();
        match err {
            Error::TypeMismatch {
                param,
                expected,
                actual,
                ..
            } => {
                assert_eq!(param, "url");
                assert_eq!(expected, ValueType::String);
                assert_eq!(actual, ValueType::Undefined);
            }
            other => panic!("Expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_type_mismatch() {
        let err = encode_params(&page_open(), vec![Some(json!(42))], true).unwrap_err();
        match err {
            Error::TypeMismatch {
                param,
                expected,
                actual,
                ..
            } => {
                assert_eq!(param, "url");
                assert_eq!(expected, ValueType::String);
                assert_eq!(actual, ValueType::Number);
            }
            other => panic!("Expected TypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_trailing_value_without_completion() {
        let err = encode_params(
            &page_open(),
            vec![Some(json!("a")), Some(json!(true)), Some(json!(5))],
            false,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Signature {
                actual: ValueType::Number,
                ..
            }
        ));
    }

    #[test]
    fn test_trailing_absent_without_completion() {
        let params = encode_params(
            &page_open(),
            vec![Some(json!("a")), Some(json!(true)), None],
            false,
        )
        .expect("valid");
        assert!(params.is_some());
    }

    #[test]
    fn test_trailing_value_with_completion_is_ignored() {
        let params = encode_params(
            &page_open(),
            vec![Some(json!("a")), None, Some(json!(5))],
            true,
        )
        .expect("valid")
        .expect("populated");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_null_counts_as_object() {
        let spec = CommandSpec {
            name: "DOM.highlightNode".into(),
            params: vec![
                ParamSpec::required("nodeId", ValueType::Number),
                ParamSpec::required("highlightConfig", ValueType::Object),
            ],
        };
        let params = encode_params(&spec, vec![Some(json!(3)), Some(Value::Null)], true)
            .expect("valid")
            .expect("populated");
        assert_eq!(params.get("highlightConfig"), Some(&Value::Null));
    }
}
