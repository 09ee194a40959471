//! Event and inbound message types.
//!
//! Events are notifications sent from the backend with no correlation id.
//! [`Message`] classifies any inbound payload as a response or an event.

// ============================================================================
// Imports
// ============================================================================

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::identifiers::CallId;

use super::{Arguments, ProtocolError, Response};

// ============================================================================
// Event
// ============================================================================

/// An event notification from the backend.
///
/// # Format
///
/// ```json
/// {
///   "method": "Domain.eventName",
///   "params": { ... }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Event {
    /// Event name in `Domain.eventName` format.
    pub method: String,

    /// Event-specific data.
    #[serde(default)]
    pub params: Option<Value>,
}

impl Event {
    /// Returns the domain name from the method.
    #[inline]
    #[must_use]
    pub fn domain(&self) -> &str {
        self.method
            .split_once('.')
            .map_or(self.method.as_str(), |(domain, _)| domain)
    }

    /// Returns the operation name from the method.
    ///
    /// Empty when the method has no `.` separator.
    #[inline]
    #[must_use]
    pub fn operation(&self) -> &str {
        self.method
            .split_once('.')
            .map_or("", |(_, operation)| operation)
    }

    /// Extracts params fields in `fields` order.
    ///
    /// Returns no values when the event has no params.
    #[must_use]
    pub fn extract(&self, fields: &[String]) -> Arguments {
        match &self.params {
            Some(params) if !params.is_null() => Arguments::extract(params, fields),
            _ => Arguments::new(),
        }
    }
}

// ============================================================================
// Message
// ============================================================================

/// Raw inbound shape before classification.
#[derive(Deserialize)]
struct RawMessage {
    #[serde(default)]
    id: Option<CallId>,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    params: Option<Value>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<ProtocolError>,
}

/// A classified inbound message.
///
/// A message is a response iff it carries an `id`; otherwise it must carry
/// a `method` and is an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Response to an earlier request.
    Response(Response),
    /// Unsolicited event.
    Event(Event),
}

impl Message {
    /// Parses and classifies a text message.
    ///
    /// # Errors
    ///
    /// - [`Error::Json`] if the text is not a valid message object
    /// - [`Error::MalformedMessage`] if it has neither `id` nor `method`
    pub fn parse(text: &str) -> Result<Self> {
        let raw: RawMessage = serde_json::from_str(text)?;
        Self::classify(raw)
    }

    /// Classifies an already-decoded message.
    ///
    /// # Errors
    ///
    /// Same as [`Message::parse`].
    pub fn from_value(value: Value) -> Result<Self> {
        let raw: RawMessage = serde_json::from_value(value)?;
        Self::classify(raw)
    }

    fn classify(raw: RawMessage) -> Result<Self> {
        match (raw.id, raw.method) {
            (Some(id), _) => Ok(Self::Response(Response {
                id,
                result: raw.result,
                error: raw.error,
            })),
            (None, Some(method)) => Ok(Self::Event(Event {
                method,
                params: raw.params,
            })),
            (None, None) => Err(Error::malformed("message has neither 'id' nor 'method'")),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    #[test]
    fn test_event_domain_and_operation() {
        let event = Event {
            method: "Network.loadingFinished".into(),
            params: None,
        };
        assert_eq!(event.domain(), "Network");
        assert_eq!(event.operation(), "loadingFinished");

        let bare = Event {
            method: "Network".into(),
            params: None,
        };
        assert_eq!(bare.domain(), "Network");
        assert_eq!(bare.operation(), "");
    }

    #[test]
    fn test_event_extract_without_params() {
        let event = Event {
            method: "DOM.documentUpdated".into(),
            params: None,
        };
        assert!(event.extract(&["nodeId".to_string()]).is_empty());
    }

    #[test]
    fn test_parse_response() {
        let message = Message::parse(r#"{"id": 2, "result": {"root": {}}}"#).expect("parse");
        match message {
            Message::Response(response) => {
                assert_eq!(response.id, CallId::new(2));
                assert!(response.error.is_none());
            }
            Message::Event(_) => panic!("Expected response"),
        }
    }

    #[test]
    fn test_parse_event() {
        let message = Message::from_value(json!({
            "method": "Network.loadingFinished",
            "params": {"requestId": "17", "timestamp": 1.23}
        }))
        .expect("parse");

        let Message::Event(event) = message else {
            panic!("Expected event");
        };
        let values = event.extract(&["requestId".to_string(), "timestamp".to_string()]);
        assert_eq!(values.str(0), Some("17"));
        assert_eq!(values.f64(1), Some(1.23));
    }

    #[test]
    fn test_id_wins_over_method() {
        let message = Message::parse(r#"{"id": 5, "method": "Page.enable"}"#).expect("parse");
        assert!(matches!(message, Message::Response(_)));
    }

    #[test]
    fn test_parse_malformed() {
        let err = Message::parse(r#"{"params": {}}"#).unwrap_err();
        assert!(matches!(err, Error::MalformedMessage { .. }));

        let err = Message::parse("not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
