//! Request and Response message types.
//!
//! Defines the wire format for command requests sent to the backend and
//! the responses correlated back to them by call id.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::identifiers::CallId;

use super::{Arguments, ProtocolError};

// ============================================================================
// Request
// ============================================================================

/// A command request from the frontend to the backend.
///
/// # Format
///
/// ```json
/// {
///   "method": "Domain.operation",
///   "params": { ... },
///   "id": 1
/// }
/// ```
///
/// `params` is omitted entirely when no field was populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// Command name in `Domain.operation` format.
    pub method: String,

    /// Populated parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Map<String, Value>>,

    /// Correlation id.
    pub id: CallId,
}

impl Request {
    /// Creates a new request.
    #[inline]
    #[must_use]
    pub fn new(id: CallId, method: impl Into<String>, params: Option<Map<String, Value>>) -> Self {
        Self {
            method: method.into(),
            params,
            id,
        }
    }

    /// Returns a populated parameter by name.
    #[inline]
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.as_ref().and_then(|p| p.get(name))
    }
}

// ============================================================================
// Response
// ============================================================================

/// A response from the backend to a previously issued request.
///
/// # Format
///
/// Success:
/// ```json
/// { "id": 1, "result": { ... } }
/// ```
///
/// Error:
/// ```json
/// { "id": 1, "error": { "code": -32601, "message": "..." } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Response {
    /// Matches the request `id`.
    pub id: CallId,

    /// Result data (if success).
    #[serde(default)]
    pub result: Option<Value>,

    /// Error object (if error).
    #[serde(default)]
    pub error: Option<ProtocolError>,
}

impl Response {
    /// Returns `true` if this response carries an error object.
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Extracts result fields in `fields` order.
    ///
    /// Returns no values when the response has no result.
    #[must_use]
    pub fn extract(&self, fields: &[String]) -> Arguments {
        self.result
            .as_ref()
            .map(|result| Arguments::extract(result, fields))
            .unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
