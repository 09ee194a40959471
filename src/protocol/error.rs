//! Server-declared protocol errors.
//!
//! Carried in the `error` member of a response:
//!
//! ```json
//! { "id": 3, "error": { "code": -32601, "message": "...", "data": ["..."] } }
//! ```
//!
//! Decoding never fails: a missing code becomes [`UNKNOWN_CODE`] and
//! non-string message or data entries are rendered as JSON text, so the
//! response id is never lost to a badly shaped error object.

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Constants
// ============================================================================

/// Code given to error objects that carry no integer `code`.
pub const UNKNOWN_CODE: i64 = 0;

// ============================================================================
// ErrorCode
// ============================================================================

/// JSON-RPC style classification of a protocol error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// -32700
    ParseError,
    /// -32600
    InvalidRequest,
    /// -32601
    MethodNotFound,
    /// -32602
    InvalidParams,
    /// -32603
    InternalError,
    /// -32000, the soft class handled by completions.
    ServerError,
    /// Any other code.
    Unknown(i64),
}

impl ErrorCode {
    /// Classifies a raw code.
    #[must_use]
    pub const fn from_code(code: i64) -> Self {
        match code {
            -32700 => Self::ParseError,
            -32600 => Self::InvalidRequest,
            -32601 => Self::MethodNotFound,
            -32602 => Self::InvalidParams,
            -32603 => Self::InternalError,
            -32000 => Self::ServerError,
            other => Self::Unknown(other),
        }
    }

    /// Returns the raw code.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
            Self::ServerError => -32000,
            Self::Unknown(code) => *code,
        }
    }

    /// Returns the human-readable description of the code.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::ParseError => "Parse error",
            Self::InvalidRequest => "Invalid Request",
            Self::MethodNotFound => "Method not found",
            Self::InvalidParams => "Invalid params",
            Self::InternalError => "Internal error",
            Self::ServerError => "Server error",
            Self::Unknown(_) => "Unknown error code",
        }
    }
}

// ============================================================================
// ProtocolError
// ============================================================================

/// Error object returned by the backend for a failed command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct ProtocolError {
    /// Raw error code.
    code: i64,

    /// Error message.
    #[serde(default)]
    message: String,

    /// Additional detail lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Vec<String>>,
}

impl ProtocolError {
    /// Creates a protocol error without data.
    #[inline]
    #[must_use]
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// Attaches detail lines.
    #[inline]
    #[must_use]
    pub fn with_data(mut self, data: Vec<String>) -> Self {
        self.data = Some(data);
        self
    }

    /// Returns the raw error code.
    #[inline]
    #[must_use]
    pub const fn code(&self) -> i64 {
        self.code
    }

    /// Returns the classified error code.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorCode {
        ErrorCode::from_code(self.code)
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the detail lines, if any.
    #[inline]
    #[must_use]
    pub fn data(&self) -> Option<&[String]> {
        self.data.as_deref()
    }

    /// Returns the description of the error code.
    #[inline]
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.kind().description()
    }

    /// Returns `true` for the soft server error class.
    ///
    /// Soft errors are left to the caller's completion and are not sent to
    /// the protocol-error reporting hook.
    #[inline]
    #[must_use]
    pub const fn is_soft(&self) -> bool {
        matches!(self.kind(), ErrorCode::ServerError)
    }
}

impl From<Value> for ProtocolError {
    fn from(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::new(UNKNOWN_CODE, render(value));
        };

        let code = fields
            .get("code")
            .and_then(Value::as_i64)
            .unwrap_or(UNKNOWN_CODE);
        let message = fields.remove("message").map(render).unwrap_or_default();
        let data = match fields.remove("data") {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(items.into_iter().map(render).collect()),
            Some(other) => Some(vec![render(other)]),
        };

        Self {
            code,
            message,
            data,
        }
    }
}

/// Renders a JSON value as a detail line; strings are kept unquoted.
fn render(value: Value) -> String {
    match value {
        Value::String(text) => text,
        other => other.to_string(),
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}): {}.", self.description(), self.code, self.message)?;
        if let Some(data) = &self.data {
            write!(f, " {}", data.join(" "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

// ============================================================================
// Tests
// ============================================================================
