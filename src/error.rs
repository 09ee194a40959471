//! Error types for the inspector backend.
//!
//! This module defines all error types used throughout the crate.
//!
//! # Usage
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`]:
//!
//! ```ignore
//! use inspector_backend::{Error, Result};
//!
//! fn example(backend: &InspectorBackend) -> Result<()> {
//!     backend.call_detached("Page.enable", vec![])?;
//!     Ok(())
//! }
//! ```
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Encoding | [`Error::Schema`], [`Error::MissingArgument`], [`Error::TypeMismatch`], [`Error::Signature`], [`Error::InvalidParams`] |
//! | Routing | [`Error::UnknownDomain`], [`Error::UnknownOperation`], [`Error::UndeclaredEvent`], [`Error::MalformedMessage`] |
//! | Remote | [`Error::Remote`] |
//! | Connection | [`Error::Connection`], [`Error::ConnectionClosed`] |
//! | External | [`Error::Io`], [`Error::Json`], [`Error::WebSocket`], [`Error::ChannelClosed`] |

// ============================================================================
// Imports
// ============================================================================

use std::io::Error as IoError;
use std::result::Result as StdResult;

use thiserror::Error;
use tokio::sync::oneshot::error::RecvError;
use tokio_tungstenite::tungstenite::Error as WsError;

use crate::protocol::ProtocolError;
use crate::schema::ValueType;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
///
/// Each variant includes the context needed to diagnose the failing call
/// or message.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when the backend or a transport is configured incorrectly.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Encoding Errors
    // ========================================================================
    /// Command was never registered in the schema.
    #[error("Protocol Error: Unknown command '{method}'")]
    Schema {
        /// The unregistered method name.
        method: String,
    },

    /// A required positional argument was omitted.
    #[error(
        "Protocol Error: Invalid number of arguments for method '{method}' call. \
         It must have the next arguments '{expected}'."
    )]
    MissingArgument {
        /// Method being called.
        method: String,
        /// Full parameter spec of the method.
        expected: String,
    },

    /// An argument's runtime type disagrees with its declared type.
    #[error(
        "Protocol Error: Invalid type of argument '{param}' for method '{method}' call. \
         It must be '{expected}' but it is '{actual}'."
    )]
    TypeMismatch {
        /// Method being called.
        method: String,
        /// Offending parameter name.
        param: String,
        /// Declared type.
        expected: ValueType,
        /// Runtime type of the supplied value.
        actual: ValueType,
    },

    /// A trailing value was passed where a completion was expected.
    #[error(
        "Protocol Error: Optional callback argument for method '{method}' call \
         must be a function but its type is '{actual}'."
    )]
    Signature {
        /// Method being called.
        method: String,
        /// Runtime type of the trailing value.
        actual: ValueType,
    },

    /// A raw params payload was not an object.
    #[error("Protocol Error: Params for method '{method}' must be an object but they are '{actual}'.")]
    InvalidParams {
        /// Method being invoked.
        method: String,
        /// Runtime type of the supplied payload.
        actual: ValueType,
    },

    // ========================================================================
    // Routing Errors
    // ========================================================================
    /// Event addressed to a domain with no registered handler.
    #[error("Protocol Error: the message is for non-existing domain '{domain}'")]
    UnknownDomain {
        /// The unknown domain.
        domain: String,
    },

    /// Event addressed to an operation the domain handler does not implement.
    #[error("Protocol Error: Attempted to dispatch an unimplemented method '{method}'")]
    UnknownOperation {
        /// Full `Domain.operation` method name.
        method: String,
    },

    /// Event name with no registered event shape.
    #[error("Protocol Error: Attempted to dispatch an unspecified method '{method}'")]
    UndeclaredEvent {
        /// Full `Domain.operation` method name.
        method: String,
    },

    /// Inbound message is neither a response nor an event.
    #[error("Protocol Error: Malformed message: {message}")]
    MalformedMessage {
        /// Description of the problem.
        message: String,
    },

    // ========================================================================
    // Remote Errors
    // ========================================================================
    /// Response carried a server-declared error object.
    #[error("Remote error: {0}")]
    Remote(ProtocolError),

    // ========================================================================
    // Connection Errors
    // ========================================================================
    /// Connection to the backend failed.
    #[error("Connection failed: {message}")]
    Connection {
        /// Description of the connection error.
        message: String,
    },

    /// Transport closed; the message could not be delivered.
    #[error("Connection closed")]
    ConnectionClosed,

    // ========================================================================
    // External Errors
    // ========================================================================
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// WebSocket error.
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] WsError),

    /// Channel receive error.
    #[error("Channel closed")]
    ChannelClosed(#[from] RecvError),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a schema error for an unregistered command.
    #[inline]
    pub fn schema(method: impl Into<String>) -> Self {
        Self::Schema {
            method: method.into(),
        }
    }

    /// Creates a missing argument error.
    #[inline]
    pub fn missing_argument(method: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::MissingArgument {
            method: method.into(),
            expected: expected.into(),
        }
    }

    /// Creates a type mismatch error.
    #[inline]
    pub fn type_mismatch(
        method: impl Into<String>,
        param: impl Into<String>,
        expected: ValueType,
        actual: ValueType,
    ) -> Self {
        Self::TypeMismatch {
            method: method.into(),
            param: param.into(),
            expected,
            actual,
        }
    }

    /// Creates a signature error.
    #[inline]
    pub fn signature(method: impl Into<String>, actual: ValueType) -> Self {
        Self::Signature {
            method: method.into(),
            actual,
        }
    }

    /// Creates an invalid params error.
    #[inline]
    pub fn invalid_params(method: impl Into<String>, actual: ValueType) -> Self {
        Self::InvalidParams {
            method: method.into(),
            actual,
        }
    }

    /// Creates an unknown domain error.
    #[inline]
    pub fn unknown_domain(domain: impl Into<String>) -> Self {
        Self::UnknownDomain {
            domain: domain.into(),
        }
    }

    /// Creates an unknown operation error.
    #[inline]
    pub fn unknown_operation(method: impl Into<String>) -> Self {
        Self::UnknownOperation {
            method: method.into(),
        }
    }

    /// Creates an undeclared event error.
    #[inline]
    pub fn undeclared_event(method: impl Into<String>) -> Self {
        Self::UndeclaredEvent {
            method: method.into(),
        }
    }

    /// Creates a malformed message error.
    #[inline]
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedMessage {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[inline]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if the error was raised while encoding a call.
    ///
    /// Encoding errors guarantee nothing was sent.
    #[inline]
    #[must_use]
    pub fn is_encoding_error(&self) -> bool {
        matches!(
            self,
            Self::Schema { .. }
                | Self::MissingArgument { .. }
                | Self::TypeMismatch { .. }
                | Self::Signature { .. }
                | Self::InvalidParams { .. }
        )
    }

    /// Returns `true` if the error was raised while routing an inbound message.
    #[inline]
    #[must_use]
    pub fn is_routing_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownDomain { .. }
                | Self::UnknownOperation { .. }
                | Self::UndeclaredEvent { .. }
                | Self::MalformedMessage { .. }
                | Self::Json(_)
        )
    }

    /// Returns `true` if this is a remote (server-declared) error.
    #[inline]
    #[must_use]
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }

    /// Returns `true` if this is a connection error.
    #[inline]
    #[must_use]
    pub fn is_connection_error(&self) -> bool {
        matches!(
            self,
            Self::Connection { .. } | Self::ConnectionClosed | Self::WebSocket(_)
        )
    }

    /// Returns the remote protocol error, if any.
    #[inline]
    #[must_use]
    pub fn as_remote(&self) -> Option<&ProtocolError> {
        match self {
            Self::Remote(error) => Some(error),
            _ => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::ErrorKind;

    #[test]
    fn test_missing_argument_display() {
        let err = Error::missing_argument("Page.open", "url: string, newWindow?: boolean");
        assert_eq!(
            err.to_string(),
            "Protocol Error: Invalid number of arguments for method 'Page.open' call. \
             It must have the next arguments 'url: string, newWindow?: boolean'."
        );
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = Error::type_mismatch(
            "DOM.removeNode",
            "nodeId",
            ValueType::Number,
            ValueType::String,
        );
        assert!(err.to_string().contains("'nodeId'"));
        assert!(err.to_string().contains("must be 'number' but it is 'string'"));
    }

    #[test]
    fn test_is_encoding_error() {
        assert!(Error::schema("Foo.bar").is_encoding_error());
        assert!(Error::signature("Page.enable", ValueType::Number).is_encoding_error());
        assert!(!Error::unknown_domain("Foo").is_encoding_error());
    }

    #[test]
    fn test_is_routing_error() {
        assert!(Error::unknown_domain("Foo").is_routing_error());
        assert!(Error::unknown_operation("Foo.bar").is_routing_error());
        assert!(Error::undeclared_event("Foo.bar").is_routing_error());
        assert!(!Error::ConnectionClosed.is_routing_error());
    }

    #[test]
    fn test_is_connection_error() {
        assert!(Error::connection("refused").is_connection_error());
        assert!(Error::ConnectionClosed.is_connection_error());
        assert!(!Error::config("test").is_connection_error());
    }

    #[test]
    fn test_remote_error() {
        let err = Error::Remote(ProtocolError::new(-32601, "no such method"));
        assert!(err.is_remote());
        assert_eq!(err.as_remote().map(ProtocolError::code), Some(-32601));
        assert!(Error::ConnectionClosed.as_remote().is_none());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = IoError::new(ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<String>("invalid").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.is_routing_error());
    }
}
