//! Inspector Backend - Protocol dispatch engine for developer-tools inspectors.
//!
//! This library is the client-side dispatch layer of a browser inspector
//! protocol binding: it validates and encodes commands against a declared
//! schema, correlates responses with the calls that issued them, and fans
//! events out to per-domain handlers.
//!
//! # Architecture
//!
//! - **Schema**: declared commands (positional, typed params), reply shapes
//!   and event shapes
//! - **Backend**: call table, domain dispatchers, deferred-action queue
//! - **Transport**: anything that can send a text frame; inbound frames are
//!   handed to [`InspectorBackend::dispatch_text`]
//!
//! Key design principles:
//!
//! - Every call gets a fresh id and is answered at most once
//! - Encoding errors are caught before anything is sent
//! - A bad inbound message is logged and dropped; routing continues
//! - Callbacks run with no lock held and may re-enter the backend
//!
//! # Quick Start
//!
//! ```no_run
//! use inspector_backend::protocol::command::RuntimeEvaluate;
//! use inspector_backend::transport::Connection;
//! use inspector_backend::{EventDispatcher, InspectorBackend, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let connection = Connection::connect("ws://127.0.0.1:9222/devtools/page/1").await?;
//!     let backend = InspectorBackend::builder()
//!         .transport(connection.clone())
//!         .build()?;
//!     connection.attach(&backend);
//!
//!     backend.register_domain_dispatcher(
//!         "Page",
//!         EventDispatcher::new().on("loadEventFired", |args| {
//!             println!("loaded at {:?}", args.f64(0));
//!         }),
//!     );
//!
//!     let evaluated = backend.execute(&RuntimeEvaluate::new("1 + 1")).await?;
//!     println!("{:?}", evaluated.result);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`backend`] | Dispatch engine: [`InspectorBackend`] |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |
//! | [`protocol`] | Wire message types and typed commands |
//! | [`schema`] | Command, reply and event declarations |
//! | [`transport`] | Outbound transports and WebSocket connection |

// ============================================================================
// Modules
// ============================================================================

/// Dispatch engine.
///
/// Use [`InspectorBackend::builder()`] to create a configured backend.
pub mod backend;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Type-safe identifiers.
pub mod identifiers;

/// Protocol message types.
///
/// Requests, responses, events, remote errors and typed commands.
pub mod protocol;

/// Protocol declarations.
///
/// [`schema::inspector_protocol()`] returns the built-in declaration set.
pub mod schema;

/// Transport layer.
///
/// [`transport::ChannelTransport`] for in-process use and
/// [`transport::Connection`] for WebSocket endpoints.
pub mod transport;

// ============================================================================
// Re-exports
// ============================================================================

// Backend types
pub use backend::{
    BackendOptions, DomainHandler, EventDispatcher, InspectorBackend, InspectorBackendBuilder,
};

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::CallId;

// Protocol types
pub use protocol::{Arguments, Command, ErrorCode, ProtocolError};

// Schema types
pub use schema::{CommandSpec, ParamSpec, SchemaRegistry, ValueType};
