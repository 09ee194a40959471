//! Inspector protocol message types.
//!
//! This module defines the message format exchanged between the frontend
//! (this crate) and the inspector backend.
//!
//! # Protocol Overview
//!
//! | Message Type | Direction | Purpose |
//! |--------------|-----------|---------|
//! | `Request` | Frontend → Backend | Command request with call id |
//! | `Response` | Backend → Frontend | Result or error for a call id |
//! | `Event` | Backend → Frontend | Unsolicited notification |
//!
//! # Command Naming
//!
//! Commands and events follow `Domain.operation` format:
//!
//! - `Runtime.evaluate`
//! - `DOM.getDocument`
//! - `Network.loadingFinished`
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `arguments` | Positional values for completions and handlers |
//! | `command` | Typed command definitions |
//! | `error` | Server-declared protocol errors |
//! | `event` | Event type and inbound classification |
//! | `request` | Request and Response types |

// ============================================================================
// Submodules
// ============================================================================

/// Positional values extracted from payloads.
pub mod arguments;

/// Typed command definitions by domain.
pub mod command;

/// Protocol error objects and code classification.
pub mod error;

/// Event message types.
pub mod event;

/// Request and Response message types.
pub mod request;

// ============================================================================
// Re-exports
// ============================================================================

pub use arguments::Arguments;
pub use command::{Command, Empty};
pub use error::{ErrorCode, ProtocolError};
pub use event::{Event, Message};
pub use request::{Request, Response};
