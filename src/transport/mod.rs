//! Message transport layer.
//!
//! The backend only needs a send primitive; inbound text is fed to
//! [`InspectorBackend::dispatch_text`](crate::InspectorBackend::dispatch_text)
//! by whoever owns the channel.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐                         ┌─────────────────────┐
//! │  InspectorBackend    │     send_message()      │  Inspector backend  │
//! │                      │────────────────────────►│  (browser)          │
//! │  dispatch_text()     │◄────────────────────────│                     │
//! │                      │     text frames         │                     │
//! └──────────────────────┘                         └─────────────────────┘
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `channel` | In-process transport over a tokio channel |
//! | `connection` | WebSocket client connection and read loop |

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use crate::error::Result;

// ============================================================================
// Submodules
// ============================================================================

/// In-process channel transport.
pub mod channel;

/// WebSocket connection and read loop.
pub mod connection;

// ============================================================================
// Re-exports
// ============================================================================

pub use channel::ChannelTransport;
pub use connection::{Connection, MessageHandler};

// ============================================================================
// Transport
// ============================================================================

/// Outbound half of the bidirectional message channel.
///
/// Implementations must deliver messages in the order they are sent.
pub trait Transport: Send + Sync {
    /// Sends one encoded message to the backend.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConnectionClosed`](crate::Error::ConnectionClosed)
    /// or a connection error if the message could not be queued.
    fn send_message(&self, message: String) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send_message(&self, message: String) -> Result<()> {
        (**self).send_message(message)
    }
}
