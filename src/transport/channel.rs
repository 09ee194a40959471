//! In-process channel transport.
//!
//! Outbound messages are pushed onto an unbounded tokio channel; the
//! receiving half is handed to whatever plays the backend (a test harness,
//! an embedder bridging to another process).

// ============================================================================
// Imports
// ============================================================================

use tokio::sync::mpsc;
use tracing::trace;

use crate::error::{Error, Result};

use super::Transport;

// ============================================================================
// ChannelTransport
// ============================================================================

/// Transport that queues outbound messages on a tokio channel.
#[derive(Debug, Clone)]
pub struct ChannelTransport {
    /// Outbound message sender.
    tx: mpsc::UnboundedSender<String>,
}

impl ChannelTransport {
    /// Creates a transport and the receiver for its outbound messages.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Returns `true` if the receiving half has been dropped.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl Transport for ChannelTransport {
    fn send_message(&self, message: String) -> Result<()> {
        trace!(len = message.len(), "Queued outbound message");
        self.tx.send(message).map_err(|_| Error::ConnectionClosed)
    }
}

// ============================================================================
// Tests
// ============================================================================
