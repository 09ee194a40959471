//! WebSocket connection and read loop.
//!
//! This module handles the WebSocket connection to the inspector backend.
//!
//! # Event Loop
//!
//! The connection spawns a tokio task that handles:
//!
//! - Outgoing encoded requests from the backend's send path
//! - Incoming text frames, handed to the attached message handler in
//!   arrival order
//! - Shutdown on request or when the remote closes

// ============================================================================
// Imports
// ============================================================================

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_tungstenite::WebSocketStream;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, error, info, trace, warn};
use url::Url;

use crate::backend::InspectorBackend;
use crate::error::{Error, Result};

use super::Transport;

// ============================================================================
// Types
// ============================================================================

/// Inbound message callback.
///
/// Called with the text of each frame received from the backend.
pub type MessageHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Shared slot holding the current handler.
type HandlerSlot = Arc<Mutex<Option<MessageHandler>>>;

// ============================================================================
// ConnectionCommand
// ============================================================================

/// Internal commands for the event loop.
enum ConnectionCommand {
    /// Send a text frame.
    Send(String),
    /// Shutdown the connection.
    Shutdown,
}

// ============================================================================
// Connection
// ============================================================================

/// WebSocket connection to an inspector backend.
///
/// Implements [`Transport`] for the outbound half; inbound frames go to the
/// handler installed with [`Connection::attach`] or
/// [`Connection::set_message_handler`]. Frames arriving while no handler is
/// installed are dropped.
///
/// # Example
///
/// ```ignore
/// let connection = Connection::connect("ws://127.0.0.1:9222/devtools/page/1").await?;
/// let backend = InspectorBackend::builder()
///     .transport(connection.clone())
///     .build()?;
/// connection.attach(&backend);
/// ```
#[derive(Clone)]
pub struct Connection {
    /// Channel for sending commands to the event loop.
    command_tx: mpsc::UnboundedSender<ConnectionCommand>,
    /// Inbound handler (shared with event loop).
    handler: HandlerSlot,
}

impl Connection {
    /// Connects to the backend at `url`.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if `url` is not a `ws://` or `wss://` URL
    /// - [`Error::Connection`] if the WebSocket handshake fails
    pub async fn connect(url: &str) -> Result<Self> {
        let url = parse_backend_url(url)?;

        let (ws_stream, _) = tokio_tungstenite::connect_async(url.as_str())
            .await
            .map_err(|e| Error::connection(format!("WebSocket handshake failed: {e}")))?;

        info!(%url, "Connected to inspector backend");

        Ok(Self::new(ws_stream))
    }

    /// Creates a connection from an established WebSocket stream.
    ///
    /// Spawns the event loop task internally.
    pub(crate) fn new<S>(ws_stream: WebSocketStream<S>) -> Self
    where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let handler: HandlerSlot = Arc::new(Mutex::new(None));

        tokio::spawn(Self::run_event_loop(
            ws_stream,
            command_rx,
            Arc::clone(&handler),
        ));

        Self {
            command_tx,
            handler,
        }
    }

    /// Routes every inbound frame to `backend`.
    ///
    /// Routing errors are already reported by the backend and do not stop
    /// the read loop.
    pub fn attach(&self, backend: &InspectorBackend) {
        let backend = backend.clone();
        self.set_message_handler(move |text| {
            let _ = backend.dispatch_text(text);
        });
    }

    /// Sets the inbound message handler.
    pub fn set_message_handler<F>(&self, handler: F)
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        *self.handler.lock() = Some(Arc::new(handler));
    }

    /// Clears the inbound message handler.
    pub fn clear_message_handler(&self) {
        *self.handler.lock() = None;
    }

    /// Returns `true` once the event loop has stopped.
    #[inline]
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.command_tx.is_closed()
    }

    /// Shuts down the connection gracefully.
    pub fn shutdown(&self) {
        let _ = self.command_tx.send(ConnectionCommand::Shutdown);
    }

    /// Event loop that handles WebSocket I/O.
    async fn run_event_loop<S>(
        ws_stream: WebSocketStream<S>,
        mut command_rx: mpsc::UnboundedReceiver<ConnectionCommand>,
        handler: HandlerSlot,
    ) where
        S: AsyncRead + AsyncWrite + Unpin + Send + 'static,
    {
        let (mut ws_write, mut ws_read) = ws_stream.split();

        loop {
            tokio::select! {
                // Incoming frames from the backend
                message = ws_read.next() => {
                    match message {
                        Some(Ok(Message::Text(text))) => {
                            Self::deliver(text.as_str(), &handler);
                        }

                        Some(Ok(Message::Close(_))) => {
                            debug!("WebSocket closed by remote");
                            break;
                        }

                        Some(Err(e)) => {
                            error!(error = %e, "WebSocket error");
                            break;
                        }

                        None => {
                            debug!("WebSocket stream ended");
                            break;
                        }

                        // Ignore Binary, Ping, Pong
                        _ => {}
                    }
                }

                // Outbound requests
                command = command_rx.recv() => {
                    match command {
                        Some(ConnectionCommand::Send(text)) => {
                            let len = text.len();
                            if let Err(e) = ws_write.send(Message::Text(text.into())).await {
                                error!(error = %e, "Failed to send message");
                                break;
                            }
                            trace!(len, "Message sent");
                        }

                        Some(ConnectionCommand::Shutdown) => {
                            debug!("Shutdown command received");
                            let _ = ws_write.close().await;
                            break;
                        }

                        None => {
                            debug!("Command channel closed");
                            break;
                        }
                    }
                }
            }
        }

        // Drops the handler, which may hold the backend that holds us.
        handler.lock().take();
        command_rx.close();

        debug!("Event loop terminated");
    }

    /// Hands one inbound frame to the current handler.
    fn deliver(text: &str, handler: &HandlerSlot) {
        let current = handler.lock().clone();
        match current {
            Some(handler) => handler(text),
            None => warn!(len = text.len(), "Dropped message, no handler attached"),
        }
    }
}

impl Transport for Connection {
    fn send_message(&self, message: String) -> Result<()> {
        self.command_tx
            .send(ConnectionCommand::Send(message))
            .map_err(|_| Error::ConnectionClosed)
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// URL Validation
// ============================================================================

/// Parses and validates a backend WebSocket URL.
fn parse_backend_url(url: &str) -> Result<Url> {
    let parsed =
        Url::parse(url).map_err(|e| Error::config(format!("Invalid backend URL '{url}': {e}")))?;

    match parsed.scheme() {
        "ws" | "wss" => Ok(parsed),
        scheme => Err(Error::config(format!(
            "Backend URL must use ws:// or wss://, got '{scheme}://'"
        ))),
    }
}

// ============================================================================
// Tests
// ============================================================================
