//! Builder pattern for backend configuration.
//!
//! # Example
//!
//! ```ignore
//! use inspector_backend::{InspectorBackend, transport::ChannelTransport};
//!
//! let (transport, outbound) = ChannelTransport::new();
//! let backend = InspectorBackend::builder()
//!     .transport(transport)
//!     .time_stats()
//!     .build()?;
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::identifiers::CallId;
use crate::protocol::ProtocolError;
use crate::schema::{self, SchemaRegistry};
use crate::transport::Transport;

use super::{BackendOptions, ErrorReporter, InspectorBackend, default_error_reporter};

// ============================================================================
// InspectorBackendBuilder
// ============================================================================

/// Builder for configuring an [`InspectorBackend`].
///
/// Use [`InspectorBackend::builder()`] to create a new builder.
#[derive(Default)]
pub struct InspectorBackendBuilder {
    /// Outbound transport.
    transport: Option<Arc<dyn Transport>>,
    /// Declarations; defaults to the built-in inspector protocol.
    schema: Option<SchemaRegistry>,
    /// Diagnostic switches.
    options: BackendOptions,
    /// Remote error hook; defaults to a `tracing` logger.
    reporter: Option<ErrorReporter>,
}

// ============================================================================
// InspectorBackendBuilder Implementation
// ============================================================================

impl InspectorBackendBuilder {
    /// Creates a builder with no configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the outbound transport.
    #[inline]
    #[must_use]
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Sets a custom schema instead of the built-in declarations.
    #[inline]
    #[must_use]
    pub fn schema(mut self, schema: SchemaRegistry) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Sets all diagnostic options.
    #[inline]
    #[must_use]
    pub fn options(mut self, options: BackendOptions) -> Self {
        self.options = options;
        self
    }

    /// Enables protocol message dumps.
    #[inline]
    #[must_use]
    pub fn protocol_dump(mut self) -> Self {
        self.options = self.options.with_protocol_dump();
        self
    }

    /// Enables per-call time stats.
    #[inline]
    #[must_use]
    pub fn time_stats(mut self) -> Self {
        self.options = self.options.with_time_stats();
        self
    }

    /// Sets the protocol-error reporting hook.
    #[inline]
    #[must_use]
    pub fn error_reporter<F>(mut self, reporter: F) -> Self
    where
        F: Fn(CallId, &ProtocolError) + Send + Sync + 'static,
    {
        self.reporter = Some(Arc::new(reporter));
        self
    }

    /// Builds the backend.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no transport was set.
    pub fn build(self) -> Result<InspectorBackend> {
        let transport = self.transport.ok_or_else(|| {
            Error::config(
                "Transport is required. Use .transport() to set it.\n\
                 Example: InspectorBackend::builder().transport(connection)",
            )
        })?;

        let schema = self.schema.unwrap_or_else(schema::inspector_protocol);
        let reporter = self.reporter.unwrap_or_else(default_error_reporter);

        Ok(InspectorBackend::from_parts(
            schema,
            transport,
            self.options,
            reporter,
        ))
    }
}

impl fmt::Debug for InspectorBackendBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectorBackendBuilder")
            .field("transport", &self.transport.is_some())
            .field("schema", &self.schema.as_ref().map(SchemaRegistry::command_count))
            .field("options", &self.options)
            .field("reporter", &self.reporter.is_some())
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
