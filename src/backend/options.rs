//! Backend diagnostic options.
//!
//! # Example
//!
//! ```ignore
//! use inspector_backend::BackendOptions;
//!
//! let options = BackendOptions::new()
//!     .with_protocol_dump()
//!     .with_time_stats();
//! ```

// ============================================================================
// BackendOptions
// ============================================================================

/// Diagnostic switches for the dispatch engine.
///
/// Both switches only add `tracing` output; they never change routing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BackendOptions {
    /// Log every outbound (`frontend:`) and inbound (`backend:`) message.
    pub dump_protocol_messages: bool,

    /// Record issue time per call and log round-trip and processing times.
    pub dump_time_stats: bool,
}

// ============================================================================
// Constructors
// ============================================================================

impl BackendOptions {
    /// Creates options with every diagnostic disabled.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            dump_protocol_messages: false,
            dump_time_stats: false,
        }
    }
}

// ============================================================================
// Builder Methods
// ============================================================================

impl BackendOptions {
    /// Enables protocol message dumps.
    #[inline]
    #[must_use]
    pub const fn with_protocol_dump(mut self) -> Self {
        self.dump_protocol_messages = true;
        self
    }

    /// Enables per-call time stats.
    #[inline]
    #[must_use]
    pub const fn with_time_stats(mut self) -> Self {
        self.dump_time_stats = true;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
