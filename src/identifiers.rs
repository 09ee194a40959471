//! Type-safe identifiers.
//!
//! Newtype wrappers keep call ids from being confused with other integers
//! on the wire (node ids, request ids, breakpoint ids).

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// CallId
// ============================================================================

/// Identifier correlating a request with its eventual response.
///
/// Allocated by the call table starting at 1, strictly increasing and never
/// reused within one backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallId(u64);

impl CallId {
    /// First id handed out by a fresh call table.
    pub const FIRST: Self = Self(1);

    /// Creates a call id from a raw value.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[inline]
    #[must_use]
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Returns the id following this one.
    #[inline]
    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for CallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CallId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_id_serializes_as_integer() {
        let json = serde_json::to_string(&CallId::new(42)).expect("serialize");
        assert_eq!(json, "42");

        let id: CallId = serde_json::from_str("7").expect("parse");
        assert_eq!(id.as_u64(), 7);
    }

    #[test]
    fn test_call_id_next() {
        assert_eq!(CallId::FIRST.next(), CallId::new(2));
        assert!(CallId::FIRST < CallId::FIRST.next());
    }

    #[test]
    fn test_call_id_display() {
        assert_eq!(CallId::from(12).to_string(), "12");
    }
}
