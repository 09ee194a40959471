//! Positional values handed to completions and event handlers.
//!
//! Each slot holds `Some(value)` or `None` when the field was absent from
//! the payload, so positions always line up with the declared field list.

// ============================================================================
// Imports
// ============================================================================

use std::ops::Index;

use serde_json::{Map, Value};

// ============================================================================
// Arguments
// ============================================================================

/// Ordered values extracted from a response result or event params.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments(Vec<Option<Value>>);

impl Arguments {
    /// Creates an empty argument list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Extracts `fields` from `payload` in order.
    ///
    /// Fields missing from the payload (or a non-object payload) yield
    /// `None` in their position.
    #[must_use]
    pub fn extract(payload: &Value, fields: &[String]) -> Self {
        fields
            .iter()
            .map(|field| payload.get(field).cloned())
            .collect()
    }

    /// Returns the number of positions.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no positions.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the value at `index`, or `None` if absent or out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index).and_then(Option::as_ref)
    }

    /// Returns a string value at `index`.
    #[inline]
    #[must_use]
    pub fn str(&self, index: usize) -> Option<&str> {
        self.get(index).and_then(Value::as_str)
    }

    /// Returns a float value at `index`.
    #[inline]
    #[must_use]
    pub fn f64(&self, index: usize) -> Option<f64> {
        self.get(index).and_then(Value::as_f64)
    }

    /// Returns an unsigned integer value at `index`.
    #[inline]
    #[must_use]
    pub fn u64(&self, index: usize) -> Option<u64> {
        self.get(index).and_then(Value::as_u64)
    }

    /// Returns a boolean value at `index`.
    #[inline]
    #[must_use]
    pub fn bool(&self, index: usize) -> Option<bool> {
        self.get(index).and_then(Value::as_bool)
    }

    /// Iterates over the positions.
    pub fn iter(&self) -> impl Iterator<Item = Option<&Value>> {
        self.0.iter().map(Option::as_ref)
    }

    /// Rebuilds an object keyed by `fields`, skipping absent positions.
    #[must_use]
    pub fn to_object(&self, fields: &[String]) -> Map<String, Value> {
        fields
            .iter()
            .zip(&self.0)
            .filter_map(|(field, value)| value.clone().map(|v| (field.clone(), v)))
            .collect()
    }

    /// Consumes the list and returns the raw positions.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<Option<Value>> {
        self.0
    }
}

impl FromIterator<Option<Value>> for Arguments {
    fn from_iter<I: IntoIterator<Item = Option<Value>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<Option<Value>>> for Arguments {
    #[inline]
    fn from(values: Vec<Option<Value>>) -> Self {
        Self(values)
    }
}

impl Index<usize> for Arguments {
    type Output = Option<Value>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

// ============================================================================
// Tests
// ============================================================================
