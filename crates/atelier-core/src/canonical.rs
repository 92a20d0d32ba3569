//! # Canonical Wire Text — Deterministic Payload Production
//!
//! This module defines `CanonicalText`, the sole construction path for the
//! serialized form handed to the connector transport on the structured
//! send path.
//!
//! ## Invariants
//!
//! - Object keys are ordered lexicographically at every nesting level.
//! - Indentation is stable across runs (human-readable in host logs; the
//!   indentation itself is not protocol-significant, and receivers must
//!   accept any field order).
//! - The same value always produces the same text.
//!
//! The `CanonicalText` newtype has a private inner field. The only way to
//! construct one is through `CanonicalText::new()`, which sorts keys before
//! serializing. Any function that puts a structured payload on the wire
//! accepts `&CanonicalText`, so an unsorted or ad-hoc serialization cannot
//! reach the transport.

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Wire text produced exclusively by canonical serialization: sorted keys,
/// stable indentation, deterministic output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalText(String);

impl CanonicalText {
    /// Construct canonical text from any serializable value.
    ///
    /// Re-orders object keys lexicographically at every nesting level, then
    /// pretty-prints with serde_json's stable indentation. This is the ONLY
    /// way to construct `CanonicalText`; the structured send path accepts
    /// nothing else.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::SerializationFailed` if the value
    /// cannot be represented as JSON.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        let sorted = sort_keys(value);
        let text = serde_json::to_string_pretty(&sorted)?;
        Ok(Self(text))
    }

    /// Access the canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the owned text.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for CanonicalText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CanonicalText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Recursively rebuild a JSON value with object keys in lexicographic order.
///
/// `serde_json::Map` preserves insertion order when the `preserve_order`
/// feature is active elsewhere in the dependency graph, so ordering is
/// enforced here by explicit sort-then-insert rather than relying on the
/// map's default BTree backing.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            let mut sorted = serde_json::Map::new();
            for (k, v) in entries {
                sorted.insert(k, sort_keys(v));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}
