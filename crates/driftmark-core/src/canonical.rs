//! # Canonical Serialization — Deterministic Byte Production
//!
//! This module defines `CanonicalBytes`, the sole construction path for
//! bytes used in fingerprint computation.
//!
//! ## Encoding
//!
//! Scalars use the minimal JSON text rendering (no insignificant
//! whitespace). Sequences encode their elements in source order. Mappings
//! encode each entry as the two-element sequence `[key,value]` and sort the
//! encoded pairs byte-lexicographically — the sort key is the pair's own
//! canonical encoding, never the raw key, so ordering stays well-defined
//! when keys differ in type or composition. Source key order never reaches
//! the output.
//!
//! One deliberate consequence of the pair-list encoding: an empty mapping
//! and an empty sequence share the canonical form `[]`.
//!
//! ## Security Invariant
//!
//! The `CanonicalBytes` newtype has a private inner field. The only way to
//! construct one is through this module, so any function that requires
//! canonical bytes for digest computation is guaranteed input produced by
//! the deterministic encoding — the "wrong serialization path" defect class
//! is structurally impossible.

use serde::Serialize;

use crate::error::CanonicalizationError;
use crate::value::StructuredValue;

/// Bytes produced exclusively by the deterministic canonical encoding.
///
/// # Invariants
///
/// - The only constructors are [`CanonicalBytes::new`] and
///   [`CanonicalBytes::from_serialize`].
/// - Semantically equal values (same kinds and contents, any mapping key
///   order) produce byte-identical output.
/// - The bytes are valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Canonicalize a `StructuredValue`.
    ///
    /// Total: the closed sum type leaves no unsupported kind to reject, so
    /// unlike the ingestion paths this cannot fail.
    pub fn new(value: &StructuredValue) -> Self {
        let mut out = String::new();
        write_canonical(value, &mut out);
        Self(out.into_bytes())
    }

    /// Canonicalize any serializable in-process value.
    ///
    /// Convenience composing [`StructuredValue::from_serialize`] with
    /// [`CanonicalBytes::new`].
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::Serialization` when the value is not
    /// JSON-representable.
    pub fn from_serialize(value: &impl Serialize) -> Result<Self, CanonicalizationError> {
        Ok(Self::new(&StructuredValue::from_serialize(value)?))
    }

    /// Access the canonical bytes for digest computation.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Append the canonical encoding of `value` to `out`.
fn write_canonical(value: &StructuredValue, out: &mut String) {
    match value {
        StructuredValue::Null => out.push_str("null"),
        StructuredValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        StructuredValue::Number(n) => out.push_str(&n.to_string()),
        // serde_json's Display produces the compact escaped JSON string
        // form; non-ASCII characters pass through as UTF-8.
        StructuredValue::String(s) => {
            out.push_str(&serde_json::Value::from(s.as_str()).to_string())
        }
        StructuredValue::Sequence(elements) => {
            out.push('[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(element, out);
            }
            out.push(']');
        }
        StructuredValue::Mapping(entries) => {
            let mut pairs: Vec<String> = entries
                .iter()
                .map(|(key, value)| {
                    let mut pair = String::from("[");
                    write_canonical(key, &mut pair);
                    pair.push(',');
                    write_canonical(value, &mut pair);
                    pair.push(']');
                    pair
                })
                .collect();
            // Byte order of the encoded pair, not the raw key.
            pairs.sort_unstable();
            out.push('[');
            for (i, pair) in pairs.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(pair);
            }
            out.push(']');
        }
    }
}
