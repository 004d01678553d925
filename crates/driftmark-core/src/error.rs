//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout Driftmark. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Canonicalization errors fail loudly with the offending kind and its
//!   representation, and abort the whole evaluation.
//! - Token decode errors are recoverable by policy: the orchestrator maps
//!   them to "no previous token" instead of surfacing them, so a corrupted
//!   history can never block progress.

use thiserror::Error;

/// Error while building or canonicalizing a `StructuredValue`.
///
/// This is the only failure mode an evaluation can surface to the caller.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Input contains a value outside the six admissible kinds.
    /// Carries the kind name and a rendering of the offending value.
    #[error("cannot fingerprint unsupported {kind} value: {repr}")]
    UnsupportedType {
        /// Name of the offending kind (e.g. `"tagged value"`).
        kind: &'static str,
        /// Human-readable rendering of the offending value.
        repr: String,
    },

    /// An in-process `Serialize` impl produced something that is not
    /// JSON-representable (e.g. a map with non-string keys).
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error while decoding a hash token from its hex text form.
///
/// Never surfaced by `evaluate` — the orchestrator treats any decode
/// failure as "no previous token".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenDecodeError {
    /// The text is not exactly the expected number of hex characters.
    #[error("token must be {expected} hex characters, got {actual}")]
    InvalidLength {
        /// Required character count.
        expected: usize,
        /// Character count actually supplied.
        actual: usize,
    },

    /// The text contains a character that is not a hex digit.
    #[error("invalid hex digit at position {position}")]
    InvalidHex {
        /// Byte offset of the first non-hex character.
        position: usize,
    },
}
