//! # driftmark-core — Foundational Types for Driftmark
//!
//! This crate is the bedrock of the Driftmark workspace. It defines the
//! value model and the canonicalization pipeline that every fingerprint
//! computation flows through. Every other crate in the workspace depends on
//! `driftmark-core`; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed `StructuredValue` sum type.** The six admissible value kinds
//!    (null, boolean, number, string, sequence, mapping) are one enum with
//!    exhaustive `match` everywhere. Adding a kind forces every consumer to
//!    handle it; there is no duck-typed fallback.
//!
//! 2. **`CanonicalBytes` newtype.** ALL digest computation flows through
//!    `CanonicalBytes::new()`. No raw `serde_json::to_vec()` for digests.
//!    Ever. This prevents the canonicalization split defect class by
//!    construction.
//!
//! 3. **Unsupported input fails at the boundary.** Values outside the six
//!    kinds (YAML tagged values, non-finite floats, non-JSON-representable
//!    `Serialize` impls) are rejected when a `StructuredValue` is built,
//!    with the offending kind and representation in the error. Once a
//!    `StructuredValue` exists, canonicalization cannot fail.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `driftmark-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`.

pub mod canonical;
pub mod error;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use canonical::CanonicalBytes;
pub use error::{CanonicalizationError, TokenDecodeError};
pub use value::StructuredValue;
