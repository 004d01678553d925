//! # driftmark-crypto — Cryptographic Primitives
//!
//! Provides the cryptographic building blocks for Driftmark:
//!
//! - **Salted SHA-256 fingerprints** computed from `CanonicalBytes` (the
//!   only valid input type, enforcing canonicalization correctness).
//! - **`SaltSource`** abstraction over the randomness used to mint salts,
//!   with `OsSaltSource` backed by the OS CSPRNG and a deterministic
//!   `FixedSaltSource` for tests.
//! - **`HashToken`** — the persisted salt‖digest pair and its fixed-width
//!   hex codec.
//!
//! ## Crate Policy
//!
//! - Depends only on `driftmark-core` internally.
//! - No mocking of cryptographic operations in tests — all tests use real
//!   `CanonicalBytes` and real SHA-256; only the salt *source* is
//!   substitutable, because salt minting is the one nondeterministic input.
//! - `unsafe` prohibited.

pub mod fingerprint;
pub mod salt;
pub mod token;

mod hex;

pub use fingerprint::{salted_digest, Digest, DIGEST_LEN};
pub use salt::{FixedSaltSource, OsSaltSource, Salt, SaltSource, SALT_LEN};
pub use token::{HashToken, TOKEN_HEX_LEN};
