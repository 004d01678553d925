//! # Salted Fingerprint Computation
//!
//! Computes SHA-256 digests over `salt ‖ canonical`, salt first. Salting
//! ahead of the content means two tokens for the same value under different
//! salts share no digest structure, so stored tokens cannot be correlated
//! or matched against a dictionary of known canonical forms.
//!
//! ## Security Invariant
//!
//! The function signature `salted_digest(&Salt, &CanonicalBytes)` makes it
//! a compile error to hash raw bytes. Every digest in the system is
//! guaranteed to have flowed through the canonicalization pipeline.

use sha2::{Digest as _, Sha256};

use driftmark_core::CanonicalBytes;

use crate::hex::{bytes_to_hex, hex_prefix};
use crate::salt::Salt;

/// Length of a digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// A 32-byte salted SHA-256 digest.
///
/// Serializes as a 64-character lowercase hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Create a digest from raw bytes.
    ///
    /// Prefer [`salted_digest`] — this exists for the token codec, which
    /// reassembles digests parsed from persisted tokens.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Return the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({}...)", hex_prefix(&self.0))
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute the SHA-256 digest of `salt ‖ canonical`.
///
/// Pure: same salt and canonical bytes always yield the same digest. The
/// orchestrator recomputes this on every evaluation and compares it against
/// the digest carried in the previous token.
pub fn salted_digest(salt: &Salt, canonical: &CanonicalBytes) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(canonical.as_bytes());
    let mut bytes = [0u8; DIGEST_LEN];
    bytes.copy_from_slice(&hasher.finalize());
    Digest(bytes)
}
