//! # Salt Material and Salt Sources
//!
//! A salt is 16 bytes mixed into the hash input ahead of the content, so
//! that fingerprints of related values cannot be correlated across tokens
//! or attacked with a dictionary of known canonical forms.
//!
//! Minting is abstracted behind [`SaltSource`] so the orchestrator can be
//! driven by a deterministic source in tests while production code draws
//! from the OS CSPRNG.

use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use driftmark_core::TokenDecodeError;

use crate::hex::{bytes_to_hex, hex_prefix, hex_to_bytes};

/// Length of a salt in bytes.
pub const SALT_LEN: usize = 16;

/// A 16-byte fingerprint salt.
///
/// Serializes as a 32-character lowercase hex string.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Salt([u8; SALT_LEN]);

impl Salt {
    /// Create a salt from raw bytes.
    pub fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }

    /// Return the raw salt bytes.
    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }

    /// Render the salt as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        bytes_to_hex(&self.0)
    }

    /// Parse a salt from a 32-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, TokenDecodeError> {
        if hex.len() != SALT_LEN * 2 {
            return Err(TokenDecodeError::InvalidLength {
                expected: SALT_LEN * 2,
                actual: hex.len(),
            });
        }
        let bytes = hex_to_bytes(hex)?;
        let mut arr = [0u8; SALT_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl Serialize for Salt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Salt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Salt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Salt({}...)", hex_prefix(&self.0))
    }
}

impl std::fmt::Display for Salt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A source of fresh salts.
///
/// One salt per mint; a source must never hand out predictable or repeated
/// salts for independent fingerprints. (Reuse happens only when the
/// orchestrator carries an unchanged value's token forward verbatim, which
/// bypasses minting entirely.)
pub trait SaltSource {
    /// Mint a fresh 16-byte salt.
    fn generate_salt(&mut self) -> Salt;
}

/// Production salt source backed by the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSaltSource;

impl SaltSource for OsSaltSource {
    fn generate_salt(&mut self) -> Salt {
        let mut bytes = [0u8; SALT_LEN];
        OsRng.fill_bytes(&mut bytes);
        Salt(bytes)
    }
}

/// Deterministic salt source for tests: yields the same salt on every mint,
/// so exact token bytes can be asserted.
#[derive(Debug, Clone, Copy)]
pub struct FixedSaltSource(Salt);

impl FixedSaltSource {
    /// Create a source that always yields `salt`.
    pub fn new(salt: Salt) -> Self {
        Self(salt)
    }
}

impl SaltSource for FixedSaltSource {
    fn generate_salt(&mut self) -> Salt {
        self.0
    }
}
