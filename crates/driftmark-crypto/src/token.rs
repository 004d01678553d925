//! # HashToken — The Persisted salt‖digest Pair
//!
//! A token is the only state that outlives an evaluation: 16 bytes of salt
//! followed by the 32-byte salted digest, externally a 96-character
//! lowercase hex string. The caller persists the text form and re-supplies
//! it on the next evaluation; this module is the total, inverse codec
//! between the two forms.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use driftmark_core::TokenDecodeError;

use crate::fingerprint::{Digest, DIGEST_LEN};
use crate::hex::{hex_prefix, hex_to_bytes};
use crate::salt::{Salt, SALT_LEN};

/// Length of a token's hex text form: 96 characters.
pub const TOKEN_HEX_LEN: usize = (SALT_LEN + DIGEST_LEN) * 2;

/// A fingerprint token: the salt and the digest it produced.
///
/// Serializes as its 96-character lowercase hex text form.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashToken {
    salt: Salt,
    digest: Digest,
}

impl HashToken {
    /// Assemble a token from its parts.
    pub fn new(salt: Salt, digest: Digest) -> Self {
        Self { salt, digest }
    }

    /// The salt half (first 16 bytes).
    pub fn salt(&self) -> &Salt {
        &self.salt
    }

    /// The digest half (last 32 bytes).
    pub fn digest(&self) -> &Digest {
        &self.digest
    }

    /// Render the token as exactly 96 lowercase hex characters,
    /// salt first.
    pub fn to_hex(&self) -> String {
        let mut out = self.salt.to_hex();
        out.push_str(&self.digest.to_hex());
        out
    }

    /// Parse a token from its hex text form.
    ///
    /// Leading/trailing whitespace is tolerated and uppercase digits are
    /// accepted; for every token `t`, `from_hex(&t.to_hex()) == Ok(t)`.
    ///
    /// # Errors
    ///
    /// `InvalidLength` when the trimmed text is not exactly 96 characters,
    /// `InvalidHex` (with the offending position) when any character is not
    /// a hex digit.
    pub fn from_hex(text: &str) -> Result<Self, TokenDecodeError> {
        let text = text.trim();
        if text.len() != TOKEN_HEX_LEN {
            return Err(TokenDecodeError::InvalidLength {
                expected: TOKEN_HEX_LEN,
                actual: text.len(),
            });
        }
        let bytes = hex_to_bytes(text)?;
        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(&bytes[..SALT_LEN]);
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&bytes[SALT_LEN..]);
        Ok(Self {
            salt: Salt::from_bytes(salt),
            digest: Digest::from_bytes(digest),
        })
    }
}

impl Serialize for HashToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HashToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for HashToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HashToken({}...)", hex_prefix(self.salt.as_bytes()))
    }
}

impl std::fmt::Display for HashToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_token() -> HashToken {
        let mut salt = [0u8; SALT_LEN];
        for (i, b) in salt.iter_mut().enumerate() {
            *b = i as u8;
        }
        let mut digest = [0u8; DIGEST_LEN];
        for (i, b) in digest.iter_mut().enumerate() {
            *b = 0xff - i as u8;
        }
        HashToken::new(Salt::from_bytes(salt), Digest::from_bytes(digest))
    }

    #[test]
    fn test_to_hex_width_and_case() {
        let hex = sample_token().to_hex();
        assert_eq!(hex.len(), TOKEN_HEX_LEN);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert!(hex.starts_with("000102030405060708090a0b0c0d0e0f"));
    }

    #[test]
    fn test_roundtrip() {
        let token = sample_token();
        assert_eq!(HashToken::from_hex(&token.to_hex()).unwrap(), token);
    }

    #[test]
    fn test_split_offsets() {
        let token = sample_token();
        let parsed = HashToken::from_hex(&token.to_hex()).unwrap();
        assert_eq!(parsed.salt(), token.salt());
        assert_eq!(parsed.digest(), token.digest());
    }

    #[test]
    fn test_uppercase_and_whitespace_tolerated() {
        let token = sample_token();
        let sloppy = format!("  {}\n", token.to_hex().to_uppercase());
        assert_eq!(HashToken::from_hex(&sloppy).unwrap(), token);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let too_short = "a".repeat(95);
        let too_long = "a".repeat(97);
        for text in ["", "abcd", too_short.as_str(), too_long.as_str()] {
            assert!(matches!(
                HashToken::from_hex(text),
                Err(TokenDecodeError::InvalidLength { expected: 96, .. })
            ));
        }
    }

    #[test]
    fn test_non_hex_rejected_with_position() {
        let mut text = sample_token().to_hex();
        text.replace_range(10..11, "g");
        assert_eq!(
            HashToken::from_hex(&text),
            Err(TokenDecodeError::InvalidHex { position: 10 })
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let token = sample_token();
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json.len(), TOKEN_HEX_LEN + 2);
        let back: HashToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }

    #[test]
    fn test_display_is_hex_and_debug_redacted() {
        let token = sample_token();
        assert_eq!(token.to_string(), token.to_hex());
        assert_eq!(format!("{token:?}"), "HashToken(00010203...)");
    }
}
