//! Hex utilities shared by the fixed-width byte newtypes.
//!
//! Hand-rolled rather than pulling in a hex crate: the needs are a
//! lowercase render and a strict parse with a positional error.

use driftmark_core::TokenDecodeError;

/// Render bytes as a lowercase hex string.
pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// First few bytes as hex, for redacted `Debug` output.
pub(crate) fn hex_prefix(bytes: &[u8]) -> String {
    bytes.iter().take(4).map(|b| format!("{b:02x}")).collect()
}

/// Parse an even-length, all-hex-digit string into bytes.
///
/// The caller is responsible for length validation; this reports the byte
/// offset of the first non-hex character. Uppercase digits are accepted.
pub(crate) fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, TokenDecodeError> {
    if let Some(position) = hex.bytes().position(|b| !b.is_ascii_hexdigit()) {
        return Err(TokenDecodeError::InvalidHex { position });
    }
    // All-hex-digit implies ASCII, so two-byte slicing cannot split a char.
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| TokenDecodeError::InvalidHex { position: i })
        })
        .collect()
}
