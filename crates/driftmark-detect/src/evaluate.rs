//! # ChangeDetector — The Evaluation State Machine
//!
//! The orchestrator is stateless between calls; `&mut self` only threads
//! the injected salt source. Distinct detectors on distinct threads need no
//! synchronization, and concurrent evaluation of the same logical slot is
//! the caller's persistence problem, not ours.

use driftmark_core::{CanonicalBytes, StructuredValue};
use driftmark_crypto::{salted_digest, HashToken, OsSaltSource, SaltSource};

/// Outcome of one evaluation: the token to persist and the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// The token the caller must persist and re-supply next call.
    pub token: HashToken,
    /// Whether the value differs from the one the previous token was
    /// minted for. Defaults to true when no usable previous token exists.
    pub data_changed: bool,
}

/// Drives canonicalization, fingerprinting, and the token codec to decide
/// whether a value changed since the previous observation.
#[derive(Debug, Clone, Default)]
pub struct ChangeDetector<S = OsSaltSource> {
    salts: S,
}

impl ChangeDetector<OsSaltSource> {
    /// A detector minting salts from the OS CSPRNG.
    pub fn new() -> Self {
        Self { salts: OsSaltSource }
    }
}

impl<S: SaltSource> ChangeDetector<S> {
    /// A detector minting salts from the given source.
    ///
    /// Production code wants [`ChangeDetector::new`]; injecting a
    /// deterministic source is for tests that assert exact token bytes.
    pub fn with_salt_source(salts: S) -> Self {
        Self { salts }
    }

    /// Evaluate `value` against the previously issued token, if any.
    ///
    /// Infallible: unsupported input is rejected before a
    /// `StructuredValue` can exist, and a malformed `previous_token` is
    /// treated as absent rather than surfaced.
    ///
    /// With `force_new_salt` the salt is rotated even when the value is
    /// unchanged — `data_changed` still reports false, but the emitted
    /// token differs from the supplied one.
    pub fn evaluate(
        &mut self,
        value: &StructuredValue,
        previous_token: Option<&str>,
        force_new_salt: bool,
    ) -> Evaluation {
        let canonical = CanonicalBytes::new(value);

        // Explicit recovery branch: a token that fails to decode is the
        // same as no token at all, logged so operators can tell a corrupt
        // history from an absent one.
        let previous = previous_token.and_then(|text| match HashToken::from_hex(text) {
            Ok(token) => Some(token),
            Err(error) => {
                tracing::warn!(%error, "previous token undecodable, treating as absent");
                None
            }
        });

        let carried = previous
            .filter(|token| salted_digest(token.salt(), &canonical) == *token.digest());
        let data_changed = carried.is_none();

        let token = match carried {
            Some(token) if !force_new_salt => token,
            _ => {
                let salt = self.salts.generate_salt();
                HashToken::new(salt, salted_digest(&salt, &canonical))
            }
        };

        Evaluation { token, data_changed }
    }
}
