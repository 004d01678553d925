//! # Host Request/Response Boundary
//!
//! The host collaborator speaks in documents: a request carries the value
//! to fingerprint plus the previously persisted token text, and the
//! response carries the new token and the verdict. This is the only place
//! unsupported input can surface as an error — past [`handle`], the
//! pipeline is infallible.
//!
//! [`handle`]: ChangeDetector::handle

use serde::{Deserialize, Serialize};

use driftmark_core::{CanonicalizationError, StructuredValue};
use driftmark_crypto::SaltSource;

use crate::evaluate::ChangeDetector;

/// One evaluation request from the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluateRequest {
    /// The structured value to fingerprint.
    pub data: serde_yaml::Value,

    /// Token text returned by the previous evaluation, if the caller has
    /// one. Malformed text is tolerated and treated as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_hash: Option<String>,

    /// Mint a fresh salt even when the value is unchanged.
    #[serde(default)]
    pub force_new_salt: bool,
}

/// The reply to an [`EvaluateRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluateResponse {
    /// New token text: 96 lowercase hex characters. The caller persists
    /// this and supplies it as `previous_hash` next time.
    pub hash: String,
    /// Whether the value differs from the previous observation.
    pub data_changed: bool,
}

impl<S: SaltSource> ChangeDetector<S> {
    /// Serve one host request.
    ///
    /// # Errors
    ///
    /// Returns `CanonicalizationError::UnsupportedType` when `data`
    /// contains a value outside the admissible kinds; no token and no
    /// verdict are produced in that case.
    pub fn handle(
        &mut self,
        request: &EvaluateRequest,
    ) -> Result<EvaluateResponse, CanonicalizationError> {
        let value = StructuredValue::from_yaml(&request.data)?;
        let evaluation = self.evaluate(
            &value,
            request.previous_hash.as_deref(),
            request.force_new_salt,
        );
        Ok(EvaluateResponse {
            hash: evaluation.token.to_hex(),
            data_changed: evaluation.data_changed,
        })
    }
}
