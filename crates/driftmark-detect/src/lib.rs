//! # driftmark-detect — Change-Detection Orchestrator
//!
//! Ties the canonicalizer, fingerprint engine, and token codec into the
//! change-detection protocol: one [`ChangeDetector::evaluate`] call decides
//! whether a value changed relative to a previously issued token and
//! whether a fresh salt must be minted.
//!
//! ## Protocol
//!
//! 1. Canonicalize the value.
//! 2. If the previous token decodes, recompute the salted digest under the
//!    token's salt and compare — equal means unchanged.
//! 3. Mint a fresh salt when the value changed, when no usable previous
//!    token exists, or when the caller forces a refresh; otherwise carry
//!    the previous token forward verbatim.
//!
//! A malformed previous token is never an error: the decode-failure branch
//! is explicit (and logged) and collapses to "no previous token", so a
//! corrupted history can only force a conservative "changed" verdict,
//! never block progress.
//!
//! ## Crate Policy
//!
//! - No persistence: the token handed back to the caller is the only state.
//! - The salt source is injected; everything else is deterministic.

pub mod evaluate;
pub mod request;

pub use evaluate::{ChangeDetector, Evaluation};
pub use request::{EvaluateRequest, EvaluateResponse};
