//! # Canon Subcommand
//!
//! Prints a document's canonical form — the exact bytes the fingerprint is
//! computed over. Useful for settling determinism disputes between callers.

use std::path::PathBuf;

use clap::Args;

use driftmark_core::{CanonicalBytes, StructuredValue};

use crate::input::read_document;

/// Arguments for the canon subcommand.
#[derive(Args, Debug)]
pub struct CanonArgs {
    /// Input document (JSON or YAML). Reads stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,
}

pub fn run(args: CanonArgs) -> anyhow::Result<()> {
    let document = read_document(args.input.as_deref())?;
    let value = StructuredValue::from_yaml(&document)?;
    let canonical = CanonicalBytes::new(&value);
    // Canonical bytes are UTF-8 by construction.
    println!("{}", String::from_utf8_lossy(canonical.as_bytes()));
    Ok(())
}
