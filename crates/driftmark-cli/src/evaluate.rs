//! # Evaluate Subcommand
//!
//! Runs one change-detection evaluation and prints the JSON response.

use std::path::PathBuf;

use clap::Args;

use driftmark_detect::{ChangeDetector, EvaluateRequest};

use crate::input::read_document;

/// Arguments for the evaluate subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Input document (JSON or YAML). Reads stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Token returned by the previous evaluation of this document.
    #[arg(long)]
    pub previous_hash: Option<String>,

    /// Mint a fresh salt even when the document is unchanged.
    #[arg(long)]
    pub force_new_salt: bool,
}

pub fn run(args: EvaluateArgs) -> anyhow::Result<()> {
    let request = EvaluateRequest {
        data: read_document(args.input.as_deref())?,
        previous_hash: args.previous_hash,
        force_new_salt: args.force_new_salt,
    };
    let response = ChangeDetector::new().handle(&request)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
