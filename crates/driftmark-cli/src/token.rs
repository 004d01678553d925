//! # Token Subcommand
//!
//! Decodes a persisted token and prints its salt and digest halves, or the
//! decode error a malformed token would be recovered from.

use clap::Args;

use driftmark_crypto::HashToken;

/// Arguments for the token subcommand.
#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Token text: 96 hex characters.
    pub token: String,
}

pub fn run(args: TokenArgs) -> anyhow::Result<()> {
    let token = HashToken::from_hex(&args.token)?;
    println!("salt:   {}", token.salt());
    println!("digest: {}", token.digest());
    Ok(())
}
