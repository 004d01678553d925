//! # driftmark CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Driftmark — salted-fingerprint change detection for structured values.
///
/// Fingerprints a JSON/YAML document into a compact salted token and
/// decides, given the previous token, whether the document changed.
#[derive(Parser, Debug)]
#[command(name = "driftmark", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Fingerprint a document and report whether it changed.
    Evaluate(driftmark_cli::evaluate::EvaluateArgs),
    /// Print a document's canonical form.
    Canon(driftmark_cli::canon::CanonArgs),
    /// Decode a token into its salt and digest halves.
    Token(driftmark_cli::token::TokenArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate(args) => driftmark_cli::evaluate::run(args),
        Commands::Canon(args) => driftmark_cli::canon::run(args),
        Commands::Token(args) => driftmark_cli::token::run(args),
    }
}
