//! # sha256 CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sha256_cli::hash::{run_hash, HashArgs};
use sha256_cli::selftest::{run_selftest, SelftestArgs};
use sha256_cli::verify::{run_verify, VerifyArgs};

/// SHA-256 (FIPS 180-4) digests of command-line input.
#[derive(Parser, Debug)]
#[command(name = "sha256", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the SHA-256 digest of each input.
    Hash(HashArgs),

    /// Check an input against an expected digest.
    Verify(VerifyArgs),

    /// Run the FIPS 180-4 known-answer vectors.
    Selftest(SelftestArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise derive the level from -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();
    let result = match cli.command {
        Commands::Hash(args) => run_hash(&args, &mut stdout),
        Commands::Verify(args) => run_verify(&args, &mut stdout),
        Commands::Selftest(args) => run_selftest(&args, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
