//! # Verify Subcommand
//!
//! Recomputes the digest of an input and compares it with an expected value
//! in constant time. Exit code 0 on match, 1 on mismatch.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use sha256_core::Sha256Digest;
use sha256_engine::sha256;

use crate::input_bytes;

/// Arguments for the `sha256 verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Treat the input as hex-encoded bytes instead of text.
    #[arg(long)]
    pub hex: bool,

    /// Expected digest, as 64 hex characters with an optional `sha256:` tag.
    #[arg(value_name = "EXPECTED")]
    pub expected: String,

    /// Input to hash.
    #[arg(value_name = "INPUT")]
    pub input: String,
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs, out: &mut impl Write) -> Result<u8> {
    let expected = Sha256Digest::from_hex(&args.expected)
        .with_context(|| format!("invalid expected digest: {:?}", args.expected))?;
    let actual = sha256(&input_bytes(&args.input, args.hex)?);

    if actual.ct_eq(&expected) {
        writeln!(out, "OK: {actual}")?;
        Ok(0)
    } else {
        tracing::warn!(%expected, %actual, "digest mismatch");
        writeln!(out, "MISMATCH: expected {expected}, computed {actual}")?;
        Ok(1)
    }
}
