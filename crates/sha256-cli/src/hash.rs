//! # Hash Subcommand
//!
//! Prints one digest per input, in the familiar `<hex>  <input>` layout or as
//! one JSON object per line.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use sha256_core::{Sha256Digest, ALGORITHM};
use sha256_engine::sha256;

use crate::input_bytes;

/// Arguments for the `sha256 hash` subcommand.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Treat each input as hex-encoded bytes instead of text.
    #[arg(long)]
    pub hex: bool,

    /// Emit one JSON object per input.
    #[arg(long)]
    pub json: bool,

    /// Inputs to hash.
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<String>,
}

/// One line of `--json` output.
#[derive(Debug, Serialize)]
pub struct HashRecord<'a> {
    /// Always `"sha256"`.
    pub algorithm: &'static str,
    /// Lowercase hex digest.
    pub digest: Sha256Digest,
    /// Number of bytes hashed.
    pub length: usize,
    /// The input as given on the command line.
    pub input: &'a str,
}

/// Execute the hash subcommand.
pub fn run_hash(args: &HashArgs, out: &mut impl Write) -> Result<u8> {
    for input in &args.inputs {
        let bytes = input_bytes(input, args.hex)?;
        let digest = sha256(&bytes);
        tracing::debug!(length = bytes.len(), %digest, "hashed input");

        if args.json {
            let record = HashRecord {
                algorithm: ALGORITHM,
                digest,
                length: bytes.len(),
                input,
            };
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
        } else {
            writeln!(out, "{digest:x}  {input}")?;
        }
    }
    Ok(0)
}
