//! # sha256-cli — SHA-256 Command-Line Interface
//!
//! A clap-based front end over `sha256-engine`. All input is supplied on the
//! command line, either as UTF-8 text or as hex-encoded bytes.
//!
//! ## Subcommands
//!
//! - `hash`: Print the digest of each input
//! - `verify`: Check an input against an expected digest
//! - `selftest`: Run the FIPS 180-4 known-answer vectors
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handlers take an output writer and return an exit code, so they can be
//!   tested without spawning the binary.

use anyhow::{Context, Result};

pub mod hash;
pub mod selftest;
pub mod verify;

/// Interpret a command-line argument as the bytes to hash.
///
/// With `hex`, the argument is decoded from hex; otherwise its UTF-8 bytes
/// are used as-is.
pub fn input_bytes(input: &str, hex: bool) -> Result<Vec<u8>> {
    if hex {
        sha256_core::hex::decode(input).with_context(|| format!("input is not valid hex: {input:?}"))
    } else {
        Ok(input.as_bytes().to_vec())
    }
}
