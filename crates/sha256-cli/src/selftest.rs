//! # Selftest Subcommand
//!
//! Runs the FIPS 180-4 SHA-256 examples through the one-shot helper and
//! through a context fed one byte at a time. Any disagreement is an error.

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;

use sha256_core::Sha256Digest;
use sha256_engine::{sha256, Sha256Context};

/// Arguments for the `sha256 selftest` subcommand.
#[derive(Args, Debug)]
pub struct SelftestArgs {}

/// A named message and its published digest.
pub struct KnownAnswer {
    pub name: &'static str,
    pub message: &'static [u8],
    pub digest: &'static str,
}

/// FIPS 180-4 example vectors.
pub const KNOWN_ANSWERS: &[KnownAnswer] = &[
    KnownAnswer {
        name: "empty",
        message: b"",
        digest: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    KnownAnswer {
        name: "abc",
        message: b"abc",
        digest: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    KnownAnswer {
        name: "448-bit",
        message: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
        digest: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
    KnownAnswer {
        name: "896-bit",
        message: b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
        digest: "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1",
    },
];

fn bytewise(message: &[u8]) -> Sha256Digest {
    let mut ctx = Sha256Context::new();
    for b in message {
        ctx.update(std::slice::from_ref(b));
    }
    ctx.finalize()
}

/// Check one vector on both paths.
pub fn check(vector: &KnownAnswer) -> Result<()> {
    let expected = Sha256Digest::from_hex(vector.digest)?;
    let one_shot = sha256(vector.message);
    let streamed = bytewise(vector.message);

    if one_shot != expected {
        bail!("{}: one-shot digest {one_shot:x} != {expected:x}", vector.name);
    }
    if streamed != expected {
        bail!("{}: streamed digest {streamed:x} != {expected:x}", vector.name);
    }
    tracing::info!(vector = vector.name, digest = %expected, "known answer ok");
    Ok(())
}

/// Execute the selftest subcommand.
pub fn run_selftest(_args: &SelftestArgs, out: &mut impl Write) -> Result<u8> {
    for vector in KNOWN_ANSWERS {
        check(vector)?;
        writeln!(out, "ok  {}", vector.name)?;
    }
    writeln!(out, "OK: {} known-answer vectors passed", KNOWN_ANSWERS.len())?;
    Ok(0)
}
