//! # One-Shot Hashing
//!
//! Convenience entry points for callers that already hold the whole input.
//! Each is exactly initialize, update, finalize on a fresh context, so the
//! output is bit-identical to any chunking of the streaming path.

use sha256_core::Sha256Digest;

use crate::context::Sha256Context;

/// Compute the SHA-256 digest of `data`.
pub fn sha256(data: &[u8]) -> Sha256Digest {
    Sha256Context::new().chain(data).finalize()
}

/// Compute the SHA-256 digest of `data` as lowercase hex.
pub fn sha256_hex(data: &[u8]) -> String {
    sha256(data).to_hex()
}

/// Compute the digest of the concatenation of `chunks`.
///
/// One `update` per chunk; no intermediate concatenated buffer is built.
pub fn sha256_chunks<I>(chunks: I) -> Sha256Digest
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut ctx = Sha256Context::new();
    for chunk in chunks {
        ctx.update(chunk.as_ref());
    }
    ctx.finalize()
}
