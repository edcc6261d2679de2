//! # Finalization
//!
//! Pads the message, appends its bit length, flushes the last block(s), and
//! serializes the state as the 32-byte digest.
//!
//! ## Padding
//!
//! A single `0x80` byte followed by zeros brings the buffered length to 56
//! modulo 64, leaving exactly eight bytes in the final block for the
//! big-endian 64-bit message length in bits. When fewer than nine bytes of
//! room remain, the padding spills into a second block.
//!
//! ## Lifecycle
//!
//! [`finalize`](Sha256Context::finalize) consumes the context, so hashing
//! after finalization or finalizing twice does not compile.
//! [`finalize_reset`](Sha256Context::finalize_reset) is the reusable form:
//! it finalizes, wipes, and re-initializes in place. Either way the context
//! is zeroized before the digest is returned.

use sha256_core::{Sha256Digest, DIGEST_LEN};
use zeroize::Zeroize;

use crate::compress::BLOCK_LEN;
use crate::context::Sha256Context;

/// Offset within a block where the length trailer starts.
const LENGTH_OFFSET: usize = BLOCK_LEN - 8;

/// `0x80` then zeros; long enough for the worst case of a full block.
const PADDING: [u8; BLOCK_LEN] = {
    let mut pad = [0u8; BLOCK_LEN];
    pad[0] = 0x80;
    pad
};

/// Number of padding bytes to append after `buffer_length` buffered bytes.
///
/// Always in `1..=64`.
pub fn pad_length(buffer_length: usize) -> usize {
    if buffer_length < LENGTH_OFFSET {
        LENGTH_OFFSET - buffer_length
    } else {
        LENGTH_OFFSET + BLOCK_LEN - buffer_length
    }
}

/// Encode a byte count as the 64-bit big-endian bit-length trailer.
///
/// Split into two 32-bit halves computed from the byte counter directly, so
/// the top three bits of the byte count land in the high word.
pub fn length_trailer(total_length: u64) -> [u8; 8] {
    let hi = (total_length >> 29) as u32;
    let lo = (total_length << 3) as u32;
    let mut out = [0u8; 8];
    out[..4].copy_from_slice(&hi.to_be_bytes());
    out[4..].copy_from_slice(&lo.to_be_bytes());
    out
}

impl Sha256Context {
    /// Finish the computation and return the digest.
    pub fn finalize(mut self) -> Sha256Digest {
        self.finish()
    }

    /// Finish the computation, then reset the context for a new message.
    pub fn finalize_reset(&mut self) -> Sha256Digest {
        let digest = self.finish();
        self.init();
        digest
    }

    /// Pad, flush, serialize, and zeroize. Leaves every field at zero.
    pub(crate) fn finish(&mut self) -> Sha256Digest {
        // Snapshot before padding flows through `update`.
        let message_len = self.total_length;
        let trailer = length_trailer(message_len);

        let pad = pad_length(self.buffer_length);
        self.update(&PADDING[..pad]);
        self.update(&trailer);
        debug_assert_eq!(self.buffer_length, 0);

        let mut out = [0u8; DIGEST_LEN];
        for (bytes, word) in out.chunks_exact_mut(4).zip(self.state.iter()) {
            bytes.copy_from_slice(&word.to_be_bytes());
        }

        self.zeroize();
        tracing::trace!(message_len, "sha256 context finalized");
        Sha256Digest::from_bytes(out)
    }
}
