//! # Streaming Context
//!
//! [`Sha256Context`] carries a hash computation across any number of
//! [`update`](Sha256Context::update) calls. Input is re-blocked into 64-byte
//! chunks; whole chunks go straight to the compressor and any tail shorter
//! than a block waits in the context's own buffer for the next call.
//!
//! ## Invariants
//!
//! - `buffer_length` is in `0..64` before and after every `update`.
//! - `state` changes only through [`compress`], once per complete block.
//! - `total_length` counts every byte ever fed through `update`, wrapping
//!   modulo 2^64.
//! - How the input is split across calls never affects the digest.
//!
//! The context derives `ZeroizeOnDrop`: buffered input and intermediate
//! state are wiped when it goes out of scope, finalized or not.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::compress::{compress, BLOCK_LEN, IV};

/// Incremental SHA-256 hashing state.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha256Context {
    /// Bytes processed so far, including finalization padding.
    pub(crate) total_length: u64,
    /// Running hash value.
    pub(crate) state: [u32; 8],
    /// Carry-over for a partial block.
    pub(crate) buffer: [u8; BLOCK_LEN],
    /// Valid bytes at the front of `buffer`.
    pub(crate) buffer_length: usize,
}

impl Sha256Context {
    /// Create a context holding the standard initial hash values.
    ///
    /// `const`, so a ready-to-use context can be placed in a `const` or
    /// `static` and cloned from there.
    pub const fn new() -> Self {
        Self {
            total_length: 0,
            state: IV,
            buffer: [0u8; BLOCK_LEN],
            buffer_length: 0,
        }
    }

    /// Reset to the initial state, discarding any absorbed input.
    pub fn init(&mut self) {
        self.total_length = 0;
        self.state = IV;
        self.buffer.zeroize();
        self.buffer_length = 0;
    }

    /// Absorb `data`. Any length is accepted, including zero.
    pub fn update(&mut self, data: &[u8]) {
        self.total_length = self.total_length.wrapping_add(data.len() as u64);
        let mut input = data;

        // Complete a previously buffered partial block first.
        if self.buffer_length != 0 && self.buffer_length + input.len() >= BLOCK_LEN {
            let (fill, rest) = input.split_at(BLOCK_LEN - self.buffer_length);
            self.buffer[self.buffer_length..].copy_from_slice(fill);
            self.state = compress(self.state, &self.buffer);
            self.buffer_length = 0;
            input = rest;
        }

        // Whole blocks are compressed in place, without a copy.
        while let Some((block, rest)) = split_block(input) {
            self.state = compress(self.state, block);
            input = rest;
        }

        if !input.is_empty() {
            let end = self.buffer_length + input.len();
            self.buffer[self.buffer_length..end].copy_from_slice(input);
            self.buffer_length = end;
        }
    }

    /// Builder-style [`update`](Self::update).
    pub fn chain(mut self, data: impl AsRef<[u8]>) -> Self {
        self.update(data.as_ref());
        self
    }

    /// Total bytes absorbed since the last initialization.
    pub fn total_length(&self) -> u64 {
        self.total_length
    }

    /// Bytes currently waiting in the partial-block buffer.
    pub fn buffered_len(&self) -> usize {
        self.buffer_length
    }
}

impl Default for Sha256Context {
    fn default() -> Self {
        Self::new()
    }
}

// Buffered input and state are deliberately left out.
impl fmt::Debug for Sha256Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sha256Context")
            .field("total_length", &self.total_length)
            .field("buffer_length", &self.buffer_length)
            .finish_non_exhaustive()
    }
}

/// Split one whole block off the front of `input`, if there is one.
fn split_block(input: &[u8]) -> Option<(&[u8; BLOCK_LEN], &[u8])> {
    if input.len() < BLOCK_LEN {
        return None;
    }
    let (head, tail) = input.split_at(BLOCK_LEN);
    head.try_into().ok().map(|block| (block, tail))
}
