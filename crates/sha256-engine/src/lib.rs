//! # sha256-engine — Streaming SHA-256
//!
//! A from-scratch FIPS 180-4 SHA-256 implementation, producing
//! [`Sha256Digest`](sha256_core::Sha256Digest) values.
//!
//! - **Compression** ([`compress`]): the 64-round mixing of one 512-bit block
//!   into the eight-word state.
//! - **Context** ([`Sha256Context`]): initialization and incremental
//!   `update` with partial-block buffering across calls.
//! - **Finalization**: length-preserving padding, the big-endian bit-length
//!   trailer, digest serialization, and zeroization of the context.
//! - **One-shot helpers** ([`sha256`], [`sha256_chunks`]).
//!
//! ```
//! use sha256_engine::{sha256, Sha256Context};
//!
//! let mut ctx = Sha256Context::new();
//! ctx.update(b"a");
//! ctx.update(b"bc");
//! assert_eq!(ctx.finalize(), sha256(b"abc"));
//! ```
//!
//! ## Crate Policy
//!
//! - Depends only on `sha256-core` internally.
//! - No `unsafe` code.
//! - A context is single-owner and `Send`; hash independent streams on
//!   independent contexts.
//! - The `sha2` crate is a dev-dependency only, used as an independent
//!   reference in tests.

#![forbid(unsafe_code)]

pub mod compress;
pub mod context;
pub mod finalize;
pub mod oneshot;

// Re-export primary types.
pub use compress::{compress, BLOCK_LEN, IV, K};
pub use context::Sha256Context;
pub use oneshot::{sha256, sha256_chunks, sha256_hex};
pub use sha256_core::Sha256Digest;
