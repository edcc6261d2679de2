//! # sha256-core — Foundational Types for the SHA-256 Workspace
//!
//! The leaf crate of the workspace. It defines the value that the hashing
//! engine produces and every textual form that value takes, so consumers
//! can store, compare, and parse digests without depending on the engine.
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod error;
pub mod hex;

// Re-export primary types for ergonomic imports.
pub use digest::{Sha256Digest, ALGORITHM, DIGEST_LEN};
pub use error::{DigestParseError, HexError};
