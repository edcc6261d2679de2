//! # Error Types
//!
//! The SHA-256 algorithm itself cannot fail: every byte sequence is valid
//! input and all word arithmetic wraps modulo 2^32. Errors only arise at the
//! parsing surface, when a digest or a byte string arrives as hex text.
//!
//! All errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.

use thiserror::Error;

/// Error decoding a hex string into bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HexError {
    /// Hex input must contain two characters per byte.
    #[error("hex input has odd length {0}")]
    OddLength(usize),

    /// A character outside `[0-9a-fA-F]` was found.
    #[error("invalid hex character {ch:?} at index {index}")]
    InvalidChar {
        /// Byte offset of the offending character in the input.
        index: usize,
        /// The offending character.
        ch: char,
    },
}

/// Error parsing a textual SHA-256 digest.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestParseError {
    /// The text was not valid hex.
    #[error("invalid digest hex: {0}")]
    Hex(#[from] HexError),

    /// The text decoded to the wrong number of bytes.
    #[error("invalid digest length: expected 32 bytes, got {0}")]
    InvalidLength(usize),
}
