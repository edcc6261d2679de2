//! # Hex Codec
//!
//! Lowercase hex encoding and case-insensitive decoding for digests and
//! command-line byte input.

use crate::error::HexError;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encode bytes as a lowercase hex string.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(HEX_DIGITS[(b >> 4) as usize] as char);
        out.push(HEX_DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode a hex string (either case) into bytes.
pub fn decode(hex: &str) -> Result<Vec<u8>, HexError> {
    let raw = hex.as_bytes();
    if raw.len() % 2 != 0 {
        return Err(HexError::OddLength(raw.len()));
    }
    let mut out = Vec::with_capacity(raw.len() / 2);
    for (i, pair) in raw.chunks_exact(2).enumerate() {
        let hi = nibble(pair[0], i * 2, hex)?;
        let lo = nibble(pair[1], i * 2 + 1, hex)?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

fn nibble(b: u8, index: usize, source: &str) -> Result<u8, HexError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        _ => Err(HexError::InvalidChar {
            index,
            // Report the full character, not a stray UTF-8 continuation byte.
            ch: source
                .char_indices()
                .find(|(start, c)| *start <= index && index < start + c.len_utf8())
                .map(|(_, c)| c)
                .unwrap_or(char::REPLACEMENT_CHARACTER),
        }),
    }
}
