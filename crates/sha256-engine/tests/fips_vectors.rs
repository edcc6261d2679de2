//! # Known-Answer Tests
//!
//! Published FIPS 180-4 SHA-256 examples plus padding-boundary vectors.
//! The boundary digests were computed independently with coreutils
//! `sha256sum` over `"a"` repeated `n` times.

use sha256_engine::{sha256, sha256_chunks, sha256_hex, Sha256Context, BLOCK_LEN};

/// Hash `data` one byte per `update` call.
fn bytewise(data: &[u8]) -> String {
    let mut ctx = Sha256Context::new();
    for b in data {
        ctx.update(std::slice::from_ref(b));
    }
    ctx.finalize().to_hex()
}

// ---------------------------------------------------------------------------
// FIPS 180-4 examples
// ---------------------------------------------------------------------------

const ABC_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const ABC_896: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

#[test]
fn test_empty_input() {
    let expected = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
    assert_eq!(sha256_hex(b""), expected);
    assert_eq!(bytewise(b""), expected);
}

#[test]
fn test_abc() {
    let expected = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
    assert_eq!(sha256_hex(b"abc"), expected);
    assert_eq!(bytewise(b"abc"), expected);
}

#[test]
fn test_two_block_448_bit_message() {
    assert_eq!(ABC_448.len(), 56);
    let expected = "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1";
    assert_eq!(sha256_hex(ABC_448), expected);
    assert_eq!(bytewise(ABC_448), expected);
}

#[test]
fn test_896_bit_message() {
    assert_eq!(ABC_896.len(), 112);
    let expected = "cf5b16a778af8380036ce59e7b0492370b249b11e8f07a51afac45037afee9d1";
    assert_eq!(sha256_hex(ABC_896), expected);
    assert_eq!(bytewise(ABC_896), expected);
}

#[test]
fn test_one_million_a() {
    let expected = "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0";
    let data = vec![b'a'; 1_000_000];
    assert_eq!(sha256_hex(&data), expected);

    // Same message through 997-byte chunks, never block-aligned.
    let chunks = data.chunks(997);
    assert_eq!(sha256_chunks(chunks).to_hex(), expected);
}

// ---------------------------------------------------------------------------
// Padding boundaries
// ---------------------------------------------------------------------------

const BOUNDARY_VECTORS: &[(usize, &str)] = &[
    (55, "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"),
    (56, "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"),
    (57, "f13b2d724659eb3bf47f2dd6af1accc87b81f09f59f2b75e5c0bed6589dfe8c6"),
    (63, "7d3e74a05d7db15bce4ad9ec0658ea98e3f06eeecf16b4c6fff2da457ddc2f34"),
    (64, "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"),
    (65, "635361c48bb9eab14198e76ea8ab7f1a41685d6ad62aa9146d301d4f17eb0ae0"),
    (119, "31eba51c313a5c08226adf18d4a359cfdfd8d2e816b13f4af952f7ea6584dcfb"),
    (120, "2f3d335432c70b580af0e8e1b3674a7c020d683aa5f73aaaedfdc55af904c21c"),
    (121, "e9615320128cc7a3d6078e9af05603188e5ccbf0d07d8b735d3df5e8e0c1281f"),
];

#[test]
fn test_padding_boundaries_one_shot() {
    for &(len, expected) in BOUNDARY_VECTORS {
        let data = vec![b'a'; len];
        assert_eq!(sha256_hex(&data), expected, "length {len}");
    }
}

#[test]
fn test_padding_boundaries_streamed() {
    for &(len, expected) in BOUNDARY_VECTORS {
        let data = vec![b'a'; len];
        assert_eq!(bytewise(&data), expected, "length {len}, bytewise");

        // Split at every position, leaving the buffer at each fill level.
        for split in 0..=len {
            let mut ctx = Sha256Context::new();
            ctx.update(&data[..split]);
            ctx.update(&data[split..]);
            assert_eq!(ctx.finalize().to_hex(), expected, "length {len}, split {split}");
        }
    }
}

// ---------------------------------------------------------------------------
// Context lifecycle
// ---------------------------------------------------------------------------

#[test]
fn test_length_excludes_padding() {
    // 56 bytes of input forces a spill block; the trailer must still say 448 bits.
    let mut ctx = Sha256Context::new();
    ctx.update(ABC_448);
    assert_eq!(ctx.total_length(), 56);
    assert_eq!(ctx.buffered_len(), 56);
    assert_eq!(
        ctx.finalize().to_hex(),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn test_finalize_reset_reuses_context() {
    let mut ctx = Sha256Context::new();
    ctx.update(b"abc");
    assert_eq!(ctx.finalize_reset(), sha256(b"abc"));
    ctx.update(ABC_448);
    assert_eq!(ctx.finalize_reset(), sha256(ABC_448));
    assert_eq!(ctx.finalize_reset(), sha256(b""));
}

#[test]
fn test_cloned_context_forks_prefix() {
    let prefix = Sha256Context::new().chain(vec![b'x'; BLOCK_LEN + 10]);
    let left = prefix.clone().chain(b"left").finalize();
    let right = prefix.chain(b"right").finalize();

    let mut expected_left = vec![b'x'; BLOCK_LEN + 10];
    expected_left.extend_from_slice(b"left");
    assert_eq!(left, sha256(&expected_left));
    assert_ne!(left, right);
}

#[test]
fn test_context_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Sha256Context>();

    let handle = std::thread::spawn(|| Sha256Context::new().chain(b"abc").finalize());
    assert_eq!(handle.join().unwrap(), sha256(b"abc"));
}

// ---------------------------------------------------------------------------
// Avalanche smoke test
// ---------------------------------------------------------------------------

#[test]
fn test_single_bit_flip_avalanche() {
    let base = ABC_896.to_vec();
    let base_digest = sha256(&base);
    let mut total_changed = 0u32;
    let mut trials = 0u32;

    for byte in 0..base.len() {
        for bit in 0..8 {
            let mut flipped = base.clone();
            flipped[byte] ^= 1 << bit;
            let d = sha256(&flipped);
            let changed: u32 = base_digest
                .as_bytes()
                .iter()
                .zip(d.as_bytes())
                .map(|(a, b)| (a ^ b).count_ones())
                .sum();
            // No single flip should leave the digest nearly intact.
            assert!(changed > 64, "byte {byte} bit {bit}: only {changed} bits changed");
            total_changed += changed;
            trials += 1;
        }
    }

    // Averaged over 896 flips the fraction sits very close to one half.
    let mean = f64::from(total_changed) / f64::from(trials) / 256.0;
    assert!((0.45..=0.55).contains(&mean), "mean flip fraction {mean}");
}
