//! Seeded non-cryptographic hashes over UTF-16LE text.
//!
//! This family hashes the UTF-16LE encoding of its input string, not the
//! UTF-8 bytes — callers comparing values across implementations must use
//! the same encoding. The 128-bit variants return only the low-order 8
//! (resp. 4) bytes of the 128-bit digest; the truncation is part of the
//! contract.

use std::io::Cursor;

fn utf16le_bytes(input: &str) -> Vec<u8> {
    input.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Seeded murmur3 x64 128-bit hash, truncated to the low-order 64 bits.
pub fn murmur3_x64_128(seed: i32, input: &str) -> u64 {
    let bytes = utf16le_bytes(input);
    let digest = murmur3::murmur3_x64_128(&mut Cursor::new(bytes), seed as u32)
        .expect("in-memory read cannot fail");
    digest as u64
}

/// Seeded murmur3 x86 32-bit hash.
pub fn murmur3_x86_32(seed: i32, input: &str) -> u32 {
    let bytes = utf16le_bytes(input);
    murmur3::murmur3_32(&mut Cursor::new(bytes), seed as u32)
        .expect("in-memory read cannot fail")
}

/// Seeded murmur3 x86 128-bit hash, truncated to the low-order 32 bits.
pub fn murmur3_x86_128(seed: i32, input: &str) -> u32 {
    let bytes = utf16le_bytes(input);
    let digest = murmur3::murmur3_x86_128(&mut Cursor::new(bytes), seed as u32)
        .expect("in-memory read cannot fail");
    digest as u32
}
