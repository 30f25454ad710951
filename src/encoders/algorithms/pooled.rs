//! Base58 codec running on pooled scratch buffers.
//!
//! Produces exactly the same output as [`radix`](super::radix). Encoding does
//! its long division in place over `u32` limbs held in the scratch, so the
//! digit loop allocates nothing; decoding multiplies into a pooled
//! accumulator.

use super::errors::DecodeError;
use super::pool::{SHARED_POOL, Scratch, ScratchPool};
use super::radix::{
    assemble, count_leading_zero_symbols, count_leading_zeros, estimate_encoded_len,
    with_leading_zeros,
};
use crate::core::alphabet::BITCOIN;

/// Encodes bytes as Base58 using the shared scratch pool.
pub fn encode_pooled(data: &[u8]) -> String {
    encode_with(&SHARED_POOL, data)
}

/// Decodes a Base58 string using the shared scratch pool.
pub fn decode_pooled(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    decode_with(&SHARED_POOL, encoded)
}

/// Encodes bytes as Base58, borrowing scratch space from `pool`.
pub fn encode_with(pool: &ScratchPool, data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    let leading_zeros = count_leading_zeros(data);
    if leading_zeros == data.len() {
        return assemble(leading_zeros, &[]);
    }

    let value = &data[leading_zeros..];
    let size = estimate_encoded_len(value.len());

    let mut scratch = pool.acquire();
    let Scratch { limbs, digits, .. } = &mut *scratch;
    load_limbs(value, limbs);
    digits.resize(size, 0);

    let base = u64::from(BITCOIN.base());
    // Index of the most significant non-zero limb
    let mut start = 0;
    let mut pos = size;

    while start < limbs.len() {
        let mut remainder = 0u64;
        for limb in &mut limbs[start..] {
            let acc = (remainder << 32) | u64::from(*limb);
            *limb = (acc / base) as u32;
            remainder = acc % base;
        }

        pos -= 1;
        digits[pos] = BITCOIN.symbol(remainder as usize);

        while start < limbs.len() && limbs[start] == 0 {
            start += 1;
        }
    }

    assemble(leading_zeros, &digits[pos..])
}

/// Decodes a Base58 string, borrowing scratch space from `pool`.
pub fn decode_with(pool: &ScratchPool, encoded: &str) -> Result<Vec<u8>, DecodeError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let leading_zeros = count_leading_zero_symbols(encoded);

    let mut scratch = pool.acquire();
    let acc = &mut scratch.acc;

    for (offset, c) in encoded[leading_zeros..].char_indices() {
        let digit = BITCOIN.decode_char(c).ok_or_else(|| {
            DecodeError::invalid_character(c, leading_zeros + offset, encoded)
        })?;

        *acc *= BITCOIN.base();
        *acc += u32::from(digit);
    }

    Ok(with_leading_zeros(leading_zeros, acc))
}

/// Packs big-endian bytes into big-endian `u32` limbs. The first limb takes
/// the short head when the length is not a multiple of four.
fn load_limbs(bytes: &[u8], limbs: &mut Vec<u32>) {
    let head = bytes.len() % 4;
    limbs.reserve(bytes.len() / 4 + 1);

    if head > 0 {
        let first = bytes[..head]
            .iter()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
        limbs.push(first);
    }

    limbs.extend(
        bytes[head..]
            .chunks_exact(4)
            .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]])),
    );
}

/// Encodes with both the plain and pooled paths: `(plain, pooled)`.
pub fn compare_encode(data: &[u8]) -> (String, String) {
    (super::radix::encode(data), encode_pooled(data))
}

/// Decodes with both the plain and pooled paths: `(plain, pooled)`.
pub fn compare_decode(
    encoded: &str,
) -> (Result<Vec<u8>, DecodeError>, Result<Vec<u8>, DecodeError>) {
    (super::radix::decode(encoded), decode_pooled(encoded))
}
