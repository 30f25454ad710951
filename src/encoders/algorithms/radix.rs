use crate::core::alphabet::BITCOIN;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

pub use super::errors::DecodeError;

// log(256) / log(58) ~= 1.36565, rounded up to 1.366.
const SIZE_MULTIPLIER: usize = 1366;
const SIZE_DIVISOR: usize = 1000;
const SIZE_EXTRA: usize = 2;

/// Upper bound on the number of base-58 digits needed for `len` bytes that
/// do not start with a zero byte.
///
/// Never underestimates and is monotonic in `len`. Overestimates by at most
/// a couple of digits.
pub fn estimate_encoded_len(len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    // Split so the multiplication cannot overflow for large `len`.
    let whole = len / SIZE_DIVISOR * SIZE_MULTIPLIER;
    let part = len % SIZE_DIVISOR * SIZE_MULTIPLIER / SIZE_DIVISOR;
    whole + part + SIZE_EXTRA
}

pub(crate) fn count_leading_zeros(data: &[u8]) -> usize {
    data.iter().take_while(|&&b| b == 0).count()
}

pub(crate) fn count_leading_zero_symbols(encoded: &str) -> usize {
    let zero = BITCOIN.zero_symbol();
    encoded.bytes().take_while(|&b| b == zero).count()
}

/// Joins `leading` zero symbols and the significant digits into the result.
pub(crate) fn assemble(leading: usize, digits: &[u8]) -> String {
    let mut result = String::with_capacity(leading + digits.len());
    result.extend(std::iter::repeat_n(BITCOIN.zero_symbol() as char, leading));
    result.extend(digits.iter().map(|&b| b as char));
    result
}

/// Prepends `leading` zero bytes to the big-endian value bytes.
pub(crate) fn with_leading_zeros(leading: usize, value: &BigUint) -> Vec<u8> {
    // `to_bytes_be` renders zero as a single 0x00, which is not part of the value.
    let bytes = if value.is_zero() {
        Vec::new()
    } else {
        value.to_bytes_be()
    };

    let mut result = Vec::with_capacity(leading + bytes.len());
    result.resize(leading, 0u8);
    result.extend_from_slice(&bytes);
    result
}

/// Encodes bytes as a Base58 string.
///
/// Each leading zero byte becomes one `1`; the rest of the input is read as
/// a big-endian integer and written out in base 58, most significant digit
/// first.
pub fn encode(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    let leading_zeros = count_leading_zeros(data);

    // All zeros: the value part is empty
    if leading_zeros == data.len() {
        return assemble(leading_zeros, &[]);
    }

    let size = estimate_encoded_len(data.len() - leading_zeros);
    let mut digits = vec![0u8; size];

    let mut num = BigUint::from_bytes_be(&data[leading_zeros..]);
    let base = BigUint::from(BITCOIN.base());

    // Remainders come out least significant first, so fill from the back.
    let mut pos = size;
    while !num.is_zero() {
        let (quotient, remainder) = num.div_rem(&base);
        let digit = remainder.to_u64_digits().first().copied().unwrap_or(0) as usize;
        pos -= 1;
        digits[pos] = BITCOIN.symbol(digit);
        num = quotient;
    }

    assemble(leading_zeros, &digits[pos..])
}

/// Decodes a Base58 string back to bytes.
///
/// Stops at the first character outside the alphabet and reports it with its
/// byte offset; nothing after it is examined.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    if encoded.is_empty() {
        return Ok(Vec::new());
    }

    let leading_zeros = count_leading_zero_symbols(encoded);

    let base = BigUint::from(BITCOIN.base());
    let mut num = BigUint::zero();

    for (offset, c) in encoded[leading_zeros..].char_indices() {
        let digit = BITCOIN.decode_char(c).ok_or_else(|| {
            DecodeError::invalid_character(c, leading_zeros + offset, encoded)
        })?;

        num *= &base;
        num += BigUint::from(digit);
    }

    Ok(with_leading_zeros(leading_zeros, &num))
}
