//! Base58 encoding with the Bitcoin alphabet.
//!
//! Bytes are read as one big-endian integer and written out in base 58.
//! Leading zero bytes have no numeric weight, so each one is carried as a
//! leading `1`, which keeps the transform exactly reversible.
//!
//! ```
//! let encoded = base58::encode(b"Hello World");
//! assert_eq!(encoded, "JxF12TrwUP45BMd");
//! assert_eq!(base58::decode(&encoded).unwrap(), b"Hello World");
//!
//! assert_eq!(base58::encode(&[0, 0, 1]), "112");
//! assert!(base58::decode("123O").is_err());
//! ```
//!
//! [`encode`] and [`decode`] run on the pooled engine; the plain engine in
//! [`radix`] allocates fresh big integers per call. Both return identical
//! results and are safe to call from any number of threads.

mod core;
mod encoders;

pub use crate::core::alphabet::{Alphabet, BITCOIN, BITCOIN_CHARS};
pub use crate::core::config::{Config, Engine, Settings};
pub use crate::encoders::algorithms::pool::{
    MAX_RETAINED_BYTES, PooledScratch, SHARED_POOL, Scratch, ScratchPool,
};
pub use crate::encoders::algorithms::pooled::{
    compare_decode, compare_encode, decode_pooled, decode_with, encode_pooled, encode_with,
};
pub use crate::encoders::algorithms::radix::estimate_encoded_len;
pub use crate::encoders::algorithms::{DecodeError, radix};

/// Encodes bytes as a Base58 string. Never fails; empty input gives `""`.
pub fn encode(data: &[u8]) -> String {
    encode_pooled(data)
}

/// Decodes a Base58 string.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidCharacter`] for the first character outside
/// the alphabet.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    decode_pooled(encoded)
}
