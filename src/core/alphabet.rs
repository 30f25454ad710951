/// The Bitcoin Base58 alphabet: digits and letters minus `0`, `O`, `I` and `l`.
pub const BITCOIN_CHARS: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

const INVALID: u8 = 0xFF;

/// Symbol table for Base58 encoding.
///
/// Holds the 58 symbols in digit order together with the inverse lookup used
/// when decoding. The table is built at compile time and never mutated, so a
/// single shared instance can be read from any number of threads.
#[derive(Debug)]
pub struct Alphabet {
    chars: [u8; 58],
    char_to_index: [u8; 128],
}

/// The process-wide Bitcoin alphabet.
pub static BITCOIN: Alphabet = Alphabet::new(BITCOIN_CHARS);

impl Alphabet {
    /// Builds the forward and inverse tables from 58 ASCII symbols.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a `static`) if a symbol is not
    /// ASCII or appears twice.
    pub const fn new(chars: &[u8; 58]) -> Self {
        let mut char_to_index = [INVALID; 128];
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            assert!(c < 128, "alphabet symbols must be ASCII");
            assert!(char_to_index[c as usize] == INVALID, "duplicate alphabet symbol");
            char_to_index[c as usize] = i as u8;
            i += 1;
        }
        Alphabet {
            chars: *chars,
            char_to_index,
        }
    }

    /// Number of symbols (always 58).
    pub const fn base(&self) -> u32 {
        self.chars.len() as u32
    }

    /// The symbol that stands for one leading zero byte.
    pub const fn zero_symbol(&self) -> u8 {
        self.chars[0]
    }

    /// Maps a digit (0..58) to its symbol.
    ///
    /// Returns `None` for digits outside the alphabet.
    pub fn encode_digit(&self, digit: usize) -> Option<u8> {
        self.chars.get(digit).copied()
    }

    /// Symbol for a digit already known to be below 58.
    pub(crate) fn symbol(&self, digit: usize) -> u8 {
        self.chars[digit]
    }

    /// Maps a character back to its digit value.
    ///
    /// Returns `None` for anything outside the alphabet, including non-ASCII.
    pub fn decode_char(&self, c: char) -> Option<u8> {
        let code = c as u32;
        if code >= 128 {
            return None;
        }
        match self.char_to_index[code as usize] {
            INVALID => None,
            digit => Some(digit),
        }
    }

    /// The alphabet as a string, used in diagnostics.
    pub fn as_str(&self) -> &str {
        // Every symbol is ASCII, checked in `new`.
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }
}
