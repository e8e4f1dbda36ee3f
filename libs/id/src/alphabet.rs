//! Fixed-width base-N codec behind the short id form.
//!
//! A 128-bit value is written as big-endian digits in the alphabet's base,
//! most significant digit first, always padded to the same width with the
//! alphabet's first symbol. The width is the smallest number of digits that
//! can hold every 128-bit value, so `0` encodes as the first symbol repeated.

use std::fmt;

use crate::error::IdError;

/// Symbols of the default alphabet: digits and mixed-case letters without
/// the easily confused `0`, `1`, `I`, `O`, and `l`.
pub const DEFAULT_SYMBOLS: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Marker for bytes that are not part of the alphabet.
const NO_DIGIT: u8 = u8::MAX;

/// An ordered set of printable ASCII symbols defining a base-N numeral
/// system for 128-bit values.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [u8; 128],
    len: usize,
    digits: [u8; 128],
    encoded_len: usize,
}

impl Alphabet {
    /// The 57-symbol alphabet used by [`Id::to_short_string`](crate::Id::to_short_string)
    /// and the serde adapters.
    pub const DEFAULT: Self = Self::from_sorted(DEFAULT_SYMBOLS.as_bytes());

    /// Builds an alphabet from arbitrary symbols.
    ///
    /// Symbols are deduplicated and sorted, so any permutation of the same
    /// set yields the same numeral system. Every symbol must be printable,
    /// non-whitespace ASCII, and at least two distinct symbols are required.
    pub fn new(symbols: &str) -> Result<Self, IdError> {
        if let Some(bad) = symbols.chars().find(|c| !c.is_ascii_graphic()) {
            return Err(IdError::InvalidAlphabet {
                reason: format!("symbol {bad:?} is not printable ASCII"),
            });
        }

        let mut bytes = symbols.as_bytes().to_vec();
        bytes.sort_unstable();
        bytes.dedup();

        if bytes.len() < 2 {
            return Err(IdError::InvalidAlphabet {
                reason: format!("need at least 2 distinct symbols, got {}", bytes.len()),
            });
        }

        Ok(Self::from_sorted(&bytes))
    }

    /// Caller guarantees `symbols` is sorted, unique, ASCII, and 2..=94 long.
    const fn from_sorted(symbols: &[u8]) -> Self {
        let mut table = [0u8; 128];
        let mut digits = [NO_DIGIT; 128];
        let mut i = 0;
        while i < symbols.len() {
            table[i] = symbols[i];
            digits[symbols[i] as usize] = i as u8;
            i += 1;
        }

        Self {
            symbols: table,
            len: symbols.len(),
            digits,
            encoded_len: width_for_base(symbols.len() as u128),
        }
    }

    /// Number of symbols (the base).
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false; an alphabet has at least two symbols.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The symbols in digit order.
    #[must_use]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols[..self.len]
    }

    /// Length of every encoded string.
    #[must_use]
    pub const fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    /// Encodes a 128-bit value as fixed-width text.
    #[must_use]
    pub fn encode(&self, value: u128) -> String {
        let base = self.len as u128;
        let mut out = vec![self.symbols[0]; self.encoded_len];
        let mut rest = value;

        for slot in out.iter_mut().rev() {
            if rest == 0 {
                break;
            }
            *slot = self.symbols[(rest % base) as usize];
            rest /= base;
        }

        out.into_iter().map(char::from).collect()
    }

    /// Decodes fixed-width text back into a 128-bit value.
    pub fn decode(&self, text: &str) -> Result<u128, IdError> {
        if text.len() != self.encoded_len {
            return Err(IdError::invalid_short(format!(
                "expected {} characters, got {}",
                self.encoded_len,
                text.chars().count()
            )));
        }

        let base = self.len as u128;
        let mut value: u128 = 0;

        for (pos, ch) in text.char_indices() {
            let digit = self.digit(ch).ok_or_else(|| {
                IdError::invalid_short(format!("character {ch:?} at offset {pos} is not in the alphabet"))
            })?;

            value = value
                .checked_mul(base)
                .and_then(|v| v.checked_add(u128::from(digit)))
                .ok_or_else(|| IdError::invalid_short("value does not fit in 128 bits"))?;
        }

        Ok(value)
    }

    fn digit(&self, ch: char) -> Option<u8> {
        if !ch.is_ascii() {
            return None;
        }
        match self.digits[ch as usize] {
            NO_DIGIT => None,
            d => Some(d),
        }
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("symbols", &String::from_utf8_lossy(self.symbols()))
            .field("encoded_len", &self.encoded_len)
            .finish()
    }
}

/// Smallest digit count `w` such that `base^w` exceeds `u128::MAX`.
const fn width_for_base(base: u128) -> usize {
    let mut width = 1;
    let mut span = base;
    while let Some(next) = span.checked_mul(base) {
        span = next;
        width += 1;
    }
    // `span` is the largest power of `base` that fits, so one more digit is
    // needed to reach past u128::MAX.
    width + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_alphabet_shape() {
        let alphabet = Alphabet::DEFAULT;
        assert_eq!(alphabet.len(), 57);
        assert_eq!(alphabet.encoded_len(), 22);
        assert_eq!(alphabet.symbols(), DEFAULT_SYMBOLS.as_bytes());
    }

    #[test]
    fn test_zero_is_first_symbol_repeated() {
        assert_eq!(Alphabet::DEFAULT.encode(0), "2".repeat(22));
        assert_eq!(Alphabet::DEFAULT.decode(&"2".repeat(22)), Ok(0));
    }

    #[test]
    fn test_small_values_are_left_padded() {
        assert_eq!(Alphabet::DEFAULT.encode(1), "2222222222222222222223");
        assert_eq!(Alphabet::DEFAULT.encode(57), "2222222222222222222232");
    }

    #[test]
    fn test_max_value_roundtrip() {
        let encoded = Alphabet::DEFAULT.encode(u128::MAX);
        assert_eq!(encoded, "oZEq7ovRbLq6UnGMPwc8B5");
        assert_eq!(Alphabet::DEFAULT.decode(&encoded), Ok(u128::MAX));
    }

    #[test]
    fn test_decode_rejects_overflow() {
        // 2^128, one past u128::MAX.
        let err = Alphabet::DEFAULT.decode("oZEq7ovRbLq6UnGMPwc8B6").unwrap_err();
        assert!(err.is_invalid_format());
        assert!(err.to_string().contains("128 bits"));

        assert!(Alphabet::DEFAULT.decode(&"z".repeat(22)).is_err());
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert!(Alphabet::DEFAULT.decode("").is_err());
        assert!(Alphabet::DEFAULT.decode(&"2".repeat(21)).is_err());
        assert!(Alphabet::DEFAULT.decode(&"2".repeat(23)).is_err());
    }

    #[test]
    fn test_decode_rejects_foreign_symbols() {
        for bad in ['0', '1', 'I', 'O', 'l', '-', ' '] {
            let mut text = "2".repeat(21);
            text.push(bad);
            let err = Alphabet::DEFAULT.decode(&text).unwrap_err();
            assert!(err.is_invalid_format(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_decode_rejects_non_ascii() {
        // 20 ASCII digits plus one two-byte character is 22 bytes.
        let text = format!("{}é", "2".repeat(20));
        assert_eq!(text.len(), 22);
        assert!(Alphabet::DEFAULT.decode(&text).is_err());
    }

    #[test]
    fn test_hex_alphabet_matches_hex_formatting() {
        let hex = Alphabet::new("0123456789abcdef").unwrap();
        assert_eq!(hex.encoded_len(), 32);

        let value = 0x8eca1fe1_a8334de0_b487b547_85cc656e_u128;
        assert_eq!(hex.encode(value), format!("{value:032x}"));
        assert_eq!(hex.decode(&format!("{value:032x}")), Ok(value));
    }

    #[test]
    fn test_binary_alphabet_width() {
        let bits = Alphabet::new("01").unwrap();
        assert_eq!(bits.encoded_len(), 128);
        assert_eq!(bits.encode(1), format!("{}1", "0".repeat(127)));
        assert_eq!(bits.decode(&"1".repeat(128)), Ok(u128::MAX));
    }

    #[test]
    fn test_new_sorts_and_dedups() {
        let a = Alphabet::new("fedcba9876543210").unwrap();
        let b = Alphabet::new("0123456789abcdefabc").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.symbols(), b"0123456789abcdef");
    }

    #[test]
    fn test_default_symbols_already_canonical() {
        assert_eq!(Alphabet::new(DEFAULT_SYMBOLS).unwrap(), Alphabet::DEFAULT);
    }

    #[test]
    fn test_new_rejects_bad_alphabets() {
        for symbols in ["", "a", "aaaa", "ab c", "ab\n", "abé"] {
            let err = Alphabet::new(symbols).unwrap_err();
            assert!(
                matches!(err, IdError::InvalidAlphabet { .. }),
                "{symbols:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_debug_shows_symbols() {
        let rendered = format!("{:?}", Alphabet::new("ab").unwrap());
        assert!(rendered.contains("\"ab\""));
        assert!(rendered.contains("encoded_len: 128"));
    }
}
