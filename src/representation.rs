use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual form a buffer is interpreted in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// One symbol per arbitrary byte
    Raw,
    /// Two case-insensitive hex digits per byte
    Hex,
    /// One ASCII '0' or '1' per bit
    Binary,
}

impl Representation {
    /// Number of symbols that make up one padding unit
    pub fn symbol_width(self) -> usize {
        match self {
            Self::Hex => 2,
            Self::Raw | Self::Binary => 1,
        }
    }

    /// The symbol used by the default zero fill
    pub fn zero_symbol(self) -> &'static [u8] {
        match self {
            Self::Raw => b"\x00",
            Self::Hex => b"00",
            Self::Binary => b"0",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Hex => "hex",
            Self::Binary => "binary",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a buffer by its alphabet
///
/// `force_raw` short-circuits to [`Representation::Raw`]. Otherwise a
/// non-empty buffer made only of `'0'`/`'1'` is binary, an even-length
/// buffer of hex digits is hex, and anything else (including the empty
/// buffer) is raw. Binary is checked first, so `"1010"` is a bit string.
pub fn classify(data: &[u8], force_raw: bool) -> Representation {
    if force_raw || data.is_empty() {
        return Representation::Raw;
    }
    if is_binary(data) {
        Representation::Binary
    } else if is_hex(data) {
        Representation::Hex
    } else {
        Representation::Raw
    }
}

pub fn is_binary(data: &[u8]) -> bool {
    data.iter().all(|&b| b == b'0' || b == b'1')
}

pub fn is_hex(data: &[u8]) -> bool {
    data.len() % 2 == 0 && data.iter().all(u8::is_ascii_hexdigit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_binary_before_hex() {
        assert_eq!(classify(b"1010", false), Representation::Binary);
        assert_eq!(classify(b"101", false), Representation::Binary);
    }

    #[test]
    fn test_classify_hex() {
        assert_eq!(classify(b"4142", false), Representation::Hex);
        assert_eq!(classify(b"deadBEEF", false), Representation::Hex);
    }

    #[test]
    fn test_odd_length_hex_is_raw() {
        assert_eq!(classify(b"414", false), Representation::Raw);
    }

    #[test]
    fn test_classify_raw() {
        assert_eq!(classify(b"hello", false), Representation::Raw);
        assert_eq!(classify(b"AB\x02\x02", false), Representation::Raw);
        assert_eq!(classify(b"", false), Representation::Raw);
    }

    #[test]
    fn test_force_raw_wins() {
        assert_eq!(classify(b"1010", true), Representation::Raw);
        assert_eq!(classify(b"4142", true), Representation::Raw);
    }

    #[test]
    fn test_symbol_widths() {
        assert_eq!(Representation::Raw.symbol_width(), 1);
        assert_eq!(Representation::Hex.symbol_width(), 2);
        assert_eq!(Representation::Binary.symbol_width(), 1);
        assert_eq!(Representation::Hex.zero_symbol(), b"00");
    }
}
