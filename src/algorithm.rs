use crate::error::{PadError, Result};
use crate::representation::Representation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest block size whose padding length still fits in a single count byte
pub const MAX_COUNTED_BLOCK_SIZE: usize = 256;

/// Padding algorithm options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaddingAlgorithm {
    /// Zero fill with the representation's zero symbol
    #[default]
    #[serde(rename = "zero")]
    Zero,
    /// A single 1 bit followed by zero bits
    #[serde(rename = "bit")]
    Bit,
    /// Zero units closed by a count unit (ANSI X9.23)
    #[serde(rename = "ansic9.23")]
    AnsiX923,
    /// Units counting up from 1 to the padding length
    #[serde(rename = "incremental")]
    Incremental,
    /// 0x80 marker followed by zero units (ISO/IEC 7816-4)
    #[serde(rename = "iso7816-4")]
    Iso7816_4,
    /// Every unit holds the padding length (PKCS#5 / PKCS#7)
    #[serde(rename = "pkcs7")]
    Pkcs5_7,
    /// Random units closed by a count unit (W3C XML encryption)
    #[serde(rename = "w3c")]
    W3C,
}

impl PaddingAlgorithm {
    pub const ALL: [PaddingAlgorithm; 7] = [
        Self::Zero,
        Self::Bit,
        Self::AnsiX923,
        Self::Incremental,
        Self::Iso7816_4,
        Self::Pkcs5_7,
        Self::W3C,
    ];

    /// Canonical name accepted by [`str::parse`]
    pub fn name(self) -> &'static str {
        match self {
            Self::Zero => "zero",
            Self::Bit => "bit",
            Self::AnsiX923 => "ansic9.23",
            Self::Incremental => "incremental",
            Self::Iso7816_4 => "iso7816-4",
            Self::Pkcs5_7 => "pkcs7",
            Self::W3C => "w3c",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Zero => "zero fill (default)",
            Self::Bit => "one 1 bit then zero bits",
            Self::AnsiX923 => "ANSI X9.23: zeros then a count byte",
            Self::Incremental => "bytes 1, 2, ..., n",
            Self::Iso7816_4 => "ISO 7816-4: 0x80 then zeros",
            Self::Pkcs5_7 => "PKCS#5/PKCS#7: n bytes of value n",
            Self::W3C => "W3C: random bytes then a count byte",
        }
    }

    /// Algorithms whose trailer stores the padding length as a byte value
    pub fn counts_in_bytes(self) -> bool {
        matches!(
            self,
            Self::AnsiX923 | Self::Incremental | Self::Pkcs5_7 | Self::W3C
        )
    }

    pub fn is_compatible_with(self, representation: Representation) -> bool {
        match self {
            Self::Zero => true,
            Self::Bit => representation == Representation::Binary,
            _ => representation != Representation::Binary,
        }
    }

    /// Fail with [`PadError::IncompatibleAlgorithm`] unless the pair may be used together
    pub fn check_compatible(self, representation: Representation) -> Result<()> {
        if self.is_compatible_with(representation) {
            Ok(())
        } else {
            Err(PadError::IncompatibleAlgorithm {
                algorithm: self,
                representation,
            })
        }
    }
}

impl fmt::Display for PaddingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PaddingAlgorithm {
    type Err = PadError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "bit" => Ok(Self::Bit),
            "ansic9.23" => Ok(Self::AnsiX923),
            "incremental" => Ok(Self::Incremental),
            "iso7816-4" => Ok(Self::Iso7816_4),
            "pkcs5" | "pkcs7" => Ok(Self::Pkcs5_7),
            "w3c" => Ok(Self::W3C),
            _ => Err(PadError::UnsupportedAlgorithm(format!("padding: {}", s))),
        }
    }
}

/// Which side of the data a fill pattern goes on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Fill after the data (`<` marker, or no marker)
    #[default]
    Append,
    /// Fill before the data (`>` marker)
    Prepend,
}

/// A literal fill pattern repeated up to the block boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillPattern {
    symbols: Vec<u8>,
    alignment: Alignment,
}

impl FillPattern {
    pub fn new(symbols: impl Into<Vec<u8>>, alignment: Alignment) -> Result<Self> {
        let symbols = symbols.into();
        if symbols.is_empty() {
            return Err(PadError::InvalidPaddingPattern("empty pattern".into()));
        }
        Ok(Self { symbols, alignment })
    }

    /// Parse a literal with an optional leading `<` (append) or `>` (prepend)
    pub fn parse(literal: &[u8]) -> Result<Self> {
        match literal.split_first() {
            Some((b'>', rest)) => Self::new(rest, Alignment::Prepend),
            Some((b'<', rest)) => Self::new(rest, Alignment::Append),
            _ => Self::new(literal, Alignment::Append),
        }
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }
}

/// What the codec pads with: a named algorithm or an explicit fill pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Padding {
    Algorithm(PaddingAlgorithm),
    Fill(FillPattern),
}

impl Default for Padding {
    fn default() -> Self {
        Self::Algorithm(PaddingAlgorithm::Zero)
    }
}

impl Padding {
    /// Look up an algorithm by name; `None` selects zero padding
    pub fn from_name(name: Option<&str>) -> Result<Self> {
        match name {
            Some(name) => Ok(Self::Algorithm(name.parse()?)),
            None => Ok(Self::default()),
        }
    }

    pub fn fill(literal: impl AsRef<[u8]>) -> Result<Self> {
        FillPattern::parse(literal.as_ref()).map(Self::Fill)
    }

    /// The algorithm whose compatibility rules apply; fill patterns behave like zero padding
    pub fn algorithm(&self) -> PaddingAlgorithm {
        match self {
            Self::Algorithm(algorithm) => *algorithm,
            Self::Fill(_) => PaddingAlgorithm::Zero,
        }
    }
}

impl From<PaddingAlgorithm> for Padding {
    fn from(algorithm: PaddingAlgorithm) -> Self {
        Self::Algorithm(algorithm)
    }
}
