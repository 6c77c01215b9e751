use crate::error::{PadError, Result};
use std::fmt;

/// Group width used when none is given: one byte
pub const DEFAULT_GROUP_WIDTH: usize = 8;

/// A bit string split into fixed-width groups
///
/// The length is always a multiple of the group width. `exact` records
/// whether every regrouping since construction preserved the integer value
/// of each group; it never goes back to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSequence {
    bits: String,
    width: usize,
    exact: bool,
}

impl BitSequence {
    /// Build from binary digits (an optional `0b` prefix is accepted),
    /// right-padding with zero bits to a multiple of `width`
    pub fn new(digits: &str, width: usize) -> Result<Self> {
        if width == 0 {
            return Err(PadError::InvalidGroupWidth(width));
        }

        let digits = digits.strip_prefix("0b").unwrap_or(digits);
        if let Some((offset, digit)) = digits.char_indices().find(|&(_, c)| c != '0' && c != '1') {
            return Err(PadError::InvalidBinary { digit, offset });
        }

        let mut bits = digits.to_string();
        let remainder = bits.len() % width;
        if remainder != 0 {
            bits.extend(std::iter::repeat('0').take(width - remainder));
        }

        Ok(Self {
            bits,
            width,
            exact: true,
        })
    }

    /// Build with byte-sized groups
    pub fn from_bits(digits: &str) -> Result<Self> {
        Self::new(digits, DEFAULT_GROUP_WIDTH)
    }

    pub fn bits(&self) -> &str {
        &self.bits
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_exact(&self) -> bool {
        self.exact
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Iterate over the groups, each exactly `width` digits long
    pub fn groups(&self) -> impl Iterator<Item = &str> + '_ {
        (0..self.bits.len())
            .step_by(self.width)
            .map(move |start| &self.bits[start..start + self.width])
    }

    /// Re-chunk into groups of `width` bits, see [`regroup`]
    pub fn regroup(&self, width: usize) -> Result<(BitSequence, bool)> {
        regroup(self, width)
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.groups().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(group)?;
        }
        Ok(())
    }
}

/// Render every group of `sequence` as exactly `width` bits
///
/// Wider groups are left-padded with zeros; narrower ones keep only their
/// low bits. The flag is `true` when no group lost a set bit. The returned
/// sequence is exact only if `sequence` was exact and the flag is `true`.
pub fn regroup(sequence: &BitSequence, width: usize) -> Result<(BitSequence, bool)> {
    if width == 0 {
        return Err(PadError::InvalidGroupWidth(width));
    }

    let groups = sequence.len() / sequence.width;
    let mut bits = String::with_capacity(groups * width);
    let mut lossless = true;

    for group in sequence.groups() {
        if group.len() > width {
            let (high, low) = group.split_at(group.len() - width);
            if high.contains('1') {
                lossless = false;
            }
            bits.push_str(low);
        } else {
            bits.extend(std::iter::repeat('0').take(width - group.len()));
            bits.push_str(group);
        }
    }

    let regrouped = BitSequence {
        bits,
        width,
        exact: sequence.exact && lossless,
    };
    Ok((regrouped, lossless))
}
