//! Block padding codec
//!
//! [`pad`] appends (or, for prepend fill patterns, prepends) trailer
//! material so a buffer's length becomes a multiple of the block size;
//! [`unpad`] validates and strips it again. Both work on raw bytes, hex
//! digit strings and binary digit strings, measuring the block size in
//! bytes (bits for [`PaddingAlgorithm::Bit`]).

pub mod pad;
pub mod units;
pub mod unpad;

pub use pad::*;
pub use units::padding_length;
pub use unpad::*;

use crate::algorithm::{Padding, PaddingAlgorithm, MAX_COUNTED_BLOCK_SIZE};
use crate::error::{PadError, Result};
use crate::representation::{classify, Representation};

/// Default block size in bytes
pub const DEFAULT_BLOCK_SIZE: usize = 8;

/// Parameters shared by [`pad`] and [`unpad`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PadOptions {
    pub padding: Padding,
    pub block_size: usize,
    /// Treat the data as raw bytes even if it looks like hex or binary
    ///
    /// Classification runs on every call, and a raw trailer can make padded
    /// output look like hex, so raw data needs this set for both `pad` and
    /// `unpad`.
    pub raw: bool,
}

impl Default for PadOptions {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            block_size: DEFAULT_BLOCK_SIZE,
            raw: false,
        }
    }
}

impl PadOptions {
    pub fn new(padding: impl Into<Padding>, block_size: usize) -> Self {
        Self {
            padding: padding.into(),
            block_size,
            ..Default::default()
        }
    }

    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    /// Check every precondition and return the representation to work in
    pub fn resolve(&self, data: &[u8]) -> Result<Representation> {
        if self.block_size == 0 {
            return Err(PadError::InvalidBlockSize(self.block_size));
        }

        let algorithm = self.padding.algorithm();
        if algorithm.counts_in_bytes() && self.block_size > MAX_COUNTED_BLOCK_SIZE {
            return Err(PadError::BlockSizeTooLarge {
                algorithm,
                block_size: self.block_size,
                max: MAX_COUNTED_BLOCK_SIZE,
            });
        }

        let representation = classify(data, self.raw);
        algorithm.check_compatible(representation)?;

        let pattern_len = match &self.padding {
            Padding::Fill(pattern) => pattern.symbols().len(),
            Padding::Algorithm(PaddingAlgorithm::Zero) => representation.zero_symbol().len(),
            Padding::Algorithm(_) => 1,
        };

        // A full block must fit in a single buffer
        let unit_symbols = pattern_len.max(representation.symbol_width());
        match self.block_size.checked_mul(unit_symbols) {
            Some(span) if span <= isize::MAX as usize => {}
            _ => return Err(PadError::InvalidBlockSize(self.block_size)),
        }
        if data.len() % pattern_len != 0 {
            return Err(PadError::InvalidPaddingPattern(format!(
                "{} symbols cannot be filled with a {}-symbol pattern",
                data.len(),
                pattern_len
            )));
        }

        Ok(representation)
    }
}
