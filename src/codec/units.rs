use crate::representation::Representation;

/// Padding units (bytes, or bits for bit strings) needed to reach the next block boundary
///
/// `symbols` is the buffer length in symbols. The result is in `0..block_size`:
/// an already aligned buffer needs no padding.
pub fn padding_length(symbols: usize, representation: Representation, block_size: usize) -> usize {
    let width = representation.symbol_width();
    match block_size.checked_mul(width) {
        Some(block_symbols) => {
            let remainder = symbols % block_symbols;
            ((block_symbols - remainder) / width) % block_size
        }
        // The block spans more symbols than any buffer holds
        None => (block_size - symbols.div_ceil(width)) % block_size,
    }
}

/// Buffer under construction that appends padding units in a given representation
pub(crate) struct UnitWriter {
    out: Vec<u8>,
    representation: Representation,
}

impl UnitWriter {
    pub fn new(data: &[u8], representation: Representation, units: usize) -> Self {
        let mut out = Vec::with_capacity(data.len() + units * representation.symbol_width());
        out.extend_from_slice(data);
        Self {
            out,
            representation,
        }
    }

    pub fn push(&mut self, value: u8) {
        match self.representation {
            Representation::Hex => self.out.extend_from_slice(hex::encode([value]).as_bytes()),
            Representation::Raw | Representation::Binary => self.out.push(value),
        }
    }

    pub fn repeat(&mut self, value: u8, count: usize) {
        for _ in 0..count {
            self.push(value);
        }
    }

    pub fn finish(self) -> Vec<u8> {
        self.out
    }
}

/// Values of the last `min(block_size, available)` units of a buffer
///
/// Returns `None` when a hex tail cannot be decoded.
pub(crate) fn tail_units(
    data: &[u8],
    representation: Representation,
    block_size: usize,
) -> Option<Vec<u8>> {
    let width = representation.symbol_width();
    let take = block_size.min(data.len() / width);
    let tail = &data[data.len() - take * width..];
    match representation {
        Representation::Hex => hex::decode(tail).ok(),
        Representation::Raw | Representation::Binary => Some(tail.to_vec()),
    }
}

/// Strip every trailing repetition of `symbols`
pub(crate) fn trim_end_repeated<'a>(mut data: &'a [u8], symbols: &[u8]) -> &'a [u8] {
    while let Some(rest) = data.strip_suffix(symbols) {
        data = rest;
    }
    data
}

/// Strip every leading repetition of `symbols`
pub(crate) fn trim_start_repeated<'a>(mut data: &'a [u8], symbols: &[u8]) -> &'a [u8] {
    while let Some(rest) = data.strip_prefix(symbols) {
        data = rest;
    }
    data
}
