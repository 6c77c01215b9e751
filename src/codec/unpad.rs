use super::units::{tail_units, trim_end_repeated, trim_start_repeated};
use super::PadOptions;
use crate::algorithm::{Alignment, Padding, PaddingAlgorithm};
use crate::error::Result;
use crate::representation::Representation;
use tracing::{debug, trace};

/// Remove padding added by [`super::pad`]
///
/// A trailer that does not validate is not an error: the data comes back
/// unchanged, so compare the output with the input to detect it. Only the
/// preconditions checked by [`PadOptions::resolve`] fail.
pub fn unpad(data: &[u8], options: &PadOptions) -> Result<Vec<u8>> {
    let representation = options.resolve(data)?;
    let block_size = options.block_size;

    let stripped = match &options.padding {
        Padding::Fill(pattern) => match pattern.alignment() {
            Alignment::Append => trim_end_repeated(data, pattern.symbols()),
            Alignment::Prepend => trim_start_repeated(data, pattern.symbols()),
        },
        Padding::Algorithm(algorithm) => match algorithm {
            PaddingAlgorithm::Zero => trim_end_repeated(data, representation.zero_symbol()),
            PaddingAlgorithm::Bit => strip_bits(data),
            PaddingAlgorithm::AnsiX923 => {
                strip_counted(data, representation, block_size, |preceding, _| {
                    preceding.iter().all(|&unit| unit == 0)
                })
            }
            PaddingAlgorithm::Incremental => {
                strip_counted(data, representation, block_size, |preceding, _| {
                    preceding
                        .iter()
                        .enumerate()
                        .all(|(i, &unit)| unit as usize == i + 1)
                })
            }
            PaddingAlgorithm::Iso7816_4 => strip_iso7816(data, representation, block_size),
            PaddingAlgorithm::Pkcs5_7 => {
                strip_counted(data, representation, block_size, |preceding, count| {
                    preceding.iter().all(|&unit| unit as usize == count)
                })
            }
            // Filler bytes are random, only the count is checked
            PaddingAlgorithm::W3C => strip_counted(data, representation, block_size, |_, _| true),
        },
    };

    if stripped.len() == data.len() {
        trace!(algorithm = %options.padding.algorithm(), "no padding recognised");
    } else {
        debug!(
            algorithm = %options.padding.algorithm(),
            %representation,
            block_size,
            removed = data.len() - stripped.len(),
            "unpadded"
        );
    }
    Ok(stripped.to_vec())
}

/// Strip a trailer whose last unit holds its own length in units
///
/// `valid` receives the units before the count unit and the count.
fn strip_counted<F>(
    data: &[u8],
    representation: Representation,
    block_size: usize,
    valid: F,
) -> &[u8]
where
    F: Fn(&[u8], usize) -> bool,
{
    let Some(units) = tail_units(data, representation, block_size) else {
        return data;
    };
    let Some(&last) = units.last() else {
        return data;
    };

    let count = last as usize;
    if count == 0 || count > block_size || count > units.len() {
        return data;
    }
    if !valid(&units[units.len() - count..units.len() - 1], count) {
        return data;
    }
    &data[..data.len() - count * representation.symbol_width()]
}

/// Strip trailing zero units and the 0x80 marker in front of them
fn strip_iso7816(data: &[u8], representation: Representation, block_size: usize) -> &[u8] {
    let Some(units) = tail_units(data, representation, block_size) else {
        return data;
    };

    let zeros = units.iter().rev().take_while(|&&unit| unit == 0).count();
    if zeros < units.len() && units[units.len() - 1 - zeros] == 0x80 {
        &data[..data.len() - (zeros + 1) * representation.symbol_width()]
    } else {
        data
    }
}

/// Strip trailing zero bits plus the marker bit; unchanged if there are no trailing zeros
fn strip_bits(data: &[u8]) -> &[u8] {
    let trimmed = trim_end_repeated(data, b"0");
    if trimmed.len() == data.len() {
        data
    } else {
        &trimmed[..trimmed.len().saturating_sub(1)]
    }
}
