use super::units::{padding_length, UnitWriter};
use super::PadOptions;
use crate::algorithm::{Alignment, Padding, PaddingAlgorithm};
use crate::error::Result;
use crate::representation::Representation;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;

/// Pad `data` to the configured block size
///
/// W3C filler bytes come from the operating system's CSPRNG; use
/// [`pad_with_rng`] to supply another source.
pub fn pad(data: &[u8], options: &PadOptions) -> Result<Vec<u8>> {
    pad_with_rng(data, options, &mut OsRng)
}

/// Pad `data`, drawing W3C filler bytes from `rng`
pub fn pad_with_rng<R: RngCore + ?Sized>(
    data: &[u8],
    options: &PadOptions,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let representation = options.resolve(data)?;
    let block_size = options.block_size;

    let padded = match &options.padding {
        Padding::Fill(pattern) => {
            pad_fill(data, pattern.symbols(), pattern.alignment(), block_size)
        }
        Padding::Algorithm(algorithm) => match algorithm {
            PaddingAlgorithm::Zero => pad_fill(
                data,
                representation.zero_symbol(),
                Alignment::Append,
                block_size,
            ),
            PaddingAlgorithm::Bit => pad_bits(data, block_size),
            PaddingAlgorithm::AnsiX923 => {
                let (mut writer, count) = start(data, representation, block_size);
                if count > 0 {
                    writer.repeat(0, count - 1);
                    writer.push(count as u8);
                }
                writer.finish()
            }
            PaddingAlgorithm::Incremental => {
                let (mut writer, count) = start(data, representation, block_size);
                for value in 1..=count {
                    writer.push(value as u8);
                }
                writer.finish()
            }
            PaddingAlgorithm::Iso7816_4 => {
                let (mut writer, count) = start(data, representation, block_size);
                if count > 0 {
                    writer.push(0x80);
                    writer.repeat(0, count - 1);
                }
                writer.finish()
            }
            PaddingAlgorithm::Pkcs5_7 => {
                let (mut writer, count) = start(data, representation, block_size);
                writer.repeat(count as u8, count);
                writer.finish()
            }
            PaddingAlgorithm::W3C => {
                let (mut writer, count) = start(data, representation, block_size);
                if count > 0 {
                    let mut filler = vec![0u8; count - 1];
                    rng.fill_bytes(&mut filler);
                    for value in filler {
                        writer.push(value);
                    }
                    writer.push(count as u8);
                }
                writer.finish()
            }
        },
    };

    debug!(
        algorithm = %options.padding.algorithm(),
        %representation,
        block_size,
        added = padded.len() - data.len(),
        "padded"
    );
    Ok(padded)
}

/// Writer seeded with `data` plus the number of units to add
///
/// Counts stay below the block size, which [`PadOptions::resolve`] caps for
/// the algorithms that store a count byte.
fn start(data: &[u8], representation: Representation, block_size: usize) -> (UnitWriter, usize) {
    let count = padding_length(data.len(), representation, block_size);
    (UnitWriter::new(data, representation, count), count)
}

/// Repeat `symbols` until the length is a multiple of `block_size` patterns
fn pad_fill(data: &[u8], symbols: &[u8], alignment: Alignment, block_size: usize) -> Vec<u8> {
    let units = data.len() / symbols.len();
    let count = (block_size - units % block_size) % block_size;
    let fill = symbols.repeat(count);
    match alignment {
        Alignment::Append => [data, &fill].concat(),
        Alignment::Prepend => [&fill, data].concat(),
    }
}

/// Append a `1` bit and zero bits; always adds at least the marker bit
fn pad_bits(data: &[u8], block_size: usize) -> Vec<u8> {
    let count = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + count);
    out.extend_from_slice(data);
    out.push(b'1');
    out.resize(data.len() + count, b'0');
    out
}
