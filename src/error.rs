use crate::algorithm::PaddingAlgorithm;
use crate::representation::Representation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid block size: {0}. Must be a positive integer")]
    InvalidBlockSize(usize),

    #[error("Block size {block_size} too large for {algorithm}: at most {max} units can be counted in one byte")]
    BlockSizeTooLarge {
        algorithm: PaddingAlgorithm,
        block_size: usize,
        max: usize,
    },

    #[error("Incompatible padding algorithm: {algorithm} cannot be used on {representation} data")]
    IncompatibleAlgorithm {
        algorithm: PaddingAlgorithm,
        representation: Representation,
    },

    #[error("Bad padding character(s): {0}")]
    InvalidPaddingPattern(String),

    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("Invalid binary digit {digit:?} at offset {offset}")]
    InvalidBinary { digit: char, offset: usize },

    #[error("Invalid group width: {0}. Must be a positive number of bits")]
    InvalidGroupWidth(usize),

    #[error("Invalid escape sequence at offset {0}")]
    InvalidEscape(usize),
}

pub type Result<T> = std::result::Result<T, PadError>;
