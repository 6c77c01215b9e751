//! Blockpad - representation-aware block padding
//!
//! Adds and removes block padding on data held in one of three textual
//! forms: raw bytes, hex digit pairs, or binary digit strings. The form is
//! detected from the data's alphabet unless raw handling is forced.
//!
//! ## Algorithms
//!
//! - **zero** (default): zero symbols, or any custom fill pattern
//! - **bit**: a 1 bit then zero bits (binary strings only)
//! - **ansic9.23**: zero bytes closed by a count byte
//! - **incremental**: bytes 1, 2, ..., n
//! - **iso7816-4**: 0x80 then zero bytes
//! - **pkcs5** / **pkcs7**: n bytes of value n
//! - **w3c**: random bytes closed by a count byte
//!
//! [`bits::BitSequence`] regroups bit strings between group widths and
//! tracks whether any group lost bits on the way.
//!
//! ## Example
//!
//! ```
//! use blockpad::{pad, unpad, PadOptions, PaddingAlgorithm};
//!
//! let options = PadOptions::new(PaddingAlgorithm::Pkcs5_7, 4).raw(true);
//! let padded = pad(b"AB", &options).unwrap();
//! assert_eq!(padded, b"AB\x02\x02");
//! assert_eq!(unpad(&padded, &options).unwrap(), b"AB");
//!
//! // Hex strings pad in whole bytes
//! let options = PadOptions::new(PaddingAlgorithm::Zero, 4);
//! assert_eq!(pad(b"4142", &options).unwrap(), b"41420000");
//! ```

pub mod algorithm;
pub mod bits;
pub mod cli;
pub mod codec;
pub mod error;
pub mod representation;

pub use algorithm::{Alignment, FillPattern, Padding, PaddingAlgorithm};
pub use bits::{regroup, BitSequence};
pub use codec::{pad, pad_with_rng, unpad, PadOptions};
pub use error::{PadError, Result};
pub use representation::{classify, Representation};
