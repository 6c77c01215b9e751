use crate::cli::io::{read_source, write_sink, Source};
use crate::codec::{pad, unpad, PadOptions};
use crate::error::Result;
use crate::representation::{classify, Representation};
use std::path::PathBuf;

/// Options for the `pad` and `unpad` commands
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub codec: PadOptions,
    /// Read and write `\xNN` escapes instead of raw bytes
    pub escaped: bool,
    /// Destination file; stdout when unset
    pub output: Option<PathBuf>,
}

/// Direction of a transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Pad,
    Unpad,
}

/// What a transform did, for the summary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformReport {
    pub representation: Representation,
    pub input_len: usize,
    pub output_len: usize,
}

impl TransformReport {
    pub fn changed(&self) -> bool {
        self.input_len != self.output_len
    }
}

/// Read the source, apply the codec and write the result
pub fn run_transform(
    source: &Source,
    direction: Direction,
    options: &TransformOptions,
) -> Result<TransformReport> {
    let data = read_source(source, options.escaped)?;
    let transformed = transform_bytes(&data, direction, &options.codec)?;
    write_sink(options.output.as_deref(), &transformed, options.escaped)?;

    Ok(TransformReport {
        representation: classify(&data, options.codec.raw),
        input_len: data.len(),
        output_len: transformed.len(),
    })
}

pub fn transform_bytes(data: &[u8], direction: Direction, options: &PadOptions) -> Result<Vec<u8>> {
    match direction {
        Direction::Pad => pad(data, options),
        Direction::Unpad => unpad(data, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::PaddingAlgorithm;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_pad_file_to_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.bin");
        let output = dir.path().join("out.bin");
        fs::write(&input, b"hello").unwrap();

        let options = TransformOptions {
            codec: PadOptions::new(PaddingAlgorithm::Pkcs5_7, 8),
            output: Some(output.clone()),
            ..Default::default()
        };
        let report = run_transform(&Source::File(input), Direction::Pad, &options).unwrap();
        assert_eq!(report.representation, Representation::Raw);
        assert_eq!(report.input_len, 5);
        assert_eq!(report.output_len, 8);
        assert!(report.changed());
        assert_eq!(fs::read(&output).unwrap(), b"hello\x03\x03\x03");

        let restored = dir.path().join("restored.bin");
        let options = TransformOptions {
            output: Some(restored.clone()),
            ..options
        };
        run_transform(&Source::File(output), Direction::Unpad, &options).unwrap();
        assert_eq!(fs::read(&restored).unwrap(), b"hello");
    }

    #[test]
    fn test_escaped_inline_input() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("out.txt");
        let options = TransformOptions {
            codec: PadOptions::new(PaddingAlgorithm::Iso7816_4, 4),
            escaped: true,
            output: Some(output.clone()),
        };
        let report = run_transform(
            &Source::Inline("AB\\x80\\x00".into()),
            Direction::Unpad,
            &options,
        )
        .unwrap();
        assert_eq!(report.output_len, 2);
        assert_eq!(fs::read_to_string(&output).unwrap(), "AB");
    }

    #[test]
    fn test_unrecognised_trailer_reports_no_change() {
        let report_data = transform_bytes(
            b"plain",
            Direction::Unpad,
            &PadOptions::new(PaddingAlgorithm::Pkcs5_7, 8),
        )
        .unwrap();
        assert_eq!(report_data, b"plain");
    }
}
