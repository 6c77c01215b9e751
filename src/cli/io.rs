use crate::error::{PadError, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Where command input comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl Source {
    pub fn from_args(data: Option<String>, input: Option<PathBuf>) -> Self {
        match (data, input) {
            (Some(data), _) => Self::Inline(data),
            (None, Some(path)) => Self::File(path),
            (None, None) => Self::Stdin,
        }
    }
}

/// Read the whole input, decoding escapes when `escaped` is set
pub fn read_source(source: &Source, escaped: bool) -> Result<Vec<u8>> {
    let bytes = match source {
        Source::Inline(text) => text.as_bytes().to_vec(),
        Source::File(path) => fs::read(path)?,
        Source::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    if escaped {
        unescape(&bytes)
    } else {
        Ok(bytes)
    }
}

/// Write `data` to `path`, or to stdout when no path is given
///
/// Escaped stdout output ends with a newline; everything else is written
/// byte for byte.
pub fn write_sink(path: Option<&Path>, data: &[u8], escaped: bool) -> Result<()> {
    let rendered = if escaped {
        escape(data).into_bytes()
    } else {
        data.to_vec()
    };
    match path {
        Some(path) => fs::write(path, rendered)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(&rendered)?;
            if escaped {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Render bytes as printable ASCII, using `\xNN` for everything else
pub fn escape(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len());
    for &byte in data {
        match byte {
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\x{:02x}", byte)),
        }
    }
    out
}

/// Decode `\xNN`, `\n`, `\r`, `\t`, `\0` and `\\` escapes
///
/// Bytes outside an escape are copied through unchanged, UTF-8 or not.
pub fn unescape(text: impl AsRef<[u8]>) -> Result<Vec<u8>> {
    let bytes = text.as_ref();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] != b'\\' {
            out.push(bytes[i]);
            i += 1;
            continue;
        }
        let offset = i;
        let code = *bytes.get(i + 1).ok_or(PadError::InvalidEscape(offset))?;
        match code {
            b'x' => {
                let digits = bytes.get(i + 2..i + 4).ok_or(PadError::InvalidEscape(offset))?;
                let value = hex::decode(digits).map_err(|_| PadError::InvalidEscape(offset))?;
                out.extend_from_slice(&value);
                i += 4;
                continue;
            }
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'0' => out.push(0),
            b'\\' => out.push(b'\\'),
            _ => return Err(PadError::InvalidEscape(offset)),
        }
        i += 2;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_escape() {
        assert_eq!(escape(b"AB\x02\x02"), "AB\\x02\\x02");
        assert_eq!(escape(b"a\\b\x80"), "a\\\\b\\x80");
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("AB\\x02\\x02").unwrap(), b"AB\x02\x02");
        assert_eq!(unescape("\\0\\n\\t\\\\").unwrap(), b"\x00\n\t\\");
        assert_eq!(unescape("\\xFF").unwrap(), b"\xff");
    }

    #[test]
    fn test_unescape_rejects_bad_sequences() {
        assert!(matches!(unescape("ab\\"), Err(PadError::InvalidEscape(2))));
        assert!(matches!(unescape("\\x4"), Err(PadError::InvalidEscape(0))));
        assert!(matches!(unescape("\\xzz"), Err(PadError::InvalidEscape(0))));
        assert!(matches!(unescape("\\q"), Err(PadError::InvalidEscape(0))));
    }

    #[test]
    fn test_escape_unescape_inverse() {
        let data: Vec<u8> = (0u16..256).map(|b| b as u8).collect();
        assert_eq!(unescape(&escape(&data)).unwrap(), data);
    }

    #[test]
    fn test_file_source_and_sink() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.bin");
        write_sink(Some(&path), b"AB\x00", false).unwrap();
        let read = read_source(&Source::File(path.clone()), false).unwrap();
        assert_eq!(read, b"AB\x00");

        write_sink(Some(&path), b"AB\x00", true).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"AB\\x00");
        let read = read_source(&Source::File(path), true).unwrap();
        assert_eq!(read, b"AB\x00");
    }

    #[test]
    fn test_escaped_file_keeps_non_utf8_bytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("escaped.txt");
        std::fs::write(&path, b"A\xff\\x01B").unwrap();
        let read = read_source(&Source::File(path), true).unwrap();
        assert_eq!(read, b"A\xff\x01B");
    }

    #[test]
    fn test_source_from_args() {
        assert_eq!(
            Source::from_args(Some("x".into()), None),
            Source::Inline("x".into())
        );
        assert_eq!(
            Source::from_args(None, Some("f".into())),
            Source::File("f".into())
        );
        assert_eq!(Source::from_args(None, None), Source::Stdin);
    }
}
