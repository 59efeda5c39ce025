//! Encoded text dump reading
//!
//! The extracted string tables come from two different tools: names and
//! descriptions are written as UTF-16BE, result strings as UTF-16LE, and the
//! record tables as plain UTF-8.

use std::fmt;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};

use crate::error::{Error, Result};

/// Declared encoding of a dump file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Utf16Le => "utf16le",
            Self::Utf16Be => "utf16be",
        }
    }

    fn encoding(self) -> &'static Encoding {
        match self {
            Self::Utf8 => UTF_8,
            Self::Utf16Le => UTF_16LE,
            Self::Utf16Be => UTF_16BE,
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "").as_str() {
            "utf8" => Ok(Self::Utf8),
            "utf16le" => Ok(Self::Utf16Le),
            "utf16be" => Ok(Self::Utf16Be),
            _ => Err(format!(
                "Invalid encoding '{s}'. Valid values: utf8, utf16le, utf16be"
            )),
        }
    }
}

/// Read a dump file from disk and decode it
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] if the file does not exist.
/// Returns [`Error::Decode`] if the bytes are not valid in `encoding`.
/// Returns [`Error::Io`] for any other read failure.
///
/// [`Error::FileNotFound`]: crate::Error::FileNotFound
/// [`Error::Decode`]: crate::Error::Decode
/// [`Error::Io`]: crate::Error::Io
pub fn read_text_file<P: AsRef<Path>>(path: P, encoding: TextEncoding) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(err),
    })?;

    tracing::debug!("Read {} bytes from {} ({encoding})", bytes.len(), path.display());

    decode_text_bytes(&bytes, encoding).ok_or_else(|| Error::Decode {
        path: path.to_path_buf(),
        encoding: encoding.as_str(),
    })
}

/// Decode raw dump bytes, stripping a matching byte-order mark
///
/// Returns `None` if the input contains malformed sequences.
#[must_use]
pub fn decode_text_bytes(bytes: &[u8], encoding: TextEncoding) -> Option<String> {
    let (text, had_errors) = encoding.encoding().decode_with_bom_removal(bytes);
    if had_errors {
        return None;
    }
    Some(text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf16(text: &str, big_endian: bool) -> Vec<u8> {
        text.encode_utf16()
            .flat_map(|unit| {
                if big_endian {
                    unit.to_be_bytes()
                } else {
                    unit.to_le_bytes()
                }
            })
            .collect()
    }

    #[test]
    fn test_decode_utf16_be_and_le() {
        let be = utf16("100\tBellow", true);
        let le = utf16("100\tKnocked Down", false);
        assert_eq!(
            decode_text_bytes(&be, TextEncoding::Utf16Be).as_deref(),
            Some("100\tBellow")
        );
        assert_eq!(
            decode_text_bytes(&le, TextEncoding::Utf16Le).as_deref(),
            Some("100\tKnocked Down")
        );
    }

    #[test]
    fn test_decode_strips_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        bytes.extend(utf16("Cleave", false));
        assert_eq!(
            decode_text_bytes(&bytes, TextEncoding::Utf16Le).as_deref(),
            Some("Cleave")
        );
    }

    #[test]
    fn test_decode_rejects_odd_length_utf16() {
        let mut bytes = utf16("Cleave", true);
        bytes.push(0x00);
        assert_eq!(decode_text_bytes(&bytes, TextEncoding::Utf16Be), None);
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_text_file(temp.path().join("nope.txt"), TextEncoding::Utf8).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_read_invalid_utf8_is_decode_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.tsv");
        std::fs::write(&path, [0x31, 0xFF, 0xFE, 0x32]).unwrap();
        let err = read_text_file(&path, TextEncoding::Utf8).unwrap_err();
        assert!(matches!(err, Error::Decode { encoding: "utf8", .. }));
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!("UTF-16BE".parse::<TextEncoding>(), Ok(TextEncoding::Utf16Be));
        assert_eq!("utf16le".parse::<TextEncoding>(), Ok(TextEncoding::Utf16Le));
        assert!("latin1".parse::<TextEncoding>().is_err());
    }
}
