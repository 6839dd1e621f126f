//! Byte-to-hex encoding
//!
//! Turns a file's raw bytes into a single `\xNN\xNN...` string literal.
//! Files that cannot produce output are reported through [`Skip`] so the
//! caller can emit a notice and carry on with the next file.

use std::error::Error as ErrorTrait;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Why a file produced no encoded output.
///
/// None of these abort a run; each file is skipped independently.
#[derive(Debug)]
pub enum Skip {
    /// The path does not exist
    Missing,
    /// The path exists but is not a regular file
    NotAFile,
    /// The file has zero length
    Empty,
    /// The file could not be opened or read
    Unreadable(io::Error),
}

impl ErrorTrait for Skip {
    fn source(&self) -> Option<&(dyn ErrorTrait + 'static)> {
        match self {
            Skip::Unreadable(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Skip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skip::Missing => write!(f, "file does not exist"),
            Skip::NotAFile => write!(f, "not a regular file"),
            Skip::Empty => write!(f, "file has no bytes"),
            Skip::Unreadable(err) => write!(f, "file could not be read: {}", err),
        }
    }
}

/// Render a byte sequence as an escaped hex string literal.
///
/// Every byte becomes `\x` followed by exactly two uppercase hex digits,
/// concatenated with no separators.
pub fn encode_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 4);
    for &byte in bytes {
        out.push_str("\\x");
        out.push(DIGITS[usize::from(byte >> 4)] as char);
        out.push(DIGITS[usize::from(byte & 0x0F)] as char);
    }
    out
}

/// Read a file in full and encode it.
///
/// The whole file is buffered before conversion begins; there is no
/// streaming path.
pub fn encode_file(path: &Path) -> Result<String, Skip> {
    if !path.exists() {
        return Err(Skip::Missing);
    }
    if !path.is_file() {
        return Err(Skip::NotAFile);
    }

    let bytes = fs::read(path).map_err(Skip::Unreadable)?;
    if bytes.is_empty() {
        return Err(Skip::Empty);
    }

    tracing::debug!("read {} bytes from {}", bytes.len(), path.display());
    Ok(encode_bytes(&bytes))
}
