//! Input file loading.
//!
//! Both the auxiliary log and the bibliography are read fully into memory
//! and decoded as UTF-8 before any processing starts.

use std::fs;
use std::path::Path;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors that can occur when loading an input file.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("File is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

/// Reads a file as UTF-8 text.
///
/// # Errors
///
/// Returns [`SourceError::Io`] if the file cannot be opened or read, and
/// [`SourceError::Encoding`] if its content is not valid UTF-8.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
