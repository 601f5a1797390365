//! Whole-file loader.
//!
//! Reads a file into memory in one pass and hands the bytes to
//! [`Document::from_bytes`]. The buffer allocation goes through
//! `try_reserve_exact` so that running out of memory is reported as a value
//! the caller can recover from (open a smaller file) rather than an abort.

use std::collections::TryReserveError;
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::Document;

/// Errors from loading a document.
#[derive(Debug)]
pub enum LoadError {
    /// The file does not exist or could not be opened for reading.
    NotFound,
    /// There was not enough memory for the file content or its line table.
    OutOfMemory,
    /// Any other IO failure while reading.
    Io(io::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::NotFound => write!(f, "input file not found"),
            LoadError::OutOfMemory => write!(f, "not enough memory to load the file"),
            LoadError::Io(err) => write!(f, "failed to read the file: {}", err),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => LoadError::NotFound,
            io::ErrorKind::OutOfMemory => LoadError::OutOfMemory,
            _ => LoadError::Io(err),
        }
    }
}

impl From<TryReserveError> for LoadError {
    fn from(_: TryReserveError) -> Self {
        LoadError::OutOfMemory
    }
}

/// Loads the file at `path` into an immutable [`Document`].
///
/// The whole file is read into one owned buffer; the document's line-start
/// table is derived from it in the same call. The previous document, if the
/// caller holds one, is untouched by a failed load.
pub fn load(path: &Path) -> Result<Document, LoadError> {
    let mut file = File::open(path)?;

    let size = file.metadata()?.len() as usize;
    let mut bytes = Vec::new();
    bytes.try_reserve_exact(size)?;
    file.read_to_end(&mut bytes)?;

    log::debug!("loaded {}: {} bytes", path.display(), bytes.len());

    Document::from_bytes(bytes)
}
