//! Instruction sources
//!
//! A source is opened once, read to the end and dropped before the outcome
//! is returned. Failing to open or read it is a `SourceUnavailable` error.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;
use crate::core::scanner::scan;
use crate::types::{ScanError, ScanOutcome};

/// Open an instruction file for reading
pub fn open_source(path: impl AsRef<Path>) -> Result<BufReader<File>, ScanError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| ScanError::source_unavailable(path, e))?;
    debug!(path = %path.display(), "opened instruction source");
    Ok(BufReader::new(file))
}

/// Read everything from `reader` and scan it
///
/// Invalid UTF-8 is decoded lossily; each replacement character counts as
/// one ignored character.
pub fn scan_reader<R: Read>(mut reader: R) -> io::Result<ScanOutcome> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    debug!(bytes = bytes.len(), "read instruction source");
    Ok(scan(String::from_utf8_lossy(&bytes).chars()))
}

/// Open, read and scan an instruction file
pub fn scan_file(path: impl AsRef<Path>) -> Result<ScanOutcome, ScanError> {
    let path = path.as_ref();
    let reader = open_source(path)?;
    scan_reader(reader).map_err(|e| ScanError::source_unavailable(path, e))
}
