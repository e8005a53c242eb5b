//! Reading ROM images from disk

use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::ines::errors::{InesError, InesResult};

/// Read the whole file at `path` into memory
///
/// # Errors
/// `InputNotFound` when the path does not exist, `IoError` for anything
/// else that goes wrong while reading.
pub fn read_image<P: AsRef<Path>>(path: P) -> InesResult<Vec<u8>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(InesError::InputNotFound(path.display().to_string()));
    }

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    debug!("Read {} bytes from {}", data.len(), path.display());

    Ok(data)
}
