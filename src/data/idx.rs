//! IDX container decoding
//!
//! The MNIST family of datasets ships as IDX files: a big-endian magic number
//! whose low byte is the dimension count, one `u32` per dimension, then the raw
//! `u8` payload. Files ending in `.gz` are decompressed on the fly.

use crate::error::{Error, Result};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Magic number of a 3-dimensional `u8` IDX file (images)
pub const IMAGE_MAGIC: u32 = 0x0000_0803;
/// Magic number of a 1-dimensional `u8` IDX file (labels)
pub const LABEL_MAGIC: u32 = 0x0000_0801;

/// Images decoded from an IDX file, pixels stored row-major per image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawImages {
    /// Number of images
    pub count: usize,
    /// Rows per image
    pub rows: usize,
    /// Columns per image
    pub cols: usize,
    /// `count * rows * cols` pixel intensities in `0..=255`
    pub pixels: Vec<u8>,
}

/// Read an IDX image file from disk
pub fn read_images(path: impl AsRef<Path>) -> Result<RawImages> {
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    decode_images(&bytes).map_err(|e| with_path(e, path))
}

/// Read an IDX label file from disk
pub fn read_labels(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    decode_labels(&bytes).map_err(|e| with_path(e, path))
}

/// Decode an in-memory IDX image payload
pub fn decode_images(bytes: &[u8]) -> Result<RawImages> {
    expect_magic(bytes, IMAGE_MAGIC)?;
    let count = read_u32(bytes, 4)? as usize;
    let rows = read_u32(bytes, 8)? as usize;
    let cols = read_u32(bytes, 12)? as usize;

    let len = count
        .checked_mul(rows)
        .and_then(|n| n.checked_mul(cols))
        .ok_or_else(|| {
            Error::Dataset(format!("Image dimensions overflow: {count}x{rows}x{cols}"))
        })?;
    let pixels = payload(bytes, 16, len)?.to_vec();

    Ok(RawImages {
        count,
        rows,
        cols,
        pixels,
    })
}

/// Decode an in-memory IDX label payload
pub fn decode_labels(bytes: &[u8]) -> Result<Vec<u8>> {
    expect_magic(bytes, LABEL_MAGIC)?;
    let count = read_u32(bytes, 4)? as usize;
    Ok(payload(bytes, 8, count)?.to_vec())
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path)
        .map_err(|e| Error::Dataset(format!("Failed to open {}: {e}", path.display())))?;

    let mut reader: Box<dyn Read> = if is_gzip(path) {
        Box::new(GzDecoder::new(BufReader::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::Dataset(format!("Failed to read {}: {e}", path.display())))?;
    Ok(bytes)
}

fn is_gzip(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}

fn expect_magic(bytes: &[u8], expected: u32) -> Result<()> {
    let magic = read_u32(bytes, 0)?;
    if magic != expected {
        return Err(Error::Dataset(format!(
            "Unexpected IDX magic number {magic:#010x} (expected {expected:#010x})"
        )));
    }
    Ok(())
}

fn read_u32(bytes: &[u8], offset: usize) -> Result<u32> {
    bytes
        .get(offset..offset + 4)
        .and_then(|b| b.try_into().ok())
        .map(u32::from_be_bytes)
        .ok_or_else(|| Error::Dataset(format!("Truncated IDX header at byte {offset}")))
}

fn payload(bytes: &[u8], offset: usize, len: usize) -> Result<&[u8]> {
    let available = bytes.len().saturating_sub(offset);
    if available < len {
        return Err(Error::Dataset(format!(
            "Truncated IDX payload: expected {len} bytes, found {available}"
        )));
    }
    Ok(&bytes[offset..offset + len])
}

fn with_path(err: Error, path: &Path) -> Error {
    match err {
        Error::Dataset(msg) => Error::Dataset(format!("{}: {msg}", path.display())),
        other => other,
    }
}
