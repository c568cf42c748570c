//! Path-based helpers over the byte codec (std only).

use std::fs;
use std::path::Path;

use enough::Stop;

use crate::error::BmpError;
use crate::pixel::PixelGrid;

/// Read `path` in full and decode it as a 24-bit BMP.
pub fn decode_file(path: impl AsRef<Path>, stop: impl Stop) -> Result<PixelGrid, BmpError> {
    let data = fs::read(path)?;
    crate::bmp::decode(&data, None, &stop)
}

/// Encode `grid` and write it to `path` in one sequential write.
///
/// A failure mid-write leaves a truncated file behind; there is no partial
/// recovery.
pub fn encode_file(grid: &PixelGrid, path: impl AsRef<Path>, stop: impl Stop) -> Result<(), BmpError> {
    let bytes = crate::bmp::encode(grid, &stop)?;
    fs::write(path, bytes)?;
    Ok(())
}
