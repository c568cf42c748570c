//! Strict 24-bit BMP decoder and encoder (internal).
//!
//! Use top-level [`crate::probe`], [`crate::decode`], [`crate::encode`].

mod decode;
mod encode;

use alloc::vec::Vec;
use enough::Stop;

use crate::error::BmpError;
use crate::limits::Limits;
use crate::pixel::PixelGrid;

pub use decode::BmpInfo;

/// Parse and validate the header without decoding pixel data.
pub(crate) fn probe(data: &[u8]) -> Result<BmpInfo, BmpError> {
    decode::parse_header(data)
}

/// Decode BMP data into a pixel grid.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<PixelGrid, BmpError> {
    let info = decode::parse_header(data)?;
    check_limits(limits, &info)?;
    stop.check()?;
    decode::decode_pixels(data, &info, stop)
}

fn check_limits(limits: Option<&Limits>, info: &BmpInfo) -> Result<(), BmpError> {
    let Some(limits) = limits else {
        return Ok(());
    };
    limits.check_dimensions(info.width, info.height)?;
    let out_bytes = (info.width as usize)
        .checked_mul(info.height as usize)
        .and_then(|wh| wh.checked_mul(info.bytes_per_pixel()))
        .ok_or(BmpError::DimensionsTooLarge {
            width: info.width,
            height: info.height,
        })?;
    limits.check_output_bytes(out_bytes)
}

/// Encode a pixel grid as BMP.
pub(crate) fn encode(grid: &PixelGrid, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
    encode::encode_bmp(grid, stop)
}
