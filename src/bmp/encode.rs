//! BMP encoder: uncompressed 24-bit, 54-byte header, rows in grid order.

use alloc::vec::Vec;

use enough::Stop;

use crate::bmp::decode::HEADER_SIZE;
use crate::error::BmpError;
use crate::pixel::PixelGrid;

/// Encode a pixel grid to BMP bytes.
///
/// Cannot fail on a valid grid except through cancellation or size
/// arithmetic overflow.
pub(crate) fn encode_bmp(grid: &PixelGrid, stop: &dyn Stop) -> Result<Vec<u8>, BmpError> {
    let width = grid.width();
    let height = grid.height();
    let too_large = || BmpError::DimensionsTooLarge { width, height };

    let stride = (width as usize).checked_mul(3).ok_or_else(too_large)?;
    let padding = (4 - stride % 4) % 4;
    let row_size = stride.checked_add(padding).ok_or_else(too_large)?;
    let pixel_data_size = row_size
        .checked_mul(height as usize)
        .ok_or_else(too_large)?;
    let file_size = pixel_data_size
        .checked_add(HEADER_SIZE)
        .ok_or_else(too_large)?;

    let mut out = Vec::with_capacity(file_size);
    write_header(&mut out, file_size, width, height);

    for (row_idx, row) in grid.rows().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            out.push(px.blue);
            out.push(px.green);
            out.push(px.red);
        }
        out.extend(core::iter::repeat_n(0u8, padding));
    }

    Ok(out)
}

fn write_header(out: &mut Vec<u8>, file_size: usize, width: u32, height: u32) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&(file_size as u32).to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes()); // data offset

    // Info header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes()); // bits per pixel
    out.extend_from_slice(&[0u8; 24]); // compression through important-colors: unused
}
