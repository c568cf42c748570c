//! Crop: truncate a grid to a requested height and width.

use alloc::vec::Vec;

use enough::Stop;

use crate::error::BmpError;
use crate::pixel::PixelGrid;

/// Keep the last `new_height` stored rows and the first `new_width` columns
/// of each row.
///
/// Crop never enlarges: an axis whose requested size is at least the current
/// size is left untouched.
pub(crate) fn crop(
    grid: &PixelGrid,
    new_height: u32,
    new_width: u32,
    stop: &dyn Stop,
) -> Result<PixelGrid, BmpError> {
    let height = grid.height().min(new_height);
    let width = grid.width().min(new_width);
    if height == grid.height() && width == grid.width() {
        return Ok(grid.clone());
    }

    let skip_rows = (grid.height() - height) as usize;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for (row_idx, row) in grid.rows().skip(skip_rows).enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        pixels.extend_from_slice(&row[..width as usize]);
    }

    PixelGrid::from_pixels(width, height, pixels)
}
