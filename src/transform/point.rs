//! Point transforms: per-pixel, no neighborhood dependency.

use enough::Stop;

use crate::error::BmpError;
use crate::pixel::{Pixel, PixelGrid};

// Luma weights in thousandths, in storage order (blue, green, red). The
// blue-heavy mix (0.299 blue / 0.587 green / 0.114 red) is part of the
// format contract; edge detection thresholds are calibrated against it.
const LUMA_BLUE: u32 = 299;
const LUMA_GREEN: u32 = 587;
const LUMA_RED: u32 = 114;

/// Luma value of one pixel: the exact weighted mix, narrowed by truncation.
///
/// The weights sum to exactly 1000, so a uniform grey pixel maps to itself
/// and greyscale is idempotent.
pub(crate) fn grey_value(px: Pixel) -> u8 {
    let mix = LUMA_BLUE * u32::from(px.blue)
        + LUMA_GREEN * u32::from(px.green)
        + LUMA_RED * u32::from(px.red);
    (mix / 1000) as u8
}

pub(crate) fn greyscale(grid: &PixelGrid, stop: &dyn Stop) -> Result<PixelGrid, BmpError> {
    map_pixels(grid, stop, |px| Pixel::grey(grey_value(px)))
}

pub(crate) fn negative(grid: &PixelGrid, stop: &dyn Stop) -> Result<PixelGrid, BmpError> {
    map_pixels(grid, stop, |px| Pixel {
        blue: 255 - px.blue,
        green: 255 - px.green,
        red: 255 - px.red,
    })
}

fn map_pixels(
    grid: &PixelGrid,
    stop: &dyn Stop,
    f: impl Fn(Pixel) -> Pixel,
) -> Result<PixelGrid, BmpError> {
    let mut out = grid.clone();
    for (row_idx, row) in out.rows_mut().enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        for px in row {
            *px = f(*px);
        }
    }
    Ok(out)
}
