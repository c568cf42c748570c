//! Cross-kernel filters: sharpen and edge detection.
//!
//! Both weigh the center pixel against its four orthogonal neighbors;
//! diagonals are never sampled. Out-of-range neighbors are omitted rather
//! than zero-padded or mirrored, so the effective kernel shrinks at the
//! image boundary: 3 contributing cells in corners, 4 along edges, 5 in
//! the interior. Results always go into a fresh grid; several output
//! pixels read the same source neighbor, so the source must stay intact.

use alloc::vec::Vec;

use enough::Stop;

use super::point;
use crate::error::BmpError;
use crate::pixel::{Pixel, PixelGrid};

const SHARPEN_CENTER: i32 = 5;
const SHARPEN_SIDE: i32 = -1;

const EDGE_CENTER: i32 = 4;
const EDGE_SIDE: i32 = -1;

/// Weighted per-channel sums of the center pixel and its existing
/// orthogonal neighbors, in storage order (blue, green, red). Not clamped.
fn cross_sums(grid: &PixelGrid, x: u32, y: u32, center: i32, side: i32) -> [i32; 3] {
    let mut sums = [0i32; 3];
    let mut add = |px: Pixel, weight: i32| {
        sums[0] += weight * i32::from(px.blue);
        sums[1] += weight * i32::from(px.green);
        sums[2] += weight * i32::from(px.red);
    };
    add(grid.get(x, y), center);
    if y > 0 {
        add(grid.get(x, y - 1), side);
    }
    if y + 1 < grid.height() {
        add(grid.get(x, y + 1), side);
    }
    if x > 0 {
        add(grid.get(x - 1, y), side);
    }
    if x + 1 < grid.width() {
        add(grid.get(x + 1, y), side);
    }
    sums
}

fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

pub(crate) fn sharpen(grid: &PixelGrid, stop: &dyn Stop) -> Result<PixelGrid, BmpError> {
    let mut pixels = Vec::with_capacity(grid.pixels().len());
    for y in 0..grid.height() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..grid.width() {
            let [blue, green, red] = cross_sums(grid, x, y, SHARPEN_CENTER, SHARPEN_SIDE);
            pixels.push(Pixel {
                blue: clamp_channel(blue),
                green: clamp_channel(green),
                red: clamp_channel(red),
            });
        }
    }
    PixelGrid::from_pixels(grid.width(), grid.height(), pixels)
}

/// Greyscale, cross kernel on the grey value, then a hard binary threshold:
/// every output pixel is all-255 or all-0.
pub(crate) fn edge_detect(
    grid: &PixelGrid,
    threshold: i32,
    stop: &dyn Stop,
) -> Result<PixelGrid, BmpError> {
    let grey = point::greyscale(grid, stop)?;

    let mut pixels = Vec::with_capacity(grey.pixels().len());
    for y in 0..grey.height() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for x in 0..grey.width() {
            // All channels are equal after greyscale; the kernel runs on one.
            let [value, _, _] = cross_sums(&grey, x, y, EDGE_CENTER, EDGE_SIDE);
            let edge = i32::from(clamp_channel(value)) > threshold;
            pixels.push(if edge { Pixel::WHITE } else { Pixel::BLACK });
        }
    }
    PixelGrid::from_pixels(grey.width(), grey.height(), pixels)
}
