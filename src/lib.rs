//! # zenbmp
//!
//! Strict 24-bit BMP codec with a composable filter pipeline.
//!
//! The codec handles exactly one profile: uncompressed 24-bit pixel data
//! behind the classic 54-byte header (14-byte file header +
//! BITMAPINFOHEADER). Anything else (other bit depths, compression,
//! palettes, nonstandard data offsets) is rejected up front rather than
//! decoded on a best-effort basis.
//!
//! Decoded images live in a [`PixelGrid`]; every transform consumes a grid
//! and produces a new one, so filters compose by chaining.
//!
//! ## Transforms
//!
//! | name        | parameters         | effect                                    |
//! |-------------|--------------------|-------------------------------------------|
//! | `greyscale` | —                  | fixed-weight luma mix, channels equalized  |
//! | `negative`  | —                  | every channel `v` becomes `255 - v`        |
//! | `crop`      | height, width      | truncates; never enlarges                  |
//! | `sharpen`   | —                  | cross kernel, center 5 / sides −1          |
//! | `edge`      | threshold fraction | greyscale + cross kernel 4 / −1, binary map |
//!
//! The neighborhood filters (`sharpen`, `edge`) read only the original grid
//! and write a fresh one; out-of-range neighbors at the image boundary are
//! omitted from the weighted sum.
//!
//! ## Non-Goals
//!
//! - Compressed, paletted, or non-24-bit BMP variants
//! - Color spaces beyond 8-bit BGR
//! - Streaming or partial decode; the whole image is materialized
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmp::{TransformSpec, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe the header without decoding pixel data
//! let info = zenbmp::probe(data)?;
//! println!("{}x{}", info.width, info.height);
//!
//! let grid = zenbmp::decode(data, Unstoppable)?;
//! let pipeline = [
//!     TransformSpec::new("greyscale", vec![]),
//!     TransformSpec::new("sharpen", vec![]),
//! ];
//! let grid = zenbmp::apply_pipeline(&pipeline, grid, Unstoppable)?;
//! let out = zenbmp::encode(&grid, Unstoppable)?;
//! # let _ = out;
//! # Ok::<(), zenbmp::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod limits;
mod pixel;

mod bmp;
mod transform;

#[cfg(feature = "std")]
mod file;

use alloc::string::String;
use alloc::vec::Vec;

// Re-exports
pub use bmp::BmpInfo;
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
pub use limits::Limits;
pub use pixel::{Pixel, PixelGrid};
pub use transform::{Transform, TransformSpec};

#[cfg(feature = "std")]
pub use file::{decode_file, encode_file};

/// Parse and validate the BMP header without touching pixel data.
pub fn probe(data: &[u8]) -> Result<BmpInfo, BmpError> {
    bmp::probe(data)
}

/// Decode a 24-bit BMP into a pixel grid.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<PixelGrid, BmpError> {
    bmp::decode(data, None, &stop)
}

/// Decode with resource limits enforced between header parse and pixel
/// allocation.
pub fn decode_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<PixelGrid, BmpError> {
    bmp::decode(data, Some(limits), &stop)
}

/// Encode a pixel grid as a 24-bit BMP.
pub fn encode(grid: &PixelGrid, stop: impl Stop) -> Result<Vec<u8>, BmpError> {
    bmp::encode(grid, &stop)
}

/// Look up a transform by name, validate its parameters, and apply it.
pub fn apply_transform(
    name: &str,
    params: &[String],
    grid: &PixelGrid,
    stop: impl Stop,
) -> Result<PixelGrid, BmpError> {
    Transform::parse(name, params)?.apply(grid, &stop)
}

/// Run a pipeline of transforms in order.
///
/// The first failure aborts the whole pipeline; nothing of the partial work
/// is returned.
pub fn apply_pipeline(
    specs: &[TransformSpec],
    grid: PixelGrid,
    stop: impl Stop,
) -> Result<PixelGrid, BmpError> {
    transform::apply_pipeline(specs, grid, &stop)
}
