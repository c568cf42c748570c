//! Image transforms and the pipeline that chains them.
//!
//! The command-line layer hands over a [`TransformSpec`]: a name plus raw
//! string parameters. [`Transform::parse`] validates both into a tagged
//! variant, and [`Transform::apply`] dispatches on it. There is no
//! per-filter type hierarchy; adding a filter means adding a variant.

mod crop;
mod kernel;
mod point;

use alloc::string::String;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::BmpError;
use crate::pixel::PixelGrid;

/// A named transform plus its raw string parameters, as produced by the
/// command-line layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransformSpec {
    pub name: String,
    pub params: Vec<String>,
}

impl TransformSpec {
    pub fn new(name: impl Into<String>, params: Vec<String>) -> Self {
        TransformSpec {
            name: name.into(),
            params,
        }
    }

    /// Validate the name and parameters into a [`Transform`].
    pub fn parse(&self) -> Result<Transform, BmpError> {
        Transform::parse(&self.name, &self.params)
    }
}

/// A validated transform with parsed parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Fixed-weight luma mix; leaves all three channels equal.
    Greyscale,
    /// Channel inversion, `v -> 255 - v`.
    Negative,
    /// Truncate to at most `height` rows and `width` columns.
    Crop { height: u32, width: u32 },
    /// Cross kernel, center 5 / sides −1, per channel.
    Sharpen,
    /// Greyscale, cross kernel 4 / −1, then a binary threshold.
    /// `threshold` is the input fraction scaled by 255 and rounded.
    EdgeDetect { threshold: i32 },
}

impl Transform {
    /// Parse a transform name and its raw parameters.
    ///
    /// Unknown names fail with [`BmpError::UnknownTransform`]; a wrong
    /// parameter count or an unparsable value fails with
    /// [`BmpError::InvalidParameters`].
    pub fn parse(name: &str, params: &[String]) -> Result<Transform, BmpError> {
        match name {
            "greyscale" => {
                expect_no_params("greyscale", params)?;
                Ok(Transform::Greyscale)
            }
            "negative" => {
                expect_no_params("negative", params)?;
                Ok(Transform::Negative)
            }
            "crop" => {
                if params.len() != 2 {
                    return Err(BmpError::InvalidParameters(alloc::format!(
                        "crop takes exactly 2 parameters (height, width), got {}",
                        params.len()
                    )));
                }
                let height = parse_dimension("crop height", &params[0])?;
                let width = parse_dimension("crop width", &params[1])?;
                Ok(Transform::Crop { height, width })
            }
            "sharpen" => {
                expect_no_params("sharpen", params)?;
                Ok(Transform::Sharpen)
            }
            "edge" => {
                if params.len() != 1 {
                    return Err(BmpError::InvalidParameters(alloc::format!(
                        "edge takes exactly 1 parameter (threshold fraction), got {}",
                        params.len()
                    )));
                }
                let fraction: f64 = params[0].parse().map_err(|_| {
                    BmpError::InvalidParameters(alloc::format!(
                        "edge threshold {:?} is not a number",
                        params[0]
                    ))
                })?;
                Ok(Transform::EdgeDetect {
                    threshold: round_to_i32(fraction * 255.0),
                })
            }
            _ => Err(BmpError::UnknownTransform(String::from(name))),
        }
    }

    /// Apply this transform to `grid`, producing a new grid.
    pub fn apply(&self, grid: &PixelGrid, stop: &dyn Stop) -> Result<PixelGrid, BmpError> {
        match *self {
            Transform::Greyscale => point::greyscale(grid, stop),
            Transform::Negative => point::negative(grid, stop),
            Transform::Crop { height, width } => crop::crop(grid, height, width, stop),
            Transform::Sharpen => kernel::sharpen(grid, stop),
            Transform::EdgeDetect { threshold } => kernel::edge_detect(grid, threshold, stop),
        }
    }
}

/// Fold `grid` through `specs` in order. The first failure aborts the
/// pipeline.
pub(crate) fn apply_pipeline(
    specs: &[TransformSpec],
    mut grid: PixelGrid,
    stop: &dyn Stop,
) -> Result<PixelGrid, BmpError> {
    for spec in specs {
        grid = spec.parse()?.apply(&grid, stop)?;
    }
    Ok(grid)
}

fn expect_no_params(name: &str, params: &[String]) -> Result<(), BmpError> {
    if params.is_empty() {
        Ok(())
    } else {
        Err(BmpError::InvalidParameters(alloc::format!(
            "{name} takes no parameters, got {}",
            params.len()
        )))
    }
}

fn parse_dimension(what: &str, raw: &str) -> Result<u32, BmpError> {
    match raw.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(BmpError::InvalidParameters(alloc::format!(
            "{what} must be a positive integer, got {raw:?}"
        ))),
    }
}

/// Round half away from zero, saturating at the `i32` range.
///
/// `f64::round` lives in std; this stays no_std-friendly. NaN maps to 0,
/// matching the saturating float cast.
fn round_to_i32(value: f64) -> i32 {
    if value < 0.0 {
        (value - 0.5) as i32
    } else {
        (value + 0.5) as i32
    }
}
