#![forbid(unsafe_code)]

//! SVG path normalization engine (headless).
//!
//! Turns basic SVG shapes and raw path data into path data expressed in `objectBoundingBox`
//! units, i.e. rescaled into the unit square, ready to be used inside
//! `<clipPath clipPathUnits="objectBoundingBox">`.
//!
//! The pipeline is: [`shape_to_path_data`] → [`decompose`] → [`bounding_box`] → [`normalize`]
//! → [`serialize`]. Every stage is a pure function; nothing here performs I/O.

pub mod bounds;
pub mod decompose;
pub mod error;
pub mod geom;
pub mod normalize;
pub mod options;
pub mod segment;
pub mod serialize;
pub mod shape;
pub mod util;

pub use bounds::bounding_box;
pub use decompose::decompose;
pub use error::{Error, Result};
pub use geom::BoundingBox;
pub use normalize::{Transform, center_point_path, normalize, transform_for};
pub use options::{DEFAULT_PRECISION, NormalizeOptions};
pub use segment::{Cursor, PathSequence, Segment};
pub use serialize::serialize;
pub use shape::{ShapeAttributes, ShapeKind, shape_to_path_data};

/// Decomposes, normalizes and re-serializes one path's data.
pub fn normalize_path_data(d: &str, options: &NormalizeOptions) -> Result<String> {
    let path = decompose(d)?;
    let normalized = normalize(&path, options);
    Ok(serialize(&normalized, options.precision))
}

/// Converts one shape element and normalizes the resulting path data.
pub fn normalize_shape<A>(tag: &str, attrs: &A, options: &NormalizeOptions) -> Result<String>
where
    A: ShapeAttributes + ?Sized,
{
    let d = shape_to_path_data(tag, attrs)?;
    normalize_path_data(&d, options)
}

#[cfg(test)]
mod tests;
