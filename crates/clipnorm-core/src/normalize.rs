use crate::bounds::bounding_box;
use crate::geom::{BoundingBox, point};
use crate::options::NormalizeOptions;
use crate::segment::{PathSequence, Segment};
use crate::util::round_to;

/// Translate-then-scale map: `x' = (x + tx) * sx`, `y' = (y + ty) * sy`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub tx: f64,
    pub ty: f64,
    pub sx: f64,
    pub sy: f64,
}

impl Transform {
    pub fn apply_x(&self, x: f64) -> f64 {
        (x + self.tx) * self.sx
    }

    pub fn apply_y(&self, y: f64) -> f64 {
        (y + self.ty) * self.sy
    }

    pub fn apply(&self, segment: &Segment) -> Segment {
        segment.map_coords(|x| self.apply_x(x), |y| self.apply_y(y))
    }
}

/// Derives the map from `bbox` onto the unit square.
///
/// A zero-extent axis is not scaled; it is translated to `0.5` instead so the flat geometry sits
/// on the square's midline. Returns `None` when there is nothing to scale on either axis (no box,
/// or a single point).
pub fn transform_for(bbox: Option<&BoundingBox>) -> Option<Transform> {
    let bbox = bbox?;
    let width = bbox.width();
    let height = bbox.height();

    match (width == 0.0, height == 0.0) {
        (true, true) => None,
        (true, false) => Some(Transform {
            tx: 0.5 - bbox.min_x,
            ty: -bbox.min_y,
            sx: 1.0,
            sy: 1.0 / height,
        }),
        (false, true) => Some(Transform {
            tx: -bbox.min_x,
            ty: 0.5 - bbox.min_y,
            sx: 1.0 / width,
            sy: 1.0,
        }),
        (false, false) => Some(Transform {
            tx: -bbox.min_x,
            ty: -bbox.min_y,
            sx: 1.0 / width,
            sy: 1.0 / height,
        }),
    }
}

/// The path used for geometry that collapses to a point (or has no coordinates at all).
pub fn center_point_path() -> PathSequence {
    PathSequence::from(vec![Segment::MoveTo(point(0.5, 0.5))])
}

/// Rescales `path` into objectBoundingBox units (`[0,1]×[0,1]`).
///
/// Segment count and kinds are preserved, except for point-like geometry which becomes
/// [`center_point_path`]. Every output value is rounded to `options.precision` digits.
pub fn normalize(path: &PathSequence, options: &NormalizeOptions) -> PathSequence {
    let bbox = bounding_box(path);
    if bbox.as_ref().is_some_and(overflows) {
        // Halving is exact and the result is scale-invariant; the halved extent is finite.
        tracing::debug!(?bbox, "extent overflows f64, halving before normalizing");
        let halved: PathSequence = path
            .iter()
            .map(|seg| seg.map_coords(|x| x * 0.5, |y| y * 0.5))
            .collect();
        return normalize(&halved, options);
    }
    let Some(transform) = transform_for(bbox.as_ref()) else {
        tracing::debug!(?bbox, segments = path.len(), "point-like geometry, centering");
        return center_point_path();
    };
    tracing::trace!(?bbox, ?transform, "normalizing path");

    let precision = options.precision;
    path.iter()
        .map(|seg| {
            transform
                .apply(seg)
                .map_coords(|x| round_to(x, precision), |y| round_to(y, precision))
        })
        .collect()
}

/// Finite bounds whose width or height is not representable.
fn overflows(bbox: &BoundingBox) -> bool {
    let bounds_finite = [bbox.min_x, bbox.min_y, bbox.max_x, bbox.max_y]
        .iter()
        .all(|v| v.is_finite());
    bounds_finite && !(bbox.width().is_finite() && bbox.height().is_finite())
}
