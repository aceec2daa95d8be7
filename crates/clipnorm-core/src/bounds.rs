use crate::geom::BoundingBox;
use crate::segment::{PathSequence, Segment};

/// Folds every coordinate a segment writes into an axis-aligned box.
///
/// Curves contribute their control points as well as their endpoints: the control polygon's hull
/// contains the curve, so the result may be looser than the tight curve extent but never smaller.
/// `H`/`V` only contribute the axis they move along.
///
/// Returns `None` when no coordinate-bearing segment was seen on both axes (an empty path, or a
/// path that is only `Z`).
pub fn bounding_box(path: &PathSequence) -> Option<BoundingBox> {
    let mut bbox = BoundingBox::empty();

    for seg in path {
        match *seg {
            Segment::MoveTo(p) | Segment::LineTo(p) | Segment::SmoothQuadraticCurve(p) => {
                bbox.include_point(p);
            }
            Segment::HorizontalLineTo(x) => bbox.include_x(x),
            Segment::VerticalLineTo(y) => bbox.include_y(y),
            Segment::CubicCurve { ctrl1, ctrl2, to } => {
                for p in [ctrl1, ctrl2, to] {
                    bbox.include_point(p);
                }
            }
            Segment::SmoothCubicCurve { ctrl2: ctrl, to } | Segment::QuadraticCurve { ctrl, to } => {
                bbox.include_point(ctrl);
                bbox.include_point(to);
            }
            Segment::ClosePath => {}
        }
    }

    if bbox.is_empty() { None } else { Some(bbox) }
}
