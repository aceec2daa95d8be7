
use crate::geom::BoundingBox;
use crate::segment::{PathSequence, Segment};

pub(super) const EPS: f64 = 1e-9;

pub(super) fn assert_box_close(actual: Option<BoundingBox>, expected: BoundingBox) {
    let actual = actual.expect("expected a bounding box");
    let close = (actual.min_x - expected.min_x).abs() < EPS
        && (actual.min_y - expected.min_y).abs() < EPS
        && (actual.max_x - expected.max_x).abs() < EPS
        && (actual.max_y - expected.max_y).abs() < EPS;
    assert!(close, "{actual:?} != {expected:?}");
}

/// Every x and y value written by `path`, in order.
pub(super) fn coordinates(path: &PathSequence) -> (Vec<f64>, Vec<f64>) {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    for seg in path {
        match *seg {
            Segment::MoveTo(p) | Segment::LineTo(p) | Segment::SmoothQuadraticCurve(p) => {
                xs.push(p.x);
                ys.push(p.y);
            }
            Segment::HorizontalLineTo(x) => xs.push(x),
            Segment::VerticalLineTo(y) => ys.push(y),
            Segment::CubicCurve { ctrl1, ctrl2, to } => {
                for p in [ctrl1, ctrl2, to] {
                    xs.push(p.x);
                    ys.push(p.y);
                }
            }
            Segment::SmoothCubicCurve { ctrl2: ctrl, to } | Segment::QuadraticCurve { ctrl, to } => {
                for p in [ctrl, to] {
                    xs.push(p.x);
                    ys.push(p.y);
                }
            }
            Segment::ClosePath => {}
        }
    }
    (xs, ys)
}
