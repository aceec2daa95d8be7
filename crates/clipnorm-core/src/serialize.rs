use crate::geom::Point;
use crate::segment::{PathSequence, Segment};
use crate::util::{push_number, push_pair, round_to};

/// Renders `path` as absolute path data, e.g. `M0,0 L1,0 L1,1 L0,1 Z`.
///
/// Each segment is its command letter followed by comma-joined coordinate pairs separated by
/// spaces; segments are separated by a single space. Values are rounded to `precision` digits.
pub fn serialize(path: &PathSequence, precision: u32) -> String {
    let mut out = String::with_capacity(path.len() * 16);
    let mut buf = ryu_js::Buffer::new();

    for (idx, seg) in path.iter().enumerate() {
        if idx != 0 {
            out.push(' ');
        }
        out.push(seg.command());

        match *seg {
            Segment::MoveTo(p) | Segment::LineTo(p) | Segment::SmoothQuadraticCurve(p) => {
                push_points(&mut out, &mut buf, &[p], precision);
            }
            Segment::HorizontalLineTo(v) | Segment::VerticalLineTo(v) => {
                push_number(&mut out, &mut buf, round_to(v, precision));
            }
            Segment::CubicCurve { ctrl1, ctrl2, to } => {
                push_points(&mut out, &mut buf, &[ctrl1, ctrl2, to], precision);
            }
            Segment::SmoothCubicCurve { ctrl2: ctrl, to } | Segment::QuadraticCurve { ctrl, to } => {
                push_points(&mut out, &mut buf, &[ctrl, to], precision);
            }
            Segment::ClosePath => {}
        }
    }

    out
}

fn push_points(out: &mut String, buf: &mut ryu_js::Buffer, points: &[Point], precision: u32) {
    for (idx, p) in points.iter().enumerate() {
        if idx != 0 {
            out.push(' ');
        }
        push_pair(
            out,
            buf,
            round_to(p.x, precision),
            round_to(p.y, precision),
        );
    }
}
