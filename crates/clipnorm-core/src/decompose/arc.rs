use crate::geom::{Point, Vector, point, vector};
use crate::segment::Segment;
use std::f64::consts::{FRAC_PI_2, PI};

/// An absolute SVG elliptical arc, starting at the current point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct EllipticalArc {
    pub(crate) rx: f64,
    pub(crate) ry: f64,
    pub(crate) x_axis_rotation: f64,
    pub(crate) large_arc: bool,
    pub(crate) sweep: bool,
    pub(crate) to: Point,
}

fn signed_angle(u: Vector, v: Vector) -> f64 {
    u.cross(v).atan2(u.dot(v))
}

/// Expands an arc into cubic Béziers spanning at most 90 degrees each.
///
/// Follows the SVG endpoint-to-center conversion
/// (https://www.w3.org/TR/SVG/implnote.html#ArcImplementationNotes): identical endpoints drop the
/// arc, a zero radius degrades to a straight line, and radii too small to reach the endpoint are
/// scaled up. The final curve ends exactly on `arc.to`.
pub(crate) fn arc_to_cubics(from: Point, arc: &EllipticalArc) -> Vec<Segment> {
    let to = arc.to;
    if from == to {
        return Vec::new();
    }

    let mut rx = arc.rx.abs();
    let mut ry = arc.ry.abs();
    if rx == 0.0 || ry == 0.0 {
        return vec![Segment::LineTo(to)];
    }

    let (sin_phi, cos_phi) = arc.x_axis_rotation.to_radians().sin_cos();

    let half = (from - to) / 2.0;
    let x1p = cos_phi * half.x + sin_phi * half.y;
    let y1p = -sin_phi * half.x + cos_phi * half.y;
    let x1p2 = x1p * x1p;
    let y1p2 = y1p * y1p;

    let lambda = x1p2 / (rx * rx) + y1p2 / (ry * ry);
    if lambda > 1.0 {
        let s = lambda.sqrt();
        rx *= s;
        ry *= s;
    }

    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let num = rx2 * ry2 - rx2 * y1p2 - ry2 * x1p2;
    let den = rx2 * y1p2 + ry2 * x1p2;
    let coef = if den == 0.0 {
        0.0
    } else {
        let sign = if arc.large_arc == arc.sweep { -1.0 } else { 1.0 };
        sign * (num / den).max(0.0).sqrt()
    };
    let cxp = coef * rx * y1p / ry;
    let cyp = -coef * ry * x1p / rx;

    let mid = from.lerp(to, 0.5);
    let center = point(
        cos_phi * cxp - sin_phi * cyp + mid.x,
        sin_phi * cxp + cos_phi * cyp + mid.y,
    );

    let u = vector((x1p - cxp) / rx, (y1p - cyp) / ry);
    let v = vector((-x1p - cxp) / rx, (-y1p - cyp) / ry);
    let start_angle = signed_angle(vector(1.0, 0.0), u);
    let mut sweep_angle = signed_angle(u, v);
    if !arc.sweep && sweep_angle > 0.0 {
        sweep_angle -= 2.0 * PI;
    } else if arc.sweep && sweep_angle < 0.0 {
        sweep_angle += 2.0 * PI;
    }

    // The epsilon keeps an exact half turn at two pieces despite atan2 rounding.
    let pieces = (sweep_angle.abs() / FRAC_PI_2 - 1e-9).ceil().max(1.0) as usize;
    let delta = sweep_angle / pieces as f64;

    let on_ellipse = |ux: f64, uy: f64| -> Point {
        let x = rx * ux;
        let y = ry * uy;
        point(
            center.x + cos_phi * x - sin_phi * y,
            center.y + sin_phi * x + cos_phi * y,
        )
    };

    let mut out = Vec::with_capacity(pieces);
    let mut t1 = start_angle;
    for idx in 0..pieces {
        let t2 = t1 + delta;
        let k = (4.0 / 3.0) * (delta / 4.0).tan();
        let (s1, c1) = t1.sin_cos();
        let (s2, c2) = t2.sin_cos();

        let ctrl1 = on_ellipse(c1 - k * s1, s1 + k * c1);
        let ctrl2 = on_ellipse(c2 + k * s2, s2 - k * c2);
        let end = if idx + 1 == pieces {
            to
        } else {
            on_ellipse(c2, s2)
        };
        out.push(Segment::CubicCurve {
            ctrl1,
            ctrl2,
            to: end,
        });
        t1 = t2;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arc(rx: f64, ry: f64, large_arc: bool, sweep: bool, to: Point) -> EllipticalArc {
        EllipticalArc {
            rx,
            ry,
            x_axis_rotation: 0.0,
            large_arc,
            sweep,
            to,
        }
    }

    fn assert_close(a: Point, b: Point) {
        assert!(
            (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9,
            "{a:?} != {b:?}"
        );
    }

    #[test]
    fn half_circle_is_two_quarter_curves() {
        let out = arc_to_cubics(
            point(-10.0, 0.0),
            &arc(10.0, 10.0, true, false, point(10.0, 0.0)),
        );
        assert_eq!(out.len(), 2);
        let Segment::CubicCurve { ctrl1, to, .. } = out[0] else {
            panic!("expected cubic, got {:?}", out[0]);
        };
        // sweep=0 from the left goes through the bottom (+y) of the circle.
        assert_close(to, point(0.0, 10.0));
        assert_close(ctrl1, point(-10.0, 10.0 * 0.552_284_749_830_793_4));
    }

    #[test]
    fn sweep_flag_picks_the_other_side() {
        let out = arc_to_cubics(
            point(-10.0, 0.0),
            &arc(10.0, 10.0, true, true, point(10.0, 0.0)),
        );
        let Segment::CubicCurve { to, .. } = out[0] else {
            panic!("expected cubic");
        };
        assert_close(to, point(0.0, -10.0));
    }

    #[test]
    fn large_arc_flag_selects_the_long_way_round() {
        let from = point(10.0, 0.0);
        let small = arc_to_cubics(from, &arc(10.0, 10.0, false, true, point(0.0, 10.0)));
        let large = arc_to_cubics(from, &arc(10.0, 10.0, true, true, point(0.0, 10.0)));
        assert_eq!(small.len(), 1);
        assert_eq!(large.len(), 3);
    }

    #[test]
    fn undersized_radii_are_scaled_to_reach_the_endpoint() {
        let out = arc_to_cubics(
            point(0.0, 0.0),
            &arc(1.0, 1.0, false, true, point(20.0, 0.0)),
        );
        assert_eq!(out.len(), 2);
        let Segment::CubicCurve { to, .. } = out[0] else {
            panic!("expected cubic");
        };
        assert_close(to, point(10.0, -10.0));
    }

    #[test]
    fn degenerate_arcs() {
        let same = point(3.0, 3.0);
        assert!(arc_to_cubics(same, &arc(5.0, 5.0, false, false, same)).is_empty());
        let flat = arc(0.0, 5.0, false, false, point(4.0, 2.0));
        assert_eq!(
            arc_to_cubics(point(0.0, 0.0), &flat),
            vec![Segment::LineTo(point(4.0, 2.0))]
        );
    }
}
