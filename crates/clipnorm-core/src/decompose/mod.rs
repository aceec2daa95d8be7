//! Raw path data to a canonical [`PathSequence`].
//!
//! The work is split into pure passes over a segment list:
//! 1. [`absolutize`] resolves relative coordinates against the running current point,
//! 2. [`expand_shorthand`] replaces `S`/`T` with explicit curves (reflected control points),
//! 3. [`expand_arcs`] replaces elliptical arcs with cubic Béziers.
//!
//! Tokenizing is delegated to `svgtypes::PathParser`, which also handles implicit command
//! repetition (`M 0 0 10 10` is a move-to followed by a line-to).

mod arc;

pub(crate) use arc::{EllipticalArc, arc_to_cubics};

use crate::error::{Error, Result};
use crate::geom::{Point, point};
use crate::segment::{Cursor, PathSequence, Segment};
use svgtypes::{PathParser, PathSegment};

/// An absolute segment that may still be an arc or carry an implicit control point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Step {
    Segment(Segment),
    Arc(EllipticalArc),
}

impl Step {
    fn advance(&self, cursor: &mut Cursor) {
        match self {
            Step::Segment(seg) => cursor.advance(seg),
            Step::Arc(arc) => cursor.current = arc.to,
        }
    }
}

/// Parses `d` into absolute, unshortened segments with arcs expanded to cubic curves.
///
/// Empty (or whitespace-only) input yields an empty sequence.
pub fn decompose(d: &str) -> Result<PathSequence> {
    let parsed = tokenize(d)?;
    let steps = expand_shorthand(absolutize(&parsed));
    Ok(expand_arcs(&steps))
}

fn tokenize(d: &str) -> Result<Vec<PathSegment>> {
    let mut out = Vec::new();
    for (idx, seg) in PathParser::from(d).enumerate() {
        let seg = seg.map_err(|err| Error::MalformedPathData {
            message: err.to_string(),
        })?;
        if idx == 0 && !matches!(seg, PathSegment::MoveTo { .. }) {
            return Err(Error::MalformedPathData {
                message: "path data must begin with a move-to command".to_string(),
            });
        }
        out.push(seg);
    }
    Ok(out)
}

pub(crate) fn absolutize(parsed: &[PathSegment]) -> Vec<Step> {
    let mut cursor = Cursor::default();
    let mut out = Vec::with_capacity(parsed.len());

    for seg in parsed {
        let base = cursor.current;
        let at = |abs: bool, x: f64, y: f64| -> Point {
            if abs {
                point(x, y)
            } else {
                point(base.x + x, base.y + y)
            }
        };

        let step = match *seg {
            PathSegment::MoveTo { abs, x, y } => Step::Segment(Segment::MoveTo(at(abs, x, y))),
            PathSegment::LineTo { abs, x, y } => Step::Segment(Segment::LineTo(at(abs, x, y))),
            PathSegment::HorizontalLineTo { abs, x } => {
                Step::Segment(Segment::HorizontalLineTo(if abs { x } else { base.x + x }))
            }
            PathSegment::VerticalLineTo { abs, y } => {
                Step::Segment(Segment::VerticalLineTo(if abs { y } else { base.y + y }))
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => Step::Segment(Segment::CubicCurve {
                ctrl1: at(abs, x1, y1),
                ctrl2: at(abs, x2, y2),
                to: at(abs, x, y),
            }),
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                Step::Segment(Segment::SmoothCubicCurve {
                    ctrl2: at(abs, x2, y2),
                    to: at(abs, x, y),
                })
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                Step::Segment(Segment::QuadraticCurve {
                    ctrl: at(abs, x1, y1),
                    to: at(abs, x, y),
                })
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                Step::Segment(Segment::SmoothQuadraticCurve(at(abs, x, y)))
            }
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => Step::Arc(EllipticalArc {
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                to: at(abs, x, y),
            }),
            PathSegment::ClosePath { .. } => Step::Segment(Segment::ClosePath),
        };

        step.advance(&mut cursor);
        out.push(step);
    }

    out
}

/// The last control point of the previous step, by curve family.
#[derive(Debug, Clone, Copy)]
enum LastControl {
    None,
    Cubic(Point),
    Quadratic(Point),
}

fn reflect(ctrl: Point, about: Point) -> Point {
    point(2.0 * about.x - ctrl.x, 2.0 * about.y - ctrl.y)
}

pub(crate) fn expand_shorthand(steps: Vec<Step>) -> Vec<Step> {
    let mut cursor = Cursor::default();
    let mut last = LastControl::None;
    let mut out = Vec::with_capacity(steps.len());

    for step in steps {
        let current = cursor.current;
        let (step, next_last) = match step {
            Step::Segment(Segment::SmoothCubicCurve { ctrl2, to }) => {
                let ctrl1 = match last {
                    LastControl::Cubic(prev) => reflect(prev, current),
                    _ => current,
                };
                (
                    Step::Segment(Segment::CubicCurve { ctrl1, ctrl2, to }),
                    LastControl::Cubic(ctrl2),
                )
            }
            Step::Segment(Segment::SmoothQuadraticCurve(to)) => {
                let ctrl = match last {
                    LastControl::Quadratic(prev) => reflect(prev, current),
                    _ => current,
                };
                (
                    Step::Segment(Segment::QuadraticCurve { ctrl, to }),
                    LastControl::Quadratic(ctrl),
                )
            }
            Step::Segment(Segment::CubicCurve { ctrl2, .. }) => (step, LastControl::Cubic(ctrl2)),
            Step::Segment(Segment::QuadraticCurve { ctrl, .. }) => {
                (step, LastControl::Quadratic(ctrl))
            }
            other => (other, LastControl::None),
        };

        step.advance(&mut cursor);
        last = next_last;
        out.push(step);
    }

    out
}

pub(crate) fn expand_arcs(steps: &[Step]) -> PathSequence {
    let mut cursor = Cursor::default();
    let mut out = PathSequence::new();

    for step in steps {
        match step {
            Step::Segment(seg) => out.push(*seg),
            Step::Arc(arc) => {
                for seg in arc_to_cubics(cursor.current, arc) {
                    out.push(seg);
                }
            }
        }
        step.advance(&mut cursor);
    }

    out
}
