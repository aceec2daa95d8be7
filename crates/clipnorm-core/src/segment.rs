use crate::geom::{Point, point};

/// One absolute path command.
///
/// Elliptical arcs never appear here: the decomposer expands them into cubic curves before a
/// [`PathSequence`] is built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    MoveTo(Point),
    LineTo(Point),
    HorizontalLineTo(f64),
    VerticalLineTo(f64),
    CubicCurve {
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    },
    SmoothCubicCurve {
        ctrl2: Point,
        to: Point,
    },
    QuadraticCurve {
        ctrl: Point,
        to: Point,
    },
    SmoothQuadraticCurve(Point),
    ClosePath,
}

impl Segment {
    /// The absolute SVG command letter for this segment.
    pub fn command(&self) -> char {
        match self {
            Segment::MoveTo(_) => 'M',
            Segment::LineTo(_) => 'L',
            Segment::HorizontalLineTo(_) => 'H',
            Segment::VerticalLineTo(_) => 'V',
            Segment::CubicCurve { .. } => 'C',
            Segment::SmoothCubicCurve { .. } => 'S',
            Segment::QuadraticCurve { .. } => 'Q',
            Segment::SmoothQuadraticCurve(_) => 'T',
            Segment::ClosePath => 'Z',
        }
    }

    /// Rewrites every coordinate, x values through `fx` and y values through `fy`.
    ///
    /// The segment kind never changes.
    pub fn map_coords(&self, fx: impl Fn(f64) -> f64, fy: impl Fn(f64) -> f64) -> Segment {
        let p = |q: Point| point(fx(q.x), fy(q.y));
        match *self {
            Segment::MoveTo(to) => Segment::MoveTo(p(to)),
            Segment::LineTo(to) => Segment::LineTo(p(to)),
            Segment::HorizontalLineTo(x) => Segment::HorizontalLineTo(fx(x)),
            Segment::VerticalLineTo(y) => Segment::VerticalLineTo(fy(y)),
            Segment::CubicCurve { ctrl1, ctrl2, to } => Segment::CubicCurve {
                ctrl1: p(ctrl1),
                ctrl2: p(ctrl2),
                to: p(to),
            },
            Segment::SmoothCubicCurve { ctrl2, to } => Segment::SmoothCubicCurve {
                ctrl2: p(ctrl2),
                to: p(to),
            },
            Segment::QuadraticCurve { ctrl, to } => Segment::QuadraticCurve {
                ctrl: p(ctrl),
                to: p(to),
            },
            Segment::SmoothQuadraticCurve(to) => Segment::SmoothQuadraticCurve(p(to)),
            Segment::ClosePath => Segment::ClosePath,
        }
    }
}

/// The geometry of one `<path>`, in draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathSequence {
    segments: Vec<Segment>,
}

impl PathSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn as_slice(&self) -> &[Segment] {
        &self.segments
    }

    /// Command letters in order; unchanged by normalization.
    pub fn commands(&self) -> String {
        self.segments.iter().map(Segment::command).collect()
    }
}

impl From<Vec<Segment>> for PathSequence {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl FromIterator<Segment> for PathSequence {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for PathSequence {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a PathSequence {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// The current point threaded through a segment walk.
///
/// After `advance(seg)` the cursor sits on the last coordinate `seg` wrote; `ClosePath` returns it
/// to the start of the current subpath.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub current: Point,
    pub subpath_start: Point,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            current: point(0.0, 0.0),
            subpath_start: point(0.0, 0.0),
        }
    }
}

impl Cursor {
    pub fn advance(&mut self, segment: &Segment) {
        match *segment {
            Segment::MoveTo(to) => {
                self.current = to;
                self.subpath_start = to;
            }
            Segment::LineTo(to)
            | Segment::SmoothQuadraticCurve(to)
            | Segment::CubicCurve { to, .. }
            | Segment::SmoothCubicCurve { to, .. }
            | Segment::QuadraticCurve { to, .. } => self.current = to,
            Segment::HorizontalLineTo(x) => self.current.x = x,
            Segment::VerticalLineTo(y) => self.current.y = y,
            Segment::ClosePath => self.current = self.subpath_start,
        }
    }
}
