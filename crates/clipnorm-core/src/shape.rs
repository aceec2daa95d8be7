//! Basic SVG shapes as path data.

use crate::error::{Error, Result};
use crate::util::push_pair;
use std::collections::{BTreeMap, HashMap};

/// Read access to an element's attributes, by local name.
pub trait ShapeAttributes {
    fn attribute(&self, name: &str) -> Option<&str>;
}

impl<S: std::hash::BuildHasher> ShapeAttributes for HashMap<String, String, S> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ShapeAttributes for BTreeMap<String, String> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl ShapeAttributes for [(&str, &str)] {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
    }
}

impl<const N: usize> ShapeAttributes for [(&str, &str); N] {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.as_slice().attribute(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Path,
    Rect,
    Circle,
    Ellipse,
    Polygon,
    Polyline,
}

impl ShapeKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "path" => Self::Path,
            "rect" => Self::Rect,
            "circle" => Self::Circle,
            "ellipse" => Self::Ellipse,
            "polygon" => Self::Polygon,
            "polyline" => Self::Polyline,
            _ => return None,
        })
    }

    pub fn tag(self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Rect => "rect",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Polygon => "polygon",
            Self::Polyline => "polyline",
        }
    }
}

/// Converts one shape element into equivalent path data.
///
/// `path` passes its `d` through untouched (missing `d` is empty path data). Missing numeric
/// attributes default to `0`; present but unparsable ones are an [`Error::InvalidAttribute`].
pub fn shape_to_path_data<A>(tag: &str, attrs: &A) -> Result<String>
where
    A: ShapeAttributes + ?Sized,
{
    let Some(kind) = ShapeKind::from_tag(tag) else {
        return Err(Error::UnsupportedShapeKind {
            tag: tag.to_string(),
        });
    };

    let num = |name: &str| number_attribute(tag, attrs, name);
    match kind {
        ShapeKind::Path => Ok(attrs.attribute("d").unwrap_or_default().to_string()),
        ShapeKind::Rect => Ok(rect_path_data(
            num("x")?,
            num("y")?,
            num("width")?,
            num("height")?,
        )),
        ShapeKind::Circle => {
            let r = num("r")?;
            Ok(ellipse_path_data(num("cx")?, num("cy")?, r, r))
        }
        ShapeKind::Ellipse => Ok(ellipse_path_data(
            num("cx")?,
            num("cy")?,
            num("rx")?,
            num("ry")?,
        )),
        ShapeKind::Polygon | ShapeKind::Polyline => {
            let points = parse_points(tag, attrs.attribute("points").unwrap_or_default())?;
            Ok(points_path_data(&points, kind == ShapeKind::Polygon))
        }
    }
}

fn number_attribute<A>(tag: &str, attrs: &A, name: &str) -> Result<f64>
where
    A: ShapeAttributes + ?Sized,
{
    let Some(raw) = attrs.attribute(name) else {
        return Ok(0.0);
    };
    parse_number(raw).ok_or_else(|| Error::InvalidAttribute {
        tag: tag.to_string(),
        name: name.to_string(),
        value: raw.to_string(),
    })
}

fn parse_number(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Splits a `points` list on whitespace and commas into coordinate pairs.
///
/// A trailing unpaired number is dropped.
fn parse_points(tag: &str, raw: &str) -> Result<Vec<(f64, f64)>> {
    let mut nums = Vec::new();
    for token in raw
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let v = parse_number(token).ok_or_else(|| Error::InvalidAttribute {
            tag: tag.to_string(),
            name: "points".to_string(),
            value: raw.to_string(),
        })?;
        nums.push(v);
    }
    Ok(nums.chunks_exact(2).map(|c| (c[0], c[1])).collect())
}

pub fn rect_path_data(x: f64, y: f64, width: f64, height: f64) -> String {
    let corners = [
        (x, y),
        (x + width, y),
        (x + width, y + height),
        (x, y + height),
    ];
    points_path_data(&corners, true)
}

/// A closed ellipse as two half-turn arcs: a single arc command cannot describe a full ellipse.
pub fn ellipse_path_data(cx: f64, cy: f64, rx: f64, ry: f64) -> String {
    let mut out = String::with_capacity(64);
    let mut buf = ryu_js::Buffer::new();

    out.push('M');
    push_pair(&mut out, &mut buf, cx - rx, cy);
    for x in [cx + rx, cx - rx] {
        out.push_str(" A");
        push_pair(&mut out, &mut buf, rx, ry);
        out.push_str(" 0 1,0 ");
        push_pair(&mut out, &mut buf, x, cy);
    }
    out.push_str(" Z");
    out
}

pub fn points_path_data(points: &[(f64, f64)], close: bool) -> String {
    let mut out = String::with_capacity(points.len() * 12 + 2);
    let mut buf = ryu_js::Buffer::new();
    for (idx, &(x, y)) in points.iter().enumerate() {
        if idx != 0 {
            out.push(' ');
        }
        out.push(if idx == 0 { 'M' } else { 'L' });
        push_pair(&mut out, &mut buf, x, y);
    }
    if close && !points.is_empty() {
        out.push_str(" Z");
    }
    out
}
