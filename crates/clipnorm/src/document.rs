//! SVG documents in, clipPath documents out.
//!
//! The source document is only read; the output is always a fresh
//! `<svg xmlns="http://www.w3.org/2000/svg">` whose single child is the clipPath.

use crate::error::{DocumentError, Result};
use crate::markup::{MarkupWriter, SVG_NAMESPACE};
use crate::options::ConvertOptions;
use crate::report::{ConversionReport, SkippedShape};
use clipnorm_core::{
    NormalizeOptions, ShapeAttributes, ShapeKind, normalize_path_data, shape_to_path_data,
};
use roxmltree::{Document, Node, ParsingOptions};

const OBJECT_BOUNDING_BOX: &str = "objectBoundingBox";

/// Elements (and their subtrees) that never describe geometry.
const NON_GRAPHICAL: &[&str] = &["title", "desc", "metadata", "style", "script", "stop"];

/// A parsed element seen through the [`ShapeAttributes`] seam.
///
/// Only attributes without a namespace are visible, so `xlink:href` never shadows `href`.
#[derive(Debug, Clone, Copy)]
pub struct ElementAttributes<'a, 'input>(pub Node<'a, 'input>);

impl ShapeAttributes for ElementAttributes<'_, '_> {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.0.attribute(name)
    }
}

/// One `<path>` of the output clipPath.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipPathEntry {
    pub d: String,
    pub id: Option<String>,
    pub clip_rule: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClipPathDocument {
    attributes: Vec<(String, String)>,
    paths: Vec<ClipPathEntry>,
    report: ConversionReport,
    pretty: bool,
}

impl ClipPathDocument {
    /// Attributes of the `<clipPath>` element, in output order.
    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn clip_path_id(&self) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(name, _)| name == "id")
            .map(|(_, value)| value.as_str())
    }

    pub fn paths(&self) -> &[ClipPathEntry] {
        &self.paths
    }

    pub fn report(&self) -> &ConversionReport {
        &self.report
    }

    /// Renders the document; pretty output is indented by two spaces and ends with a newline.
    pub fn to_svg_string(&self) -> String {
        let mut w = MarkupWriter::new(self.pretty);
        w.open("svg", [("xmlns", SVG_NAMESPACE)]);
        w.open(
            "clipPath",
            self.attributes
                .iter()
                .map(|(name, value)| (name.as_str(), value.as_str())),
        );
        for path in &self.paths {
            let attrs = [
                ("id", path.id.as_deref()),
                ("d", Some(path.d.as_str())),
                ("clip-rule", path.clip_rule.as_deref()),
            ];
            w.empty(
                "path",
                attrs
                    .into_iter()
                    .filter_map(|(name, value)| value.map(|value| (name, value))),
            );
        }
        w.close("clipPath");
        w.close("svg");
        w.finish()
    }
}

/// Converts every shape of `svg` into normalized path data inside one clipPath.
///
/// If the document already contains a `<clipPath>`, only the shapes below the first one are
/// converted and its attributes are carried over; otherwise every shape in the document is
/// gathered into a new clipPath named by `options.clip_path_id`.
///
/// Shapes that cannot be converted are skipped (or, for unparsable path data, passed through
/// unchanged) and recorded in the [`ConversionReport`]; they never fail the whole document.
pub fn convert_document(svg: &str, options: &ConvertOptions) -> Result<ClipPathDocument> {
    let parsing = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(svg, parsing).map_err(|err| {
        DocumentError::InvalidDocument {
            message: err.to_string(),
        }
    })?;

    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(DocumentError::InvalidDocument {
            message: format!(
                "expected an <svg> root element, found <{}>",
                root.tag_name().name()
            ),
        });
    }

    let source_clip = root
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "clipPath");
    let (scope, attributes) = match source_clip {
        Some(clip) => (clip, clip_path_attributes(clip, &options.clip_path_id)),
        None => (
            root,
            vec![
                ("id".to_string(), options.clip_path_id.clone()),
                ("clipPathUnits".to_string(), OBJECT_BOUNDING_BOX.to_string()),
            ],
        ),
    };
    tracing::debug!(
        existing_clip_path = source_clip.is_some(),
        "converting svg document"
    );

    let mut report = ConversionReport::default();
    let paths: Vec<ClipPathEntry> = scope
        .descendants()
        .skip(1)
        .filter(is_candidate)
        .filter_map(|node| convert_shape(node, &options.normalize, &mut report))
        .collect();

    tracing::debug!(
        converted = report.converted,
        passthrough = report.passthrough,
        skipped = report.skipped.len(),
        "svg document converted"
    );
    if paths.is_empty() {
        return Err(DocumentError::NoShapesFound);
    }

    Ok(ClipPathDocument {
        attributes,
        paths,
        report,
        pretty: options.pretty,
    })
}

/// Supported shapes are candidates whatever their children (`<title>`, `<animate>`, ...);
/// other elements only as leaves, so they can be reported as skipped. Nothing below a shape or
/// inside non-graphical content is a candidate.
fn is_candidate(node: &Node<'_, '_>) -> bool {
    if !node.is_element() || !is_svg_element(node) {
        return false;
    }
    let non_graphical = node
        .ancestors()
        .any(|n| n.is_element() && NON_GRAPHICAL.contains(&n.tag_name().name()));
    let inside_shape = node
        .ancestors()
        .skip(1)
        .any(|n| n.is_element() && is_shape(&n));
    if non_graphical || inside_shape {
        return false;
    }
    is_shape(node) || !node.children().any(|child| child.is_element())
}

fn is_svg_element(node: &Node<'_, '_>) -> bool {
    node.tag_name()
        .namespace()
        .is_none_or(|ns| ns == SVG_NAMESPACE)
}

fn is_shape(node: &Node<'_, '_>) -> bool {
    is_svg_element(node) && ShapeKind::from_tag(node.tag_name().name()).is_some()
}

fn convert_shape(
    node: Node<'_, '_>,
    options: &NormalizeOptions,
    report: &mut ConversionReport,
) -> Option<ClipPathEntry> {
    let tag = node.tag_name().name();
    let id = node.attribute("id");

    let d = match shape_to_path_data(tag, &ElementAttributes(node)) {
        Ok(d) => d,
        Err(err) => {
            tracing::warn!(tag, id, error = %err, "skipping shape");
            report.skipped.push(SkippedShape {
                tag: tag.to_string(),
                id: id.map(str::to_string),
                reason: err.to_string(),
            });
            return None;
        }
    };

    let d = match normalize_path_data(&d, options) {
        Ok(normalized) => {
            report.converted += 1;
            normalized
        }
        Err(err) => {
            tracing::warn!(tag, id, error = %err, "keeping original path data");
            report.passthrough += 1;
            d
        }
    };

    Some(ClipPathEntry {
        d,
        id: id.map(str::to_string),
        clip_rule: node.attribute("clip-rule").map(str::to_string),
    })
}

fn clip_path_attributes(clip: Node<'_, '_>, fallback_id: &str) -> Vec<(String, String)> {
    let mut attrs: Vec<(String, String)> = clip
        .attributes()
        .filter(|attr| attr.namespace().is_none())
        .map(|attr| (attr.name().to_string(), attr.value().to_string()))
        .collect();

    if !attrs.iter().any(|(name, _)| name == "id") {
        attrs.insert(0, ("id".to_string(), fallback_id.to_string()));
    }
    match attrs.iter_mut().find(|(name, _)| name == "clipPathUnits") {
        Some((_, value)) => *value = OBJECT_BOUNDING_BOX.to_string(),
        None => attrs.push(("clipPathUnits".to_string(), OBJECT_BOUNDING_BOX.to_string())),
    }
    attrs
}
