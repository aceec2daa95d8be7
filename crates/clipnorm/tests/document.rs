use clipnorm::{ConvertOptions, DocumentError, NormalizeOptions, SkippedShape, convert_document};

fn convert(svg: &str) -> clipnorm::ClipPathDocument {
    convert_document(svg, &ConvertOptions::default()).expect("convert")
}

/// `(id, d)` of every output path, read back from the rendered markup.
fn rendered_paths(markup: &str) -> Vec<(Option<String>, String)> {
    let doc = roxmltree::Document::parse(markup).expect("output must be well-formed");
    doc.descendants()
        .filter(|n| n.has_tag_name("path"))
        .map(|n| {
            (
                n.attribute("id").map(str::to_string),
                n.attribute("d").unwrap_or_default().to_string(),
            )
        })
        .collect()
}

#[test]
fn shapes_are_gathered_into_a_new_clip_path() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 200 100">
  <rect id="box" x="0" y="0" width="50" height="50"/>
  <circle cx="50" cy="50" r="25" clip-rule="evenodd"/>
  <path d="M10,10 L110,10 L110,60 L10,60 Z"/>
</svg>"#;
    let doc = convert(svg);
    assert_eq!(doc.clip_path_id(), Some("clip"));
    assert_eq!(doc.report().converted, 3);
    assert!(doc.report().skipped.is_empty());

    let markup = doc.to_svg_string();
    let parsed = roxmltree::Document::parse(&markup).unwrap();
    let root = parsed.root_element();
    assert!(root.has_tag_name(("http://www.w3.org/2000/svg", "svg")));
    assert_eq!(root.attribute("width"), None);
    assert_eq!(root.attribute("viewBox"), None);

    let clip = root.first_element_child().unwrap();
    assert!(clip.has_tag_name("clipPath"));
    assert_eq!(clip.attribute("clipPathUnits"), Some("objectBoundingBox"));
    assert_eq!(clip.attribute("id"), Some("clip"));
    assert_eq!(clip.next_sibling_element(), None);

    let paths = rendered_paths(&markup);
    assert_eq!(paths.len(), 3);
    assert_eq!(
        paths[0],
        (Some("box".to_string()), "M0,0 L1,0 L1,1 L0,1 Z".to_string())
    );
    assert!(paths[1].1.starts_with("M0,0.5 C"));
    assert_eq!(paths[2].1, "M0,0 L1,0 L1,1 L0,1 Z");

    let circle = clip.children().filter(|n| n.is_element()).nth(1).unwrap();
    assert_eq!(circle.attribute("clip-rule"), Some("evenodd"));
}

#[test]
fn only_the_first_existing_clip_path_is_converted() {
    let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <rect width="10" height="10"/>
  <defs>
    <clipPath id="mask" clipPathUnits="userSpaceOnUse" data-role="outline">
      <polygon points="0,0 10,0 5,10"/>
      <ellipse cx="0" cy="0" rx="4" ry="2"/>
    </clipPath>
    <clipPath id="other"><rect width="1" height="1"/></clipPath>
  </defs>
</svg>"#;
    let doc = convert(svg);
    assert_eq!(doc.clip_path_id(), Some("mask"));
    assert_eq!(
        doc.attributes(),
        &[
            ("id".to_string(), "mask".to_string()),
            (
                "clipPathUnits".to_string(),
                "objectBoundingBox".to_string()
            ),
            ("data-role".to_string(), "outline".to_string()),
        ]
    );
    assert_eq!(doc.paths().len(), 2);
    assert_eq!(doc.paths()[0].d, "M0,0 L1,0 L0.5,1 Z");
    assert!(doc.paths()[1].d.starts_with("M0,0.5 C"));
}

#[test]
fn configured_id_names_the_generated_clip_path() {
    let options = ConvertOptions {
        clip_path_id: "cutout".to_string(),
        ..ConvertOptions::default()
    };
    let doc = convert_document(r#"<svg><rect width="4" height="2"/></svg>"#, &options).unwrap();
    assert_eq!(
        doc.to_svg_string(),
        r#"<svg xmlns="http://www.w3.org/2000/svg"><clipPath id="cutout" clipPathUnits="objectBoundingBox"><path d="M0,0 L1,0 L1,1 L0,1 Z"/></clipPath></svg>"#
    );
}

#[test]
fn pretty_output_is_indented() {
    let options = ConvertOptions {
        pretty: true,
        ..ConvertOptions::default()
    };
    let doc = convert_document(r#"<svg><path d="M5,0 L5,100"/></svg>"#, &options).unwrap();
    assert_eq!(
        doc.to_svg_string(),
        "<svg xmlns=\"http://www.w3.org/2000/svg\">\n  \
<clipPath id=\"clip\" clipPathUnits=\"objectBoundingBox\">\n    \
<path d=\"M0.5,0 L0.5,1\"/>\n  \
</clipPath>\n\
</svg>\n"
    );
}

#[test]
fn bad_shapes_are_reported_without_failing_the_document() {
    let svg = r#"<svg>
  <text id="label">hello</text>
  <rect id="wide" width="50%" height="10"/>
  <path id="broken" d="M0 0 L10"/>
  <line x1="0" y1="0" x2="1" y2="1"/>
  <rect width="3" height="3"/>
</svg>"#;
    let doc = convert(svg);
    let report = doc.report();
    assert_eq!(report.converted, 1);
    assert_eq!(report.passthrough, 1);
    assert_eq!(
        report.skipped,
        vec![
            SkippedShape {
                tag: "text".to_string(),
                id: Some("label".to_string()),
                reason: "Unsupported shape element: <text>".to_string(),
            },
            SkippedShape {
                tag: "rect".to_string(),
                id: Some("wide".to_string()),
                reason: "Invalid `width` attribute on <rect>: \"50%\"".to_string(),
            },
            SkippedShape {
                tag: "line".to_string(),
                id: None,
                reason: "Unsupported shape element: <line>".to_string(),
            },
        ]
    );

    let paths = rendered_paths(&doc.to_svg_string());
    assert_eq!(
        paths,
        vec![
            (Some("broken".to_string()), "M0 0 L10".to_string()),
            (None, "M0,0 L1,0 L1,1 L0,1 Z".to_string()),
        ]
    );

    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["skipped"][2]["tag"], "line");
    assert!(json["skipped"][2].get("id").is_none());
}

#[test]
fn attribute_values_are_escaped() {
    let doc = convert(r#"<svg><rect id="a&amp;b&quot;" width="1" height="1"/></svg>"#);
    let markup = doc.to_svg_string();
    assert!(markup.contains(r#"id="a&amp;b&quot;""#), "{markup}");
    assert_eq!(rendered_paths(&markup)[0].0.as_deref(), Some("a&b\""));
}

#[test]
fn precision_is_applied_per_path() {
    let options = ConvertOptions {
        normalize: NormalizeOptions::with_precision(2),
        ..ConvertOptions::default()
    };
    let doc = convert_document(r#"<svg><polyline points="0 0 3 3 1 2"/></svg>"#, &options).unwrap();
    assert_eq!(doc.paths()[0].d, "M0,0 L1,1 L0.33,0.67");
}

#[test]
fn degenerate_shapes_collapse_to_the_center() {
    let doc = convert(r#"<svg><circle cx="5" cy="5"/><polygon points=""/></svg>"#);
    let ds: Vec<&str> = doc.paths().iter().map(|p| p.d.as_str()).collect();
    assert_eq!(ds, vec!["M0.5,0.5", "M0.5,0.5"]);
}

#[test]
fn shapes_with_title_or_animation_children_are_converted() {
    let doc = convert(r#"<svg><path d="M0 0 L10 10"><title>tip</title></path></svg>"#);
    assert_eq!(doc.paths().len(), 1);
    assert_eq!(doc.paths()[0].d, "M0,0 L1,1");

    let doc = convert(
        r#"<svg>
  <rect width="4" height="4"/>
  <circle id="pulse" cx="5" cy="5" r="3"><animate attributeName="r" to="4"/></circle>
</svg>"#,
    );
    assert_eq!(doc.paths().len(), 2);
    assert_eq!(doc.paths()[1].id.as_deref(), Some("pulse"));
    assert!(doc.paths()[1].d.starts_with("M0,0.5 C"));
    assert_eq!(doc.report().converted, 2);
    assert!(doc.report().skipped.is_empty());
}

#[test]
fn clip_path_children_with_descriptions_are_kept() {
    let svg = r#"<svg>
  <clipPath id="outline">
    <path d="M0 0 L4 0 L4 2 Z"><desc>outline</desc></path>
  </clipPath>
</svg>"#;
    let doc = convert(svg);
    assert_eq!(doc.clip_path_id(), Some("outline"));
    assert_eq!(doc.paths().len(), 1);
    assert_eq!(doc.paths()[0].d, "M0,0 L1,0 L1,1 Z");
}

#[test]
fn documents_with_a_doctype_are_accepted() {
    let svg = r#"<?xml version="1.0"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg"><rect width="2" height="2"/></svg>"#;
    assert_eq!(convert(svg).paths().len(), 1);
}

#[test]
fn document_level_failures() {
    let options = ConvertOptions::default();
    assert!(matches!(
        convert_document("<svg><rect></svg>", &options),
        Err(DocumentError::InvalidDocument { .. })
    ));
    assert!(matches!(
        convert_document("<html><rect width='1' height='1'/></html>", &options),
        Err(DocumentError::InvalidDocument { .. })
    ));
    assert_eq!(
        convert_document("<svg><g/><text>x</text></svg>", &options),
        Err(DocumentError::NoShapesFound)
    );
    assert_eq!(
        convert_document("<svg><title>only</title></svg>", &options),
        Err(DocumentError::NoShapesFound)
    );
}
