#![forbid(unsafe_code)]

//! `clipnorm` turns SVG shapes into a `<clipPath clipPathUnits="objectBoundingBox">` document.
//!
//! The geometry engine lives in `clipnorm-core` and is re-exported here; this crate adds the
//! document layer: reading an SVG with `roxmltree`, picking the shapes to convert, and writing
//! the resulting clipPath markup.
//!
//! ```
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="50" height="50"/></svg>"#;
//! let doc = clipnorm::convert_document(svg, &clipnorm::ConvertOptions::default()).unwrap();
//! assert_eq!(doc.paths()[0].d, "M0,0 L1,0 L1,1 L0,1 Z");
//! ```

pub use clipnorm_core::*;

pub mod document;
pub mod error;
mod markup;
pub mod options;
pub mod report;

pub use document::{ClipPathDocument, ClipPathEntry, ElementAttributes, convert_document};
pub use error::DocumentError;
pub use options::ConvertOptions;
pub use report::{ConversionReport, SkippedShape};
