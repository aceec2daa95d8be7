use clipnorm_core::NormalizeOptions;
use serde::Deserialize;

/// Id given to the generated `<clipPath>` when the source document has none.
pub const DEFAULT_CLIP_PATH_ID: &str = "clip";

/// Options for [`convert_document`](crate::convert_document).
///
/// Deserializes from a flat camelCase JSON object where every key is optional:
/// `{"precision": 4, "clipPathId": "mask", "pretty": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    #[serde(flatten)]
    pub normalize: NormalizeOptions,
    pub clip_path_id: String,
    pub pretty: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            normalize: NormalizeOptions::default(),
            clip_path_id: DEFAULT_CLIP_PATH_ID.to_string(),
            pretty: false,
        }
    }
}
