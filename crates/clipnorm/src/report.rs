use serde::Serialize;

/// What happened to each candidate element during a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionReport {
    /// Shapes emitted with normalized path data.
    pub converted: usize,
    /// Paths emitted with their original `d` because it could not be parsed.
    pub passthrough: usize,
    pub skipped: Vec<SkippedShape>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedShape {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub reason: String,
}

impl ConversionReport {
    /// Number of `<path>` elements in the output.
    pub fn emitted(&self) -> usize {
        self.converted + self.passthrough
    }
}
