use serde::Deserialize;

/// Decimal digits kept in normalized output.
pub const DEFAULT_PRECISION: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    pub precision: u32,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}

impl NormalizeOptions {
    pub fn with_precision(precision: u32) -> Self {
        Self { precision }
    }
}
