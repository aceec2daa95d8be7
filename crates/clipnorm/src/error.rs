#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DocumentError {
    #[error("Invalid SVG document: {message}")]
    InvalidDocument { message: String },

    #[error("No convertible shapes found")]
    NoShapesFound,
}

pub type Result<T> = std::result::Result<T, DocumentError>;
