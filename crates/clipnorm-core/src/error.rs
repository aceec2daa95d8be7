pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Malformed path data: {message}")]
    MalformedPathData { message: String },

    #[error("Unsupported shape element: <{tag}>")]
    UnsupportedShapeKind { tag: String },

    #[error("Invalid `{name}` attribute on <{tag}>: {value:?}")]
    InvalidAttribute {
        tag: String,
        name: String,
        value: String,
    },
}

