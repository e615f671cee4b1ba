use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unable to extract \"{tag}\"")]
    MissingField { tag: &'static str },

    #[error("invalid value for \"{tag}\": {value}")]
    InvalidNumber { tag: &'static str, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
