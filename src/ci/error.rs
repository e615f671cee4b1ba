use thiserror::Error;

#[derive(Debug, Error)]
pub enum CiError {
    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("revision control tool failed: {0}")]
    Tool(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
