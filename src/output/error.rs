use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatchError {
    #[error("character {character:?} on line {line} cannot be encoded as ISO-8859-1")]
    Unencodable { character: char, line: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
