use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaskError {
    #[error("invalid definition for '{letter}': {reason}")]
    InvalidDefinition { letter: char, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MaskError>;
