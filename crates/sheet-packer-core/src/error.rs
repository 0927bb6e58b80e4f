use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetPackerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid sheet width {0}: must be a positive finite number")]
    InvalidSheetWidth(f64),
    #[error("invalid spacing {0}: must be a non-negative finite number")]
    InvalidSpacing(f64),
    #[error("invalid design spec `{id}`: {reason}")]
    InvalidSpec { id: String, reason: String },
    #[error("encoding error: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, SheetPackerError>;
