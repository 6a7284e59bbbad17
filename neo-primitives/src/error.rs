use neo_io::ErrorKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimitiveError {
    #[error("invalid format: {message}")]
    InvalidFormat { message: String },

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

impl PrimitiveError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat { .. } => ErrorKind::InvalidEncoding,
            Self::InvalidLength { .. } => ErrorKind::InvalidArgument,
        }
    }
}

pub type PrimitiveResult<T> = Result<T, PrimitiveError>;
