//! Error types for NEF containers and method tokens.

use neo_io::{ErrorKind, IoError};
use thiserror::Error;

/// Errors raised while building or decoding a [`crate::MethodToken`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MethodTokenError {
    #[error("method token: {0}")]
    Io(#[from] IoError),

    #[error("method token: name is {len} bytes, at most {max} allowed")]
    NameTooLong { len: usize, max: usize },

    #[error("method token: name '{0}' starts with '_'")]
    ReservedName(String),

    #[error("method token: unknown call flags 0x{0:02x}")]
    InvalidCallFlags(u8),
}

impl MethodTokenError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(err) => err.kind(),
            Self::NameTooLong { .. } => ErrorKind::LimitExceeded,
            Self::ReservedName(_) | Self::InvalidCallFlags(_) => ErrorKind::MalformedInput,
        }
    }
}

/// Errors raised while building or decoding a [`crate::NefFile`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NefError {
    #[error("nef: {0}")]
    Io(#[from] IoError),

    #[error("nef: {0}")]
    Token(#[from] MethodTokenError),

    #[error("nef: bad magic 0x{0:08x}")]
    BadMagic(u32),

    #[error("nef: checksum mismatch: stored 0x{stored:08x}, computed 0x{computed:08x}")]
    ChecksumMismatch { stored: u32, computed: u32 },

    #[error("nef: {field} is {len}, at most {max} allowed")]
    TooLarge {
        field: &'static str,
        len: usize,
        max: usize,
    },

    #[error("nef: {0}")]
    Malformed(&'static str),

    #[error("nef: script must not be empty")]
    EmptyScript,

    #[error("nef: compiler name must not contain NUL")]
    NulInCompiler,
}

impl NefError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(err) => err.kind(),
            Self::Token(err) => err.kind(),
            Self::BadMagic(_) | Self::ChecksumMismatch { .. } | Self::Malformed(_) => {
                ErrorKind::MalformedInput
            }
            Self::TooLarge { .. } => ErrorKind::LimitExceeded,
            Self::EmptyScript | Self::NulInCompiler => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn too_large(field: &'static str, len: usize, max: usize) -> Self {
        Self::TooLarge { field, len, max }
    }
}
