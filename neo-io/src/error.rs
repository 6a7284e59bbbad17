use core::fmt;

use thiserror::Error;

/// Coarse error classification shared by every SDK crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Truncated,
    MalformedInput,
    InvalidEncoding,
    InvalidArgument,
    LimitExceeded,
    InvalidPassword,
    MalformedRule,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Truncated => "truncated",
            Self::MalformedInput => "malformed input",
            Self::InvalidEncoding => "invalid encoding",
            Self::InvalidArgument => "invalid argument",
            Self::LimitExceeded => "limit exceeded",
            Self::InvalidPassword => "invalid password",
            Self::MalformedRule => "malformed rule",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced by the binary reader and writer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoError {
    #[error("unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    Truncated { needed: usize, remaining: usize },

    #[error("invalid encoding: {0}")]
    InvalidEncoding(&'static str),

    #[error("malformed push-data prefix 0x{0:02x}")]
    MalformedPushData(u8),

    #[error("length {len} exceeds maximum {max}")]
    LimitExceeded { len: u64, max: u64 },

    #[error("invalid value for {0}")]
    InvalidValue(&'static str),

    #[error("{0} trailing bytes after value")]
    TrailingBytes(usize),
}

impl IoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Truncated { .. } => ErrorKind::Truncated,
            Self::InvalidEncoding(_) => ErrorKind::InvalidEncoding,
            Self::MalformedPushData(_) | Self::InvalidValue(_) | Self::TrailingBytes(_) => {
                ErrorKind::MalformedInput
            }
            Self::LimitExceeded { .. } => ErrorKind::LimitExceeded,
        }
    }
}

pub type IoResult<T> = Result<T, IoError>;
