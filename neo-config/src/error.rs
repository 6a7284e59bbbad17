use std::path::PathBuf;

use neo_io::ErrorKind;
use thiserror::Error;

/// Errors raised while loading or validating [`crate::SdkSettings`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid {
        field: &'static str,
        reason: String,
    },
}

impl ConfigError {
    /// Maps the error onto the shared SDK error kinds.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io { .. } | Self::Parse(_) => ErrorKind::MalformedInput,
            Self::Invalid { .. } => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
