use neo_io::{ErrorKind, IoError};
use thiserror::Error;

use crate::witness_rule::WitnessConditionType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WitnessRuleError {
    #[error("witness rule: {0}")]
    Io(#[from] IoError),

    #[error("witness rule: invalid action byte 0x{0:02x}")]
    InvalidActionByte(u8),

    #[error("witness rule: invalid action '{0}'")]
    InvalidAction(String),

    #[error("witness rule: invalid condition type 0x{0:02x}")]
    InvalidConditionType(u8),

    #[error("witness rule: unknown condition type '{0}'")]
    UnknownConditionType(String),

    #[error("witness rule: nesting deeper than {max}")]
    DepthExceeded { max: usize },

    #[error("witness rule: {kind} condition has {count} subitems, at most {max} allowed")]
    TooManySubitems {
        kind: WitnessConditionType,
        count: u64,
        max: usize,
    },

    #[error("witness rule: {0} condition has no subitems")]
    EmptyComposite(WitnessConditionType),

    #[error("witness rule: more than {max} conditions")]
    TooManyNodes { max: usize },

    #[error("witness rule: missing field '{0}'")]
    MissingField(&'static str),

    #[error("witness rule: invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl WitnessRuleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Io(err) => err.kind(),
            Self::InvalidActionByte(_) | Self::InvalidConditionType(_) => ErrorKind::MalformedInput,
            Self::InvalidAction(_)
            | Self::UnknownConditionType(_)
            | Self::DepthExceeded { .. }
            | Self::TooManySubitems { .. }
            | Self::EmptyComposite(_)
            | Self::TooManyNodes { .. }
            | Self::MissingField(_)
            | Self::InvalidField { .. } => ErrorKind::MalformedRule,
        }
    }

    pub(crate) fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
