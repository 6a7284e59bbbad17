mod action;
mod binary;
mod condition;
mod json;
mod limits;

use core::fmt;

pub use action::WitnessRuleAction;
pub use condition::{WitnessCondition, WitnessConditionType};
pub use limits::RuleLimits;

use crate::error::WitnessRuleError;

/// The rule used to describe the scope of a witness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WitnessRule {
    pub action: WitnessRuleAction,
    pub condition: WitnessCondition,
}

impl WitnessRule {
    pub fn new(action: WitnessRuleAction, condition: WitnessCondition) -> Self {
        Self { action, condition }
    }

    pub fn allow(condition: WitnessCondition) -> Self {
        Self::new(WitnessRuleAction::Allow, condition)
    }

    pub fn deny(condition: WitnessCondition) -> Self {
        Self::new(WitnessRuleAction::Deny, condition)
    }

    /// Encoded length in bytes.
    pub fn size(&self) -> usize {
        1 + self.condition.size()
    }

    pub fn validate(&self, limits: &RuleLimits) -> Result<(), WitnessRuleError> {
        self.condition.validate(limits)
    }

    /// Whether a node would accept this rule in a transaction.
    pub fn is_valid(&self) -> bool {
        self.validate(&RuleLimits::consensus()).is_ok()
    }
}

impl fmt::Display for WitnessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.condition)
    }
}
