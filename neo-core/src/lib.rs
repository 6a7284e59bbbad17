//! Witness rules: allow/deny decisions over a tree of witness conditions.
//!
//! Rules travel in transactions in the Neo binary format and appear in RPC
//! payloads as JSON. Both decoders bound the condition tree with
//! [`RuleLimits`], so hostile input fails with an error instead of exhausting
//! the stack or memory.

pub mod error;
pub mod witness_rule;

pub use error::WitnessRuleError;
pub use witness_rule::{
    RuleLimits, WitnessCondition, WitnessConditionType, WitnessRule, WitnessRuleAction,
};
