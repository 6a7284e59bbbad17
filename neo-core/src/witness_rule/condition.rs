use core::fmt;

use neo_crypto::{PublicKey, PUBLIC_KEY_SIZE};
use neo_io::var_size;
use neo_primitives::{UInt160, UINT160_SIZE};

use crate::error::WitnessRuleError;

use super::RuleLimits;

/// Type tag of a witness condition, as written on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WitnessConditionType {
    Boolean = 0x00,
    Not = 0x01,
    And = 0x02,
    Or = 0x03,
    ScriptHash = 0x18,
    Group = 0x19,
    CalledByEntry = 0x20,
    CalledByContract = 0x28,
    CalledByGroup = 0x29,
}

impl WitnessConditionType {
    pub const ALL: [WitnessConditionType; 9] = [
        Self::Boolean,
        Self::Not,
        Self::And,
        Self::Or,
        Self::ScriptHash,
        Self::Group,
        Self::CalledByEntry,
        Self::CalledByContract,
        Self::CalledByGroup,
    ];

    #[inline]
    pub fn to_byte(self) -> u8 {
        self as u8
    }

    pub fn from_byte(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.to_byte() == value)
    }

    /// Discriminator used in JSON.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Not => "Not",
            Self::And => "And",
            Self::Or => "Or",
            Self::ScriptHash => "ScriptHash",
            Self::Group => "Group",
            Self::CalledByEntry => "CalledByEntry",
            Self::CalledByContract => "CalledByContract",
            Self::CalledByGroup => "CalledByGroup",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for WitnessConditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node of a witness condition tree. Composite variants own their children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WitnessCondition {
    Boolean(bool),
    Not(Box<WitnessCondition>),
    And(Vec<WitnessCondition>),
    Or(Vec<WitnessCondition>),
    ScriptHash(UInt160),
    Group(PublicKey),
    CalledByEntry,
    CalledByContract(UInt160),
    CalledByGroup(PublicKey),
}

impl WitnessCondition {
    pub fn not(condition: WitnessCondition) -> Self {
        Self::Not(Box::new(condition))
    }

    pub fn condition_type(&self) -> WitnessConditionType {
        match self {
            Self::Boolean(_) => WitnessConditionType::Boolean,
            Self::Not(_) => WitnessConditionType::Not,
            Self::And(_) => WitnessConditionType::And,
            Self::Or(_) => WitnessConditionType::Or,
            Self::ScriptHash(_) => WitnessConditionType::ScriptHash,
            Self::Group(_) => WitnessConditionType::Group,
            Self::CalledByEntry => WitnessConditionType::CalledByEntry,
            Self::CalledByContract(_) => WitnessConditionType::CalledByContract,
            Self::CalledByGroup(_) => WitnessConditionType::CalledByGroup,
        }
    }

    /// Encoded length in bytes, including the type tag.
    pub fn size(&self) -> usize {
        let payload = match self {
            Self::Boolean(_) => 1,
            Self::Not(inner) => inner.size(),
            Self::And(items) | Self::Or(items) => {
                var_size(items.len() as u64) + items.iter().map(Self::size).sum::<usize>()
            }
            Self::ScriptHash(_) | Self::CalledByContract(_) => UINT160_SIZE,
            Self::Group(_) | Self::CalledByGroup(_) => PUBLIC_KEY_SIZE,
            Self::CalledByEntry => 0,
        };
        1 + payload
    }

    /// Number of levels in the tree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Not(inner) => 1 + inner.depth(),
            Self::And(items) | Self::Or(items) => {
                1 + items.iter().map(Self::depth).max().unwrap_or(0)
            }
            _ => 1,
        }
    }

    /// Total number of conditions in the tree, this one included.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Not(inner) => 1 + inner.node_count(),
            Self::And(items) | Self::Or(items) => {
                1 + items.iter().map(Self::node_count).sum::<usize>()
            }
            _ => 1,
        }
    }

    /// Checks a tree built in code against the same bounds the decoders apply.
    pub fn validate(&self, limits: &RuleLimits) -> Result<(), WitnessRuleError> {
        let mut budget = TreeBudget::new(limits);
        self.validate_at(&mut budget, 1)
    }

    fn validate_at(&self, budget: &mut TreeBudget, depth: usize) -> Result<(), WitnessRuleError> {
        budget.enter(depth)?;
        match self {
            Self::Not(inner) => inner.validate_at(budget, depth + 1),
            Self::And(items) | Self::Or(items) => {
                budget.check_subitems(self.condition_type(), items.len() as u64)?;
                items
                    .iter()
                    .try_for_each(|item| item.validate_at(budget, depth + 1))
            }
            _ => Ok(()),
        }
    }
}

/// Running depth and node accounting shared by validation and both decoders.
pub(crate) struct TreeBudget {
    limits: RuleLimits,
    nodes: usize,
}

impl TreeBudget {
    pub(crate) fn new(limits: &RuleLimits) -> Self {
        Self {
            limits: limits.clamped(),
            nodes: 0,
        }
    }

    /// Accounts for one more condition at `depth` (root is 1).
    pub(crate) fn enter(&mut self, depth: usize) -> Result<(), WitnessRuleError> {
        if depth > self.limits.max_depth {
            return Err(WitnessRuleError::DepthExceeded {
                max: self.limits.max_depth,
            });
        }
        self.nodes += 1;
        if self.nodes > self.limits.max_nodes {
            return Err(WitnessRuleError::TooManyNodes {
                max: self.limits.max_nodes,
            });
        }
        Ok(())
    }

    pub(crate) fn check_subitems(
        &self,
        kind: WitnessConditionType,
        count: u64,
    ) -> Result<(), WitnessRuleError> {
        if count == 0 {
            return Err(WitnessRuleError::EmptyComposite(kind));
        }
        if count > self.limits.max_subitems as u64 {
            return Err(WitnessRuleError::TooManySubitems {
                kind,
                count,
                max: self.limits.max_subitems,
            });
        }
        Ok(())
    }
}

impl fmt::Display for WitnessCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = |items: &[WitnessCondition]| {
            items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self {
            Self::Boolean(value) => write!(f, "Boolean({value})"),
            Self::Not(inner) => write!(f, "Not({inner})"),
            Self::And(items) => write!(f, "And([{}])", list(items)),
            Self::Or(items) => write!(f, "Or([{}])", list(items)),
            Self::ScriptHash(hash) => write!(f, "ScriptHash({hash})"),
            Self::Group(key) => write!(f, "Group({key})"),
            Self::CalledByEntry => f.write_str("CalledByEntry"),
            Self::CalledByContract(hash) => write!(f, "CalledByContract({hash})"),
            Self::CalledByGroup(key) => write!(f, "CalledByGroup({key})"),
        }
    }
}
