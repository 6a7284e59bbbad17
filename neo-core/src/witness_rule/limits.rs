use neo_config::{
    WitnessRuleSettings, MAX_WITNESS_RULE_DEPTH, MAX_WITNESS_RULE_NODES, MAX_WITNESS_RULE_SUBITEMS,
};

/// Bounds applied to a condition tree while decoding or validating.
///
/// The root condition sits at depth 1. Values above the hard ceilings in
/// `neo_config` are clamped before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleLimits {
    pub max_depth: usize,
    pub max_subitems: usize,
    pub max_nodes: usize,
}

impl RuleLimits {
    pub const DEFAULT_MAX_DEPTH: usize = MAX_WITNESS_RULE_DEPTH;
    pub const MAX_SUBITEMS: usize = 16;
    pub const DEFAULT_MAX_NODES: usize = 1024;

    /// Nesting depth accepted by N3 nodes.
    pub const CONSENSUS_MAX_DEPTH: usize = 3;

    /// The limits a node enforces when it verifies a transaction.
    pub const fn consensus() -> Self {
        Self {
            max_depth: Self::CONSENSUS_MAX_DEPTH,
            max_subitems: Self::MAX_SUBITEMS,
            max_nodes: Self::DEFAULT_MAX_NODES,
        }
    }

    /// These limits with each field capped at its hard ceiling.
    pub fn clamped(self) -> Self {
        Self {
            max_depth: self.max_depth.min(MAX_WITNESS_RULE_DEPTH),
            max_subitems: self.max_subitems.min(MAX_WITNESS_RULE_SUBITEMS),
            max_nodes: self.max_nodes.min(MAX_WITNESS_RULE_NODES),
        }
    }
}

impl Default for RuleLimits {
    fn default() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_subitems: Self::MAX_SUBITEMS,
            max_nodes: Self::DEFAULT_MAX_NODES,
        }
    }
}

impl From<&WitnessRuleSettings> for RuleLimits {
    fn from(settings: &WitnessRuleSettings) -> Self {
        Self {
            max_depth: settings.max_depth,
            max_subitems: settings.max_subitems,
            max_nodes: settings.max_nodes,
        }
        .clamped()
    }
}

impl From<WitnessRuleSettings> for RuleLimits {
    fn from(settings: WitnessRuleSettings) -> Self {
        Self::from(&settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_settings() {
        assert_eq!(RuleLimits::from(WitnessRuleSettings::default()), RuleLimits::default());
        assert_eq!(RuleLimits::consensus().max_depth, 3);
    }

    #[test]
    fn test_oversized_settings_are_clamped() {
        let settings = WitnessRuleSettings {
            max_depth: 10_000_000,
            max_subitems: usize::MAX,
            max_nodes: usize::MAX,
        };
        let limits = RuleLimits::from(&settings);
        assert_eq!(limits.max_depth, MAX_WITNESS_RULE_DEPTH);
        assert_eq!(limits.max_subitems, MAX_WITNESS_RULE_SUBITEMS);
        assert_eq!(limits.max_nodes, MAX_WITNESS_RULE_NODES);
    }
}
