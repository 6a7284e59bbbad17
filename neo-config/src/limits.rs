//! Per-component limits.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Largest NEF container accepted by the decoder (1 MiB).
pub const DEFAULT_MAX_NEF_FILE_SIZE: usize = 1024 * 1024;

/// Maximum number of method tokens a NEF container may carry.
pub const DEFAULT_MAX_NEF_TOKENS: usize = 128;

/// NEF container limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NefSettings {
    /// Upper bound on the encoded container size in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size: usize,

    /// Upper bound on the method token count
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
}

fn default_max_file_size() -> usize {
    DEFAULT_MAX_NEF_FILE_SIZE
}

fn default_max_tokens() -> usize {
    DEFAULT_MAX_NEF_TOKENS
}

impl Default for NefSettings {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            max_tokens: default_max_tokens(),
        }
    }
}

impl NefSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_file_size == 0 {
            return Err(ConfigError::invalid("nef.max_file_size", "must be positive"));
        }
        if self.max_tokens > DEFAULT_MAX_NEF_TOKENS {
            return Err(ConfigError::invalid(
                "nef.max_tokens",
                format!("must not exceed {DEFAULT_MAX_NEF_TOKENS}"),
            ));
        }
        Ok(())
    }
}

/// Hard ceiling on witness condition nesting; decoders recurse once per level.
pub const MAX_WITNESS_RULE_DEPTH: usize = 32;

/// Hard ceiling on the children of one `And`/`Or`.
pub const MAX_WITNESS_RULE_SUBITEMS: usize = 255;

/// Hard ceiling on condition nodes in one rule.
pub const MAX_WITNESS_RULE_NODES: usize = 65_536;

/// Bounds applied while decoding witness rule conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WitnessRuleSettings {
    /// Maximum nesting depth; the root condition is depth 1
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum children of a single `And`/`Or`
    #[serde(default = "default_max_subitems")]
    pub max_subitems: usize,

    /// Maximum number of condition nodes in one rule
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,
}

fn default_max_depth() -> usize {
    MAX_WITNESS_RULE_DEPTH
}

fn default_max_subitems() -> usize {
    16
}

fn default_max_nodes() -> usize {
    1024
}

impl Default for WitnessRuleSettings {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            max_subitems: default_max_subitems(),
            max_nodes: default_max_nodes(),
        }
    }
}

impl WitnessRuleSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("witness_rules.max_depth", self.max_depth, MAX_WITNESS_RULE_DEPTH)?;
        check_range(
            "witness_rules.max_subitems",
            self.max_subitems,
            MAX_WITNESS_RULE_SUBITEMS,
        )?;
        check_range("witness_rules.max_nodes", self.max_nodes, MAX_WITNESS_RULE_NODES)
    }
}

fn check_range(field: &'static str, value: usize, max: usize) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::invalid(field, "must be positive"));
    }
    if value > max {
        return Err(ConfigError::invalid(field, format!("must not exceed {max}")));
    }
    Ok(())
}

/// Scrypt cost parameters used for NEP-2 key protection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScryptSettings {
    /// CPU/memory cost, a power of two
    #[serde(default = "default_scrypt_n")]
    pub n: u64,

    /// Block size
    #[serde(default = "default_scrypt_r")]
    pub r: u32,

    /// Parallelization
    #[serde(default = "default_scrypt_p")]
    pub p: u32,
}

fn default_scrypt_n() -> u64 {
    16384
}

fn default_scrypt_r() -> u32 {
    8
}

fn default_scrypt_p() -> u32 {
    8
}

impl Default for ScryptSettings {
    fn default() -> Self {
        Self {
            n: default_scrypt_n(),
            r: default_scrypt_r(),
            p: default_scrypt_p(),
        }
    }
}

impl ScryptSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n == 0 || !self.n.is_power_of_two() {
            return Err(ConfigError::invalid(
                "scrypt.n",
                format!("{} is not a positive power of two", self.n),
            ));
        }
        if self.r == 0 {
            return Err(ConfigError::invalid("scrypt.r", "must be positive"));
        }
        if self.p == 0 {
            return Err(ConfigError::invalid("scrypt.p", "must be positive"));
        }
        Ok(())
    }
}

/// Output options for the script disassembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisassemblerSettings {
    /// Longest printable string shown next to a push instruction
    #[serde(default = "default_max_string_preview")]
    pub max_string_preview: usize,
}

fn default_max_string_preview() -> usize {
    32
}

impl Default for DisassemblerSettings {
    fn default() -> Self {
        Self {
            max_string_preview: default_max_string_preview(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrypt_rejects_non_power_of_two() {
        let settings = ScryptSettings { n: 1000, r: 8, p: 8 };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::Invalid { field: "scrypt.n", .. })
        ));
        let settings = ScryptSettings { n: 0, r: 8, p: 8 };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_limits_rejected() {
        let rules = WitnessRuleSettings {
            max_depth: 0,
            ..Default::default()
        };
        assert!(rules.validate().is_err());

        let nef = NefSettings {
            max_file_size: 0,
            ..Default::default()
        };
        assert!(nef.validate().is_err());
    }

    #[test]
    fn test_nef_token_ceiling() {
        let nef = NefSettings {
            max_tokens: 129,
            ..Default::default()
        };
        assert!(nef.validate().is_err());
        assert!(NefSettings::default().validate().is_ok());
    }
}
