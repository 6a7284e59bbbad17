//! Aggregated SDK settings.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    ConfigError, DisassemblerSettings, NefSettings, ScryptSettings, WitnessRuleSettings,
};

/// Address version byte of Neo N3 (`'N'` prefix).
pub const DEFAULT_ADDRESS_VERSION: u8 = 0x35;

/// Top-level settings document.
///
/// Every section is optional in TOML; missing values take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkSettings {
    /// Address version byte for address encoding
    #[serde(default = "default_address_version")]
    pub address_version: u8,

    #[serde(default)]
    pub nef: NefSettings,

    #[serde(default)]
    pub witness_rules: WitnessRuleSettings,

    #[serde(default)]
    pub scrypt: ScryptSettings,

    #[serde(default)]
    pub disassembler: DisassemblerSettings,
}

fn default_address_version() -> u8 {
    DEFAULT_ADDRESS_VERSION
}

impl Default for SdkSettings {
    fn default() -> Self {
        Self {
            address_version: default_address_version(),
            nef: NefSettings::default(),
            witness_rules: WitnessRuleSettings::default(),
            scrypt: ScryptSettings::default(),
            disassembler: DisassemblerSettings::default(),
        }
    }
}

impl SdkSettings {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(input)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reads, parses and validates a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded sdk settings");
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nef.validate()?;
        self.witness_rules.validate()?;
        self.scrypt.validate()?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string(self).map_err(|err| ConfigError::invalid("settings", err.to_string()))
    }
}
