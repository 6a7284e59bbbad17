//! Configuration for the Neo N3 SDK codecs.
//!
//! Settings are plain values passed into the `*_with` entry points of the
//! codec crates. They can be built in code, taken from [`Default`], or parsed
//! from a TOML document:
//!
//! ```toml
//! address_version = 53
//!
//! [nef]
//! max_file_size = 1048576
//!
//! [witness_rules]
//! max_depth = 32
//! ```

mod error;
mod limits;
mod sdk;

pub use error::ConfigError;
pub use limits::{
    DisassemblerSettings, NefSettings, ScryptSettings, WitnessRuleSettings,
    DEFAULT_MAX_NEF_FILE_SIZE, DEFAULT_MAX_NEF_TOKENS, MAX_WITNESS_RULE_DEPTH,
    MAX_WITNESS_RULE_NODES, MAX_WITNESS_RULE_SUBITEMS,
};
pub use sdk::{SdkSettings, DEFAULT_ADDRESS_VERSION};
