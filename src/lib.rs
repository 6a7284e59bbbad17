//! # neo-sdk
//!
//! Client-side building blocks for Neo N3:
//!
//! - [`io`]: the Neo binary format (varints, var-bytes, push-data)
//! - [`contract`]: NEF executable containers and method tokens
//! - [`wallet`]: NEP-2 password protection of private keys
//! - [`vm`]: opcode and interop tables, script builder and disassembler
//! - [`witness`]: witness rules in binary and JSON form
//! - [`config`]: limits and cost parameters, loadable from TOML
//!
//! ```rust
//! use neo_sdk::prelude::*;
//!
//! let nef = NefFile::encode("neon", &[], &[0x11, 0x40]).unwrap();
//! let decoded = NefFile::decode(&nef).unwrap();
//! assert_eq!(decoded.script(), &[0x11, 0x40]);
//!
//! let listing = disassemble(decoded.script()).listing();
//! assert!(listing.contains("PUSH1"));
//! ```

pub use neo_config as config;
pub use neo_contract as contract;
pub use neo_core as witness;
pub use neo_crypto as crypto;
pub use neo_io as io;
pub use neo_primitives as primitives;
pub use neo_vm as vm;
pub use neo_wallet as wallet;

use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

pub mod prelude {
    pub use neo_config::SdkSettings;
    pub use neo_contract::{CallFlags, MethodToken, NefFile};
    pub use neo_core::{RuleLimits, WitnessCondition, WitnessRule, WitnessRuleAction};
    pub use neo_crypto::{Keypair, PrivateKey, PublicKey};
    pub use neo_io::{ErrorKind, MemoryReader, NeoDecode, NeoEncode, NeoRead, NeoWrite};
    pub use neo_primitives::UInt160;
    pub use neo_vm::{disassemble, OpCode, ScriptBuilder};
    pub use neo_wallet::{Nep2Key, ScryptParameters};
}

#[derive(Debug, Error)]
pub enum TracingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install subscriber: {0}")]
    Install(String),
}

/// Installs a global `tracing` subscriber writing to stderr.
///
/// `level` is an `EnvFilter` directive such as `info` or `neo_core=debug`;
/// `RUST_LOG`, when set, takes precedence.
pub fn init_tracing(level: &str) -> Result<(), TracingError> {
    init_tracing_with(level, false)
}

/// Like [`init_tracing`], optionally emitting one JSON object per event.
pub fn init_tracing_with(level: &str, json: bool) -> Result<(), TracingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)?,
    };

    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    let installed = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| TracingError::Install(err.to_string()))
}
