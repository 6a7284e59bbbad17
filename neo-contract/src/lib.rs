//! Neo N3 executable container (NEF) support.
//!
//! A NEF file wraps a compiled script together with the compiler name, an
//! optional source reference and the static method tokens used by `CALLT`,
//! and protects all of it with a double-SHA-256 checksum:
//!
//! ```text
//! magic:4 | compiler:64 | source:varstring | 0:1 | tokens | 0:2 | script:varbytes | checksum:4
//! ```

pub mod error;
pub mod nef;

pub use error::{MethodTokenError, NefError};
pub use nef::{CallFlags, MethodToken, NefFile, NefFileBuilder};
