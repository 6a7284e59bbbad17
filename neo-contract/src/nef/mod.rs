mod file;
mod flags;
mod token;

pub use file::{NefFile, NefFileBuilder};
pub use flags::CallFlags;
pub use token::MethodToken;

pub const NEF_MAGIC: u32 = 0x3346_454E; // "NEF3"
pub const COMPILER_FIELD_SIZE: usize = 64;
pub const METHOD_NAME_MAX: usize = 32;
pub const SOURCE_URL_MAX: usize = 256;
pub const TOKENS_MAX: usize = neo_config::DEFAULT_MAX_NEF_TOKENS;
pub const CHECKSUM_SIZE: usize = 4;
