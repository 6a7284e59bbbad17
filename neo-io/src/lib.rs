// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Neo N3 binary wire format.
//!
//! Values are written little-endian. Lengths are prefixed with the four-tier
//! variable-length integer used throughout the protocol; see [`write_varint`].
//! Readers never panic on short or malformed input: every failure surfaces as
//! an [`IoError`].

mod error;
mod helper;
mod primitives;
mod push_data;
mod reader;
mod traits;
mod varint;
mod writer;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, IoError, IoResult};
pub use helper::{decode_array, encode_array, var_bytes_size, var_size};
pub use push_data::{push_data_size, read_push_data, write_push_data, PUSH_DATA_DIRECT_MAX};
pub use reader::MemoryReader;
pub use traits::{NeoDecode, NeoEncode, NeoRead, NeoWrite};
pub use varint::{read_varint, to_varint_le, write_varint};
pub use writer::BinaryWriter;

/// Default upper bound for variable-length payloads when the caller has no
/// tighter limit.
pub const MAX_VAR_LENGTH: u64 = 0x0100_0000;
