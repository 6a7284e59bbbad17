//! Length-prefixed data blocks.
//!
//! Short payloads carry their length in a single byte. Longer payloads use an
//! explicit width marker followed by a little-endian length:
//!
//! | length            | prefix          |
//! |-------------------|-----------------|
//! | `0..=0x4B`        | length byte     |
//! | `<= 0xFF`         | `4C` + u8       |
//! | `<= 0xFFFF`       | `4D` + u16      |
//! | `<= 0xFFFF_FFFF`  | `4E` + u32      |

use tracing::trace;

use crate::{IoError, IoResult, NeoRead, NeoWrite};

/// Longest payload whose length fits in the leading byte.
pub const PUSH_DATA_DIRECT_MAX: usize = 0x4B;

const PUSH_DATA_1: u8 = 0x4C;
const PUSH_DATA_2: u8 = 0x4D;
const PUSH_DATA_4: u8 = 0x4E;

pub fn write_push_data<W: NeoWrite + ?Sized>(writer: &mut W, data: &[u8]) -> IoResult<()> {
    let len = data.len();
    if len <= PUSH_DATA_DIRECT_MAX {
        writer.write_u8(len as u8);
    } else if len <= u8::MAX as usize {
        writer.write_u8(PUSH_DATA_1);
        writer.write_u8(len as u8);
    } else if len <= u16::MAX as usize {
        writer.write_u8(PUSH_DATA_2);
        writer.write_u16(len as u16);
    } else if len <= u32::MAX as usize {
        writer.write_u8(PUSH_DATA_4);
        writer.write_u32(len as u32);
    } else {
        return Err(IoError::LimitExceeded {
            len: len as u64,
            max: u32::MAX as u64,
        });
    }
    writer.write_bytes(data);
    Ok(())
}

pub fn read_push_data<R: NeoRead + ?Sized>(reader: &mut R) -> IoResult<Vec<u8>> {
    let prefix = reader.read_u8()?;
    let len = match prefix {
        len @ 0x00..=0x4B => len as usize,
        PUSH_DATA_1 => reader.read_u8()? as usize,
        PUSH_DATA_2 => reader.read_u16()? as usize,
        PUSH_DATA_4 => reader.read_u32()? as usize,
        other => {
            trace!(prefix = other, "rejected push-data prefix");
            return Err(IoError::MalformedPushData(other));
        }
    };

    if len > reader.remaining() {
        return Err(IoError::Truncated {
            needed: len,
            remaining: reader.remaining(),
        });
    }

    let mut buf = vec![0u8; len];
    reader.read_into(&mut buf)?;
    Ok(buf)
}

/// Encoded size of a push-data block carrying `len` bytes.
pub const fn push_data_size(len: usize) -> usize {
    let prefix = if len <= PUSH_DATA_DIRECT_MAX {
        1
    } else if len <= u8::MAX as usize {
        2
    } else if len <= u16::MAX as usize {
        3
    } else {
        5
    };
    prefix + len
}
