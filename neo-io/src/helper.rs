use crate::{read_varint, write_varint, IoError, IoResult, NeoDecode, NeoEncode, NeoRead, NeoWrite};

/// Encoded size of a variable-length integer.
#[inline]
pub const fn var_size(value: u64) -> usize {
    if value < 0xFD {
        1
    } else if value <= 0xFFFF {
        3
    } else if value <= 0xFFFF_FFFF {
        5
    } else {
        9
    }
}

/// Encoded size of a varint-prefixed byte block of length `len`.
#[inline]
pub const fn var_bytes_size(len: usize) -> usize {
    var_size(len as u64) + len
}

/// Writes a varint count followed by each item.
pub fn encode_array<T: NeoEncode, W: NeoWrite>(items: &[T], writer: &mut W) {
    write_varint(writer, items.len() as u64);
    for item in items {
        item.neo_encode(writer);
    }
}

/// Reads a varint count (at most `max`) followed by that many items.
pub fn decode_array<T: NeoDecode, R: NeoRead>(reader: &mut R, max: usize) -> IoResult<Vec<T>> {
    let count = read_varint(reader)?;
    if count > max as u64 {
        return Err(IoError::LimitExceeded {
            len: count,
            max: max as u64,
        });
    }

    // Each item occupies at least one byte.
    let mut items = Vec::with_capacity((count as usize).min(reader.remaining()));
    for _ in 0..count {
        items.push(T::neo_decode(reader)?);
    }
    Ok(items)
}
