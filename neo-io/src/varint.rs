use crate::{IoResult, NeoRead, NeoWrite};

/// Writes `value` in its minimal variable-length form.
///
/// | value                 | bytes        |
/// |-----------------------|--------------|
/// | `< 0xFD`              | 1            |
/// | `<= 0xFFFF`           | `FD` + u16   |
/// | `<= 0xFFFF_FFFF`      | `FE` + u32   |
/// | otherwise             | `FF` + u64   |
#[inline]
pub fn write_varint<W: NeoWrite + ?Sized>(writer: &mut W, value: u64) {
    let mut buf = [0u8; 9];
    let len = to_varint_le(value, &mut buf);
    writer.write_bytes(&buf[..len]);
}

/// Reads a variable-length integer.
///
/// Non-minimal encodings (e.g. `FD 01 00`) are accepted.
#[inline]
pub fn read_varint<R: NeoRead + ?Sized>(reader: &mut R) -> IoResult<u64> {
    let tag = reader.read_u8()?;
    match tag {
        value @ 0x00..=0xFC => Ok(value as u64),
        0xFD => reader.read_u16().map(u64::from),
        0xFE => reader.read_u32().map(u64::from),
        0xFF => reader.read_u64(),
    }
}

/// Encodes `value` into `scratch` and returns the number of bytes used.
#[inline]
pub fn to_varint_le(value: u64, scratch: &mut [u8; 9]) -> usize {
    scratch.fill(0);
    if value < 0xFD {
        scratch[0] = value as u8;
        1
    } else if value <= 0xFFFF {
        scratch[0] = 0xFD;
        scratch[1..3].copy_from_slice(&(value as u16).to_le_bytes());
        3
    } else if value <= 0xFFFF_FFFF {
        scratch[0] = 0xFE;
        scratch[1..5].copy_from_slice(&(value as u32).to_le_bytes());
        5
    } else {
        scratch[0] = 0xFF;
        scratch[1..9].copy_from_slice(&value.to_le_bytes());
        9
    }
}
