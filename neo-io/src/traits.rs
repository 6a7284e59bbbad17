use crate::{push_data, read_varint, write_varint, IoError, IoResult};

/// All values that can be encoded into the Neo binary wire format implement this trait.
pub trait NeoEncode {
    fn neo_encode<W: NeoWrite>(&self, writer: &mut W);

    /// Encoded length in bytes.
    fn size(&self) -> usize {
        self.to_array().len()
    }

    #[inline]
    fn to_array(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        self.neo_encode(&mut buf);
        buf
    }
}

/// Values that can be decoded from the Neo binary wire format implement this trait.
pub trait NeoDecode: Sized {
    fn neo_decode<R: NeoRead>(reader: &mut R) -> IoResult<Self>;

    /// Decodes a value that must occupy the whole of `bytes`.
    fn from_array(bytes: &[u8]) -> IoResult<Self> {
        let mut reader = crate::MemoryReader::new(bytes);
        let value = Self::neo_decode(&mut reader)?;
        match reader.remaining() {
            0 => Ok(value),
            extra => Err(IoError::TrailingBytes(extra)),
        }
    }
}

/// Writer abstraction that matches the Neo binary format.
pub trait NeoWrite {
    /// Append raw bytes to the destination buffer.
    fn write_bytes(&mut self, bytes: &[u8]);

    /// Number of bytes written so far.
    fn bytes_written(&self) -> usize;

    #[inline]
    fn write_u8(&mut self, value: u8) {
        self.write_bytes(&[value]);
    }

    #[inline]
    fn write_i8(&mut self, value: i8) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_bool(&mut self, value: bool) {
        self.write_u8(value as u8);
    }

    #[inline]
    fn write_u16(&mut self, value: u16) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_i16(&mut self, value: i16) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_u32(&mut self, value: u32) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_i32(&mut self, value: i32) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_u64(&mut self, value: u64) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_i64(&mut self, value: i64) {
        self.write_bytes(&value.to_le_bytes());
    }

    #[inline]
    fn write_varint(&mut self, value: u64)
    where
        Self: Sized,
    {
        write_varint(self, value);
    }

    #[inline]
    fn write_var_bytes(&mut self, value: &[u8])
    where
        Self: Sized,
    {
        write_varint(self, value.len() as u64);
        self.write_bytes(value);
    }

    #[inline]
    fn write_var_string(&mut self, value: &str)
    where
        Self: Sized,
    {
        self.write_var_bytes(value.as_bytes());
    }

    /// Writes `value` zero padded to exactly `len` bytes.
    fn write_fixed_string(&mut self, value: &str, len: usize) -> IoResult<()> {
        let bytes = value.as_bytes();
        if bytes.len() > len {
            return Err(IoError::LimitExceeded {
                len: bytes.len() as u64,
                max: len as u64,
            });
        }
        self.write_bytes(bytes);
        for _ in bytes.len()..len {
            self.write_u8(0);
        }
        Ok(())
    }

    #[inline]
    fn write_push_data(&mut self, data: &[u8]) -> IoResult<()>
    where
        Self: Sized,
    {
        push_data::write_push_data(self, data)
    }
}

/// Reader abstraction for the Neo binary format.
pub trait NeoRead {
    /// Attempt to read exactly `buf.len()` bytes into the provided slice.
    fn read_into(&mut self, buf: &mut [u8]) -> IoResult<()>;

    /// Remaining bytes that can be read from this reader.
    fn remaining(&self) -> usize;

    #[inline]
    fn read_array<const N: usize>(&mut self) -> IoResult<[u8; N]> {
        let mut buf = [0u8; N];
        self.read_into(&mut buf)?;
        Ok(buf)
    }

    #[inline]
    fn read_u8(&mut self) -> IoResult<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    #[inline]
    fn read_i8(&mut self) -> IoResult<i8> {
        Ok(i8::from_le_bytes(self.read_array()?))
    }

    #[inline]
    fn read_bool(&mut self) -> IoResult<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(IoError::InvalidValue("bool")),
        }
    }

    #[inline]
    fn read_u16(&mut self) -> IoResult<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    #[inline]
    fn read_i16(&mut self) -> IoResult<i16> {
        Ok(i16::from_le_bytes(self.read_array()?))
    }

    #[inline]
    fn read_u32(&mut self) -> IoResult<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    #[inline]
    fn read_i32(&mut self) -> IoResult<i32> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    #[inline]
    fn read_u64(&mut self) -> IoResult<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    #[inline]
    fn read_i64(&mut self) -> IoResult<i64> {
        Ok(i64::from_le_bytes(self.read_array()?))
    }

    /// Reads a variable-length integer no larger than `max`.
    #[inline]
    fn read_varint(&mut self, max: u64) -> IoResult<u64>
    where
        Self: Sized,
    {
        let value = read_varint(self)?;
        if value > max {
            return Err(IoError::LimitExceeded { len: value, max });
        }
        Ok(value)
    }

    fn read_var_bytes(&mut self, max: u64) -> IoResult<Vec<u8>>
    where
        Self: Sized,
    {
        let len = self.read_varint(max)? as usize;
        if len > self.remaining() {
            return Err(IoError::Truncated {
                needed: len,
                remaining: self.remaining(),
            });
        }

        let mut buf = vec![0u8; len];
        self.read_into(buf.as_mut_slice())?;
        Ok(buf)
    }

    fn read_var_string(&mut self, max: u64) -> IoResult<String>
    where
        Self: Sized,
    {
        let bytes = self.read_var_bytes(max)?;
        String::from_utf8(bytes).map_err(|_| IoError::InvalidEncoding("utf-8"))
    }

    /// Reads a zero padded UTF-8 string occupying exactly `len` bytes.
    ///
    /// Padding must be all zero once the first zero byte is seen.
    fn read_fixed_string(&mut self, len: usize) -> IoResult<String> {
        if len > self.remaining() {
            return Err(IoError::Truncated {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let mut buf = vec![0u8; len];
        self.read_into(buf.as_mut_slice())?;

        let end = buf.iter().position(|b| *b == 0).unwrap_or(len);
        if buf[end..].iter().any(|b| *b != 0) {
            return Err(IoError::InvalidValue("fixed string padding"));
        }
        buf.truncate(end);
        String::from_utf8(buf).map_err(|_| IoError::InvalidEncoding("utf-8"))
    }

    #[inline]
    fn read_push_data(&mut self) -> IoResult<Vec<u8>>
    where
        Self: Sized,
    {
        push_data::read_push_data(self)
    }
}

impl NeoWrite for Vec<u8> {
    #[inline]
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }

    #[inline]
    fn bytes_written(&self) -> usize {
        self.len()
    }
}
