use crate::{IoError, IoResult, NeoRead};

/// Reader over an in-memory byte slice.
#[derive(Debug, Clone)]
pub struct MemoryReader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> MemoryReader<'a> {
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Current read position.
    #[inline]
    pub fn position(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offset >= self.buf.len()
    }

    /// Next byte without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.offset).copied()
    }

    /// Borrows the next `len` bytes without copying.
    pub fn read_slice(&mut self, len: usize) -> IoResult<&'a [u8]> {
        if self.remaining() < len {
            return Err(IoError::Truncated {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let start = self.offset;
        self.offset += len;
        Ok(&self.buf[start..self.offset])
    }

    /// Unread tail of the buffer.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.offset..]
    }
}

impl<'a> NeoRead for MemoryReader<'a> {
    fn read_into(&mut self, buf: &mut [u8]) -> IoResult<()> {
        let src = self.read_slice(buf.len())?;
        buf.copy_from_slice(src);
        Ok(())
    }

    #[inline]
    fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }
}
