use crate::{var_bytes_size, IoResult, NeoDecode, NeoEncode, NeoRead, NeoWrite, MAX_VAR_LENGTH};

impl NeoEncode for bool {
    #[inline]
    fn neo_encode<W: NeoWrite>(&self, writer: &mut W) {
        writer.write_bool(*self);
    }

    #[inline]
    fn size(&self) -> usize {
        1
    }
}

impl NeoDecode for bool {
    #[inline]
    fn neo_decode<R: NeoRead>(reader: &mut R) -> IoResult<Self> {
        reader.read_bool()
    }
}

macro_rules! impl_int {
    ($ty:ty, $write:ident, $read:ident) => {
        impl NeoEncode for $ty {
            #[inline]
            fn neo_encode<W: NeoWrite>(&self, writer: &mut W) {
                writer.$write(*self);
            }

            #[inline]
            fn size(&self) -> usize {
                core::mem::size_of::<$ty>()
            }
        }

        impl NeoDecode for $ty {
            #[inline]
            fn neo_decode<R: NeoRead>(reader: &mut R) -> IoResult<Self> {
                reader.$read()
            }
        }
    };
}

impl_int!(u8, write_u8, read_u8);
impl_int!(i8, write_i8, read_i8);
impl_int!(u16, write_u16, read_u16);
impl_int!(i16, write_i16, read_i16);
impl_int!(u32, write_u32, read_u32);
impl_int!(i32, write_i32, read_i32);
impl_int!(u64, write_u64, read_u64);
impl_int!(i64, write_i64, read_i64);

impl<const N: usize> NeoEncode for [u8; N] {
    #[inline]
    fn neo_encode<W: NeoWrite>(&self, writer: &mut W) {
        writer.write_bytes(self);
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<const N: usize> NeoDecode for [u8; N] {
    #[inline]
    fn neo_decode<R: NeoRead>(reader: &mut R) -> IoResult<Self> {
        reader.read_array()
    }
}

impl NeoEncode for str {
    #[inline]
    fn neo_encode<W: NeoWrite>(&self, writer: &mut W) {
        writer.write_var_string(self);
    }

    #[inline]
    fn size(&self) -> usize {
        var_bytes_size(self.len())
    }
}

impl NeoEncode for String {
    #[inline]
    fn neo_encode<W: NeoWrite>(&self, writer: &mut W) {
        self.as_str().neo_encode(writer);
    }

    #[inline]
    fn size(&self) -> usize {
        self.as_str().size()
    }
}

impl NeoDecode for String {
    #[inline]
    fn neo_decode<R: NeoRead>(reader: &mut R) -> IoResult<Self> {
        reader.read_var_string(MAX_VAR_LENGTH)
    }
}
