//! Implementation of `UInt160`, a 160-bit unsigned integer.

use std::fmt;
use std::str::FromStr;

use neo_io::{IoResult, NeoDecode, NeoEncode, NeoRead, NeoWrite};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{PrimitiveError, PrimitiveResult};

/// The length of `UInt160` values in bytes.
pub const UINT160_SIZE: usize = 20;

/// 160-bit value used for script hashes.
///
/// Bytes are stored in wire order (little-endian). The textual form is the
/// reversed, `0x`-prefixed hex string used by Neo tooling.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UInt160([u8; UINT160_SIZE]);

impl UInt160 {
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; UINT160_SIZE])
    }

    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Creates a `UInt160` from exactly 20 little-endian bytes.
    pub fn from_bytes(value: &[u8]) -> PrimitiveResult<Self> {
        let bytes: [u8; UINT160_SIZE] =
            value.try_into().map_err(|_| PrimitiveError::InvalidLength {
                expected: UINT160_SIZE,
                actual: value.len(),
            })?;
        Ok(Self(bytes))
    }

    #[inline]
    #[must_use]
    pub const fn to_array(&self) -> [u8; UINT160_SIZE] {
        self.0
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; UINT160_SIZE] {
        &self.0
    }

    /// Parses the reversed hex form, with or without the `0x` prefix.
    pub fn parse(s: &str) -> PrimitiveResult<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if s.len() != UINT160_SIZE * 2 {
            return Err(PrimitiveError::InvalidFormat {
                message: format!("expected {} hex characters, got {}", UINT160_SIZE * 2, s.len()),
            });
        }

        let mut bytes = hex::decode(s).map_err(|err| PrimitiveError::InvalidFormat {
            message: err.to_string(),
        })?;
        bytes.reverse();
        Self::from_bytes(&bytes)
    }

    #[must_use]
    pub fn to_hex_string(&self) -> String {
        let mut bytes = self.0;
        bytes.reverse();
        format!("0x{}", hex::encode(bytes))
    }
}

impl FromStr for UInt160 {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({})", self.to_hex_string())
    }
}

impl From<[u8; UINT160_SIZE]> for UInt160 {
    fn from(data: [u8; UINT160_SIZE]) -> Self {
        Self(data)
    }
}

impl TryFrom<&[u8]> for UInt160 {
    type Error = PrimitiveError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(data)
    }
}

impl AsRef<[u8]> for UInt160 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl NeoEncode for UInt160 {
    #[inline]
    fn neo_encode<W: NeoWrite>(&self, writer: &mut W) {
        writer.write_bytes(&self.0);
    }

    #[inline]
    fn size(&self) -> usize {
        UINT160_SIZE
    }
}

impl NeoDecode for UInt160 {
    #[inline]
    fn neo_decode<R: NeoRead>(reader: &mut R) -> IoResult<Self> {
        reader.read_array().map(Self)
    }
}

impl Serialize for UInt160 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex_string())
    }
}

impl<'de> Deserialize<'de> for UInt160 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(de::Error::custom)
    }
}
