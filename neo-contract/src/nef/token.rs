use neo_io::{IoError, IoResult, NeoDecode, NeoEncode, NeoRead, NeoWrite};
use neo_primitives::UInt160;
use serde::{Deserialize, Serialize};

use crate::error::MethodTokenError;

use super::{flags::CallFlags, METHOD_NAME_MAX};

/// A static call target referenced by `CALLT`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MethodTokenJson")]
pub struct MethodToken {
    pub hash: UInt160,
    pub method: String,
    #[serde(rename = "paramcount")]
    pub parameters_count: u16,
    #[serde(rename = "hasreturnvalue")]
    pub has_return_value: bool,
    #[serde(rename = "callflags")]
    pub call_flags: CallFlags,
}

impl MethodToken {
    pub fn new(
        hash: UInt160,
        method: impl Into<String>,
        parameters_count: u16,
        has_return_value: bool,
        call_flags: CallFlags,
    ) -> Result<Self, MethodTokenError> {
        let token = Self {
            hash,
            method: method.into(),
            parameters_count,
            has_return_value,
            call_flags,
        };
        token.validate()?;
        Ok(token)
    }

    /// Checks the method name and flags of a token built field by field.
    pub fn validate(&self) -> Result<(), MethodTokenError> {
        validate_method_name(&self.method)?;
        if !CallFlags::ALL.contains(self.call_flags) {
            return Err(MethodTokenError::InvalidCallFlags(self.call_flags.bits()));
        }
        Ok(())
    }

    pub fn decode<R: NeoRead>(reader: &mut R) -> Result<Self, MethodTokenError> {
        let hash = UInt160::neo_decode(reader)?;
        let method = reader.read_var_string(METHOD_NAME_MAX as u64)?;
        validate_method_name(&method)?;
        let parameters_count = reader.read_u16()?;
        let has_return_value = reader.read_bool()?;
        let bits = reader.read_u8()?;
        let call_flags =
            CallFlags::from_bits(bits).ok_or(MethodTokenError::InvalidCallFlags(bits))?;

        Ok(Self {
            hash,
            method,
            parameters_count,
            has_return_value,
            call_flags,
        })
    }
}

fn validate_method_name(method: &str) -> Result<(), MethodTokenError> {
    if method.len() > METHOD_NAME_MAX {
        return Err(MethodTokenError::NameTooLong {
            len: method.len(),
            max: METHOD_NAME_MAX,
        });
    }
    if method.starts_with('_') {
        return Err(MethodTokenError::ReservedName(method.to_string()));
    }
    Ok(())
}

impl NeoEncode for MethodToken {
    fn neo_encode<W: NeoWrite>(&self, writer: &mut W) {
        self.hash.neo_encode(writer);
        writer.write_var_string(&self.method);
        writer.write_u16(self.parameters_count);
        writer.write_bool(self.has_return_value);
        writer.write_u8(self.call_flags.bits());
    }
}

impl NeoDecode for MethodToken {
    fn neo_decode<R: NeoRead>(reader: &mut R) -> IoResult<Self> {
        Self::decode(reader).map_err(|err| match err {
            MethodTokenError::Io(err) => err,
            MethodTokenError::NameTooLong { .. } | MethodTokenError::ReservedName(_) => {
                IoError::InvalidValue("MethodToken.method")
            }
            MethodTokenError::InvalidCallFlags(_) => IoError::InvalidValue("MethodToken.callflags"),
        })
    }
}

#[derive(Deserialize)]
struct MethodTokenJson {
    hash: UInt160,
    method: String,
    #[serde(rename = "paramcount")]
    parameters_count: u16,
    #[serde(rename = "hasreturnvalue")]
    has_return_value: bool,
    #[serde(rename = "callflags")]
    call_flags: CallFlags,
}

impl TryFrom<MethodTokenJson> for MethodToken {
    type Error = MethodTokenError;

    fn try_from(raw: MethodTokenJson) -> Result<Self, Self::Error> {
        MethodToken::new(
            raw.hash,
            raw.method,
            raw.parameters_count,
            raw.has_return_value,
            raw.call_flags,
        )
    }
}
