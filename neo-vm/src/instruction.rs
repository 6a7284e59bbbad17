use core::fmt;

use crate::{InteropService, OpCode};

/// The byte at an instruction offset, decoded when it names a known opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionCode {
    Known(OpCode),
    Unknown(u8),
}

impl InstructionCode {
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        OpCode::from_u8(byte).map_or(Self::Unknown(byte), Self::Known)
    }

    #[inline]
    pub fn opcode(&self) -> Option<OpCode> {
        match self {
            Self::Known(op) => Some(*op),
            Self::Unknown(_) => None,
        }
    }

    #[inline]
    pub fn byte(&self) -> u8 {
        match self {
            Self::Known(op) => op.as_u8(),
            Self::Unknown(byte) => *byte,
        }
    }
}

impl fmt::Display for InstructionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(op) => f.write_str(op.mnemonic()),
            Self::Unknown(byte) => write!(f, "UNKNOWN(0x{byte:02X})"),
        }
    }
}

/// One decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Byte offset of the opcode within the script
    pub offset: usize,
    pub code: InstructionCode,
    /// Operand bytes; for length-prefixed opcodes the payload without its prefix
    pub operand: Vec<u8>,
    /// Total encoded size including opcode and any length prefix
    pub size: usize,
    /// Resolved service for `SYSCALL`
    pub syscall: Option<&'static InteropService>,
}

impl Instruction {
    #[inline]
    pub fn opcode(&self) -> Option<OpCode> {
        self.code.opcode()
    }

    /// Price of the opcode plus the fixed price of a resolved interop service.
    pub fn price(&self) -> u64 {
        let base = self.opcode().map_or(0, |op| op.price());
        base + self.syscall.map_or(0, |service| service.price)
    }

    /// Operand as a little-endian signed integer, for `PUSHINT8`..`PUSHINT64`
    /// and the jump/call offsets.
    pub fn operand_i64(&self) -> Option<i64> {
        let bytes = &self.operand;
        match bytes.len() {
            1 => Some(bytes[0] as i8 as i64),
            2 => Some(i16::from_le_bytes([bytes[0], bytes[1]]) as i64),
            4 => Some(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]) as i64),
            8 => {
                let mut buf = [0u8; 8];
                buf.copy_from_slice(bytes);
                Some(i64::from_le_bytes(buf))
            }
            _ => None,
        }
    }
}
