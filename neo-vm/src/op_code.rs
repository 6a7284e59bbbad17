// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! The Neo N3 instruction set.

use core::fmt;

/// Operand layout following an opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSize {
    /// No operand.
    None,
    /// Exactly `n` operand bytes.
    Fixed(u8),
    /// A little-endian length of 1, 2 or 4 bytes, then that many data bytes.
    Prefixed(u8),
}

const NONE: OperandSize = OperandSize::None;

const fn fixed(size: u8) -> OperandSize {
    OperandSize::Fixed(size)
}

const fn prefix(size: u8) -> OperandSize {
    OperandSize::Prefixed(size)
}

macro_rules! op_codes {
    ($($(#[$doc:meta])* $name:ident = $value:literal, $operand:expr, $price:literal;)*) => {
        /// A Neo N3 VM opcode.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum OpCode {
            $($(#[$doc])* $name = $value,)*
        }

        impl OpCode {
            /// Every opcode in ascending byte order.
            pub const ALL: &'static [OpCode] = &[$(OpCode::$name,)*];

            pub const fn from_u8(byte: u8) -> Option<Self> {
                match byte {
                    $($value => Some(OpCode::$name),)*
                    _ => None,
                }
            }

            pub const fn mnemonic(&self) -> &'static str {
                match self {
                    $(OpCode::$name => stringify!($name),)*
                }
            }

            pub const fn operand_size(&self) -> OperandSize {
                match self {
                    $(OpCode::$name => $operand,)*
                }
            }

            /// Base execution price in fee-factor units.
            pub const fn price(&self) -> u64 {
                match self {
                    $(OpCode::$name => $price,)*
                }
            }
        }
    };
}

op_codes! {
    // Constants
    PUSHINT8 = 0x00, fixed(1), 1;
    PUSHINT16 = 0x01, fixed(2), 1;
    PUSHINT32 = 0x02, fixed(4), 1;
    PUSHINT64 = 0x03, fixed(8), 1;
    PUSHINT128 = 0x04, fixed(16), 4;
    PUSHINT256 = 0x05, fixed(32), 4;
    PUSHT = 0x08, NONE, 1;
    PUSHF = 0x09, NONE, 1;
    PUSHA = 0x0A, fixed(4), 4;
    PUSHNULL = 0x0B, NONE, 1;
    PUSHDATA1 = 0x0C, prefix(1), 8;
    PUSHDATA2 = 0x0D, prefix(2), 512;
    PUSHDATA4 = 0x0E, prefix(4), 4096;
    PUSHM1 = 0x0F, NONE, 1;
    PUSH0 = 0x10, NONE, 1;
    PUSH1 = 0x11, NONE, 1;
    PUSH2 = 0x12, NONE, 1;
    PUSH3 = 0x13, NONE, 1;
    PUSH4 = 0x14, NONE, 1;
    PUSH5 = 0x15, NONE, 1;
    PUSH6 = 0x16, NONE, 1;
    PUSH7 = 0x17, NONE, 1;
    PUSH8 = 0x18, NONE, 1;
    PUSH9 = 0x19, NONE, 1;
    PUSH10 = 0x1A, NONE, 1;
    PUSH11 = 0x1B, NONE, 1;
    PUSH12 = 0x1C, NONE, 1;
    PUSH13 = 0x1D, NONE, 1;
    PUSH14 = 0x1E, NONE, 1;
    PUSH15 = 0x1F, NONE, 1;
    PUSH16 = 0x20, NONE, 1;
    // Flow control
    NOP = 0x21, NONE, 1;
    JMP = 0x22, fixed(1), 2;
    JMP_L = 0x23, fixed(4), 2;
    JMPIF = 0x24, fixed(1), 2;
    JMPIF_L = 0x25, fixed(4), 2;
    JMPIFNOT = 0x26, fixed(1), 2;
    JMPIFNOT_L = 0x27, fixed(4), 2;
    JMPEQ = 0x28, fixed(1), 2;
    JMPEQ_L = 0x29, fixed(4), 2;
    JMPNE = 0x2A, fixed(1), 2;
    JMPNE_L = 0x2B, fixed(4), 2;
    JMPGT = 0x2C, fixed(1), 2;
    JMPGT_L = 0x2D, fixed(4), 2;
    JMPGE = 0x2E, fixed(1), 2;
    JMPGE_L = 0x2F, fixed(4), 2;
    JMPLT = 0x30, fixed(1), 2;
    JMPLT_L = 0x31, fixed(4), 2;
    JMPLE = 0x32, fixed(1), 2;
    JMPLE_L = 0x33, fixed(4), 2;
    CALL = 0x34, fixed(1), 512;
    CALL_L = 0x35, fixed(4), 512;
    CALLA = 0x36, NONE, 512;
    CALLT = 0x37, fixed(2), 32768;
    ABORT = 0x38, NONE, 0;
    ASSERT = 0x39, NONE, 1;
    THROW = 0x3A, NONE, 512;
    TRY = 0x3B, fixed(2), 4;
    TRY_L = 0x3C, fixed(8), 4;
    ENDTRY = 0x3D, fixed(1), 4;
    ENDTRY_L = 0x3E, fixed(4), 4;
    ENDFINALLY = 0x3F, NONE, 4;
    RET = 0x40, NONE, 0;
    SYSCALL = 0x41, fixed(4), 0;
    // Stack
    DEPTH = 0x43, NONE, 2;
    DROP = 0x45, NONE, 2;
    NIP = 0x46, NONE, 2;
    XDROP = 0x48, NONE, 16;
    CLEAR = 0x49, NONE, 16;
    DUP = 0x4A, NONE, 2;
    OVER = 0x4B, NONE, 2;
    PICK = 0x4D, NONE, 2;
    TUCK = 0x4E, NONE, 2;
    SWAP = 0x50, NONE, 2;
    ROT = 0x51, NONE, 2;
    ROLL = 0x52, NONE, 16;
    REVERSE3 = 0x53, NONE, 2;
    REVERSE4 = 0x54, NONE, 2;
    REVERSEN = 0x55, NONE, 16;
    // Slot
    INITSSLOT = 0x56, fixed(1), 16;
    INITSLOT = 0x57, fixed(2), 64;
    LDSFLD0 = 0x58, NONE, 2;
    LDSFLD1 = 0x59, NONE, 2;
    LDSFLD2 = 0x5A, NONE, 2;
    LDSFLD3 = 0x5B, NONE, 2;
    LDSFLD4 = 0x5C, NONE, 2;
    LDSFLD5 = 0x5D, NONE, 2;
    LDSFLD6 = 0x5E, NONE, 2;
    LDSFLD = 0x5F, fixed(1), 2;
    STSFLD0 = 0x60, NONE, 2;
    STSFLD1 = 0x61, NONE, 2;
    STSFLD2 = 0x62, NONE, 2;
    STSFLD3 = 0x63, NONE, 2;
    STSFLD4 = 0x64, NONE, 2;
    STSFLD5 = 0x65, NONE, 2;
    STSFLD6 = 0x66, NONE, 2;
    STSFLD = 0x67, fixed(1), 2;
    LDLOC0 = 0x68, NONE, 2;
    LDLOC1 = 0x69, NONE, 2;
    LDLOC2 = 0x6A, NONE, 2;
    LDLOC3 = 0x6B, NONE, 2;
    LDLOC4 = 0x6C, NONE, 2;
    LDLOC5 = 0x6D, NONE, 2;
    LDLOC6 = 0x6E, NONE, 2;
    LDLOC = 0x6F, fixed(1), 2;
    STLOC0 = 0x70, NONE, 2;
    STLOC1 = 0x71, NONE, 2;
    STLOC2 = 0x72, NONE, 2;
    STLOC3 = 0x73, NONE, 2;
    STLOC4 = 0x74, NONE, 2;
    STLOC5 = 0x75, NONE, 2;
    STLOC6 = 0x76, NONE, 2;
    STLOC = 0x77, fixed(1), 2;
    LDARG0 = 0x78, NONE, 2;
    LDARG1 = 0x79, NONE, 2;
    LDARG2 = 0x7A, NONE, 2;
    LDARG3 = 0x7B, NONE, 2;
    LDARG4 = 0x7C, NONE, 2;
    LDARG5 = 0x7D, NONE, 2;
    LDARG6 = 0x7E, NONE, 2;
    LDARG = 0x7F, fixed(1), 2;
    STARG0 = 0x80, NONE, 2;
    STARG1 = 0x81, NONE, 2;
    STARG2 = 0x82, NONE, 2;
    STARG3 = 0x83, NONE, 2;
    STARG4 = 0x84, NONE, 2;
    STARG5 = 0x85, NONE, 2;
    STARG6 = 0x86, NONE, 2;
    STARG = 0x87, fixed(1), 2;
    // Splice
    NEWBUFFER = 0x88, NONE, 256;
    MEMCPY = 0x89, NONE, 2048;
    CAT = 0x8B, NONE, 2048;
    SUBSTR = 0x8C, NONE, 2048;
    LEFT = 0x8D, NONE, 2048;
    RIGHT = 0x8E, NONE, 2048;
    // Bitwise logic
    INVERT = 0x90, NONE, 4;
    AND = 0x91, NONE, 8;
    OR = 0x92, NONE, 8;
    XOR = 0x93, NONE, 8;
    EQUAL = 0x97, NONE, 32;
    NOTEQUAL = 0x98, NONE, 32;
    // Arithmetic
    SIGN = 0x99, NONE, 4;
    ABS = 0x9A, NONE, 4;
    NEGATE = 0x9B, NONE, 4;
    INC = 0x9C, NONE, 4;
    DEC = 0x9D, NONE, 4;
    ADD = 0x9E, NONE, 8;
    SUB = 0x9F, NONE, 8;
    MUL = 0xA0, NONE, 8;
    DIV = 0xA1, NONE, 8;
    MOD = 0xA2, NONE, 8;
    POW = 0xA3, NONE, 64;
    SQRT = 0xA4, NONE, 64;
    MODMUL = 0xA5, NONE, 32;
    MODPOW = 0xA6, NONE, 2048;
    SHL = 0xA8, NONE, 8;
    SHR = 0xA9, NONE, 8;
    NOT = 0xAA, NONE, 4;
    BOOLAND = 0xAB, NONE, 8;
    BOOLOR = 0xAC, NONE, 8;
    NZ = 0xB1, NONE, 4;
    NUMEQUAL = 0xB3, NONE, 8;
    NUMNOTEQUAL = 0xB4, NONE, 8;
    LT = 0xB5, NONE, 8;
    LE = 0xB6, NONE, 8;
    GT = 0xB7, NONE, 8;
    GE = 0xB8, NONE, 8;
    MIN = 0xB9, NONE, 8;
    MAX = 0xBA, NONE, 8;
    WITHIN = 0xBB, NONE, 8;
    // Compound-type
    PACKMAP = 0xBE, NONE, 2048;
    PACKSTRUCT = 0xBF, NONE, 2048;
    PACK = 0xC0, NONE, 2048;
    UNPACK = 0xC1, NONE, 2048;
    NEWARRAY0 = 0xC2, NONE, 16;
    NEWARRAY = 0xC3, NONE, 512;
    NEWARRAY_T = 0xC4, fixed(1), 512;
    NEWSTRUCT0 = 0xC5, NONE, 16;
    NEWSTRUCT = 0xC6, NONE, 512;
    NEWMAP = 0xC8, NONE, 8;
    SIZE = 0xCA, NONE, 4;
    HASKEY = 0xCB, NONE, 64;
    KEYS = 0xCC, NONE, 16;
    VALUES = 0xCD, NONE, 8192;
    PICKITEM = 0xCE, NONE, 64;
    APPEND = 0xCF, NONE, 8192;
    SETITEM = 0xD0, NONE, 8192;
    REVERSEITEMS = 0xD1, NONE, 8192;
    REMOVE = 0xD2, NONE, 16;
    CLEARITEMS = 0xD3, NONE, 16;
    POPITEM = 0xD4, NONE, 16;
    // Types
    ISNULL = 0xD8, NONE, 2;
    ISTYPE = 0xD9, fixed(1), 2;
    CONVERT = 0xDB, fixed(1), 8192;
    // Extensions
    ABORTMSG = 0xE0, NONE, 0;
    ASSERTMSG = 0xE1, NONE, 1;
}

impl OpCode {
    #[inline]
    pub const fn as_u8(&self) -> u8 {
        *self as u8
    }

    /// Looks an opcode up by mnemonic, case-insensitively.
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(name))
    }

    /// `PUSHDATA1`, `PUSHDATA2` or `PUSHDATA4`.
    #[inline]
    pub const fn is_push_data(&self) -> bool {
        matches!(self, OpCode::PUSHDATA1 | OpCode::PUSHDATA2 | OpCode::PUSHDATA4)
    }
}

impl TryFrom<u8> for OpCode {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_u8(byte).ok_or(byte)
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_roundtrip() {
        for op in OpCode::ALL {
            assert_eq!(OpCode::from_u8(op.as_u8()), Some(*op));
            assert_eq!(OpCode::from_mnemonic(op.mnemonic()), Some(*op));
        }
        assert_eq!(OpCode::ALL.len(), 196);
        assert!(OpCode::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_gaps_are_unknown() {
        for byte in [0x06u8, 0x07, 0x42, 0x44, 0x47, 0x4C, 0x4F, 0x8A, 0xC7, 0xDA, 0xE2, 0xFF] {
            assert_eq!(OpCode::from_u8(byte), None, "0x{byte:02X}");
        }
    }

    #[test]
    fn test_operand_layouts() {
        assert_eq!(OpCode::PUSHDATA2.operand_size(), OperandSize::Prefixed(2));
        assert_eq!(OpCode::SYSCALL.operand_size(), OperandSize::Fixed(4));
        assert_eq!(OpCode::TRY_L.operand_size(), OperandSize::Fixed(8));
        assert_eq!(OpCode::PUSHINT256.operand_size(), OperandSize::Fixed(32));
        assert_eq!(OpCode::JMP_L.mnemonic(), "JMP_L");
        assert_eq!(OpCode::ADD.operand_size(), OperandSize::None);
    }

    #[test]
    fn test_prices() {
        assert_eq!(OpCode::PUSH1.price(), 1);
        assert_eq!(OpCode::PUSHDATA4.price(), 4096);
        assert_eq!(OpCode::CALLT.price(), 32768);
        assert_eq!(OpCode::VALUES.price(), 8192);
        assert_eq!(OpCode::RET.price(), 0);
    }
}
