//! Script builder for the Neo Virtual Machine.

use thiserror::Error;

use crate::{interop_id, OpCode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptBuilderError {
    #[error("push payload of {0} bytes exceeds the PUSHDATA4 limit")]
    PushTooLarge(usize),
}

/// Helps construct VM scripts programmatically.
#[derive(Debug, Clone, Default)]
pub struct ScriptBuilder {
    script: Vec<u8>,
}

impl ScriptBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits a single raw byte.
    #[inline]
    pub fn emit(&mut self, byte: u8) -> &mut Self {
        self.script.push(byte);
        self
    }

    #[inline]
    pub fn emit_opcode(&mut self, op: OpCode) -> &mut Self {
        self.emit(op.as_u8())
    }

    /// Emits an opcode followed by the provided operand bytes, unchecked.
    #[inline]
    pub fn emit_instruction(&mut self, op: OpCode, operand: &[u8]) -> &mut Self {
        self.emit_opcode(op);
        self.script.extend_from_slice(operand);
        self
    }

    /// Emits `PUSHDATA1`, `PUSHDATA2` or `PUSHDATA4`, whichever is smallest.
    /// Payloads longer than `u32::MAX` bytes cannot be encoded.
    pub fn emit_push_bytes(&mut self, data: &[u8]) -> Result<&mut Self, ScriptBuilderError> {
        let (op, prefix) = push_prefix(data.len())?;
        self.emit_opcode(op);
        self.script.extend_from_slice(&prefix);
        self.script.extend_from_slice(data);
        Ok(self)
    }

    #[inline]
    pub fn emit_push_string(&mut self, value: &str) -> Result<&mut Self, ScriptBuilderError> {
        self.emit_push_bytes(value.as_bytes())
    }

    /// Emits the shortest push for `value`: `PUSHM1`, `PUSH0`..`PUSH16`, or a
    /// `PUSHINT*` of the narrowest width.
    pub fn emit_push_int(&mut self, value: i64) -> &mut Self {
        match value {
            -1 => self.emit_opcode(OpCode::PUSHM1),
            0..=16 => self.emit(OpCode::PUSH0.as_u8() + value as u8),
            v if i8::try_from(v).is_ok() => {
                self.emit_instruction(OpCode::PUSHINT8, &(v as i8).to_le_bytes())
            }
            v if i16::try_from(v).is_ok() => {
                self.emit_instruction(OpCode::PUSHINT16, &(v as i16).to_le_bytes())
            }
            v if i32::try_from(v).is_ok() => {
                self.emit_instruction(OpCode::PUSHINT32, &(v as i32).to_le_bytes())
            }
            v => self.emit_instruction(OpCode::PUSHINT64, &v.to_le_bytes()),
        }
    }

    #[inline]
    pub fn emit_push_bool(&mut self, value: bool) -> &mut Self {
        self.emit_opcode(if value { OpCode::PUSHT } else { OpCode::PUSHF })
    }

    #[inline]
    pub fn emit_push_null(&mut self) -> &mut Self {
        self.emit_opcode(OpCode::PUSHNULL)
    }

    /// Emits `SYSCALL` for the named interop service.
    #[inline]
    pub fn emit_syscall(&mut self, name: &str) -> &mut Self {
        self.emit_syscall_id(interop_id(name))
    }

    #[inline]
    pub fn emit_syscall_id(&mut self, id: u32) -> &mut Self {
        self.emit_instruction(OpCode::SYSCALL, &id.to_le_bytes())
    }

    /// Emits a jump or call with a signed offset, choosing the long form when
    /// the offset does not fit in one byte.
    pub fn emit_jump(&mut self, op: OpCode, offset: i32) -> &mut Self {
        let short = matches!(
            op,
            OpCode::JMP
                | OpCode::JMPIF
                | OpCode::JMPIFNOT
                | OpCode::JMPEQ
                | OpCode::JMPNE
                | OpCode::JMPGT
                | OpCode::JMPGE
                | OpCode::JMPLT
                | OpCode::JMPLE
                | OpCode::CALL
                | OpCode::ENDTRY
        );
        match i8::try_from(offset) {
            Ok(offset) if short => self.emit_instruction(op, &offset.to_le_bytes()),
            _ => {
                // long forms sit one byte after their short counterparts
                let long = if short {
                    OpCode::from_u8(op.as_u8() + 1).unwrap_or(op)
                } else {
                    op
                };
                self.emit_instruction(long, &offset.to_le_bytes())
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.script.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.script.is_empty()
    }

    #[inline]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.script.clone()
    }

    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.script
    }
}

fn push_prefix(len: usize) -> Result<(OpCode, Vec<u8>), ScriptBuilderError> {
    if let Ok(len) = u8::try_from(len) {
        Ok((OpCode::PUSHDATA1, vec![len]))
    } else if let Ok(len) = u16::try_from(len) {
        Ok((OpCode::PUSHDATA2, len.to_le_bytes().to_vec()))
    } else if let Ok(len) = u32::try_from(len) {
        Ok((OpCode::PUSHDATA4, len.to_le_bytes().to_vec()))
    } else {
        Err(ScriptBuilderError::PushTooLarge(len))
    }
}
