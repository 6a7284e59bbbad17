// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! Static view of Neo N3 VM scripts.
//!
//! This crate knows the instruction set (opcode values, operand layout and
//! base prices) and the interop service table, and uses them to build and to
//! disassemble scripts. It does not execute anything.
//!
//! ```rust
//! use neo_vm::{disassemble, OpCode, ScriptBuilder};
//!
//! let mut builder = ScriptBuilder::new();
//! builder.emit_push_bytes(b"a")?.emit_syscall("System.Runtime.Log");
//! let script = builder.to_bytes();
//!
//! let disassembly = disassemble(&script);
//! assert_eq!(disassembly.instructions.len(), 2);
//! assert_eq!(disassembly.syscalls[0].name(), Some("System.Runtime.Log"));
//! assert!(disassembly.is_well_formed());
//! # let _ = OpCode::RET;
//! # Ok::<(), neo_vm::ScriptBuilderError>(())
//! ```

mod disassembler;
mod instruction;
pub mod interop;
mod op_code;
mod script_builder;

pub use disassembler::{
    disassemble, disassemble_with, render_listing, DataSegment, Disassembly, SyscallRef,
};
pub use instruction::{Instruction, InstructionCode};
pub use interop::{interop_id, InteropService};
pub use op_code::{OpCode, OperandSize};
pub use script_builder::{ScriptBuilder, ScriptBuilderError};
