//! Linear-sweep disassembly with static aggregates.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use neo_config::DisassemblerSettings;
use tracing::{debug, warn};

use crate::{Instruction, InstructionCode, InteropService, OpCode, OperandSize};

const MAX_INSTRUCTIONS_WEIGHT: f64 = 1000.0;
const MAX_SYSCALLS_WEIGHT: f64 = 50.0;
const MAX_DISTINCT_WEIGHT: f64 = 64.0;
const MAX_COST_WEIGHT: f64 = 1_000_000.0;
const DEFECT_PENALTY: f64 = 0.1;

/// A `SYSCALL` site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyscallRef {
    pub offset: usize,
    pub id: u32,
    pub service: Option<&'static InteropService>,
}

impl SyscallRef {
    #[inline]
    pub fn name(&self) -> Option<&'static str> {
        self.service.map(|service| service.name)
    }
}

/// Payload of a `PUSHDATA*` instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSegment {
    pub offset: usize,
    pub opcode: OpCode,
    pub data: Vec<u8>,
}

/// Result of a single pass over a script.
///
/// Unknown opcode bytes are kept as [`InstructionCode::Unknown`] and set
/// `invalid`; an operand running past the end of the script stops the pass and
/// records the offending offset in `truncated_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct Disassembly {
    pub instructions: Vec<Instruction>,
    pub syscalls: Vec<SyscallRef>,
    pub data_segments: Vec<DataSegment>,
    pub histogram: BTreeMap<OpCode, usize>,
    pub estimated_cost: u64,
    pub invalid: bool,
    pub truncated_at: Option<usize>,
    max_string_preview: usize,
}

impl Disassembly {
    #[inline]
    pub fn is_incomplete(&self) -> bool {
        self.truncated_at.is_some()
    }

    /// Neither an unknown opcode nor a truncated operand was seen.
    #[inline]
    pub fn is_well_formed(&self) -> bool {
        !self.invalid && !self.is_incomplete()
    }

    #[inline]
    pub fn distinct_opcodes(&self) -> usize {
        self.histogram.len()
    }

    /// Heuristic score in `[0, 1]` combining script size, syscall count,
    /// opcode variety and estimated cost.
    pub fn complexity_score(&self) -> f64 {
        let ratio = |value: f64, max: f64| (value / max).min(1.0);

        let mut score = 0.3 * ratio(self.instructions.len() as f64, MAX_INSTRUCTIONS_WEIGHT)
            + 0.25 * ratio(self.syscalls.len() as f64, MAX_SYSCALLS_WEIGHT)
            + 0.2 * ratio(self.distinct_opcodes() as f64, MAX_DISTINCT_WEIGHT)
            + 0.25 * ratio(self.estimated_cost as f64, MAX_COST_WEIGHT);
        if !self.is_well_formed() {
            score += DEFECT_PENALTY;
        }
        score.clamp(0.0, 1.0)
    }

    /// One line per instruction:
    /// `offset  MNEMONIC  operand-hex  [service]  ["preview"]`.
    pub fn listing(&self) -> String {
        let mut out = String::new();
        for instruction in &self.instructions {
            let _ = write!(out, "{:04X}  {:<14}", instruction.offset, instruction.code.to_string());
            if !instruction.operand.is_empty() {
                let _ = write!(out, "  {}", hex::encode(&instruction.operand));
            }
            if instruction.code == InstructionCode::Known(OpCode::SYSCALL) {
                match instruction.syscall {
                    Some(service) => {
                        let _ = write!(out, "  [{}]", service.name);
                    }
                    None => out.push_str("  [unknown service]"),
                }
            }
            if let Some(preview) = self.preview(instruction) {
                let _ = write!(out, "  {preview:?}");
            }
            out.push('\n');
        }
        if let Some(offset) = self.truncated_at {
            let _ = writeln!(out, "{offset:04X}  <truncated>");
        }
        out
    }

    fn preview(&self, instruction: &Instruction) -> Option<String> {
        if !instruction.opcode().is_some_and(|op| op.is_push_data()) {
            return None;
        }
        let data = &instruction.operand;
        if data.is_empty() || !data.iter().all(|b| (0x20..=0x7E).contains(b)) {
            return None;
        }

        let shown = data.len().min(self.max_string_preview);
        let mut text: String = data[..shown].iter().map(|b| *b as char).collect();
        if shown < data.len() {
            text.push_str("...");
        }
        Some(text)
    }
}

/// Disassembles with default settings.
#[inline]
pub fn disassemble(script: &[u8]) -> Disassembly {
    disassemble_with(script, &DisassemblerSettings::default())
}

pub fn disassemble_with(script: &[u8], settings: &DisassemblerSettings) -> Disassembly {
    let mut out = Disassembly {
        instructions: Vec::new(),
        syscalls: Vec::new(),
        data_segments: Vec::new(),
        histogram: BTreeMap::new(),
        estimated_cost: 0,
        invalid: false,
        truncated_at: None,
        max_string_preview: settings.max_string_preview,
    };

    let mut offset = 0usize;
    while offset < script.len() {
        let code = InstructionCode::from_byte(script[offset]);
        let InstructionCode::Known(op) = code else {
            warn!(offset, byte = script[offset], "unknown opcode");
            out.invalid = true;
            out.instructions.push(Instruction {
                offset,
                code,
                operand: Vec::new(),
                size: 1,
                syscall: None,
            });
            offset += 1;
            continue;
        };

        let Some((operand, size)) = read_operand(script, offset, op) else {
            warn!(offset, opcode = op.mnemonic(), "operand runs past end of script");
            out.truncated_at = Some(offset);
            break;
        };

        let mut syscall = None;
        if op == OpCode::SYSCALL {
            let id = u32::from_le_bytes([operand[0], operand[1], operand[2], operand[3]]);
            syscall = InteropService::from_id(id);
            if syscall.is_none() {
                debug!(offset, id, "unresolved interop service");
            }
            out.syscalls.push(SyscallRef {
                offset,
                id,
                service: syscall,
            });
        }
        if op.is_push_data() {
            out.data_segments.push(DataSegment {
                offset,
                opcode: op,
                data: operand.to_vec(),
            });
        }

        let instruction = Instruction {
            offset,
            code,
            operand: operand.to_vec(),
            size,
            syscall,
        };
        out.estimated_cost = out.estimated_cost.saturating_add(instruction.price());
        *out.histogram.entry(op).or_insert(0) += 1;
        out.instructions.push(instruction);
        offset += size;
    }

    debug!(
        instructions = out.instructions.len(),
        syscalls = out.syscalls.len(),
        invalid = out.invalid,
        incomplete = out.is_incomplete(),
        "disassembled script"
    );
    out
}

/// Disassembles with default settings and renders the listing.
#[inline]
pub fn render_listing(script: &[u8]) -> String {
    disassemble(script).listing()
}

/// Returns the operand (payload only for prefixed opcodes) and the total
/// instruction size, or `None` if the script ends first.
fn read_operand(script: &[u8], offset: usize, op: OpCode) -> Option<(&[u8], usize)> {
    let start = offset + 1;
    match op.operand_size() {
        OperandSize::None => Some((&[][..], 1)),
        OperandSize::Fixed(n) => {
            let end = start.checked_add(n as usize)?;
            script.get(start..end).map(|operand| (operand, end - offset))
        }
        OperandSize::Prefixed(width) => {
            let prefix_end = start + width as usize;
            let prefix = script.get(start..prefix_end)?;
            let mut len_bytes = [0u8; 4];
            len_bytes[..prefix.len()].copy_from_slice(prefix);
            let len = u32::from_le_bytes(len_bytes) as usize;

            let end = prefix_end.checked_add(len)?;
            script.get(prefix_end..end).map(|data| (data, end - offset))
        }
    }
}
