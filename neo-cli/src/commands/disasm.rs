//! Disasm command - prints a listing or a JSON summary of a script

use anyhow::Context;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use neo_sdk::{config::SdkSettings, vm};
use serde_json::json;

use super::{parse_hex, CommandResult};
use crate::args::DisasmArgs;

pub fn execute(settings: &SdkSettings, args: &DisasmArgs) -> CommandResult {
    let script = if args.base64 {
        STANDARD
            .decode(args.script.trim())
            .context("script is not valid base64")?
    } else {
        parse_hex(&args.script)?
    };

    let disassembly = vm::disassemble_with(&script, &settings.disassembler);
    if !args.json {
        return Ok(disassembly.listing());
    }

    let syscalls: Vec<_> = disassembly
        .syscalls
        .iter()
        .map(|syscall| {
            json!({
                "offset": syscall.offset,
                "id": format!("0x{:08x}", syscall.id),
                "name": syscall.name(),
            })
        })
        .collect();
    let histogram: serde_json::Map<_, _> = disassembly
        .histogram
        .iter()
        .map(|(opcode, count)| (opcode.mnemonic().to_string(), json!(count)))
        .collect();

    let summary = json!({
        "length": script.len(),
        "instructions": disassembly.instructions.len(),
        "distinct_opcodes": disassembly.distinct_opcodes(),
        "syscalls": syscalls,
        "data_segments": disassembly.data_segments.len(),
        "histogram": histogram,
        "estimated_cost": disassembly.estimated_cost,
        "complexity": disassembly.complexity_score(),
        "invalid": disassembly.invalid,
        "truncated_at": disassembly.truncated_at,
    });
    Ok(serde_json::to_string_pretty(&summary)?)
}
