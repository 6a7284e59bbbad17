//! Nef command - verifies a NEF file and describes it

use std::fmt::Write as _;

use anyhow::Context;
use neo_sdk::{config::SdkSettings, contract::NefFile, vm};
use tracing::info;

use super::CommandResult;
use crate::args::NefInspectArgs;

pub fn inspect(settings: &SdkSettings, args: &NefInspectArgs) -> CommandResult {
    let bytes = std::fs::read(&args.file)
        .with_context(|| format!("reading {}", args.file.display()))?;
    let nef = NefFile::decode_with(&bytes, &settings.nef)
        .with_context(|| format!("{} is not a valid NEF file", args.file.display()))?;
    info!(file = %args.file.display(), size = bytes.len(), "nef verified");

    let mut out = if args.json {
        serde_json::to_string_pretty(&nef)?
    } else {
        describe(&nef)
    };
    if args.disasm {
        let listing = vm::disassemble_with(nef.script(), &settings.disassembler).listing();
        out.push_str("\n\n");
        out.push_str(&listing);
    }
    Ok(out)
}

fn describe(nef: &NefFile) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "compiler: {}", nef.compiler());
    if !nef.source().is_empty() {
        let _ = writeln!(out, "source:   {}", nef.source());
    }
    let _ = writeln!(out, "checksum: 0x{:08x}", nef.checksum());
    let _ = writeln!(out, "script:   {} bytes", nef.script().len());
    let _ = write!(out, "tokens:   {}", nef.tokens().len());
    for token in nef.tokens() {
        let _ = write!(
            out,
            "\n  {}.{}({}) returns={} flags={}",
            token.hash, token.method, token.parameters_count, token.has_return_value, token.call_flags
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_nef(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("contract.nef");
        let bytes = NefFile::encode("neon", &[], &[0x11, 0x40]).unwrap();
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_inspect_text() {
        let dir = tempfile::tempdir().unwrap();
        let args = NefInspectArgs {
            file: write_nef(&dir),
            json: false,
            disasm: true,
        };
        let out = inspect(&SdkSettings::default(), &args).unwrap();
        assert!(out.starts_with("compiler: neon\n"));
        assert!(out.contains("script:   2 bytes"));
        assert!(out.contains("PUSH1"));
    }

    #[test]
    fn test_inspect_rejects_corruption() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_nef(&dir);
        let mut bytes = std::fs::read(&path).unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 1;
        std::fs::write(&path, bytes).unwrap();

        let args = NefInspectArgs {
            file: path,
            json: true,
            disasm: false,
        };
        let err = inspect(&SdkSettings::default(), &args).unwrap_err();
        assert!(format!("{err:#}").contains("checksum mismatch"));
    }
}
