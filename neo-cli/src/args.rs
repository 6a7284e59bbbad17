use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "neo-cli",
    version,
    about = "Inspect Neo N3 scripts, NEF files, NEP-2 keys and witness rules"
)]
pub struct Cli {
    /// Settings file (TOML); built-in defaults are used when omitted
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity; RUST_LOG overrides it
    #[arg(long = "log-level", value_enum, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    /// Emit logs as JSON lines
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Disassemble a script
    Disasm(DisasmArgs),

    /// NEF file operations
    Nef {
        #[command(subcommand)]
        command: NefCommand,
    },

    /// NEP-2 key protection
    Nep2 {
        #[command(subcommand)]
        command: Nep2Command,
    },

    /// Witness rule conversion
    Rule {
        #[command(subcommand)]
        command: RuleCommand,
    },
}

#[derive(Args, Debug)]
pub struct DisasmArgs {
    /// Script as hex (optionally 0x-prefixed), or base64 with --base64
    pub script: String,

    /// Treat the script argument as base64
    #[arg(long)]
    pub base64: bool,

    /// Print a JSON summary instead of the listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum NefCommand {
    /// Verify a NEF file and print its contents
    Inspect(NefInspectArgs),
}

#[derive(Args, Debug)]
pub struct NefInspectArgs {
    /// Path to the .nef file
    pub file: PathBuf,

    /// Print the NEF JSON form
    #[arg(long)]
    pub json: bool,

    /// Append a disassembly of the script
    #[arg(long)]
    pub disasm: bool,
}

#[derive(Subcommand, Debug)]
pub enum Nep2Command {
    /// Encrypt a hex private key
    Encrypt(Nep2EncryptArgs),
    /// Decrypt a NEP-2 string and print the hex private key
    Decrypt(Nep2DecryptArgs),
}

#[derive(Args, Debug)]
pub struct Nep2EncryptArgs {
    /// 32-byte private key as hex
    pub private_key: String,

    #[arg(long, env = "NEO_NEP2_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct Nep2DecryptArgs {
    /// NEP-2 string (6P...)
    pub nep2: String,

    #[arg(long, env = "NEO_NEP2_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Subcommand, Debug)]
pub enum RuleCommand {
    /// Decode a hex witness rule and print its JSON form
    Decode(RuleDecodeArgs),
    /// Encode a JSON witness rule and print it as hex
    Encode(RuleEncodeArgs),
}

#[derive(Args, Debug)]
pub struct RuleDecodeArgs {
    pub hex: String,
}

#[derive(Args, Debug)]
pub struct RuleEncodeArgs {
    pub json: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "neo-cli",
            "rule",
            "decode",
            "0120",
            "--log-level",
            "debug",
            "-c",
            "neo.toml",
        ])
        .unwrap();
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(cli.config, Some(PathBuf::from("neo.toml")));
        assert!(matches!(
            cli.command,
            Command::Rule {
                command: RuleCommand::Decode(RuleDecodeArgs { .. })
            }
        ));
    }
}
