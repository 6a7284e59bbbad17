mod args;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use neo_sdk::config::SdkSettings;
use tracing::debug;

use args::{Cli, Command, NefCommand, Nep2Command, RuleCommand};

fn main() -> Result<()> {
    let cli = Cli::parse();
    neo_sdk::init_tracing_with(cli.log_level.as_str(), cli.log_json)?;

    let settings = match &cli.config {
        Some(path) => SdkSettings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => SdkSettings::default(),
    };
    debug!(?settings, "settings ready");

    let output = match cli.command {
        Command::Disasm(args) => commands::disasm::execute(&settings, &args)?,
        Command::Nef {
            command: NefCommand::Inspect(args),
        } => commands::nef::inspect(&settings, &args)?,
        Command::Nep2 { command } => match command {
            Nep2Command::Encrypt(args) => commands::nep2::encrypt(&settings, &args)?,
            Nep2Command::Decrypt(args) => commands::nep2::decrypt(&settings, &args)?,
        },
        Command::Rule { command } => match command {
            RuleCommand::Decode(args) => commands::rule::decode(&settings, &args)?,
            RuleCommand::Encode(args) => commands::rule::encode(&settings, &args)?,
        },
    };

    println!("{output}");
    Ok(())
}
