//! Rule command - converts witness rules between hex and JSON

use anyhow::Context;
use neo_sdk::{
    config::SdkSettings,
    witness::{RuleLimits, WitnessRule},
};

use super::{parse_hex, CommandResult};
use crate::args::{RuleDecodeArgs, RuleEncodeArgs};

pub fn decode(settings: &SdkSettings, args: &RuleDecodeArgs) -> CommandResult {
    let bytes = parse_hex(&args.hex)?;
    let rule = WitnessRule::decode_with(&bytes, &RuleLimits::from(&settings.witness_rules))?;
    Ok(serde_json::to_string_pretty(&rule)?)
}

pub fn encode(settings: &SdkSettings, args: &RuleEncodeArgs) -> CommandResult {
    let value: serde_json::Value =
        serde_json::from_str(&args.json).context("rule is not valid JSON")?;
    let rule = WitnessRule::from_json_with(&value, &RuleLimits::from(&settings.witness_rules))?;
    Ok(hex::encode(rule.to_bytes()))
}
