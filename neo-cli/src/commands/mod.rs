//! Subcommand implementations. Each returns the text printed on success.

pub mod disasm;
pub mod nef;
pub mod nep2;
pub mod rule;

use anyhow::{Context, Result};

/// Common result type for CLI commands
pub type CommandResult = Result<String>;

/// Decodes hex input, with or without a `0x` prefix.
pub(crate) fn parse_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    hex::decode(digits).with_context(|| format!("'{input}' is not valid hex"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("0x0c0161").unwrap(), vec![0x0c, 0x01, 0x61]);
        assert_eq!(parse_hex(" 40 ").unwrap(), vec![0x40]);
        assert!(parse_hex("0xzz").is_err());
    }
}
