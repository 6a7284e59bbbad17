//! Nep2 command - protects and recovers private keys

use anyhow::{anyhow, Context};
use neo_sdk::{config::SdkSettings, wallet};

use super::{parse_hex, CommandResult};
use crate::args::{Nep2DecryptArgs, Nep2EncryptArgs};

fn scrypt_params(settings: &SdkSettings) -> anyhow::Result<wallet::ScryptParameters> {
    wallet::ScryptParameters::try_from(&settings.scrypt).context("invalid scrypt settings")
}

pub fn encrypt(settings: &SdkSettings, args: &Nep2EncryptArgs) -> CommandResult {
    let key: [u8; 32] = parse_hex(&args.private_key)?
        .try_into()
        .map_err(|bytes: Vec<u8>| anyhow!("private key must be 32 bytes, got {}", bytes.len()))?;
    let nep2 = wallet::encrypt_with_version(
        &args.password,
        &key,
        &scrypt_params(settings)?,
        settings.address_version,
    )?;
    Ok(nep2.to_string())
}

pub fn decrypt(settings: &SdkSettings, args: &Nep2DecryptArgs) -> CommandResult {
    let key = wallet::decrypt_with_version(
        &args.password,
        args.nep2.trim(),
        &scrypt_params(settings)?,
        settings.address_version,
    )?;
    Ok(hex::encode(key.as_be_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_sdk::config::ScryptSettings;

    fn fast_settings() -> SdkSettings {
        SdkSettings {
            scrypt: ScryptSettings { n: 1024, r: 1, p: 1 },
            ..SdkSettings::default()
        }
    }

    #[test]
    fn test_encrypt_then_decrypt() {
        let settings = fast_settings();
        let nep2 = encrypt(
            &settings,
            &Nep2EncryptArgs {
                private_key: "7d128a6d096f0c14c3a25a2b0c41cf79661bfcb4a8cc95aaaea28bde4d732344".into(),
                password: "city of zion".into(),
            },
        )
        .unwrap();
        assert_eq!(nep2, "6PYUUUFei6VyJgYgUNvti4YniZjNQM9u1idcwmFnQc67KEbXZwY8qNrMVK");

        let key = decrypt(
            &settings,
            &Nep2DecryptArgs {
                nep2,
                password: "city of zion".into(),
            },
        )
        .unwrap();
        assert_eq!(key, "7d128a6d096f0c14c3a25a2b0c41cf79661bfcb4a8cc95aaaea28bde4d732344");
    }

    #[test]
    fn test_short_key() {
        let err = encrypt(
            &fast_settings(),
            &Nep2EncryptArgs {
                private_key: "0102".into(),
                password: "pw".into(),
            },
        )
        .unwrap_err();
        assert!(err.to_string().contains("32 bytes"));
    }
}
