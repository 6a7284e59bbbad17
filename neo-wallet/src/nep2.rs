use core::{fmt, str::FromStr};

use neo_config::DEFAULT_ADDRESS_VERSION;
use neo_crypto::{
    aes::{aes256_ecb_decrypt, aes256_ecb_encrypt, AES256_KEY_SIZE},
    double_sha256, from_base58_check, script_hash_to_address, to_base58_check, DeriveScryptKey,
    PrivateKey, KEY_SIZE,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use subtle::ConstantTimeEq;
use tracing::debug;
use zeroize::Zeroizing;

use crate::{error::Nep2Error, scrypt_params::ScryptParameters};

/// Leading bytes of every NEP-2 record: version 0x01, 0x42, then the flag byte.
pub const NEP2_PREFIX: [u8; 3] = [0x01, 0x42, 0xE0];

/// Length of the decoded record.
pub const NEP2_RECORD_SIZE: usize = 39;

const SALT_SIZE: usize = 4;
const SALT_OFFSET: usize = NEP2_PREFIX.len();
const KEY_OFFSET: usize = SALT_OFFSET + SALT_SIZE;

/// A Base58Check encoded NEP-2 record, e.g. `6PY...`.
///
/// Holding a `Nep2Key` guarantees a well-formed record; it says nothing about
/// the password.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Nep2Key(String);

impl Nep2Key {
    pub fn parse(value: &str) -> Result<Self, Nep2Error> {
        decode_record(value)?;
        Ok(Self(value.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First four bytes of the double SHA-256 of the owning address.
    pub fn address_hash(&self) -> Result<[u8; SALT_SIZE], Nep2Error> {
        let record = decode_record(&self.0)?;
        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(&record[SALT_OFFSET..KEY_OFFSET]);
        Ok(salt)
    }
}

impl fmt::Display for Nep2Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Nep2Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Nep2Key").field(&self.0).finish()
    }
}

impl FromStr for Nep2Key {
    type Err = Nep2Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Nep2Key {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Nep2Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Nep2Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(de::Error::custom)
    }
}

/// Encrypts `private_key` for the default N3 address version.
pub fn encrypt(
    password: &str,
    private_key: &[u8; KEY_SIZE],
    params: &ScryptParameters,
) -> Result<Nep2Key, Nep2Error> {
    encrypt_with_version(password, private_key, params, DEFAULT_ADDRESS_VERSION)
}

pub fn encrypt_with_version(
    password: &str,
    private_key: &[u8; KEY_SIZE],
    params: &ScryptParameters,
    address_version: u8,
) -> Result<Nep2Key, Nep2Error> {
    let private = PrivateKey::new(*private_key).map_err(|_| Nep2Error::InvalidPrivateKey)?;
    let salt = address_hash(&private, address_version)?;

    let derived = password.derive_scrypt_key::<64>(&salt, params.as_crypto())?;
    let (mask, aes_key) = split_derived(&derived);

    let mut block = Zeroizing::new([0u8; KEY_SIZE]);
    for (i, byte) in block.iter_mut().enumerate() {
        *byte = private_key[i] ^ mask[i];
    }
    aes256_ecb_encrypt(&aes_key, block.as_mut_slice())?;

    let mut record = Vec::with_capacity(NEP2_RECORD_SIZE);
    record.extend_from_slice(&NEP2_PREFIX);
    record.extend_from_slice(&salt);
    record.extend_from_slice(block.as_slice());
    Ok(Nep2Key(to_base58_check(&record)))
}

/// Recovers the private key protected by `nep2` for the default N3 address version.
pub fn decrypt(
    password: &str,
    nep2: &str,
    params: &ScryptParameters,
) -> Result<PrivateKey, Nep2Error> {
    decrypt_with_version(password, nep2, params, DEFAULT_ADDRESS_VERSION)
}

/// Any password or key mismatch is reported as [`Nep2Error::InvalidPassword`].
pub fn decrypt_with_version(
    password: &str,
    nep2: &str,
    params: &ScryptParameters,
    address_version: u8,
) -> Result<PrivateKey, Nep2Error> {
    let record = decode_record(nep2)?;
    let stored_salt = &record[SALT_OFFSET..KEY_OFFSET];

    let derived = password.derive_scrypt_key::<64>(stored_salt, params.as_crypto())?;
    let (mask, aes_key) = split_derived(&derived);

    let mut block = Zeroizing::new([0u8; KEY_SIZE]);
    block.copy_from_slice(&record[KEY_OFFSET..]);
    aes256_ecb_decrypt(&aes_key, block.as_mut_slice())?;
    for (byte, m) in block.iter_mut().zip(mask.iter()) {
        *byte ^= *m;
    }

    let Ok(private) = PrivateKey::new(*block) else {
        debug!("nep2: decrypted material is not a valid scalar");
        return Err(Nep2Error::InvalidPassword);
    };
    let salt = address_hash(&private, address_version)?;
    if !bool::from(salt.as_slice().ct_eq(stored_salt)) {
        debug!("nep2: address hash mismatch");
        return Err(Nep2Error::InvalidPassword);
    }
    Ok(private)
}

fn decode_record(nep2: &str) -> Result<Zeroizing<Vec<u8>>, Nep2Error> {
    let record = Zeroizing::new(from_base58_check(nep2).map_err(|err| {
        debug!(%err, "nep2: base58check decode failed");
        Nep2Error::InvalidEncoding
    })?);
    if record.len() != NEP2_RECORD_SIZE {
        return Err(Nep2Error::InvalidLength(record.len()));
    }
    if record[..SALT_OFFSET] != NEP2_PREFIX {
        return Err(Nep2Error::InvalidPrefix([record[0], record[1], record[2]]));
    }
    Ok(record)
}

fn address_hash(private: &PrivateKey, address_version: u8) -> Result<[u8; SALT_SIZE], Nep2Error> {
    let public = private.public_key()?;
    let address = script_hash_to_address(&public.script_hash(), address_version);
    let hash = double_sha256(address.as_bytes());
    let mut salt = [0u8; SALT_SIZE];
    salt.copy_from_slice(&hash[..SALT_SIZE]);
    Ok(salt)
}

fn split_derived(derived: &[u8; 64]) -> (&[u8], Zeroizing<[u8; AES256_KEY_SIZE]>) {
    let mut aes_key = Zeroizing::new([0u8; AES256_KEY_SIZE]);
    aes_key.copy_from_slice(&derived[KEY_SIZE..]);
    (&derived[..KEY_SIZE], aes_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use neo_io::ErrorKind;

    const KEY: [u8; 32] = hex!("7d128a6d096f0c14c3a25a2b0c41cf79661bfcb4a8cc95aaaea28bde4d732344");
    const PASSWORD: &str = "city of zion";
    const FAST_NEP2: &str = "6PYUUUFei6VyJgYgUNvti4YniZjNQM9u1idcwmFnQc67KEbXZwY8qNrMVK";

    #[test]
    fn test_encrypt_known_answer() {
        let nep2 = encrypt(PASSWORD, &KEY, &ScryptParameters::fast()).unwrap();
        assert_eq!(nep2.as_str(), FAST_NEP2);
        assert_eq!(nep2.address_hash().unwrap(), hex!("bf97ad47"));
    }

    #[test]
    fn test_decrypt_known_answer() {
        let key = decrypt(PASSWORD, FAST_NEP2, &ScryptParameters::fast()).unwrap();
        assert_eq!(key.as_be_bytes(), &KEY);
    }

    #[test]
    fn test_wrong_password() {
        let err = decrypt("city of zion!", FAST_NEP2, &ScryptParameters::fast()).unwrap_err();
        assert_eq!(err, Nep2Error::InvalidPassword);
        assert_eq!(err.kind(), ErrorKind::InvalidPassword);
    }

    #[test]
    fn test_wrong_params_look_like_wrong_password() {
        let params = ScryptParameters::new(2048, 1, 1).unwrap();
        assert_eq!(
            decrypt(PASSWORD, FAST_NEP2, &params).unwrap_err(),
            Nep2Error::InvalidPassword
        );
    }

    #[test]
    fn test_malformed_records() {
        let params = ScryptParameters::fast();

        let err = decrypt(PASSWORD, "not-base58-0OIl", &params).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEncoding);

        let short = to_base58_check([0x01, 0x42, 0xE0, 0x00]);
        let err = decrypt(PASSWORD, &short, &params).unwrap_err();
        assert_eq!(err, Nep2Error::InvalidLength(4));
        assert_eq!(err.kind(), ErrorKind::MalformedInput);

        let mut record = vec![0x01, 0x43, 0xE0];
        record.resize(NEP2_RECORD_SIZE, 0);
        let err = decrypt(PASSWORD, &to_base58_check(&record), &params).unwrap_err();
        assert_eq!(err, Nep2Error::InvalidPrefix([0x01, 0x43, 0xE0]));
    }

    #[test]
    fn test_invalid_private_key() {
        let err = encrypt(PASSWORD, &[0u8; 32], &ScryptParameters::fast()).unwrap_err();
        assert_eq!(err, Nep2Error::InvalidPrivateKey);
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_nep2_key_parse_and_serde() {
        let key: Nep2Key = FAST_NEP2.parse().unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, format!("\"{FAST_NEP2}\""));
        assert_eq!(serde_json::from_str::<Nep2Key>(&json).unwrap(), key);
        assert!(serde_json::from_str::<Nep2Key>("\"6PYabc\"").is_err());
    }
}
