//! Standard single-signature verification scripts and addresses.

use neo_primitives::{UInt160, UINT160_SIZE};

use crate::{from_base58_check, sha256, to_base58_check, CryptoError, PublicKey};

/// Interop service invoked by a single-signature verification script.
pub const CHECK_SIG_SERVICE: &str = "System.Crypto.CheckSig";

const PUSHDATA1: u8 = 0x0C;
const SYSCALL: u8 = 0x41;

/// `PUSHDATA1 33 <pubkey> SYSCALL <System.Crypto.CheckSig>`
pub fn signature_redeem_script(public_key: &PublicKey) -> Vec<u8> {
    let service = sha256(CHECK_SIG_SERVICE);

    let mut script = Vec::with_capacity(40);
    script.push(PUSHDATA1);
    script.push(public_key.as_bytes().len() as u8);
    script.extend_from_slice(public_key.as_bytes());
    script.push(SYSCALL);
    script.extend_from_slice(&service[..4]);
    script
}

/// Base58Check of `version || script_hash`.
pub fn script_hash_to_address(script_hash: &UInt160, version: u8) -> String {
    let mut payload = [0u8; 1 + UINT160_SIZE];
    payload[0] = version;
    payload[1..].copy_from_slice(script_hash.as_bytes());
    to_base58_check(payload)
}

pub fn address_to_script_hash(address: &str, version: u8) -> Result<UInt160, CryptoError> {
    let payload = from_base58_check(address)?;
    if payload.len() != 1 + UINT160_SIZE {
        return Err(CryptoError::InvalidLength(payload.len()));
    }
    if payload[0] != version {
        return Err(CryptoError::InvalidAddressVersion {
            expected: version,
            actual: payload[0],
        });
    }
    UInt160::from_bytes(&payload[1..]).map_err(|_| CryptoError::InvalidLength(payload.len()))
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    const PUBLIC: [u8; 33] =
        hex!("02028a99826edc0c97d18e22b6932373d908d323aa7f92656a77ec26e8861699ef");
    const ADDRESS: &str = "NPTmAHDxo6Pkyic8Nvu3kwyXoYJCvcCB6i";

    #[test]
    fn test_redeem_script_layout() {
        let public = PublicKey::from_sec1_bytes(&PUBLIC).unwrap();
        let script = signature_redeem_script(&public);
        assert_eq!(script.len(), 40);
        assert_eq!(&script[..2], &[0x0C, 0x21]);
        assert_eq!(&script[2..35], &PUBLIC);
        assert_eq!(&script[35..], &hex!("4156e7b327"));
    }

    #[test]
    fn test_public_key_to_address() {
        let public = PublicKey::from_sec1_bytes(&PUBLIC).unwrap();
        let address = script_hash_to_address(&public.script_hash(), 0x35);
        assert_eq!(address, ADDRESS);
    }

    #[test]
    fn test_address_roundtrip() {
        let hash = address_to_script_hash(ADDRESS, 0x35).unwrap();
        assert_eq!(script_hash_to_address(&hash, 0x35), ADDRESS);

        assert_eq!(
            address_to_script_hash(ADDRESS, 0x17),
            Err(CryptoError::InvalidAddressVersion {
                expected: 0x17,
                actual: 0x35
            })
        );
    }
}
