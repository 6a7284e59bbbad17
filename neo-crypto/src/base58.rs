//! Base58Check: base58 over `payload || double_sha256(payload)[..4]`.

use crate::{double_sha256, CryptoError};

const CHECKSUM_SIZE: usize = 4;

pub fn to_base58_check(payload: impl AsRef<[u8]>) -> String {
    let payload = payload.as_ref();
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_SIZE);
    buf.extend_from_slice(payload);

    let check = double_sha256(payload);
    buf.extend_from_slice(&check[..CHECKSUM_SIZE]);

    bs58::encode(buf).into_string()
}

/// Decodes and verifies a Base58Check string, returning the payload.
pub fn from_base58_check(src: impl AsRef<str>) -> Result<Vec<u8>, CryptoError> {
    let mut decoded = bs58::decode(src.as_ref())
        .into_vec()
        .map_err(|_| CryptoError::InvalidBase58)?;

    if decoded.len() <= CHECKSUM_SIZE {
        return Err(CryptoError::InvalidLength(decoded.len()));
    }

    let split = decoded.len() - CHECKSUM_SIZE;
    let check = double_sha256(&decoded[..split]);
    if check[..CHECKSUM_SIZE] != decoded[split..] {
        return Err(CryptoError::InvalidChecksum);
    }

    decoded.truncate(split);
    Ok(decoded)
}
