//! Hash functions used by Neo N3.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 of `data`.
#[inline]
pub fn sha256(data: impl AsRef<[u8]>) -> [u8; 32] {
    Sha256::digest(data.as_ref()).into()
}

/// SHA-256 applied twice, the "hash256" of the protocol.
#[inline]
pub fn double_sha256(data: impl AsRef<[u8]>) -> [u8; 32] {
    Sha256::digest(Sha256::digest(data.as_ref())).into()
}

#[inline]
pub fn ripemd160(data: impl AsRef<[u8]>) -> [u8; 20] {
    Ripemd160::digest(data.as_ref()).into()
}

/// RIPEMD-160 of SHA-256; script hashes are computed this way.
#[inline]
pub fn hash160(data: impl AsRef<[u8]>) -> [u8; 20] {
    ripemd160(sha256(data))
}
