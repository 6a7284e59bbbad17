// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! secp256r1 keys.

use core::fmt::{self, Debug, Formatter};

use neo_io::{IoError, IoResult, NeoDecode, NeoEncode, NeoRead, NeoWrite};
use neo_primitives::UInt160;
use p256::{
    elliptic_curve::{
        rand_core::{CryptoRng, RngCore},
        sec1::ToEncodedPoint,
    },
    PublicKey as P256PublicKey, SecretKey as P256SecretKey,
};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::{hash160, signature_redeem_script, CryptoError};

pub const KEY_SIZE: usize = 32;

/// Size of a compressed SEC1 public key.
pub const PUBLIC_KEY_SIZE: usize = 33;

/// A secp256r1 scalar, kept in a zeroizing buffer.
#[derive(Clone)]
pub struct PrivateKey {
    key: Zeroizing<[u8; KEY_SIZE]>,
}

impl PrivateKey {
    /// Wraps 32 big-endian bytes; fails unless they form a valid non-zero scalar.
    pub fn new(bytes: [u8; KEY_SIZE]) -> Result<Self, CryptoError> {
        let key = Zeroizing::new(bytes);
        P256SecretKey::from_slice(key.as_slice()).map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(Self { key })
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, CryptoError> {
        let bytes: [u8; KEY_SIZE] = slice
            .try_into()
            .map_err(|_| CryptoError::InvalidPrivateKey)?;
        Self::new(bytes)
    }

    #[inline]
    pub fn as_be_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.key
    }

    pub fn public_key(&self) -> Result<PublicKey, CryptoError> {
        let secret = P256SecretKey::from_slice(self.key.as_slice())
            .map_err(|_| CryptoError::InvalidPrivateKey)?;
        Ok(PublicKey::from_p256(&secret.public_key()))
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PrivateKey").field(&"***").finish()
    }
}

impl Eq for PrivateKey {}

impl PartialEq for PrivateKey {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.key.as_slice().ct_eq(other.key.as_slice()).into()
    }
}

impl PartialEq<[u8]> for PrivateKey {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.key.as_slice().ct_eq(other).into()
    }
}

/// A secp256r1 point in compressed SEC1 form, validated on construction.
#[derive(Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct PublicKey {
    compressed: [u8; PUBLIC_KEY_SIZE],
}

impl PublicKey {
    fn from_p256(public: &P256PublicKey) -> Self {
        let encoded = public.to_encoded_point(true);
        let mut compressed = [0u8; PUBLIC_KEY_SIZE];
        compressed.copy_from_slice(encoded.as_bytes());
        Self { compressed }
    }

    /// Accepts compressed or uncompressed SEC1 bytes of a point on the curve.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        let public =
            P256PublicKey::from_sec1_bytes(bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self::from_p256(&public))
    }

    #[inline]
    pub fn to_compressed(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.compressed
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.compressed
    }

    /// Hash160 of the standard single-signature verification script.
    pub fn script_hash(&self) -> UInt160 {
        UInt160::from(hash160(signature_redeem_script(self)))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.compressed)
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("compressed", &self.to_hex())
            .finish()
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl core::str::FromStr for PublicKey {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| CryptoError::InvalidPublicKey)?;
        Self::from_sec1_bytes(&bytes)
    }
}

impl NeoEncode for PublicKey {
    #[inline]
    fn neo_encode<W: NeoWrite>(&self, writer: &mut W) {
        writer.write_bytes(&self.compressed);
    }

    #[inline]
    fn size(&self) -> usize {
        PUBLIC_KEY_SIZE
    }
}

impl NeoDecode for PublicKey {
    /// Reads a fixed 33-byte compressed point.
    fn neo_decode<R: NeoRead>(reader: &mut R) -> IoResult<Self> {
        let bytes: [u8; PUBLIC_KEY_SIZE] = reader.read_array()?;
        if bytes[0] != 0x02 && bytes[0] != 0x03 {
            return Err(IoError::InvalidValue("PublicKey"));
        }
        PublicKey::from_sec1_bytes(&bytes).map_err(|_| IoError::InvalidValue("PublicKey"))
    }
}

#[derive(Clone)]
pub struct Keypair {
    pub private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl Keypair {
    #[inline]
    pub fn from_private(private_key: PrivateKey) -> Result<Self, CryptoError> {
        let public_key = private_key.public_key()?;
        Ok(Self {
            private_key,
            public_key,
        })
    }

    pub fn generate<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        let secret = P256SecretKey::random(rng);
        let public_key = PublicKey::from_p256(&secret.public_key());
        let private_key = PrivateKey {
            key: Zeroizing::new(secret.to_bytes().into()),
        };
        Self {
            private_key,
            public_key,
        }
    }
}

impl Debug for Keypair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use neo_io::MemoryReader;
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    const PRIVATE: [u8; 32] =
        hex!("7d128a6d096f0c14c3a25a2b0c41cf79661bfcb4a8cc95aaaea28bde4d732344");
    const PUBLIC: [u8; 33] =
        hex!("02028a99826edc0c97d18e22b6932373d908d323aa7f92656a77ec26e8861699ef");

    #[test]
    fn compressed_roundtrip() {
        let pk = PublicKey::from_sec1_bytes(&PUBLIC).unwrap();

        let mut buf = Vec::new();
        pk.neo_encode(&mut buf);
        assert_eq!(buf.len(), PUBLIC_KEY_SIZE);
        let mut reader = MemoryReader::new(buf.as_slice());
        let decoded = PublicKey::neo_decode(&mut reader).unwrap();
        assert_eq!(decoded, pk);
        assert_eq!(pk.to_string().parse::<PublicKey>().unwrap(), pk);
    }

    #[test]
    fn private_derives_expected_public() {
        let private = PrivateKey::new(PRIVATE).unwrap();
        assert_eq!(private.public_key().unwrap().to_compressed(), PUBLIC);
    }

    #[test]
    fn invalid_scalars_rejected() {
        assert_eq!(
            PrivateKey::new([0u8; KEY_SIZE]).unwrap_err(),
            CryptoError::InvalidPrivateKey
        );
        assert!(PrivateKey::new([0xFF; KEY_SIZE]).is_err());
        assert!(PrivateKey::from_slice(&PRIVATE[..31]).is_err());
    }

    #[test]
    fn off_curve_point_rejected() {
        let mut bytes = PUBLIC;
        bytes[32] ^= 0x01;
        bytes[0] = 0x05;
        assert!(PublicKey::from_sec1_bytes(&bytes).is_err());

        let mut reader = MemoryReader::new(&bytes);
        assert!(PublicKey::neo_decode(&mut reader).is_err());
    }

    #[test]
    fn keypair_generate_produces_valid_keys() {
        let mut rng = StdRng::seed_from_u64(7);
        let keypair = Keypair::generate(&mut rng);
        let derived = Keypair::from_private(keypair.private_key.clone()).unwrap();
        assert_eq!(derived.public_key, keypair.public_key);
        assert!(!format!("{keypair:?}").contains("private"));
    }
}
