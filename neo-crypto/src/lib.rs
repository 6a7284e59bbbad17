// Copyright @ 2025 - present, R3E Network
// All Rights Reserved

//! Cryptographic building blocks used by the Neo N3 SDK codecs.
//!
//! * hashing: SHA-256, double SHA-256, RIPEMD-160 and Hash160
//! * Base58Check encoding
//! * secp256r1 keys, standard verification scripts and addresses
//! * AES-256-ECB over aligned buffers and scrypt key derivation

pub mod aes;
pub mod base58;
pub mod ecc256;
pub mod error;
pub mod hash;
pub mod scrypt;
pub mod verification;

pub use base58::{from_base58_check, to_base58_check};
pub use ecc256::{Keypair, PrivateKey, PublicKey, KEY_SIZE, PUBLIC_KEY_SIZE};
pub use error::CryptoError;
pub use hash::{double_sha256, hash160, ripemd160, sha256};
pub use scrypt::{DeriveScryptKey, ScryptParams};
pub use verification::{
    address_to_script_hash, script_hash_to_address, signature_redeem_script, CHECK_SIG_SERVICE,
};
