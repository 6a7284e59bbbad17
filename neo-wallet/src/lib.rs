//! Password protection of Neo N3 private keys.
//!
//! Keys are exported as NEP-2 records: the key is masked with scrypt-derived
//! material, encrypted with AES-256 and tagged with a hash of the owning
//! address so that a wrong password can be detected on import.

pub mod error;
pub mod nep2;
pub mod scrypt_params;

pub use error::{Nep2Error, ScryptParamsError};
pub use nep2::{decrypt, decrypt_with_version, encrypt, encrypt_with_version, Nep2Key};
pub use scrypt_params::ScryptParameters;
