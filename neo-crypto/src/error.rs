use neo_io::ErrorKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    #[error("ecc256: invalid private key")]
    InvalidPrivateKey,

    #[error("ecc256: invalid public key encoding")]
    InvalidPublicKey,

    #[error("base58check: invalid character")]
    InvalidBase58,

    #[error("base58check: invalid length {0}")]
    InvalidLength(usize),

    #[error("base58check: invalid checksum")]
    InvalidChecksum,

    #[error("address: expected version {expected} but got {actual}")]
    InvalidAddressVersion { expected: u8, actual: u8 },

    #[error("aes-ecb: invalid data length {0}")]
    InvalidBlockLength(usize),

    #[error("scrypt: invalid params {0}")]
    InvalidScryptParams(String),
}

impl CryptoError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBase58 | Self::InvalidChecksum => ErrorKind::InvalidEncoding,
            Self::InvalidLength(_) | Self::InvalidAddressVersion { .. } => {
                ErrorKind::MalformedInput
            }
            Self::InvalidPrivateKey
            | Self::InvalidPublicKey
            | Self::InvalidBlockLength(_)
            | Self::InvalidScryptParams(_) => ErrorKind::InvalidArgument,
        }
    }
}
