use neo_crypto::CryptoError;
use neo_io::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("scrypt: invalid parameters n={n}, r={r}, p={p}: {reason}")]
pub struct ScryptParamsError {
    pub n: u64,
    pub r: u32,
    pub p: u32,
    pub reason: String,
}

impl ScryptParamsError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidArgument
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Nep2Error {
    #[error("nep2: not a valid Base58Check string")]
    InvalidEncoding,

    #[error("nep2: record is {0} bytes, expected 39")]
    InvalidLength(usize),

    #[error("nep2: unexpected prefix {0:02x?}")]
    InvalidPrefix([u8; 3]),

    #[error("nep2: invalid password")]
    InvalidPassword,

    #[error("nep2: invalid private key")]
    InvalidPrivateKey,

    #[error("nep2: {0}")]
    Scrypt(#[from] ScryptParamsError),

    #[error("nep2: {0}")]
    Crypto(#[from] CryptoError),
}

impl Nep2Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidEncoding => ErrorKind::InvalidEncoding,
            Self::InvalidLength(_) | Self::InvalidPrefix(_) => ErrorKind::MalformedInput,
            Self::InvalidPassword => ErrorKind::InvalidPassword,
            Self::InvalidPrivateKey => ErrorKind::InvalidArgument,
            Self::Scrypt(err) => err.kind(),
            Self::Crypto(err) => err.kind(),
        }
    }
}
