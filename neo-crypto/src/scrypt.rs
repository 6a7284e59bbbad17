// Copyright @ 2025 - Present, R3E Network
// All Rights Reserved

use zeroize::Zeroizing;

use crate::CryptoError;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScryptParams {
    pub n: u64,
    pub r: u32,
    pub p: u32,
}

impl core::fmt::Display for ScryptParams {
    #[inline]
    fn fmt(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::write!(
            formatter,
            "ScryptParams{{n:{},r:{},p:{}}}",
            self.n,
            self.r,
            self.p
        )
    }
}

impl ScryptParams {
    /// Converts to the `scrypt` crate's parameters for an output of `len` bytes.
    ///
    /// `n` must be a power of two; the crate additionally bounds `r * p` and
    /// `log2(n)` against `r`.
    pub fn to_params(&self, len: usize) -> Result<scrypt::Params, CryptoError> {
        if self.n == 0 || !self.n.is_power_of_two() {
            return Err(CryptoError::InvalidScryptParams(format!(
                "n={} is not a power of two",
                self.n
            )));
        }

        scrypt::Params::new(self.n.ilog2() as u8, self.r, self.p, len)
            .map_err(|err| CryptoError::InvalidScryptParams(format!("{self}: {err}")))
    }
}

pub trait DeriveScryptKey {
    fn derive_scrypt_key<const N: usize>(
        &self,
        salt: &[u8],
        scrypt: ScryptParams,
    ) -> Result<Zeroizing<[u8; N]>, CryptoError>;
}

impl<T: AsRef<[u8]> + ?Sized> DeriveScryptKey for T {
    /// `N` must be in `[10, 64]`.
    fn derive_scrypt_key<const N: usize>(
        &self,
        salt: &[u8],
        scrypt: ScryptParams,
    ) -> Result<Zeroizing<[u8; N]>, CryptoError> {
        let params = scrypt.to_params(N)?;

        let mut derived = Zeroizing::new([0u8; N]);
        scrypt::scrypt(self.as_ref(), salt, &params, derived.as_mut_slice())
            .map_err(|err| CryptoError::InvalidScryptParams(err.to_string()))?;

        Ok(derived)
    }
}
