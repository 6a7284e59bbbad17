use core::fmt;

use neo_config::ScryptSettings;
use neo_crypto::ScryptParams;
use serde::{Deserialize, Serialize};

use crate::error::ScryptParamsError;

/// Cost parameters of the scrypt key derivation, checked on construction.
///
/// Serialized as `{"n": .., "r": .., "p": ..}`, the shape NEP-6 wallets use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawScryptParameters")]
pub struct ScryptParameters {
    n: u64,
    r: u32,
    p: u32,
}

impl ScryptParameters {
    pub fn new(n: u64, r: u32, p: u32) -> Result<Self, ScryptParamsError> {
        let invalid = |reason: String| ScryptParamsError { n, r, p, reason };
        if n == 0 || !n.is_power_of_two() {
            return Err(invalid("n must be a power of two".into()));
        }
        if r == 0 {
            return Err(invalid("r must be positive".into()));
        }
        if p == 0 {
            return Err(invalid("p must be positive".into()));
        }

        let params = Self { n, r, p };
        params
            .as_crypto()
            .to_params(64)
            .map_err(|err| invalid(err.to_string()))?;
        Ok(params)
    }

    /// A cheap profile for fixtures and tests. Not suitable for real keys.
    pub const fn fast() -> Self {
        Self { n: 1024, r: 1, p: 1 }
    }

    #[inline]
    pub fn n(&self) -> u64 {
        self.n
    }

    #[inline]
    pub fn r(&self) -> u32 {
        self.r
    }

    #[inline]
    pub fn p(&self) -> u32 {
        self.p
    }

    pub(crate) fn as_crypto(&self) -> ScryptParams {
        ScryptParams {
            n: self.n,
            r: self.r,
            p: self.p,
        }
    }
}

impl Default for ScryptParameters {
    fn default() -> Self {
        Self {
            n: 16384,
            r: 8,
            p: 8,
        }
    }
}

impl fmt::Display for ScryptParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N={}, r={}, p={}", self.n, self.r, self.p)
    }
}

impl TryFrom<&ScryptSettings> for ScryptParameters {
    type Error = ScryptParamsError;

    fn try_from(settings: &ScryptSettings) -> Result<Self, Self::Error> {
        Self::new(settings.n, settings.r, settings.p)
    }
}

impl From<ScryptParameters> for ScryptSettings {
    fn from(params: ScryptParameters) -> Self {
        ScryptSettings {
            n: params.n,
            r: params.r,
            p: params.p,
        }
    }
}

#[derive(Deserialize)]
struct RawScryptParameters {
    n: u64,
    r: u32,
    p: u32,
}

impl TryFrom<RawScryptParameters> for ScryptParameters {
    type Error = ScryptParamsError;

    fn try_from(raw: RawScryptParameters) -> Result<Self, Self::Error> {
        Self::new(raw.n, raw.r, raw.p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_io::ErrorKind;

    #[test]
    fn test_default_matches_nep2() {
        let params = ScryptParameters::default();
        assert_eq!((params.n(), params.r(), params.p()), (16384, 8, 8));
        assert_eq!(ScryptParameters::new(16384, 8, 8).unwrap(), params);
    }

    #[test]
    fn test_rejects_bad_values() {
        for (n, r, p) in [(0, 8, 8), (1000, 8, 8), (16384, 0, 8), (16384, 8, 0)] {
            let err = ScryptParameters::new(n, r, p).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{n} {r} {p}");
        }
    }

    #[test]
    fn test_from_settings() {
        let settings = ScryptSettings { n: 2048, r: 4, p: 2 };
        let params = ScryptParameters::try_from(&settings).unwrap();
        assert_eq!(params.n(), 2048);
        assert_eq!(ScryptSettings::from(params), settings);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&ScryptParameters::default()).unwrap();
        assert_eq!(json, r#"{"n":16384,"r":8,"p":8}"#);

        let parsed: ScryptParameters = serde_json::from_str(r#"{"n":1024,"r":1,"p":1}"#).unwrap();
        assert_eq!(parsed, ScryptParameters::fast());
        assert!(serde_json::from_str::<ScryptParameters>(r#"{"n":1000,"r":1,"p":1}"#).is_err());
    }
}
