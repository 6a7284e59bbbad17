use std::fmt;

use bitflags::bitflags;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Permissions granted to a contract call.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct CallFlags: u8 {
        const NONE = 0b0000_0000;
        const READ_STATES = 0b0000_0001;
        const WRITE_STATES = 0b0000_0010;
        const ALLOW_CALL = 0b0000_0100;
        const ALLOW_NOTIFY = 0b0000_1000;
        const STATES = Self::READ_STATES.bits() | Self::WRITE_STATES.bits();
        const READ_ONLY = Self::READ_STATES.bits() | Self::ALLOW_CALL.bits();
        const ALL = Self::STATES.bits() | Self::ALLOW_CALL.bits() | Self::ALLOW_NOTIFY.bits();
    }
}

impl Default for CallFlags {
    fn default() -> Self {
        CallFlags::NONE
    }
}

// Largest value first; composite names win over their parts.
const NAMED: [(&str, CallFlags); 7] = [
    ("All", CallFlags::ALL),
    ("AllowNotify", CallFlags::ALLOW_NOTIFY),
    ("ReadOnly", CallFlags::READ_ONLY),
    ("AllowCall", CallFlags::ALLOW_CALL),
    ("States", CallFlags::STATES),
    ("WriteStates", CallFlags::WRITE_STATES),
    ("ReadStates", CallFlags::READ_STATES),
];

impl CallFlags {
    /// Name list as used by the reference JSON, e.g. `"ReadOnly, AllowNotify"`.
    pub fn to_names(self) -> String {
        if self.is_empty() {
            return "None".to_string();
        }

        let mut remaining = self;
        let mut picked = Vec::new();
        for (name, flag) in NAMED {
            if remaining.contains(flag) && !flag.is_empty() {
                picked.push(name);
                remaining.remove(flag);
            }
        }
        picked.reverse();
        picked.join(", ")
    }

    /// Parses a comma separated name list. Names are matched case-insensitively.
    pub fn from_names(value: &str) -> Option<Self> {
        let mut flags = CallFlags::NONE;
        for part in value.split(',').map(str::trim) {
            if part.eq_ignore_ascii_case("None") {
                continue;
            }
            let (_, flag) = NAMED
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(part))?;
            flags |= *flag;
        }
        Some(flags)
    }
}

impl fmt::Display for CallFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_names())
    }
}

impl Serialize for CallFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_names())
    }
}

impl<'de> Deserialize<'de> for CallFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FlagsVisitor;

        impl<'de> de::Visitor<'de> for FlagsVisitor {
            type Value = CallFlags;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("call flag names or an integer in 0..=15")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u8::try_from(v)
                    .ok()
                    .and_then(CallFlags::from_bits)
                    .ok_or_else(|| E::custom(format!("invalid call flags {v}")))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                let v = u64::try_from(v).map_err(|_| E::custom(format!("invalid call flags {v}")))?;
                self.visit_u64(v)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                CallFlags::from_names(v).ok_or_else(|| E::custom(format!("invalid call flags '{v}'")))
            }
        }

        deserializer.deserialize_any(FlagsVisitor)
    }
}
