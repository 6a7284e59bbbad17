// Copyright @ 2023 - 2024, R3E Network
// All Rights Reserved

//! Interop services reachable through `SYSCALL`.
//!
//! A service is addressed by the first four bytes of the SHA-256 of its name,
//! read as a little-endian `u32`.

use std::collections::HashMap;

use neo_crypto::sha256;
use once_cell::sync::Lazy;

/// An interop service with its fixed price in fee-factor units.
///
/// Services with a price of zero are either free or charged dynamically at
/// execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InteropService {
    pub name: &'static str,
    pub price: u64,
}

impl InteropService {
    const fn new(name: &'static str, price: u64) -> Self {
        Self { name, price }
    }

    #[inline]
    pub fn id(&self) -> u32 {
        interop_id(self.name)
    }

    /// Looks a service up by `SYSCALL` operand.
    pub fn from_id(id: u32) -> Option<&'static InteropService> {
        BY_ID.get(&id).copied()
    }

    pub fn from_name(name: &str) -> Option<&'static InteropService> {
        SERVICES.iter().find(|service| service.name == name)
    }

    pub fn all() -> &'static [InteropService] {
        SERVICES
    }
}

/// `SYSCALL` operand for a service name.
pub fn interop_id(name: &str) -> u32 {
    let hash = sha256(name);
    u32::from_le_bytes([hash[0], hash[1], hash[2], hash[3]])
}

static BY_ID: Lazy<HashMap<u32, &'static InteropService>> =
    Lazy::new(|| SERVICES.iter().map(|service| (service.id(), service)).collect());

static SERVICES: &[InteropService] = &[
    InteropService::new("System.Contract.Call", 1 << 15),
    InteropService::new("System.Contract.CallNative", 0),
    InteropService::new("System.Contract.GetCallFlags", 1 << 10),
    InteropService::new("System.Contract.CreateStandardAccount", 1 << 8),
    InteropService::new("System.Contract.CreateMultisigAccount", 1 << 8),
    InteropService::new("System.Contract.NativeOnPersist", 0),
    InteropService::new("System.Contract.NativePostPersist", 0),
    InteropService::new("System.Crypto.CheckSig", 1 << 15),
    InteropService::new("System.Crypto.CheckMultisig", 0),
    InteropService::new("System.Iterator.Next", 1 << 15),
    InteropService::new("System.Iterator.Value", 1 << 4),
    InteropService::new("System.Runtime.Platform", 1 << 3),
    InteropService::new("System.Runtime.GetNetwork", 1 << 3),
    InteropService::new("System.Runtime.GetAddressVersion", 1 << 3),
    InteropService::new("System.Runtime.GetTrigger", 1 << 3),
    InteropService::new("System.Runtime.GetTime", 1 << 3),
    InteropService::new("System.Runtime.GetScriptContainer", 1 << 3),
    InteropService::new("System.Runtime.GetExecutingScriptHash", 1 << 4),
    InteropService::new("System.Runtime.GetCallingScriptHash", 1 << 4),
    InteropService::new("System.Runtime.GetEntryScriptHash", 1 << 4),
    InteropService::new("System.Runtime.LoadScript", 1 << 15),
    InteropService::new("System.Runtime.CheckWitness", 1 << 10),
    InteropService::new("System.Runtime.GetInvocationCounter", 1 << 4),
    InteropService::new("System.Runtime.GetRandom", 0),
    InteropService::new("System.Runtime.Log", 1 << 15),
    InteropService::new("System.Runtime.Notify", 1 << 15),
    InteropService::new("System.Runtime.GetNotifications", 1 << 12),
    InteropService::new("System.Runtime.GasLeft", 1 << 4),
    InteropService::new("System.Runtime.BurnGas", 1 << 4),
    InteropService::new("System.Runtime.CurrentSigners", 1 << 4),
    InteropService::new("System.Storage.GetContext", 1 << 4),
    InteropService::new("System.Storage.GetReadOnlyContext", 1 << 4),
    InteropService::new("System.Storage.AsReadOnly", 1 << 4),
    InteropService::new("System.Storage.Get", 1 << 15),
    InteropService::new("System.Storage.Find", 1 << 15),
    InteropService::new("System.Storage.Put", 1 << 15),
    InteropService::new("System.Storage.Delete", 1 << 15),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids() {
        assert_eq!(interop_id("System.Crypto.CheckSig"), 0x27B3_E756);
        let service = InteropService::from_id(0x27B3_E756).unwrap();
        assert_eq!(service.name, "System.Crypto.CheckSig");
        assert_eq!(service.price, 1 << 15);
    }

    #[test]
    fn test_ids_unique() {
        let mut ids: Vec<u32> = InteropService::all().iter().map(|s| s.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), InteropService::all().len());
    }

    #[test]
    fn test_lookup_by_name() {
        let log = InteropService::from_name("System.Runtime.Log").unwrap();
        assert_eq!(InteropService::from_id(log.id()), Some(log));
        assert!(InteropService::from_name("System.Runtime.Missing").is_none());
        assert!(InteropService::from_id(0).is_none());
    }
}
