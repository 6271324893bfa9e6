//! Collaborator traits supplied by the ledger platform
//!
//! The contract logic sees the outside world through two narrow traits:
//! [`StateStore`], the ledger's key-value view, and [`CallerContext`],
//! the authenticated identity of the invoking client. Both are injected
//! at construction so the core stays independent of any particular
//! ledger platform and unit-testable with the in-memory fakes below.
//!
//! Calls are synchronous request/response round-trips. Serialization of
//! concurrent writers to the same key is the ledger's responsibility
//! (read-set/write-set validation at commit time), not this crate's.

use std::collections::HashMap;
use std::sync::RwLock;
use yatri_core::Result;

/// Key-value view of the ledger state
pub trait StateStore: Send + Sync {
    /// Read the value at `key`, `None` when the key is absent
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `value` at `key`, overwriting any existing value
    fn put(&self, key: &str, value: Vec<u8>) -> Result<()>;
}

/// Authenticated identity of the invoking client
///
/// The ledger platform verifies the caller before the invocation reaches
/// this code, so the lookup is infallible.
pub trait CallerContext: Send + Sync {
    /// Identity string of the current caller
    fn caller_id(&self) -> String;
}

/// In-memory state store for tests and simulation
///
/// The interior lock stands in for the external ledger; contract logic
/// itself owns no locks.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    data: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStateStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a key currently holds a value
    pub fn contains_key(&self, key: &str) -> bool {
        self.read_guard().contains_key(key)
    }

    /// Keys currently present, filtered by prefix
    pub fn keys_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.read_guard()
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect()
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, Vec<u8>>> {
        self.data.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.read_guard().get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut data = self.data.write().unwrap_or_else(|e| e.into_inner());
        data.insert(key.to_string(), value);
        Ok(())
    }
}

/// Caller context with a fixed identity, for tests
#[derive(Debug, Clone)]
pub struct StaticCaller(pub String);

impl StaticCaller {
    /// Create a caller context that always reports `id`
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl CallerContext for StaticCaller {
    fn caller_id(&self) -> String {
        self.0.clone()
    }
}

/// State store that fails every call, for exercising store-fault paths
#[cfg(test)]
pub(crate) struct FailingStateStore;

#[cfg(test)]
impl StateStore for FailingStateStore {
    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>> {
        Err(yatri_core::LedgerError::store("simulated read fault"))
    }

    fn put(&self, _key: &str, _value: Vec<u8>) -> Result<()> {
        Err(yatri_core::LedgerError::store("simulated write fault"))
    }
}
