//! Key-value persistence for the cached session.
//!
//! ARCHITECTURE
//! ============
//! [`KeyValueStore`] is the raw text capability (`localStorage` in the
//! browser, memory in tests). [`Persistence`] sits on top and owns the JSON
//! encoding. Every operation is total: a missing store, a missing key, or an
//! undecodable value degrades to a no-op or `None`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key holding the serialized current identity.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Key holding the opaque access token.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Raw text key-value store.
pub trait KeyValueStore: Send + Sync {
    /// Stored text for `key`, if any.
    fn get_item(&self, key: &str) -> Option<String>;
    /// Store `raw` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, raw: &str);
    /// Delete `key`. Absent keys are ignored.
    fn remove_item(&self, key: &str);
}

/// In-process store. Contents live as long as the store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).get(key).cloned()
    }

    fn set_item(&self, key: &str, raw: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), raw.to_owned());
    }

    fn remove_item(&self, key: &str) {
        self.items.lock().unwrap_or_else(PoisonError::into_inner).remove(key);
    }
}

/// Store for environments without persistent storage (SSR, native hosts).
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopStore;

impl KeyValueStore for NoopStore {
    fn get_item(&self, _key: &str) -> Option<String> {
        None
    }

    fn set_item(&self, _key: &str, _raw: &str) {}

    fn remove_item(&self, _key: &str) {}
}

/// JSON-encoding adapter over a [`KeyValueStore`].
#[derive(Clone)]
pub struct Persistence {
    store: Arc<dyn KeyValueStore>,
}

impl Persistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Serialize `value` under `key`. `None` is written as `null`.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: Option<&T>) {
        match serde_json::to_string(&value) {
            Ok(raw) => self.store.set_item(key, &raw),
            Err(e) => log::warn!("persistence: could not encode {key}: {e}"),
        }
    }

    /// Decode the value under `key`.
    ///
    /// Absent, empty, `null` and undecodable entries all read as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get_item(key)?;
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str::<Option<T>>(&raw) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("persistence: ignoring undecodable {key}: {e}");
                None
            }
        }
    }

    /// Delete `key`.
    pub fn remove(&self, key: &str) {
        self.store.remove_item(key);
    }
}
