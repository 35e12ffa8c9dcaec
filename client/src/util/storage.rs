//! Browser `localStorage` backing for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session crate only knows the `KeyValueStore` capability. This module
//! centralizes the hydrate-only web-sys glue behind it and picks the no-op
//! store wherever a browser store is missing (SSR, private modes that deny
//! storage access).

use std::sync::Arc;

use session::{KeyValueStore, NoopStore};

/// `window.localStorage`, looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "hydrate")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            browser_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set_item(&self, key: &str, raw: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = browser_storage() else {
                return;
            };
            if let Err(e) = storage.set_item(key, raw) {
                log::warn!("localStorage: failed to write {key}: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, raw);
        }
    }

    fn remove_item(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = browser_storage() else {
                return;
            };
            if let Err(e) = storage.remove_item(key) {
                log::warn!("localStorage: failed to remove {key}: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// Whether the current environment exposes `localStorage`.
pub fn has_browser_storage() -> bool {
    #[cfg(feature = "hydrate")]
    {
        browser_storage().is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// The store the session should persist to in this environment.
pub fn platform_store() -> Arc<dyn KeyValueStore> {
    if has_browser_storage() {
        Arc::new(LocalStorage)
    } else {
        log::debug!("localStorage unavailable; session will not persist");
        Arc::new(NoopStore)
    }
}
