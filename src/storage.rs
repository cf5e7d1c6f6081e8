//! Token Persistence
//!
//! `localStorage` backed [`TokenStore`]. Storage failures are logged and
//! treated as "no token"; the session then simply starts anonymous.

use planner_core::TokenStore;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct LocalStorageTokenStore {
    key: String,
}

impl LocalStorageTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    match web_sys::window()?.local_storage() {
        Ok(storage) => storage,
        Err(err) => {
            warn!(?err, "localStorage unavailable");
            None
        }
    }
}

impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Option<String> {
        local_storage()?.get_item(&self.key).ok().flatten()
    }

    fn save(&self, token: &str) {
        let Some(storage) = local_storage() else { return };
        if let Err(err) = storage.set_item(&self.key, token) {
            warn!(?err, key = %self.key, "failed to persist token");
        }
    }

    fn clear(&self) {
        let Some(storage) = local_storage() else { return };
        if let Err(err) = storage.remove_item(&self.key) {
            warn!(?err, key = %self.key, "failed to clear token");
        }
    }
}
