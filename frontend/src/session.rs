use log::warn;

use crate::config::SESSION_TOKEN_KEY;

/// Where the bearer token survives a reload.
pub trait SessionStore {
    fn load_token(&self) -> Option<String>;
    fn save_token(&self, token: &str);
    fn clear_token(&self);
}

/// The browser's `localStorage`.
///
/// Storage can be missing or disabled (private windows, sandboxed frames);
/// failures are logged and the in-memory session carries on without it.
pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub fn new() -> Self {
        Self {
            key: SESSION_TOKEN_KEY,
        }
    }

    fn storage(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                warn!("localStorage unavailable: {:?}", err);
                None
            }
        }
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for LocalStorageStore {
    fn load_token(&self) -> Option<String> {
        let storage = self.storage()?;
        storage
            .get_item(self.key)
            .ok()
            .flatten()
            .filter(|token| !token.is_empty())
    }

    fn save_token(&self, token: &str) {
        if let Some(storage) = self.storage() {
            if let Err(err) = storage.set_item(self.key, token) {
                warn!("could not persist session token: {:?}", err);
            }
        }
    }

    fn clear_token(&self) {
        if let Some(storage) = self.storage() {
            if let Err(err) = storage.remove_item(self.key) {
                warn!("could not clear session token: {:?}", err);
            }
        }
    }
}

/// The signed-in user as far as this page knows. A token is trusted on
/// presence; the server is the one that checks it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    token: Option<String>,
    display_name: String,
}

impl Session {
    pub fn restore(store: &dyn SessionStore) -> Self {
        Self {
            token: store.load_token(),
            display_name: String::new(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn set_display_name(&mut self, name: &str) {
        self.display_name = name.to_string();
    }

    pub fn sign_in(&mut self, token: String, store: &dyn SessionStore) {
        store.save_token(&token);
        self.token = Some(token);
    }

    pub fn sign_out(&mut self, store: &dyn SessionStore) {
        store.clear_token();
        self.token = None;
        self.display_name.clear();
    }
}

#[cfg(test)]
pub(crate) use memory::MemoryStore;
