use crate::core::PreferenceStore;
use web_sys as web;

/// `window.localStorage`. Storage can be missing or throw (private mode,
/// disabled cookies); reads then yield nothing and writes are dropped.
pub struct LocalStore {
    storage: Option<web::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| match w.local_storage() {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[storage] localStorage unavailable: {:?}", e);
                None
            }
        });
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(s) = &self.storage {
            if let Err(e) = s.set_item(key, value) {
                log::warn!("[storage] write {} failed: {:?}", key, e);
            }
        }
    }
}
