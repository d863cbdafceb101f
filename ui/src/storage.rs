//! Browser local storage backing for the session

use genie::auth::session::SessionStore;
use genie::types::{AppError, Result};
use gloo_storage::{LocalStorage, Storage};

/// Raw string access to `window.localStorage`.
///
/// Values are stored verbatim rather than JSON-encoded so tokens written by
/// earlier builds of the console are read back unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

fn js_error(action: &str, key: &str, err: wasm_bindgen::JsValue) -> AppError {
    AppError::Storage(format!("Failed to {} '{}': {:?}", action, key, err))
}

impl SessionStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| js_error("read", key, e))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| js_error("write", key, e))
    }

    fn remove(&self, key: &str) -> Result<()> {
        LocalStorage::raw()
            .remove_item(key)
            .map_err(|e| js_error("remove", key, e))
    }
}
