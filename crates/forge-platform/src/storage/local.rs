//! `window.localStorage` backend.
//! Persistent across page reloads; synchronous, string values only.

use wasm_bindgen::JsValue;
use web_sys::Storage;

use forge_core::ports::StoragePort;
use forge_types::{ForgeError, Result};

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Fails outside a window context or when the browser blocks storage
    /// (private mode, disabled cookies).
    pub fn open() -> Result<Self> {
        let window = web_sys::window()
            .ok_or_else(|| ForgeError::Storage("No window object".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(js_err)?
            .ok_or_else(|| ForgeError::Storage("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl StoragePort for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage.get_item(key).map_err(js_err)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // Throws QuotaExceededError when the origin is full
        self.storage.set_item(key, value).map_err(js_err)
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).map_err(js_err)
    }

    fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let len = self.storage.length().map_err(js_err)?;
        let mut keys = Vec::new();
        for i in 0..len {
            if let Some(key) = self.storage.key(i).map_err(js_err)? {
                if key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }
        Ok(keys)
    }

    fn clear(&self) -> Result<()> {
        self.storage.clear().map_err(js_err)
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}

fn js_err(e: JsValue) -> ForgeError {
    ForgeError::Storage(format!("{:?}", e))
}
