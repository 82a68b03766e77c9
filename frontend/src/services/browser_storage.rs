//! `localStorage` backend for the plant repository.

use anyhow::{anyhow, Result};
use backend::KeyValueBackend;
use web_sys::Storage;

/// Key-value backend over the browser's `localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<Storage> {
        web_sys::window()
            .ok_or_else(|| anyhow!("No browser window available"))?
            .local_storage()
            .map_err(|e| anyhow!("localStorage is not accessible: {:?}", e))?
            .ok_or_else(|| anyhow!("localStorage is disabled"))
    }
}

impl KeyValueBackend for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| anyhow!("Failed to read '{}': {:?}", key, e))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| anyhow!("Failed to write '{}': {:?}", key, e))
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| anyhow!("Failed to remove '{}': {:?}", key, e))
    }
}
