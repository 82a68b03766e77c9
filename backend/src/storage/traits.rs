//! # Storage Traits
//!
//! Storage abstractions used by the domain layer. Everything runs on the
//! browser's single thread, so implementations are not required to be
//! `Send` or `Sync`.

use anyhow::Result;
use shared::Plant;

/// A string key-value store such as the browser's `localStorage`
pub trait KeyValueBackend {
    /// Read the value stored under `key`
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` if present
    fn remove_item(&self, key: &str) -> Result<()>;
}

/// Persistence for the whole plant collection
pub trait PlantStorage {
    /// Load the persisted collection.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet and an error when
    /// the stored data cannot be read or parsed.
    fn load_plants(&self) -> Result<Option<Vec<Plant>>>;

    /// Replace the persisted collection with `plants`
    fn save_plants(&self, plants: &[Plant]) -> Result<()>;
}
