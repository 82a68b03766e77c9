//! # JSON Plant Repository
//!
//! Stores the plant collection as a JSON array under a single key:
//!
//! ```json
//! [{"id":1718000000000,"name":"Monstera","type":"Tropical", ... }]
//! ```
//!
//! There is no schema version. Data that no longer parses is reported as an
//! error and the caller decides how to recover.

use anyhow::{Context, Result};
use log::debug;
use shared::Plant;

use super::traits::{KeyValueBackend, PlantStorage};

#[derive(Debug, Clone)]
pub struct JsonPlantRepository<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueBackend> JsonPlantRepository<B> {
    pub fn new(backend: B, key: impl Into<String>) -> Self {
        Self { backend, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: KeyValueBackend> PlantStorage for JsonPlantRepository<B> {
    fn load_plants(&self) -> Result<Option<Vec<Plant>>> {
        let raw = self
            .backend
            .get_item(&self.key)
            .with_context(|| format!("Failed to read '{}' from storage", self.key))?;

        let Some(raw) = raw else {
            debug!("No plant collection stored under '{}'", self.key);
            return Ok(None);
        };

        let plants: Vec<Plant> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse plant collection stored under '{}'", self.key))?;

        debug!("Loaded {} plants from '{}'", plants.len(), self.key);
        Ok(Some(plants))
    }

    fn save_plants(&self, plants: &[Plant]) -> Result<()> {
        let raw = serde_json::to_string(plants).context("Failed to serialize plant collection")?;

        self.backend
            .set_item(&self.key, &raw)
            .with_context(|| format!("Failed to write '{}' to storage", self.key))?;

        debug!("Saved {} plants to '{}'", plants.len(), self.key);
        Ok(())
    }
}
