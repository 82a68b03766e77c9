//! # Application Configuration
//!
//! Settings shared by the store and the views. Every field has a default so a
//! partial YAML document only overrides what it names.
//!
//! ```yaml
//! storage_key: "plants"
//! upcoming_limit: 5
//! gallery_placeholders:
//!   - "https://images.unsplash.com/photo-1485955900006-10f4d324d411?w=600"
//!   - "https://images.unsplash.com/photo-1459411552884-841db9b3cc2a?w=600"
//! fallback_image: "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=600"
//! gallery_mode: "GridAndList"
//! log_level: "info"
//! ```

use serde::{Deserialize, Serialize};
use shared::GalleryMode;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Local storage key holding the serialized plant collection
    pub storage_key: String,
    /// Maximum number of plants in the dashboard's upcoming list
    pub upcoming_limit: usize,
    /// Generic photos shown before each plant's own image in the gallery
    pub gallery_placeholders: Vec<String>,
    /// Image rendered when a plant has no photo
    pub fallback_image: String,
    /// Layouts offered by the gallery tab
    pub gallery_mode: GalleryMode,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "plants".to_string(),
            upcoming_limit: 5,
            gallery_placeholders: vec![
                "https://images.unsplash.com/photo-1485955900006-10f4d324d411?w=600".to_string(),
                "https://images.unsplash.com/photo-1459411552884-841db9b3cc2a?w=600".to_string(),
            ],
            fallback_image: "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=600"
                .to_string(),
            gallery_mode: GalleryMode::GridAndList,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parsed log level, `Info` when the configured name is unknown
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
