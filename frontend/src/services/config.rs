use anyhow::{Context, Result};
use backend::AppConfig;

const APP_CONFIG_YAML: &str = include_str!("../../app_config.yaml");

fn parse_bundled_config() -> Result<AppConfig> {
    AppConfig::from_yaml(APP_CONFIG_YAML).context("Bundled app_config.yaml is invalid")
}

/// Load the configuration bundled with the app, falling back to defaults
pub fn load_app_config() -> AppConfig {
    match parse_bundled_config() {
        Ok(config) => config,
        Err(e) => {
            gloo::console::warn!(format!("{:#}, using defaults", e));
            AppConfig::default()
        }
    }
}
