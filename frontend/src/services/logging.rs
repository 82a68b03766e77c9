//! Browser console logging.
//!
//! Everything logs through the `log` facade; `init` routes it to the
//! browser console at the configured level.

pub fn init(level: log::Level) {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(level) {
        gloo::console::error!("Failed to initialise logging:", e.to_string());
    }
}

/// Component-tagged logging helpers
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!("[{}] {}", component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!("[{}] {}", component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!("[{}] {}", component, message);
    }
}
