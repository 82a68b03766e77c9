pub mod browser_storage;
pub mod config;
pub mod date_utils;
pub mod logging;
