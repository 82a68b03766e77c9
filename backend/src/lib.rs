//! # Plant Tracker Backend
//!
//! In-process data layer for the plant tracker. Nothing here talks to a
//! server: the frontend compiles this crate into the WASM bundle and drives
//! it directly.
//!
//! - **config**: application settings with YAML loading
//! - **domain**: the plant store and the pure view derivations built on it
//! - **storage**: storage traits plus key-value backed persistence

pub mod config;
pub mod domain;
pub mod storage;

pub use config::AppConfig;
pub use domain::{Clock, PlantStore, SystemClock};
pub use storage::{JsonPlantRepository, KeyValueBackend, MemoryBackend, PlantStorage};
