//! # Storage
//!
//! The plant collection is persisted as a single JSON blob under one key of a
//! string key-value store. In the browser that store is `localStorage`; in
//! tests it is [`MemoryBackend`].

pub mod json_repository;
pub mod memory;
pub mod traits;

pub use json_repository::JsonPlantRepository;
pub use memory::MemoryBackend;
pub use traits::{KeyValueBackend, PlantStorage};
