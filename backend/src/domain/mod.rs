//! # Domain Module
//!
//! Business logic for the plant tracker.
//!
//! ## Module Organization
//!
//! - **plant_store**: the plant collection and its only mutation entry points
//!   (add, update, delete, water), persisting after every change
//! - **watering**: watering date arithmetic and card status
//! - **dashboard**: statistics and due/upcoming lists
//! - **catalog**: search and type filtering for the plant manager
//! - **gallery**: photo lists and the wrap-around carousel
//! - **plant_form**: conversion of form input into create and patch requests
//! - **seed**: the sample collection used when nothing is stored
//! - **clock**: source of "today" and ID timestamps
//!
//! Everything except the store is a pure function of its inputs, so views can
//! recompute on every render.

pub mod catalog;
pub mod clock;
pub mod dashboard;
pub mod gallery;
pub mod plant_form;
pub mod plant_store;
pub mod seed;
pub mod watering;

pub use catalog::*;
pub use clock::*;
pub use dashboard::*;
pub use gallery::*;
pub use plant_form::*;
pub use plant_store::*;
pub use seed::*;
pub use watering::*;
