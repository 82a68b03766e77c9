pub mod carousel_modal;
pub mod dashboard;
pub mod forms;
pub mod gallery;
pub mod header;
pub mod home_panel;
pub mod plant_card;
pub mod plant_manager;
