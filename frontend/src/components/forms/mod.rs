pub mod add_plant_form;
pub mod plant_fields;
