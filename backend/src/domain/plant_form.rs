//! Plant form handling.
//!
//! The create form and the card's edit mode both hold raw text exactly as
//! typed. This module turns that text into store requests so the components
//! only deal with presentation.

use shared::{
    parse_frequency, HealthStatus, Humidity, Plant, PlantDraft, PlantPatch, PlantValidationError,
    PLANT_TYPES, SUNLIGHT_OPTIONS,
};

/// Raw form input for creating or editing a plant
#[derive(Debug, Clone, PartialEq)]
pub struct PlantForm {
    pub name: String,
    pub plant_type: String,
    pub image: String,
    pub sunlight: String,
    pub temperature: String,
    pub humidity: Humidity,
    pub health: HealthStatus,
    pub notes: String,
    pub watering_frequency: String,
}

impl Default for PlantForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            plant_type: PLANT_TYPES[0].to_string(),
            image: String::new(),
            sunlight: SUNLIGHT_OPTIONS[0].to_string(),
            temperature: String::new(),
            humidity: Humidity::Medium,
            health: HealthStatus::Good,
            notes: String::new(),
            watering_frequency: "7".to_string(),
        }
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn changed<T: PartialEq>(new: T, old: &T) -> Option<T> {
    (new != *old).then_some(new)
}

impl PlantForm {
    /// Edit draft pre-filled from an existing plant
    pub fn from_plant(plant: &Plant) -> Self {
        Self {
            name: plant.name.clone(),
            plant_type: plant.plant_type.clone(),
            image: plant.image.clone().unwrap_or_default(),
            sunlight: plant.sunlight.clone(),
            temperature: plant.temperature.clone(),
            humidity: plant.humidity,
            health: plant.health,
            notes: plant.notes.clone().unwrap_or_default(),
            watering_frequency: plant.watering_frequency.to_string(),
        }
    }

    pub fn validate(&self) -> Result<(), PlantValidationError> {
        if self.name.trim().is_empty() {
            return Err(PlantValidationError::EmptyName);
        }
        Ok(())
    }

    /// Convert the form into a create request
    pub fn to_draft(&self) -> Result<PlantDraft, PlantValidationError> {
        self.validate()?;
        Ok(PlantDraft {
            name: self.name.trim().to_string(),
            plant_type: self.plant_type.clone(),
            image: optional(&self.image),
            sunlight: self.sunlight.clone(),
            temperature: self.temperature.trim().to_string(),
            humidity: self.humidity,
            health: self.health,
            notes: optional(&self.notes),
            watering_frequency: parse_frequency(&self.watering_frequency),
        })
    }

    /// Convert the form into a patch holding only the fields that differ
    /// from `original`
    pub fn to_patch(&self, original: &Plant) -> Result<PlantPatch, PlantValidationError> {
        self.validate()?;
        Ok(PlantPatch {
            name: changed(self.name.trim().to_string(), &original.name),
            plant_type: changed(self.plant_type.clone(), &original.plant_type),
            image: changed(optional(&self.image), &original.image),
            sunlight: changed(self.sunlight.clone(), &original.sunlight),
            temperature: changed(self.temperature.trim().to_string(), &original.temperature),
            humidity: changed(self.humidity, &original.humidity),
            health: changed(self.health, &original.health),
            notes: changed(optional(&self.notes), &original.notes),
            watering_frequency: changed(parse_frequency(&self.watering_frequency), &original.watering_frequency),
            last_watered: None,
            next_watering: None,
        })
    }
}
