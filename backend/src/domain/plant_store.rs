//! # Plant Store
//!
//! Owns the plant collection. `add`, `update`, `delete` and `water` are the
//! only ways to change it, and each successful change writes the whole
//! collection back to storage.
//!
//! Storage failures never surface to the caller: unreadable data is replaced
//! by the sample collection and failed writes are logged while the in-memory
//! collection stays authoritative.

use log::{error, info, warn};
use shared::{clamp_frequency, Plant, PlantDraft, PlantPatch, PlantValidationError};

use super::clock::{Clock, SystemClock};
use super::seed::seed_plants;
use super::watering::next_watering_date;
use crate::storage::PlantStorage;

pub struct PlantStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    plants: Vec<Plant>,
}

impl<S: PlantStorage, C: Clock> PlantStore<S, C> {
    /// Load the persisted collection, falling back to the sample collection
    /// when nothing usable is stored
    pub fn load(storage: S, clock: C) -> Self {
        let (plants, seeded) = match storage.load_plants() {
            Ok(Some(plants)) if !plants.is_empty() => {
                info!("Loaded {} plants from storage", plants.len());
                (plants, false)
            }
            Ok(_) => {
                info!("No stored plants, starting with the sample collection");
                (seed_plants(), true)
            }
            Err(e) => {
                warn!("Discarding unreadable plant collection: {:#}", e);
                (seed_plants(), true)
            }
        };

        let store = Self { storage, clock, plants };
        if seeded {
            store.persist();
        }
        store
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn get(&self, id: u64) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Create a plant from a draft, watered today
    pub fn add(&mut self, draft: PlantDraft) -> Result<Plant, PlantValidationError> {
        let name = validate_name(&draft.name)?;
        let today = self.clock.today();
        let watering_frequency = clamp_frequency(i64::from(draft.watering_frequency));
        let last_id = self.plants.iter().map(|p| p.id).max();

        let plant = Plant {
            id: Plant::generate_id(self.clock.now_millis(), last_id),
            name,
            plant_type: draft.plant_type.trim().to_string(),
            image: non_blank(draft.image),
            sunlight: draft.sunlight,
            temperature: draft.temperature.trim().to_string(),
            humidity: draft.humidity,
            health: draft.health,
            notes: non_blank(draft.notes),
            watering_frequency,
            last_watered: today,
            next_watering: next_watering_date(today, watering_frequency),
            created_at: today,
        };

        self.plants.push(plant.clone());
        self.persist();

        info!("Added plant '{}' with ID {}", plant.name, plant.id);
        Ok(plant)
    }

    /// Remove a plant. Returns false (and writes nothing) for an unknown ID.
    pub fn delete(&mut self, id: u64) -> bool {
        let Some(index) = self.plants.iter().position(|p| p.id == id) else {
            warn!("Delete ignored, plant {} not found", id);
            return false;
        };

        let removed = self.plants.remove(index);
        self.persist();

        info!("Deleted plant '{}' with ID {}", removed.name, removed.id);
        true
    }

    /// Merge the supplied fields into a plant.
    ///
    /// Returns `Ok(None)` for an unknown ID. The next watering date is left
    /// as given; only `add` and `water` recompute it.
    pub fn update(&mut self, id: u64, patch: PlantPatch) -> Result<Option<Plant>, PlantValidationError> {
        let name = patch.name.as_deref().map(validate_name).transpose()?;

        let Some(plant) = self.plants.iter_mut().find(|p| p.id == id) else {
            warn!("Update ignored, plant {} not found", id);
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(plant.clone()));
        }

        apply_patch(plant, PlantPatch { name, ..patch });
        let updated = plant.clone();
        self.persist();

        info!("Updated plant '{}' with ID {}", updated.name, updated.id);
        Ok(Some(updated))
    }

    /// Mark a plant watered today and schedule its next watering
    pub fn water(&mut self, id: u64) -> Option<Plant> {
        let today = self.clock.today();
        let Some(plant) = self.plants.iter_mut().find(|p| p.id == id) else {
            warn!("Water ignored, plant {} not found", id);
            return None;
        };

        plant.last_watered = today;
        plant.next_watering = next_watering_date(today, plant.watering_frequency);
        let watered = plant.clone();
        self.persist();

        info!("Watered '{}', next watering on {}", watered.name, watered.next_watering);
        Some(watered)
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save_plants(&self.plants) {
            error!("Failed to persist plant collection: {:#}", e);
        }
    }
}

fn validate_name(name: &str) -> Result<String, PlantValidationError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(PlantValidationError::EmptyName);
    }
    Ok(name.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn apply_patch(plant: &mut Plant, patch: PlantPatch) {
    if let Some(name) = patch.name {
        plant.name = name;
    }
    if let Some(plant_type) = patch.plant_type {
        plant.plant_type = plant_type.trim().to_string();
    }
    if let Some(image) = patch.image {
        plant.image = non_blank(image);
    }
    if let Some(sunlight) = patch.sunlight {
        plant.sunlight = sunlight;
    }
    if let Some(temperature) = patch.temperature {
        plant.temperature = temperature.trim().to_string();
    }
    if let Some(humidity) = patch.humidity {
        plant.humidity = humidity;
    }
    if let Some(health) = patch.health {
        plant.health = health;
    }
    if let Some(notes) = patch.notes {
        plant.notes = non_blank(notes);
    }
    if let Some(frequency) = patch.watering_frequency {
        plant.watering_frequency = clamp_frequency(i64::from(frequency));
    }
    if let Some(last_watered) = patch.last_watered {
        plant.last_watered = last_watered;
    }
    if let Some(next_watering) = patch.next_watering {
        plant.next_watering = next_watering;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::storage::{JsonPlantRepository, KeyValueBackend, MemoryBackend};
    use anyhow::Result;
    use chrono::NaiveDate;
    use shared::HealthStatus;

    type TestStore = PlantStore<JsonPlantRepository<MemoryBackend>, FixedClock>;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn create_test_store() -> (TestStore, MemoryBackend) {
        let backend = MemoryBackend::new();
        let repo = JsonPlantRepository::new(backend.clone(), "plants");
        (PlantStore::load(repo, FixedClock::new(today())), backend)
    }

    fn stored_plants(backend: &MemoryBackend) -> Vec<Plant> {
        let raw = backend.get_item("plants").unwrap().expect("collection should be stored");
        serde_json::from_str(&raw).unwrap()
    }

    fn draft(name: &str, frequency: u32) -> PlantDraft {
        PlantDraft {
            name: name.to_string(),
            plant_type: "Herb".to_string(),
            watering_frequency: frequency,
            ..Default::default()
        }
    }

    #[test]
    fn test_load_empty_storage_seeds_and_persists() {
        let (store, backend) = create_test_store();

        assert_eq!(store.plants(), seed_plants().as_slice());
        assert_eq!(stored_plants(&backend), seed_plants());
    }

    #[test]
    fn test_load_empty_array_seeds() {
        let backend = MemoryBackend::new();
        backend.set_item("plants", "[]").unwrap();
        let store = PlantStore::load(JsonPlantRepository::new(backend, "plants"), FixedClock::new(today()));

        assert_eq!(store.plants(), seed_plants().as_slice());
    }

    #[test]
    fn test_load_corrupted_storage_seeds() {
        let backend = MemoryBackend::new();
        backend.set_item("plants", "[{\"broken\": tru").unwrap();
        let store = PlantStore::load(JsonPlantRepository::new(backend.clone(), "plants"), FixedClock::new(today()));

        assert_eq!(store.plants(), seed_plants().as_slice());
        assert_eq!(stored_plants(&backend), seed_plants());
    }

    #[test]
    fn test_reload_reproduces_collection() {
        let (mut store, backend) = create_test_store();
        store.add(draft("Rosemary", 4)).unwrap();
        store.water(2);
        let expected = store.plants().to_vec();

        let reloaded = PlantStore::load(JsonPlantRepository::new(backend, "plants"), FixedClock::new(today()));
        assert_eq!(reloaded.plants(), expected.as_slice());
    }

    #[test]
    fn test_add_assigns_dates_and_id() {
        let (mut store, backend) = create_test_store();

        let plant = store.add(draft("  Mint  ", 3)).unwrap();

        assert_eq!(plant.name, "Mint");
        assert_eq!(plant.last_watered, today());
        assert_eq!(plant.created_at, today());
        assert_eq!(plant.next_watering, NaiveDate::from_ymd_opt(2024, 6, 13).unwrap());
        assert_eq!(plant.id, FixedClock::new(today()).millis);
        assert_eq!(store.plants().last(), Some(&plant));
        assert_eq!(stored_plants(&backend).last(), Some(&plant));
    }

    #[test]
    fn test_add_ids_are_unique_within_same_millisecond() {
        let (mut store, _backend) = create_test_store();

        let first = store.add(draft("Mint", 3)).unwrap();
        let second = store.add(draft("Thyme", 3)).unwrap();

        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let (mut store, _backend) = create_test_store();

        assert_eq!(store.add(draft("   ", 3)), Err(PlantValidationError::EmptyName));
        assert_eq!(store.plants().len(), seed_plants().len());
    }

    #[test]
    fn test_add_clamps_frequency_and_drops_blank_optionals() {
        let (mut store, _backend) = create_test_store();
        let mut request = draft("Cactus", 90);
        request.image = Some("  ".to_string());
        request.notes = Some(String::new());

        let plant = store.add(request).unwrap();

        assert_eq!(plant.watering_frequency, 30);
        assert_eq!(plant.image, None);
        assert_eq!(plant.notes, None);

        let plant = store.add(draft("Moss", 0)).unwrap();
        assert_eq!(plant.watering_frequency, 1);
    }

    #[test]
    fn test_delete_keeps_order_of_others() {
        let (mut store, backend) = create_test_store();

        assert!(store.delete(3));

        let expected: Vec<Plant> = seed_plants().into_iter().filter(|p| p.id != 3).collect();
        assert_eq!(store.plants(), expected.as_slice());
        assert_eq!(stored_plants(&backend), expected);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let (mut store, _backend) = create_test_store();

        assert!(!store.delete(999));
        assert_eq!(store.plants(), seed_plants().as_slice());
    }

    #[test]
    fn test_update_merges_only_supplied_fields() {
        let (mut store, backend) = create_test_store();
        let before = store.get(2).cloned().unwrap();

        let patch = PlantPatch {
            health: Some(HealthStatus::Poor),
            notes: Some(Some("Yellow tips".to_string())),
            ..Default::default()
        };
        let updated = store.update(2, patch).unwrap().unwrap();

        assert_eq!(updated.health, HealthStatus::Poor);
        assert_eq!(updated.notes.as_deref(), Some("Yellow tips"));
        assert_eq!(
            Plant { health: before.health, notes: before.notes.clone(), ..updated.clone() },
            before
        );
        assert_eq!(stored_plants(&backend)[1], updated);
    }

    #[test]
    fn test_update_can_clear_optional_fields() {
        let (mut store, _backend) = create_test_store();

        let patch = PlantPatch { image: Some(None), notes: Some(None), ..Default::default() };
        let updated = store.update(1, patch).unwrap().unwrap();

        assert_eq!(updated.image, None);
        assert_eq!(updated.notes, None);
    }

    #[test]
    fn test_update_does_not_recompute_next_watering() {
        let (mut store, _backend) = create_test_store();
        let before = store.get(1).cloned().unwrap();

        let patch = PlantPatch { watering_frequency: Some(21), ..Default::default() };
        let updated = store.update(1, patch).unwrap().unwrap();

        assert_eq!(updated.watering_frequency, 21);
        assert_eq!(updated.next_watering, before.next_watering);
    }

    #[test]
    fn test_update_validates_name() {
        let (mut store, _backend) = create_test_store();

        let patch = PlantPatch { name: Some(" ".to_string()), ..Default::default() };
        assert_eq!(store.update(1, patch), Err(PlantValidationError::EmptyName));
        assert_eq!(store.plants(), seed_plants().as_slice());
    }

    #[test]
    fn test_update_unknown_id() {
        let (mut store, _backend) = create_test_store();

        let patch = PlantPatch { name: Some("Ghost".to_string()), ..Default::default() };
        assert_eq!(store.update(404, patch), Ok(None));
    }

    #[test]
    fn test_water_resets_schedule_regardless_of_prior_values() {
        let (mut store, backend) = create_test_store();
        let patch = PlantPatch {
            last_watered: NaiveDate::from_ymd_opt(2030, 1, 1),
            next_watering: NaiveDate::from_ymd_opt(2001, 1, 1),
            ..Default::default()
        };
        store.update(5, patch).unwrap();

        let watered = store.water(5).unwrap();

        assert_eq!(watered.last_watered, today());
        assert_eq!(watered.next_watering, next_watering_date(today(), watered.watering_frequency));
        assert_eq!(stored_plants(&backend)[4], watered);
    }

    #[test]
    fn test_water_unknown_id_is_noop() {
        let (mut store, _backend) = create_test_store();

        assert_eq!(store.water(12345), None);
        assert_eq!(store.plants(), seed_plants().as_slice());
    }

    struct FailingStorage;

    impl PlantStorage for FailingStorage {
        fn load_plants(&self) -> Result<Option<Vec<Plant>>> {
            Err(anyhow::anyhow!("storage disabled"))
        }

        fn save_plants(&self, _plants: &[Plant]) -> Result<()> {
            Err(anyhow::anyhow!("quota exceeded"))
        }
    }

    #[test]
    fn test_storage_failures_do_not_fail_mutations() {
        let mut store = PlantStore::load(FailingStorage, FixedClock::new(today()));

        assert_eq!(store.plants(), seed_plants().as_slice());
        let plant = store.add(draft("Aloe", 10)).unwrap();
        assert!(store.water(plant.id).is_some());
        assert!(store.delete(plant.id));
    }
}
