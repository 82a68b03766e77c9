use backend::{AppConfig, Clock, JsonPlantRepository, PlantStore, SystemClock};
use chrono::NaiveDate;
use shared::{Plant, PlantDraft, PlantPatch};
use yew::prelude::*;

use crate::services::browser_storage::BrowserStorage;
use crate::services::logging::Logger;

type BrowserPlantStore = PlantStore<JsonPlantRepository<BrowserStorage>, SystemClock>;

#[derive(Clone, PartialEq)]
pub struct PlantsState {
    pub plants: Vec<Plant>,
    pub today: NaiveDate,
}

pub struct UsePlantsResult {
    pub state: PlantsState,
    pub actions: UsePlantsActions,
}

/// Mutation entry points handed to child components
#[derive(Clone, PartialEq)]
pub struct UsePlantsActions {
    pub add_plant: Callback<PlantDraft>,
    pub update_plant: Callback<(u64, PlantPatch)>,
    pub delete_plant: Callback<u64>,
    pub water_plant: Callback<u64>,
}

/// Owns the plant store for the lifetime of the app.
///
/// The store lives in a `RefCell`; components only ever see the snapshot in
/// `state` and request changes through `actions`.
#[hook]
pub fn use_plants(config: &AppConfig) -> UsePlantsResult {
    let store = {
        let storage_key = config.storage_key.clone();
        use_mut_ref(move || -> BrowserPlantStore {
            PlantStore::load(JsonPlantRepository::new(BrowserStorage, storage_key), SystemClock)
        })
    };
    let plants = {
        let store = store.clone();
        use_state(move || store.borrow().plants().to_vec())
    };

    let add_plant = {
        let store = store.clone();
        let plants = plants.clone();

        use_callback((), move |draft: PlantDraft, _| {
            let mut store = store.borrow_mut();
            match store.add(draft) {
                Ok(plant) => Logger::info_with_component("plants", &format!("Added {}", plant.name)),
                Err(e) => Logger::warn_with_component("plants", &format!("Rejected new plant: {}", e)),
            }
            plants.set(store.plants().to_vec());
        })
    };

    let update_plant = {
        let store = store.clone();
        let plants = plants.clone();

        use_callback((), move |(id, patch): (u64, PlantPatch), _| {
            let mut store = store.borrow_mut();
            match store.update(id, patch) {
                Ok(Some(plant)) => Logger::info_with_component("plants", &format!("Saved {}", plant.name)),
                Ok(None) => Logger::warn_with_component("plants", &format!("Plant {} no longer exists", id)),
                Err(e) => Logger::warn_with_component("plants", &format!("Rejected edit of {}: {}", id, e)),
            }
            plants.set(store.plants().to_vec());
        })
    };

    let delete_plant = {
        let store = store.clone();
        let plants = plants.clone();

        use_callback((), move |id: u64, _| {
            let mut store = store.borrow_mut();
            if store.delete(id) {
                Logger::info_with_component("plants", &format!("Deleted plant {}", id));
            }
            plants.set(store.plants().to_vec());
        })
    };

    let water_plant = {
        let store = store.clone();
        let plants = plants.clone();

        use_callback((), move |id: u64, _| {
            let mut store = store.borrow_mut();
            if let Some(plant) = store.water(id) {
                Logger::info_with_component(
                    "plants",
                    &format!("Watered {}, next on {}", plant.name, plant.next_watering),
                );
            }
            plants.set(store.plants().to_vec());
        })
    };

    UsePlantsResult {
        state: PlantsState {
            plants: (*plants).clone(),
            today: SystemClock.today(),
        },
        actions: UsePlantsActions {
            add_plant,
            update_plant,
            delete_plant,
            water_plant,
        },
    }
}
