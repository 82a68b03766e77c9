//! Sample collection shown on first launch, or when the stored collection is
//! missing, empty, or unreadable.

use chrono::NaiveDate;
use shared::{HealthStatus, Humidity, Plant};

use super::watering::next_watering_date;

#[allow(clippy::too_many_arguments)]
fn sample(
    id: u64,
    name: &str,
    plant_type: &str,
    image: &str,
    sunlight: &str,
    temperature: &str,
    humidity: Humidity,
    health: HealthStatus,
    notes: &str,
    watering_frequency: u32,
    last_watered: (i32, u32, u32),
    created_at: (i32, u32, u32),
) -> Option<Plant> {
    let last_watered = NaiveDate::from_ymd_opt(last_watered.0, last_watered.1, last_watered.2)?;
    let created_at = NaiveDate::from_ymd_opt(created_at.0, created_at.1, created_at.2)?;
    Some(Plant {
        id,
        name: name.to_string(),
        plant_type: plant_type.to_string(),
        image: Some(image.to_string()),
        sunlight: sunlight.to_string(),
        temperature: temperature.to_string(),
        humidity,
        health,
        notes: Some(notes.to_string()),
        watering_frequency,
        last_watered,
        next_watering: next_watering_date(last_watered, watering_frequency),
        created_at,
    })
}

/// The fixed sample collection
pub fn seed_plants() -> Vec<Plant> {
    [
        sample(
            1,
            "Monstera Deliciosa",
            "Tropical",
            "https://images.unsplash.com/photo-1614594975525-e45190c55d0b?w=600",
            "Indirect Light",
            "18-27°C",
            Humidity::High,
            HealthStatus::Excellent,
            "Rotate weekly so the leaves grow evenly.",
            7,
            (2024, 6, 1),
            (2024, 1, 10),
        ),
        sample(
            2,
            "Snake Plant",
            "Succulent",
            "https://images.unsplash.com/photo-1593482892290-f54927ae1bb6?w=600",
            "Low Light",
            "15-29°C",
            Humidity::Low,
            HealthStatus::Good,
            "Let the soil dry out completely between waterings.",
            14,
            (2024, 5, 28),
            (2024, 2, 3),
        ),
        sample(
            3,
            "Fiddle Leaf Fig",
            "Tree",
            "https://images.unsplash.com/photo-1597055181300-e3633a207519?w=600",
            "Partial Sun",
            "16-24°C",
            Humidity::Medium,
            HealthStatus::Poor,
            "Dropping lower leaves; check for drafts.",
            5,
            (2024, 6, 3),
            (2024, 3, 14),
        ),
        sample(
            4,
            "Sweet Basil",
            "Herb",
            "https://images.unsplash.com/photo-1618164435735-413d3b066c9a?w=600",
            "Full Sun",
            "20-30°C",
            Humidity::Medium,
            HealthStatus::Excellent,
            "Pinch off flower buds to keep leaves coming.",
            2,
            (2024, 6, 5),
            (2024, 4, 22),
        ),
        sample(
            5,
            "Boston Fern",
            "Fern",
            "https://images.unsplash.com/photo-1572688484438-313a6e50c333?w=600",
            "Indirect Light",
            "16-24°C",
            Humidity::High,
            HealthStatus::Good,
            "Mist the fronds on dry days.",
            3,
            (2024, 6, 4),
            (2024, 5, 2),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_is_stable() {
        assert_eq!(seed_plants(), seed_plants());
        assert_eq!(seed_plants().len(), 5);
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let ids: HashSet<u64> = seed_plants().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), seed_plants().len());
    }

    #[test]
    fn test_seed_respects_watering_invariant() {
        for plant in seed_plants() {
            assert_eq!(
                plant.next_watering,
                next_watering_date(plant.last_watered, plant.watering_frequency),
                "{} breaks the watering invariant",
                plant.name
            );
        }
    }
}
