use chrono::NaiveDate;
use shared::{DashboardStats, DashboardView, HealthStatus, Plant};

/// Count plants by watering need and health
pub fn dashboard_stats(plants: &[Plant], today: NaiveDate) -> DashboardStats {
    plants.iter().fold(
        DashboardStats { total: plants.len(), ..Default::default() },
        |mut stats, plant| {
            if plant.is_due(today) {
                stats.needs_water += 1;
            }
            match plant.health {
                HealthStatus::Excellent => stats.excellent += 1,
                HealthStatus::Good => stats.good += 1,
                HealthStatus::Poor => stats.poor += 1,
            }
            stats
        },
    )
}

/// Build the dashboard view.
///
/// `due_today` holds every due or overdue plant in collection order.
/// `upcoming` holds plants due after today, soonest first, capped at
/// `upcoming_limit`.
pub fn build_dashboard(plants: &[Plant], today: NaiveDate, upcoming_limit: usize) -> DashboardView {
    let due_today: Vec<Plant> = plants.iter().filter(|p| p.is_due(today)).cloned().collect();

    let mut upcoming: Vec<Plant> = plants.iter().filter(|p| !p.is_due(today)).cloned().collect();
    upcoming.sort_by_key(|p| p.next_watering);
    upcoming.truncate(upcoming_limit);

    DashboardView {
        stats: dashboard_stats(plants, today),
        due_today,
        upcoming,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::seed_plants;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plant_due(id: u64, next_watering: NaiveDate, health: HealthStatus) -> Plant {
        Plant {
            id,
            name: format!("Plant {}", id),
            health,
            next_watering,
            ..seed_plants().remove(0)
        }
    }

    #[test]
    fn test_empty_collection() {
        let view = build_dashboard(&[], date(2024, 6, 10), 5);

        assert_eq!(view.stats, DashboardStats::default());
        assert!(view.due_today.is_empty());
        assert!(view.upcoming.is_empty());
    }

    #[test]
    fn test_counts_and_due_list() {
        let today = date(2024, 6, 10);
        let plants = vec![
            plant_due(1, date(2024, 6, 12), HealthStatus::Excellent),
            plant_due(2, date(2024, 6, 10), HealthStatus::Poor),
            plant_due(3, date(2024, 6, 2), HealthStatus::Good),
            plant_due(4, date(2024, 6, 11), HealthStatus::Excellent),
        ];

        let view = build_dashboard(&plants, today, 5);

        assert_eq!(
            view.stats,
            DashboardStats { total: 4, needs_water: 2, excellent: 2, good: 1, poor: 1 }
        );
        let due_ids: Vec<u64> = view.due_today.iter().map(|p| p.id).collect();
        assert_eq!(due_ids, vec![2, 3]);
        let upcoming_ids: Vec<u64> = view.upcoming.iter().map(|p| p.id).collect();
        assert_eq!(upcoming_ids, vec![4, 1]);
    }

    #[test]
    fn test_upcoming_is_capped_but_due_is_not() {
        let today = date(2024, 6, 10);
        let mut plants: Vec<Plant> = (1..=8)
            .map(|i| plant_due(i, date(2024, 6, 10 + i as u32), HealthStatus::Good))
            .collect();
        plants.extend((20..=27).map(|i| plant_due(i, date(2024, 6, 1), HealthStatus::Good)));
        plants.reverse();

        let view = build_dashboard(&plants, today, 5);

        assert_eq!(view.due_today.len(), 8);
        let upcoming_ids: Vec<u64> = view.upcoming.iter().map(|p| p.id).collect();
        assert_eq!(upcoming_ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_due_count_matches_due_list_for_seed() {
        for day in 1..=30 {
            let today = date(2024, 6, day);
            let plants = seed_plants();
            let view = build_dashboard(&plants, today, 5);
            let expected = plants.iter().filter(|p| p.next_watering <= today).count();

            assert_eq!(view.stats.needs_water, expected);
            assert_eq!(view.due_today.len(), expected);
        }
    }
}
