//! Watering date arithmetic.
//!
//! Dates are plain calendar dates, so day differences are exact and need no
//! rounding.

use chrono::{Days, NaiveDate};
use shared::{Plant, WateringStatus, WateringUrgency};

/// The date a plant last watered on `last_watered` is due again
pub fn next_watering_date(last_watered: NaiveDate, frequency_days: u32) -> NaiveDate {
    last_watered
        .checked_add_days(Days::new(u64::from(frequency_days)))
        .unwrap_or(NaiveDate::MAX)
}

/// Whole days from `today` until `next_watering`, negative when overdue
pub fn days_until_watering(next_watering: NaiveDate, today: NaiveDate) -> i64 {
    (next_watering - today).num_days()
}

/// Whole days since the plant was last watered
pub fn days_since_watered(plant: &Plant, today: NaiveDate) -> i64 {
    (today - plant.last_watered).num_days()
}

pub fn watering_status(plant: &Plant, today: NaiveDate) -> WateringStatus {
    let days_until = days_until_watering(plant.next_watering, today);
    WateringStatus {
        days_until,
        urgency: WateringUrgency::from_days(days_until),
    }
}

/// Short human label for a day count, e.g. "Today", "Tomorrow", "3 days overdue"
pub fn describe_days_until(days_until: i64) -> String {
    match days_until {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "1 day overdue".to_string(),
        d if d < 0 => format!("{} days overdue", -d),
        d => format!("In {} days", d),
    }
}
