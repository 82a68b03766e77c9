use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Plant type options offered by the create and edit forms
pub const PLANT_TYPES: [&str; 9] = [
    "Succulent",
    "Tropical",
    "Flowering",
    "Herb",
    "Fern",
    "Cactus",
    "Tree",
    "Vegetable",
    "Other",
];

/// Sunlight requirement options offered by the create and edit forms
pub const SUNLIGHT_OPTIONS: [&str; 4] = ["Full Sun", "Partial Sun", "Indirect Light", "Low Light"];

pub const MIN_WATERING_FREQUENCY: u32 = 1;
pub const MAX_WATERING_FREQUENCY: u32 = 30;

/// Humidity level a plant prefers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Humidity {
    Low,
    Medium,
    High,
}

impl Humidity {
    pub const ALL: [Humidity; 3] = [Humidity::Low, Humidity::Medium, Humidity::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Humidity::Low => "Low",
            Humidity::Medium => "Medium",
            Humidity::High => "High",
        }
    }

    /// Parse a form label back into a humidity level
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.as_str().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current health of a plant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Poor,
}

impl HealthStatus {
    pub const ALL: [HealthStatus; 3] = [HealthStatus::Excellent, HealthStatus::Good, HealthStatus::Poor];

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Excellent => "Excellent",
            HealthStatus::Good => "Good",
            HealthStatus::Poor => "Poor",
        }
    }

    /// Parse a form label back into a health status
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.as_str().eq_ignore_ascii_case(label.trim()))
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked plant, as persisted in local storage.
///
/// Dates are calendar dates with no time component and travel as
/// `YYYY-MM-DD` strings. `next_watering` is derived from `last_watered`
/// and `watering_frequency` whenever the plant is created or watered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub plant_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub sunlight: String,
    pub temperature: String,
    pub humidity: Humidity,
    pub health: HealthStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Days between waterings (1-30)
    pub watering_frequency: u32,
    pub last_watered: NaiveDate,
    pub next_watering: NaiveDate,
    pub created_at: NaiveDate,
}

impl Plant {
    /// Generate a plant ID from the current epoch millis.
    ///
    /// IDs stay strictly increasing even when two plants are created within
    /// the same millisecond.
    pub fn generate_id(now_millis: u64, last_id: Option<u64>) -> u64 {
        match last_id {
            Some(last) if now_millis <= last => last + 1,
            _ => now_millis,
        }
    }

    /// The plant's own photo, ignoring blank URLs
    pub fn image_url(&self) -> Option<&str> {
        self.image.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }

    /// True when the plant should be watered on or before `today`
    pub fn is_due(&self, today: NaiveDate) -> bool {
        self.next_watering <= today
    }
}

/// Request to create a new plant. IDs and dates are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantDraft {
    pub name: String,
    pub plant_type: String,
    pub image: Option<String>,
    pub sunlight: String,
    pub temperature: String,
    pub humidity: Humidity,
    pub health: HealthStatus,
    pub notes: Option<String>,
    pub watering_frequency: u32,
}

impl Default for PlantDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            plant_type: PLANT_TYPES[0].to_string(),
            image: None,
            sunlight: SUNLIGHT_OPTIONS[0].to_string(),
            temperature: String::new(),
            humidity: Humidity::Medium,
            health: HealthStatus::Good,
            notes: None,
            watering_frequency: 7,
        }
    }
}

/// Partial update of an existing plant. `None` leaves the field untouched.
///
/// Optional record fields use a nested option so an edit can clear them:
/// `Some(None)` removes the image or notes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantPatch {
    pub name: Option<String>,
    pub plant_type: Option<String>,
    pub image: Option<Option<String>>,
    pub sunlight: Option<String>,
    pub temperature: Option<String>,
    pub humidity: Option<Humidity>,
    pub health: Option<HealthStatus>,
    pub notes: Option<Option<String>>,
    pub watering_frequency: Option<u32>,
    pub last_watered: Option<NaiveDate>,
    pub next_watering: Option<NaiveDate>,
}

impl PlantPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Reasons a create or update request is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlantValidationError {
    #[error("Plant name cannot be empty")]
    EmptyName,
}

/// Clamp a watering frequency into the accepted 1-30 day range
pub fn clamp_frequency(days: i64) -> u32 {
    if days < i64::from(MIN_WATERING_FREQUENCY) {
        MIN_WATERING_FREQUENCY
    } else if days > i64::from(MAX_WATERING_FREQUENCY) {
        MAX_WATERING_FREQUENCY
    } else {
        days as u32
    }
}

/// Parse a watering frequency typed into a form, defaulting to 1 day
pub fn parse_frequency(input: &str) -> u32 {
    match input.trim().parse::<i64>() {
        Ok(days) => clamp_frequency(days),
        Err(_) => MIN_WATERING_FREQUENCY,
    }
}

/// How soon a plant needs water, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WateringUrgency {
    /// Due within two days (or overdue)
    Urgent,
    /// Due within five days
    Soon,
    Ok,
}

impl WateringUrgency {
    pub fn from_days(days_until: i64) -> Self {
        if days_until <= 2 {
            WateringUrgency::Urgent
        } else if days_until <= 5 {
            WateringUrgency::Soon
        } else {
            WateringUrgency::Ok
        }
    }

    /// CSS modifier used by the plant card
    pub fn css_class(&self) -> &'static str {
        match self {
            WateringUrgency::Urgent => "urgent",
            WateringUrgency::Soon => "soon",
            WateringUrgency::Ok => "ok",
        }
    }
}

/// Watering status shown on a plant card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WateringStatus {
    /// Whole days until the next watering, negative when overdue
    pub days_until: i64,
    pub urgency: WateringUrgency,
}

/// Aggregate counts shown at the top of the dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total: usize,
    pub needs_water: usize,
    pub excellent: usize,
    pub good: usize,
    pub poor: usize,
}

/// Everything the dashboard renders, derived from the collection and today
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub stats: DashboardStats,
    /// Plants due today or overdue, in collection order
    pub due_today: Vec<Plant>,
    /// Plants due after today, soonest first
    pub upcoming: Vec<Plant>,
}

/// Layout used to lay out gallery cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryLayout {
    Grid,
    List,
}

impl GalleryLayout {
    pub fn label(&self) -> &'static str {
        match self {
            GalleryLayout::Grid => "Grid",
            GalleryLayout::List => "List",
        }
    }
}

/// Which layouts a gallery instance offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryMode {
    GridAndList,
    ListOnly,
}

impl GalleryMode {
    pub fn layouts(&self) -> &'static [GalleryLayout] {
        match self {
            GalleryMode::GridAndList => &[GalleryLayout::Grid, GalleryLayout::List],
            GalleryMode::ListOnly => &[GalleryLayout::List],
        }
    }

    pub fn default_layout(&self) -> GalleryLayout {
        self.layouts()[0]
    }
}

/// A plant paired with the photos the gallery shows for it. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryEntry {
    pub plant: Plant,
    pub photos: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plant() -> Plant {
        Plant {
            id: 1_700_000_000_000,
            name: "Monstera".to_string(),
            plant_type: "Tropical".to_string(),
            image: None,
            sunlight: "Indirect Light".to_string(),
            temperature: "18-27°C".to_string(),
            humidity: Humidity::High,
            health: HealthStatus::Excellent,
            notes: Some("Wipe leaves monthly".to_string()),
            watering_frequency: 7,
            last_watered: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            next_watering: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            created_at: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    #[test]
    fn test_plant_wire_format() {
        let json = serde_json::to_value(sample_plant()).unwrap();

        assert_eq!(json["type"], "Tropical");
        assert_eq!(json["wateringFrequency"], 7);
        assert_eq!(json["lastWatered"], "2024-03-01");
        assert_eq!(json["nextWatering"], "2024-03-08");
        assert_eq!(json["createdAt"], "2024-01-15");
        assert_eq!(json["humidity"], "High");
        assert_eq!(json["health"], "Excellent");
        assert!(json.get("image").is_none());
        assert!(json.get("plant_type").is_none());
    }

    #[test]
    fn test_plant_reads_records_without_optional_fields() {
        let raw = r#"{
            "id": 42,
            "name": "Aloe",
            "type": "Succulent",
            "sunlight": "Full Sun",
            "temperature": "15-30°C",
            "humidity": "Low",
            "health": "Good",
            "wateringFrequency": 14,
            "lastWatered": "2024-02-01",
            "nextWatering": "2024-02-15",
            "createdAt": "2024-01-01"
        }"#;

        let plant: Plant = serde_json::from_str(raw).unwrap();
        assert_eq!(plant.id, 42);
        assert_eq!(plant.image, None);
        assert_eq!(plant.notes, None);
        assert_eq!(plant.next_watering, NaiveDate::from_ymd_opt(2024, 2, 15).unwrap());
    }

    #[test]
    fn test_generate_id() {
        assert_eq!(Plant::generate_id(1_000, None), 1_000);
        assert_eq!(Plant::generate_id(1_000, Some(999)), 1_000);
        assert_eq!(Plant::generate_id(1_000, Some(1_000)), 1_001);
        assert_eq!(Plant::generate_id(500, Some(1_000)), 1_001);
    }

    #[test]
    fn test_image_url_ignores_blank() {
        let mut plant = sample_plant();
        assert_eq!(plant.image_url(), None);

        plant.image = Some("   ".to_string());
        assert_eq!(plant.image_url(), None);

        plant.image = Some("https://example.com/monstera.jpg".to_string());
        assert_eq!(plant.image_url(), Some("https://example.com/monstera.jpg"));
    }

    #[test]
    fn test_frequency_clamping() {
        assert_eq!(clamp_frequency(-3), 1);
        assert_eq!(clamp_frequency(0), 1);
        assert_eq!(clamp_frequency(1), 1);
        assert_eq!(clamp_frequency(30), 30);
        assert_eq!(clamp_frequency(45), 30);

        assert_eq!(parse_frequency("7"), 7);
        assert_eq!(parse_frequency(" 12 "), 12);
        assert_eq!(parse_frequency(""), 1);
        assert_eq!(parse_frequency("weekly"), 1);
        assert_eq!(parse_frequency("99"), 30);
    }

    #[test]
    fn test_watering_urgency_buckets() {
        assert_eq!(WateringUrgency::from_days(-4), WateringUrgency::Urgent);
        assert_eq!(WateringUrgency::from_days(2), WateringUrgency::Urgent);
        assert_eq!(WateringUrgency::from_days(3), WateringUrgency::Soon);
        assert_eq!(WateringUrgency::from_days(5), WateringUrgency::Soon);
        assert_eq!(WateringUrgency::from_days(6), WateringUrgency::Ok);
    }

    #[test]
    fn test_status_labels_round_trip() {
        for health in HealthStatus::ALL {
            assert_eq!(HealthStatus::from_label(health.as_str()), Some(health));
        }
        for humidity in Humidity::ALL {
            assert_eq!(Humidity::from_label(humidity.as_str()), Some(humidity));
        }
        assert_eq!(HealthStatus::from_label("poor"), Some(HealthStatus::Poor));
        assert_eq!(Humidity::from_label("Soggy"), None);
    }

    #[test]
    fn test_gallery_mode_layouts() {
        assert_eq!(GalleryMode::GridAndList.default_layout(), GalleryLayout::Grid);
        assert_eq!(GalleryMode::ListOnly.layouts(), &[GalleryLayout::List]);
        assert_eq!(GalleryMode::ListOnly.default_layout(), GalleryLayout::List);
    }

    #[test]
    fn test_empty_patch() {
        assert!(PlantPatch::default().is_empty());
        let patch = PlantPatch { health: Some(HealthStatus::Poor), ..Default::default() };
        assert!(!patch.is_empty());
    }
}
