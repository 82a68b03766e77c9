//! Search and type filtering for the plant manager.

use shared::Plant;

/// Type filter selected in the plant manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    /// Value used by the `<select>` element, `all` for [`TypeFilter::All`]
    pub fn value(&self) -> &str {
        match self {
            TypeFilter::All => "all",
            TypeFilter::Only(plant_type) => plant_type,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            TypeFilter::All => "All Types",
            TypeFilter::Only(plant_type) => plant_type,
        }
    }

    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            TypeFilter::All
        } else {
            TypeFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, plant: &Plant) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(plant_type) => plant.plant_type == *plant_type,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantFilter {
    pub search: String,
    pub type_filter: TypeFilter,
}

impl PlantFilter {
    /// Case-insensitive search on name or type, combined with the type filter
    pub fn matches(&self, plant: &Plant) -> bool {
        let needle = self.search.trim().to_lowercase();
        let search_hit = needle.is_empty()
            || plant.name.to_lowercase().contains(&needle)
            || plant.plant_type.to_lowercase().contains(&needle);

        search_hit && self.type_filter.matches(plant)
    }
}

/// Plants matching `filter`, in collection order
pub fn filter_plants(plants: &[Plant], filter: &PlantFilter) -> Vec<Plant> {
    plants.iter().filter(|p| filter.matches(p)).cloned().collect()
}

/// `All` followed by each type present in the collection, in first-seen order
pub fn type_filter_options(plants: &[Plant]) -> Vec<TypeFilter> {
    let mut options = vec![TypeFilter::All];
    for plant in plants {
        let option = TypeFilter::Only(plant.plant_type.clone());
        if !options.contains(&option) {
            options.push(option);
        }
    }
    options
}
