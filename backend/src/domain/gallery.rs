//! Gallery photo lists and the wrap-around carousel used by the detail modal.

use shared::{GalleryEntry, Plant};

use crate::config::AppConfig;

/// The image to render for a plant, falling back to the configured placeholder
pub fn display_image<'a>(plant: &'a Plant, config: &'a AppConfig) -> &'a str {
    plant.image_url().unwrap_or(&config.fallback_image)
}

/// Photos shown for a plant: the generic placeholders, then its own image
pub fn gallery_photos(plant: &Plant, config: &AppConfig) -> Vec<String> {
    config
        .gallery_placeholders
        .iter()
        .cloned()
        .chain(std::iter::once(display_image(plant, config).to_string()))
        .collect()
}

pub fn build_gallery(plants: &[Plant], config: &AppConfig) -> Vec<GalleryEntry> {
    plants
        .iter()
        .map(|plant| GalleryEntry {
            plant: plant.clone(),
            photos: gallery_photos(plant, config),
        })
        .collect()
}

/// Position within a fixed number of photos. Navigation wraps at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next_photo(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + 1) % self.len, ..self }
    }

    pub fn previous_photo(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self { index: (self.index + self.len - 1) % self.len, ..self }
    }

    /// Jump to `index`; out-of-range indexes are ignored
    pub fn select(self, index: usize) -> Self {
        if index < self.len {
            Self { index, ..self }
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed::seed_plants;

    #[test]
    fn test_gallery_photos_end_with_plant_image() {
        let config = AppConfig::default();
        let plant = seed_plants().remove(0);

        let photos = gallery_photos(&plant, &config);

        assert_eq!(photos.len(), 3);
        assert_eq!(photos[..2], config.gallery_placeholders[..]);
        assert_eq!(photos[2], plant.image.clone().unwrap());
    }

    #[test]
    fn test_missing_image_uses_fallback() {
        let config = AppConfig::default();
        let plant = Plant { image: None, ..seed_plants().remove(0) };

        assert_eq!(display_image(&plant, &config), config.fallback_image);
        assert_eq!(gallery_photos(&plant, &config)[2], config.fallback_image);
    }

    #[test]
    fn test_build_gallery_keeps_collection_order() {
        let config = AppConfig::default();
        let plants = seed_plants();

        let entries = build_gallery(&plants, &config);

        let ids: Vec<u64> = entries.iter().map(|e| e.plant.id).collect();
        assert_eq!(ids, plants.iter().map(|p| p.id).collect::<Vec<_>>());
        assert!(entries.iter().all(|e| e.photos.len() == 3));
    }

    #[test]
    fn test_carousel_wraps_forward_and_back() {
        let carousel = Carousel::new(3);

        assert_eq!(carousel.previous_photo().index(), 2);
        assert_eq!(carousel.next_photo().next_photo().index(), 2);
        assert_eq!(carousel.next_photo().next_photo().next_photo().index(), 0);
        assert_eq!(carousel.select(2).next_photo().index(), 0);
        assert_eq!(carousel.select(0).previous_photo().index(), 2);
    }

    #[test]
    fn test_carousel_select() {
        let carousel = Carousel::new(3);

        assert_eq!(carousel.select(1).index(), 1);
        assert_eq!(carousel.select(1).select(7).index(), 1);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let carousel = Carousel::new(0);

        assert!(carousel.is_empty());
        assert_eq!(carousel.next_photo().index(), 0);
        assert_eq!(carousel.previous_photo().index(), 0);
        assert_eq!(carousel.select(0).index(), 0);
    }
}
