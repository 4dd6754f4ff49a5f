//! Shelf and media types, plus the built-in demo catalog used as backfill.

use serde::{Deserialize, Serialize};

/// One playable title as shown on a shelf card and in the hero panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Length in seconds. Zero when the API did not report one.
    pub duration: f64,
    pub poster: String,
    pub background: String,
    pub playlist_id: String,
}

/// A shelf as configured, before its items are resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfConfig {
    pub title: String,
    pub playlist_id: String,
    /// Inline items skip the remote fetch entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MediaItem>>,
}

impl ShelfConfig {
    pub fn new(title: impl Into<String>, playlist_id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            playlist_id: playlist_id.into(),
            items: None,
        }
    }

    pub fn with_items(mut self, items: Vec<MediaItem>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && !self.playlist_id.is_empty()
    }
}

/// A titled row of media items with its content resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    pub title: String,
    pub playlist_id: String,
    pub items: Vec<MediaItem>,
}

impl Shelf {
    pub fn from_config(config: &ShelfConfig, items: Vec<MediaItem>) -> Self {
        Self {
            title: config.title.clone(),
            playlist_id: config.playlist_id.clone(),
            items,
        }
    }
}

// (id, title, description, unsplash photo, duration)
type DemoRow = (&'static str, &'static str, &'static str, &'static str, f64);

const SPOTLIGHT: [DemoRow; 3] = [
    (
        "demo-1",
        "City Lights",
        "A cityscape time-lapse to showcase the new cinematic shell.",
        "photo-1440404653325-ab127d49abc1",
        94.0,
    ),
    (
        "demo-2",
        "Into the Forest",
        "Natural textures and depth to test gradients and overlays.",
        "photo-1501785888041-af3ef285b470",
        133.0,
    ),
    (
        "demo-3",
        "Skydive",
        "High-adrenaline footage to prove focus transitions are smooth.",
        "photo-1504674900247-0877df9cc836",
        150.0,
    ),
];

const RELAX: [DemoRow; 3] = [
    (
        "demo-4",
        "Calm Waters",
        "Gentle lake waves for a minimal living-room background.",
        "photo-1507525428034-b723cf961d3e",
        102.0,
    ),
    (
        "demo-5",
        "Horizon",
        "Sunset gradients that pair with the hero overlay.",
        "photo-1493244040629-496f6d136cc8",
        89.0,
    ),
    (
        "demo-6",
        "Mountains",
        "Crisp details for HDR QA or standby screens.",
        "photo-1523419400524-2100f3a1d498",
        121.0,
    ),
];

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&w={width}&q=80")
}

fn demo_items(playlist_id: &str, rows: &[DemoRow]) -> Vec<MediaItem> {
    rows.iter()
        .map(|&(id, title, description, photo, duration)| MediaItem {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            duration,
            poster: unsplash(photo, 640),
            background: unsplash(photo, 1280),
            playlist_id: playlist_id.to_string(),
        })
        .collect()
}

/// The demo lineup: two shelves of three items each, all inline.
pub fn default_shelves() -> Vec<ShelfConfig> {
    vec![
        ShelfConfig::new("Spotlight", "spotlight").with_items(demo_items("spotlight", &SPOTLIGHT)),
        ShelfConfig::new("Relax", "relax").with_items(demo_items("relax", &RELAX)),
    ]
}

/// [`default_shelves`] in resolved form.
pub fn default_resolved_shelves() -> Vec<Shelf> {
    default_shelves()
        .into_iter()
        .map(|config| {
            let items = config.items.clone().unwrap_or_default();
            Shelf::from_config(&config, items)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_catalog_has_two_shelves_of_three() {
        let shelves = default_resolved_shelves();
        assert_eq!(shelves.len(), 2);
        assert!(shelves.iter().all(|s| s.items.len() == 3));
        assert_eq!(shelves[0].title, "Spotlight");
        assert_eq!(shelves[1].items[2].title, "Mountains");
    }

    #[test]
    fn demo_items_carry_both_image_sizes() {
        let shelves = default_shelves();
        let first = &shelves[0].items.as_ref().unwrap()[0];
        assert!(first.poster.contains("w=640"));
        assert!(first.background.contains("w=1280"));
        assert_eq!(first.playlist_id, "spotlight");
    }

    #[test]
    fn shelf_config_validity_requires_title_and_id() {
        assert!(ShelfConfig::new("Relax", "relax").is_valid());
        assert!(!ShelfConfig::new("", "relax").is_valid());
        assert!(!ShelfConfig::new("Relax", "").is_valid());
    }
}
