//! Map and storage settings shared by the app and its hosts.

pub const DEFAULT_STORAGE_KEY: &str = "workouts";
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
pub const DEFAULT_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Key the workout snapshot is stored under
    pub storage_key: String,
    /// Zoom used when the map is first shown
    pub map_zoom: f64,
    /// Added to `map_zoom` when jumping to a workout
    pub focus_zoom_offset: f64,
    pub tile_url: String,
    pub attribution: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            map_zoom: 13.0,
            focus_zoom_offset: 0.5,
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
        }
    }
}

impl AppConfig {
    pub fn focus_zoom(&self) -> f64 {
        self.map_zoom + self.focus_zoom_offset
    }
}
