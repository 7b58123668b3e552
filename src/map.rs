//! The map widget the app draws on.

use crate::types::{Coords, WorkoutKind};

/// Popup settings for a workout marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupOptions {
    pub max_width: u32,
    pub min_width: u32,
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

impl PopupOptions {
    pub fn for_kind(kind: WorkoutKind) -> Self {
        Self {
            max_width: 250,
            min_width: 100,
            auto_close: false,
            close_on_click: false,
            class_name: format!("{kind}-popup"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanAnimation {
    pub duration_secs: f64,
    pub easing: &'static str,
}

impl Default for PanAnimation {
    fn default() -> Self {
        Self {
            duration_secs: 1.0,
            easing: "ease-in-out",
        }
    }
}

/// A popup that has been bound to a marker and opened.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub at: Coords,
    pub options: PopupOptions,
    pub content: String,
}

/// Operations the app needs from an interactive map.
///
/// Click events are delivered by the host calling `App::handle_map_click`.
pub trait MapWidget {
    fn initialize(&mut self, center: Coords, zoom: f64);
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str);
    fn set_view(&mut self, center: Coords, zoom: f64, animation: Option<PanAnimation>);
    /// Add a marker with an opened popup. Markers are never removed one by one.
    fn add_marker(&mut self, marker: Marker);
    /// Drop everything and return to the uninitialized state.
    fn reset(&mut self);
}

/// A map that keeps what was drawn on it, for terminals and tests.
#[derive(Debug, Default, Clone)]
pub struct TextMap {
    pub view: Option<(Coords, f64)>,
    pub tile_layer: Option<String>,
    pub markers: Vec<Marker>,
    pub last_animation: Option<PanAnimation>,
}

impl TextMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(&self) -> Option<Coords> {
        self.view.map(|(c, _)| c)
    }

    pub fn zoom(&self) -> Option<f64> {
        self.view.map(|(_, z)| z)
    }
}

impl MapWidget for TextMap {
    fn initialize(&mut self, center: Coords, zoom: f64) {
        tracing::info!(%center, zoom, "map ready");
        self.view = Some((center, zoom));
    }

    fn add_tile_layer(&mut self, url_template: &str, attribution: &str) {
        tracing::debug!(url_template, attribution, "tile layer added");
        self.tile_layer = Some(url_template.to_string());
    }

    fn set_view(&mut self, center: Coords, zoom: f64, animation: Option<PanAnimation>) {
        tracing::debug!(%center, zoom, animate = animation.is_some(), "view moved");
        self.view = Some((center, zoom));
        self.last_animation = animation;
    }

    fn add_marker(&mut self, marker: Marker) {
        tracing::debug!(at = %marker.at, popup = %marker.content, "marker added");
        self.markers.push(marker);
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
