//! Keeps the map, the sidebar and storage in step with the workout store.

use chrono::Utc;

use crate::config::AppConfig;
use crate::dlog;
use crate::error::{Result, WorkoutError};
use crate::form::{Form, FormInput, TertiaryField};
use crate::geo::Geolocation;
use crate::map::{MapWidget, Marker, PanAnimation, PopupOptions};
use crate::persistence::Persistence;
use crate::render;
use crate::sidebar::{ClickTarget, Sidebar};
use crate::storage::KeyValueStore;
use crate::store::WorkoutStore;
use crate::types::{Coords, Workout, WorkoutId, WorkoutKind};

pub struct App<M, L, S, G> {
    config: AppConfig,
    store: WorkoutStore,
    map: M,
    /// Where the map was first centered; `None` until it is loaded.
    map_center: Option<Coords>,
    sidebar: L,
    persistence: Persistence<S>,
    geolocation: G,
    form: Form,
}

impl<M, L, S, G> App<M, L, S, G>
where
    M: MapWidget,
    L: Sidebar,
    S: KeyValueStore,
    G: Geolocation,
{
    pub fn new(
        config: AppConfig,
        map: M,
        sidebar: L,
        persistence: Persistence<S>,
        geolocation: G,
    ) -> Self {
        Self {
            config,
            store: WorkoutStore::new(),
            map,
            map_center: None,
            sidebar,
            persistence,
            geolocation,
            form: Form::new(),
        }
    }

    /// Restore saved workouts, then locate the user and bring up the map.
    ///
    /// Without a position the app keeps running with the list only.
    pub fn start(&mut self) -> Result<()> {
        self.rehydrate()?;

        match self.geolocation.current_position() {
            Ok(position) => self.load_map(position),
            Err(e) => tracing::warn!(error = %e, "could not get your position; no map"),
        }
        Ok(())
    }

    /// Replace the store with the persisted snapshot and redraw both views from it.
    ///
    /// The sidebar is rebuilt from scratch. A loaded map is re-initialized at
    /// its first center, so each workout ends up with exactly one marker.
    pub fn rehydrate(&mut self) -> Result<usize> {
        let records = self.persistence.load()?;
        let restored = self.store.restore(records, Utc::now());

        self.sidebar.clear();
        for id in self.ids() {
            self.render_list_entry(id)?;
        }
        if let Some(center) = self.map_center {
            self.map.reset();
            self.load_map(center);
        }

        tracing::info!(restored, "workouts restored");
        Ok(restored)
    }

    /// Show the map centered on `position` with a marker per stored workout.
    pub fn load_map(&mut self, position: Coords) {
        self.map.initialize(position, self.config.map_zoom);
        self.map
            .add_tile_layer(&self.config.tile_url, &self.config.attribution);
        self.map_center = Some(position);

        for id in self.ids() {
            if let Err(e) = self.render_marker(id) {
                tracing::warn!(id, error = %e, "marker not drawn");
            }
        }
    }

    /// A click on the map opens the form at that spot.
    pub fn handle_map_click(&mut self, at: Coords) {
        if !self.is_map_ready() {
            dlog!("map_click_ignored no_map at={at}");
            return;
        }
        self.form.show(at);
        dlog!("form_shown pending={at}");
    }

    /// The workout type selector changed.
    pub fn select_kind(&mut self, kind: WorkoutKind) -> TertiaryField {
        self.form.select_kind(kind)
    }

    /// Create a workout at the pending click position, save it, then show it everywhere.
    ///
    /// Invalid input, or a failed save, leaves the form open and the views untouched.
    pub fn submit(&mut self, input: FormInput) -> Result<&Workout> {
        let at = self.form.pending().ok_or(WorkoutError::FormHidden)?;

        let id = self
            .store
            .create(
                at,
                input.distance,
                input.duration,
                input.extra(),
                Utc::now(),
            )?
            .id();

        if let Err(e) = self.persistence.save(self.store.all()) {
            self.store.discard(id);
            tracing::warn!(id, error = %e, "workout not saved; discarded");
            return Err(e.into());
        }

        if self.is_map_ready() {
            self.render_marker(id)?;
        }
        self.render_list_entry(id)?;
        self.form.hide();

        tracing::info!(id, kind = %input.kind, "workout added");
        self.store.find_by_id(id)
    }

    /// Pin the stored workout `id` on the map with its popup open.
    pub fn render_marker(&mut self, id: WorkoutId) -> Result<()> {
        if !self.is_map_ready() {
            return Err(WorkoutError::MapUnavailable);
        }
        let workout = self.store.find_by_id(id)?;
        self.map.add_marker(marker_for(workout));
        Ok(())
    }

    /// Put the entry for the stored workout `id` at the top of the list.
    pub fn render_list_entry(&mut self, id: WorkoutId) -> Result<()> {
        let workout = self.store.find_by_id(id)?;
        self.sidebar.insert_after_form(render::workout_entry(workout)?);
        Ok(())
    }

    /// Pan to the workout whose entry was clicked.
    ///
    /// Returns the new center, or `None` when the click was outside every
    /// entry, the id is unknown, or there is no map.
    pub fn focus_workout(&mut self, target: &ClickTarget) -> Option<Coords> {
        let id = target.workout_id()?;
        let coords = match self.store.find_by_id(id) {
            Ok(w) => w.coords(),
            Err(e) => {
                dlog!("focus_ignored id={id} err={e}");
                return None;
            }
        };
        if !self.is_map_ready() {
            dlog!("focus_ignored id={id} no_map");
            return None;
        }

        self.map.set_view(
            coords,
            self.config.focus_zoom(),
            Some(PanAnimation::default()),
        );
        Some(coords)
    }

    /// Forget every workout, on disk and on screen, and start over.
    ///
    /// Works whatever state the app is in, including after `start` failed on
    /// an unreadable snapshot.
    pub fn reset(&mut self) -> Result<()> {
        self.persistence.clear()?;
        self.store.clear();
        self.sidebar.clear();
        self.map.reset();
        self.map_center = None;
        self.form = Form::new();
        tracing::info!("all workouts deleted");
        self.start()
    }

    pub const fn workouts(&self) -> &WorkoutStore {
        &self.store
    }

    pub const fn map(&self) -> &M {
        &self.map
    }

    pub const fn is_map_ready(&self) -> bool {
        self.map_center.is_some()
    }

    pub const fn sidebar(&self) -> &L {
        &self.sidebar
    }

    pub const fn form(&self) -> &Form {
        &self.form
    }

    pub const fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    fn ids(&self) -> Vec<WorkoutId> {
        self.store.all().iter().map(Workout::id).collect()
    }
}

fn marker_for(workout: &Workout) -> Marker {
    Marker {
        at: workout.coords(),
        options: PopupOptions::for_kind(workout.kind()),
        content: workout.popup_label(),
    }
}
