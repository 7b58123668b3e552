#![allow(dead_code)]

use sentier::App;
use sentier::config::AppConfig;
use sentier::geo::FixedPosition;
use sentier::map::TextMap;
use sentier::persistence::Persistence;
use sentier::sidebar::{ClickTarget, HtmlSidebar, Node};
use sentier::storage::{KeyValueStore, MemoryStore};
use sentier::types::{Coords, WorkoutId, WorkoutKind};

pub type TestApp<S = MemoryStore> = App<TextMap, HtmlSidebar, S, FixedPosition>;

pub const HOME: Coords = Coords::new(40.05, -73.05);

/// App over `store`, with or without a position fix.
pub fn app_with<S: KeyValueStore>(store: S, home: Option<Coords>) -> TestApp<S> {
    let config = AppConfig::default();
    let persistence = Persistence::new(store, config.storage_key.clone());
    App::new(
        config,
        TextMap::new(),
        HtmlSidebar::new(),
        persistence,
        FixedPosition(home),
    )
}

/// Started app with a map, over an empty in-memory store.
pub fn started_app() -> TestApp {
    let mut app = app_with(MemoryStore::new(), Some(HOME));
    app.start().expect("start");
    app
}

/// A click on the value span inside the entry for `id`.
pub fn click_inside_entry(id: WorkoutId, kind: WorkoutKind) -> ClickTarget {
    ClickTarget::new(vec![
        Node::new("workout__value"),
        Node::new("workout__details"),
        Node::new(&format!("workout workout--{kind}")).with_data_id(id),
        Node::new("workouts"),
    ])
}

/// A click on the list background, outside every entry.
pub fn click_outside_entries() -> ClickTarget {
    ClickTarget::new(vec![Node::new("workouts")])
}

/// Reads work, every write fails.
#[derive(Default)]
pub struct ReadOnlyStore {
    inner: MemoryStore,
}

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.inner.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
        anyhow::bail!("disk full")
    }

    fn remove(&mut self, key: &str) -> anyhow::Result<()> {
        self.inner.remove(key)
    }
}
